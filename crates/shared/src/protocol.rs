use serde::{Deserialize, Serialize};

use crate::{domain::OptionLabel, error::FormError};

/// User intent forwarded from the presentation layer to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum FormAction {
    Toggle { label: String },
    SelectAll,
    DeselectAll,
    Submit,
}

impl FormAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toggle { .. } => "toggle",
            Self::SelectAll => "select_all",
            Self::DeselectAll => "deselect_all",
            Self::Submit => "submit",
        }
    }
}

/// One controlled checkbox: its checked flag always comes from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxView {
    pub label: OptionLabel,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum FormEvent {
    Rendered { checkboxes: Vec<CheckboxView> },
    Submitted { selected: Vec<OptionLabel> },
    Error(FormError),
}
