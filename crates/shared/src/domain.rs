use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Stable identifier of one selectable option in a form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionLabel(String);

impl OptionLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for OptionLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OptionLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OptionLabel {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OptionLabel {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for OptionLabel {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl PartialEq<str> for OptionLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for OptionLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
