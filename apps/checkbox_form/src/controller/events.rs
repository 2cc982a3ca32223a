//! User input parsing for the line-oriented form.

use shared::{error::FormError, protocol::FormAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Action(FormAction),
    Show,
    Help,
    Quit,
}

/// Parses one line of input. Blank lines yield `None`.
///
/// Keywords are matched case-insensitively; anything else is taken as the label of the
/// checkbox to toggle, verbatim.
pub fn parse_command(line: &str) -> Result<Option<UiCommand>, FormError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "toggle" => {
            if rest.is_empty() {
                return Err(FormError::validation("toggle requires an option label"));
            }
            UiCommand::Action(FormAction::Toggle {
                label: rest.to_string(),
            })
        }
        "all" | "check-all" if rest.is_empty() => UiCommand::Action(FormAction::SelectAll),
        "none" | "uncheck-all" if rest.is_empty() => UiCommand::Action(FormAction::DeselectAll),
        "save" | "submit" if rest.is_empty() => UiCommand::Action(FormAction::Submit),
        "show" if rest.is_empty() => UiCommand::Show,
        "help" if rest.is_empty() => UiCommand::Help,
        "quit" | "exit" if rest.is_empty() => UiCommand::Quit,
        _ => UiCommand::Action(FormAction::Toggle {
            label: line.to_string(),
        }),
    };

    Ok(Some(command))
}

pub const HELP: &str = "\
commands:
  toggle <label>   flip one checkbox (a bare label works too)
  all              check every box
  none             uncheck every box
  save             submit the form
  show             redraw the checkboxes
  help             show this list
  quit             leave without submitting";
