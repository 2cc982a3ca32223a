use std::io::Write;

use anyhow::Context;
use shared::protocol::{CheckboxView, FormEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render_event<W: Write>(
    out: &mut W,
    event: &FormEvent,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, event).context("failed to encode form event")?;
            writeln!(out)?;
        }
        OutputFormat::Text => render_text(out, event)?,
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}

fn render_text<W: Write>(out: &mut W, event: &FormEvent) -> std::io::Result<()> {
    match event {
        FormEvent::Rendered { checkboxes } => {
            for checkbox in checkboxes {
                writeln!(out, "{}", checkbox_line(checkbox))?;
            }
        }
        FormEvent::Submitted { selected } if selected.is_empty() => {
            writeln!(out, "No options are selected.")?;
        }
        FormEvent::Submitted { selected } => {
            for label in selected {
                writeln!(out, "{label} is selected.")?;
            }
        }
        FormEvent::Error(err) => writeln!(out, "error: {}", err.message)?,
    }
    Ok(())
}

fn checkbox_line(checkbox: &CheckboxView) -> String {
    let mark = if checkbox.is_selected { 'x' } else { ' ' };
    format!("[{mark}] {}", checkbox.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{
        domain::OptionLabel,
        error::{ErrorCode, FormError},
    };

    fn render(event: &FormEvent, format: OutputFormat) -> String {
        let mut out = Vec::new();
        render_event(&mut out, event, format).expect("render");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn checkboxes_render_one_per_line() {
        let event = FormEvent::Rendered {
            checkboxes: vec![
                CheckboxView {
                    label: OptionLabel::new("One"),
                    is_selected: false,
                },
                CheckboxView {
                    label: OptionLabel::new("Two"),
                    is_selected: true,
                },
            ],
        };
        assert_eq!(render(&event, OutputFormat::Text), "[ ] One\n[x] Two\n");
    }

    #[test]
    fn submit_lists_each_selected_label() {
        let event = FormEvent::Submitted {
            selected: vec![OptionLabel::new("Two"), OptionLabel::new("Three")],
        };
        assert_eq!(
            render(&event, OutputFormat::Text),
            "Two is selected.\nThree is selected.\n"
        );
    }

    #[test]
    fn empty_submit_says_so() {
        let event = FormEvent::Submitted { selected: vec![] };
        assert_eq!(
            render(&event, OutputFormat::Text),
            "No options are selected.\n"
        );
    }

    #[test]
    fn json_format_writes_one_event_per_line() {
        let event = FormEvent::Error(FormError::new(ErrorCode::UnknownLabel, "nope"));
        let line = render(&event, OutputFormat::Json);
        assert!(line.ends_with('\n'));
        let back: FormEvent = serde_json::from_str(line.trim_end()).expect("json");
        assert_eq!(back, event);
    }
}
