//! Dispatch of form actions to the selection store.

use selection::SelectionStore;
use shared::{
    error::FormError,
    protocol::{FormAction, FormEvent},
};

/// Applies `action` and reports what the presentation layer should show next.
///
/// Mutations answer with a fresh render of the store; submit answers with the selected
/// labels read once from the store.
pub fn dispatch_action(store: &mut SelectionStore, action: FormAction) -> FormEvent {
    let action_name = action.name();
    tracing::debug!(action = action_name, "dispatching form action");

    match action {
        FormAction::Toggle { label } => match store.toggle(&label) {
            Ok(state) => FormEvent::Rendered {
                checkboxes: state.checkboxes(),
            },
            Err(error) => {
                tracing::warn!(action = action_name, %label, %error, "rejected form action");
                FormEvent::Error(FormError::from(error))
            }
        },
        FormAction::SelectAll => {
            if is_bulk_noop(store, true) {
                tracing::debug!(action = action_name, "every option already selected");
            }
            FormEvent::Rendered {
                checkboxes: store.select_all().checkboxes(),
            }
        }
        FormAction::DeselectAll => {
            if is_bulk_noop(store, false) {
                tracing::debug!(action = action_name, "no option selected");
            }
            FormEvent::Rendered {
                checkboxes: store.deselect_all().checkboxes(),
            }
        }
        FormAction::Submit => submit(store),
    }
}

/// Whether setting every flag to `selected` would leave the store as it is.
pub fn is_bulk_noop(store: &SelectionStore, selected: bool) -> bool {
    if selected {
        store.all_selected()
    } else {
        store.none_selected()
    }
}

pub fn render_state(store: &SelectionStore) -> FormEvent {
    FormEvent::Rendered {
        checkboxes: store.state().checkboxes(),
    }
}

fn submit(store: &SelectionStore) -> FormEvent {
    let selected: Vec<_> = store.selected_labels().into_iter().cloned().collect();
    for label in &selected {
        tracing::info!(%label, "option is selected");
    }
    tracing::info!(count = selected.len(), "form submitted");
    FormEvent::Submitted { selected }
}
