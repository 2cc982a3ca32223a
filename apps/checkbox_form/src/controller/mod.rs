//! Controller layer: parsing user input into form actions and dispatching them to the store.

pub mod events;
pub mod orchestration;
