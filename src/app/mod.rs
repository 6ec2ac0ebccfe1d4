mod core;
mod event_bus;
mod event_loop;
mod fetch;
mod input_ops;
mod state;
pub(crate) mod terminal_session;

#[cfg(test)]
mod tests;

pub use core::App;
pub use state::{Focus, UiState};
