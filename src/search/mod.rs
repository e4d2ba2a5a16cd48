//! Search-as-you-type state and the messages exchanged with the worker.

mod commands;
mod session;

pub use commands::{SearchResult, SearchTicket};
pub use session::SearchSession;
