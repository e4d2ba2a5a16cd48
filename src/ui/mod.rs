//! Interactive terminal client.
//!
//! [`BrewUi`] configures and launches the [`App`]. The app keeps all network
//! work on the background [`worker`](crate::worker) and drains its completions
//! once per frame, so typing never blocks on the backend.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
mod search;
mod state;
pub mod theme;
mod upload;

pub use builder::BrewUi;
pub use config::UiConfig;
pub use runtime::run;
pub use state::{App, AppOutcome, Focus};
pub use theme::Theme;
