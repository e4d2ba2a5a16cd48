//! Client for a beer search and identification backend.
//!
//! The library exposes the HTTP collaborator ([`HttpBeerApi`]), the
//! race-safe [`SearchSession`], the [`UploadAction`] used to identify a beer
//! from a photo, and the terminal UI built on top of them.

pub mod api;
pub mod app_dirs;
pub mod identify;
pub mod logging;
pub mod search;
pub mod types;
pub mod ui;
pub mod worker;

pub use api::{ApiConfig, ApiError, BeerApi, HttpBeerApi, ImageUpload};
pub use identify::{UploadAction, UploadError};
pub use search::{SearchResult, SearchSession, SearchTicket};
pub use types::{Beer, BeerId, IdentifiedBeer, IdentifyResponse};
pub use ui::{AppOutcome, BrewUi, Theme, UiConfig, run};
