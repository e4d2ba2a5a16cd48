//! Client side of the search and identify collaborators.
//!
//! [`BeerApi`] is the seam the sessions talk through; [`HttpBeerApi`] is the
//! reqwest-backed implementation used by the binary.

mod client;
mod config;
mod error;

pub use client::{BeerApi, HttpBeerApi, ImageUpload};
pub use config::{ApiConfig, DEFAULT_ORIGIN};
pub use error::{ApiError, Result};
