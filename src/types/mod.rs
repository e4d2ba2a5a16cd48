//! Types shared across the collaborator client, the sessions, and the UI.

mod beer;
mod identified;

pub use beer::{Beer, BeerId, format_ibu};
pub use identified::{IdentifiedBeer, IdentifyResponse};
