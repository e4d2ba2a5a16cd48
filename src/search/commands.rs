use crate::api::{ApiError, BeerApi};
use crate::types::Beer;

/// A search the session wants executed.
///
/// Carries the identifier that lets the session correlate the eventual
/// [`SearchResult`] with the query that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
	pub id: u64,
	pub query: String,
}

impl SearchTicket {
	/// Run the ticket against the collaborator.
	pub async fn execute(self, api: &dyn BeerApi) -> SearchResult {
		let outcome = api.search(&self.query).await;
		SearchResult {
			id: self.id,
			query: self.query,
			outcome,
		}
	}
}

/// Completion of a [`SearchTicket`], successful or not.
#[derive(Debug)]
pub struct SearchResult {
	/// Identifier of the ticket that produced the result.
	pub id: u64,
	pub query: String,
	pub outcome: Result<Vec<Beer>, ApiError>,
}
