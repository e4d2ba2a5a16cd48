use tracing::{debug, warn};

use super::commands::{SearchResult, SearchTicket};
use crate::api::BeerApi;
use crate::types::Beer;

/// Owns the query, the displayed results and the loading flag.
///
/// Every query change issues a new ticket id. Only a result carrying the
/// latest id may touch the results or the loading flag, so a slow response
/// for an older query can never overwrite the answer to a newer one.
#[derive(Debug, Default)]
pub struct SearchSession {
	query: String,
	results: Vec<Beer>,
	loading: bool,
	next_id: u64,
	latest_id: Option<u64>,
}

impl SearchSession {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a new query.
	///
	/// Returns the ticket to execute when a request must be issued. A blank
	/// query clears the results immediately and supersedes any outstanding
	/// ticket without issuing a new one. Setting the current value again is
	/// not a change and issues nothing.
	pub fn set_query(&mut self, query: impl Into<String>) -> Option<SearchTicket> {
		let query = query.into();
		if query == self.query {
			return None;
		}
		self.query = query;
		self.issue()
	}

	/// Re-issue a search for the current query even though it did not change.
	pub fn refresh(&mut self) -> Option<SearchTicket> {
		self.issue()
	}

	fn issue(&mut self) -> Option<SearchTicket> {
		self.next_id = self.next_id.saturating_add(1);

		if self.query.trim().is_empty() {
			self.latest_id = None;
			self.loading = false;
			self.results.clear();
			return None;
		}

		let id = self.next_id;
		self.latest_id = Some(id);
		self.loading = true;
		Some(SearchTicket {
			id,
			query: self.query.clone(),
		})
	}

	/// Reconcile a completed search.
	///
	/// Returns `false` when the result was superseded and discarded.
	pub fn apply(&mut self, result: SearchResult) -> bool {
		if !self.loading || Some(result.id) != self.latest_id {
			debug!(id = result.id, query = %result.query, "discarding superseded search result");
			return false;
		}

		self.loading = false;
		match result.outcome {
			Ok(beers) => {
				debug!(id = result.id, count = beers.len(), "search results applied");
				self.results = beers;
			}
			Err(err) => {
				warn!(query = %result.query, status = ?err.status(), error = %err, "beer search failed");
				self.results.clear();
			}
		}
		true
	}

	/// Set the query and, if a request is needed, await it and apply the result.
	pub async fn search(&mut self, api: &dyn BeerApi, query: impl Into<String>) -> &[Beer] {
		if let Some(ticket) = self.set_query(query) {
			let result = ticket.execute(api).await;
			self.apply(result);
		}
		&self.results
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn results(&self) -> &[Beer] {
		&self.results
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Identifier of the ticket whose result would currently be accepted.
	#[must_use]
	pub fn latest_id(&self) -> Option<u64> {
		self.latest_id
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;
	use std::sync::Mutex;

	use async_trait::async_trait;

	use super::*;
	use crate::api::{ApiError, ImageUpload, Result};
	use crate::types::IdentifyResponse;

	fn beers(names: &[&str]) -> Vec<Beer> {
		names
			.iter()
			.enumerate()
			.map(|(index, name)| Beer::new(index.to_string(), *name))
			.collect()
	}

	fn ok(ticket: &SearchTicket, names: &[&str]) -> SearchResult {
		SearchResult {
			id: ticket.id,
			query: ticket.query.clone(),
			outcome: Ok(beers(names)),
		}
	}

	fn failed(ticket: &SearchTicket) -> SearchResult {
		SearchResult {
			id: ticket.id,
			query: ticket.query.clone(),
			outcome: Err(ApiError::Decode("boom".into())),
		}
	}

	#[derive(Default)]
	struct CannedApi {
		responses: HashMap<String, Vec<Beer>>,
		calls: Mutex<Vec<String>>,
	}

	#[async_trait]
	impl BeerApi for CannedApi {
		async fn search(&self, query: &str) -> Result<Vec<Beer>> {
			self.calls.lock().unwrap().push(query.to_string());
			Ok(self.responses.get(query).cloned().unwrap_or_default())
		}

		async fn identify(&self, _upload: ImageUpload) -> Result<IdentifyResponse> {
			unreachable!("search tests never upload")
		}
	}

	#[test]
	fn non_empty_query_issues_ticket_and_sets_loading() {
		let mut session = SearchSession::new();
		let ticket = session.set_query("ipa").expect("ticket");
		assert_eq!(ticket.query, "ipa");
		assert!(session.is_loading());
		assert_eq!(session.latest_id(), Some(ticket.id));

		assert!(session.apply(ok(&ticket, &["Heady Topper"])));
		assert!(!session.is_loading());
		assert_eq!(session.results()[0].name, "Heady Topper");
	}

	#[test]
	fn blank_query_clears_synchronously_without_ticket() {
		let mut session = SearchSession::new();
		let ticket = session.set_query("stout").unwrap();
		session.apply(ok(&ticket, &["Guinness"]));

		assert!(session.set_query("   ").is_none());
		assert!(session.results().is_empty());
		assert!(!session.is_loading());
		assert_eq!(session.query(), "   ");
	}

	#[test]
	fn blank_query_supersedes_outstanding_ticket() {
		let mut session = SearchSession::new();
		let ticket = session.set_query("lager").unwrap();
		assert!(session.set_query("").is_none());

		assert!(!session.apply(ok(&ticket, &["Pilsner Urquell"])));
		assert!(session.results().is_empty());
		assert!(!session.is_loading());
	}

	#[test]
	fn late_response_for_older_query_is_discarded() {
		let mut session = SearchSession::new();
		let ticket_a = session.set_query("A").unwrap();
		let ticket_b = session.set_query("B").unwrap();

		assert!(session.apply(ok(&ticket_b, &["b1", "b2"])));
		assert!(!session.apply(ok(&ticket_a, &["a1"])));

		let names: Vec<_> = session.results().iter().map(|b| b.name.as_str()).collect();
		assert_eq!(names, ["b1", "b2"]);
		assert!(!session.is_loading());
	}

	#[test]
	fn early_response_for_older_query_keeps_loading() {
		let mut session = SearchSession::new();
		let ticket_a = session.set_query("A").unwrap();
		let ticket_b = session.set_query("B").unwrap();

		assert!(!session.apply(ok(&ticket_a, &["a1"])));
		assert!(session.is_loading());
		assert!(session.results().is_empty());

		assert!(session.apply(ok(&ticket_b, &["b1"])));
		assert!(!session.is_loading());
	}

	#[test]
	fn stale_failure_does_not_clear_results() {
		let mut session = SearchSession::new();
		let ticket_a = session.set_query("A").unwrap();
		let ticket_b = session.set_query("B").unwrap();
		session.apply(ok(&ticket_b, &["b1"]));

		assert!(!session.apply(failed(&ticket_a)));
		assert_eq!(session.results().len(), 1);
	}

	#[test]
	fn failure_clears_results_and_session_stays_usable() {
		let mut session = SearchSession::new();
		let first = session.set_query("ale").unwrap();
		session.apply(ok(&first, &["Bass"]));

		let second = session.set_query("ales").unwrap();
		assert!(session.apply(failed(&second)));
		assert!(session.results().is_empty());
		assert!(!session.is_loading());

		let third = session.set_query("ale").unwrap();
		assert!(session.apply(ok(&third, &["Bass"])));
		assert_eq!(session.results().len(), 1);
	}

	#[test]
	fn duplicate_result_is_applied_once() {
		let mut session = SearchSession::new();
		let ticket = session.set_query("porter").unwrap();
		assert!(session.apply(ok(&ticket, &["Edmund Fitzgerald"])));
		assert!(!session.apply(ok(&ticket, &["Other"])));
		assert_eq!(session.results()[0].name, "Edmund Fitzgerald");
	}

	#[test]
	fn unchanged_query_is_not_reissued_but_refresh_is() {
		let mut session = SearchSession::new();
		let first = session.set_query("saison").unwrap();
		assert!(session.set_query("saison").is_none());

		let refreshed = session.refresh().unwrap();
		assert!(refreshed.id > first.id);
		assert!(!session.apply(ok(&first, &["old"])));
		assert!(session.apply(ok(&refreshed, &["Saison Dupont"])));
	}

	#[test]
	fn ticket_keeps_untrimmed_query() {
		let mut session = SearchSession::new();
		let ticket = session.set_query(" ipa ").unwrap();
		assert_eq!(ticket.query, " ipa ");
	}

	#[tokio::test]
	async fn search_returns_collaborator_response_for_exact_query() {
		let mut api = CannedApi::default();
		api.responses.insert("ipa".into(), beers(&["Two Hearted"]));
		api.responses.insert("ip".into(), beers(&["Wrong"]));

		let mut session = SearchSession::new();
		let results = session.search(&api, "ipa").await;
		assert_eq!(results, beers(&["Two Hearted"]).as_slice());
		assert_eq!(*api.calls.lock().unwrap(), ["ipa"]);
	}

	#[tokio::test]
	async fn search_with_blank_query_never_calls_collaborator() {
		let api = CannedApi::default();
		let mut session = SearchSession::new();
		session.search(&api, "  ").await;
		assert!(session.results().is_empty());
		assert!(!session.is_loading());
		assert!(api.calls.lock().unwrap().is_empty());
	}
}
