use crate::search::SearchResult;

use super::App;

impl<'a> App<'a> {
	/// Forward the current input text to the search session.
	pub(crate) fn on_query_changed(&mut self) {
		let query = self.search_input.text().to_string();
		self.search.update_query(&self.worker, &query);
		if query.trim().is_empty() {
			self.table_state.select(None);
		}
	}

	pub(crate) fn refresh_search(&mut self) {
		self.search.refresh(&self.worker);
	}

	pub(crate) fn apply_search_result(&mut self, result: SearchResult) {
		if self.search.apply(result) {
			self.table_state.select(None);
			self.ensure_selection();
		}
	}
}
