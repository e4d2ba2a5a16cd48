use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::{AppOutcome, Focus};

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<AppOutcome>> {
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.refresh_search();
			}
			KeyCode::Enter => match self.focus {
				Focus::Search => return Ok(Some(self.outcome(true))),
				Focus::Image => self.request_upload(),
			},
			_ => match self.focus {
				Focus::Search => {
					if self.search_input.input(key) {
						self.on_query_changed();
					}
				}
				Focus::Image => {
					self.image_input.input(key);
				}
			},
		}
		Ok(None)
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.results().len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}
}
