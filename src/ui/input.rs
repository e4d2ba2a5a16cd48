//! Single-line text input built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// A one-line editor used for the search query and the image path.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			placeholder: String::new(),
		};
		input.set_text(initial);
		input
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self.textarea.set_placeholder_text(self.placeholder.clone());
		self
	}

	/// Current contents.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text: String = text.into();
		let single_line = text.lines().next().unwrap_or("").to_string();
		let mut textarea = TextArea::new(vec![single_line]);
		textarea.set_cursor_line_style(Style::default());
		if !self.placeholder.is_empty() {
			textarea.set_placeholder_text(self.placeholder.clone());
		}
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	///
	/// Keys that would split the line are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if breaks_line(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Show or hide the terminal cursor inside the editor.
	pub fn set_focused(&mut self, focused: bool) {
		let style = if focused {
			Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn breaks_line(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_reports_changes() {
		let mut input = SearchInput::new("");
		assert!(input.input(key(KeyCode::Char('i'))));
		assert!(input.input(key(KeyCode::Char('p'))));
		assert_eq!(input.text(), "ip");

		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "i");
		assert!(!input.input(key(KeyCode::Left)));
	}

	#[test]
	fn enter_never_adds_a_line() {
		let mut input = SearchInput::new("stout");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "stout");
	}

	#[test]
	fn set_text_keeps_first_line_and_appends_at_end() {
		let mut input = SearchInput::new("");
		input.set_text("pale\nale");
		assert_eq!(input.text(), "pale");
		input.input(key(KeyCode::Char('s')));
		assert_eq!(input.text(), "pales");
	}
}
