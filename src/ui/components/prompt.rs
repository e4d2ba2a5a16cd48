use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::ui::input::SearchInput;
use crate::ui::theme::Theme;

/// Argument bundle for rendering a labelled input row.
pub struct PromptContext<'a> {
	pub label: &'a str,
	pub input: &'a SearchInput<'a>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Busy indicator drawn at the right edge of the input row.
pub struct ActivityState<'a> {
	pub label: &'a str,
	pub busy: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render `label > ` followed by the input, with the activity indicator on the right.
pub fn render_prompt(frame: &mut Frame, prompt: PromptContext<'_>, activity: ActivityState<'_>) {
	let PromptContext {
		label,
		input,
		area,
		theme,
	} = prompt;

	let prompt_width = prompt_width(label);
	let sections = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Length(prompt_width), Constraint::Min(1)])
		.split(area);

	if prompt_width > 0 {
		let text = Paragraph::new(format!("{label} > ")).style(theme.prompt_style());
		frame.render_widget(text, sections[0]);
	}

	input.render(frame, sections[1]);
	if activity.busy {
		render_activity(frame, sections[1], activity.label, activity.throbber_state, theme);
	}
}

fn prompt_width(label: &str) -> u16 {
	if label.is_empty() {
		0
	} else {
		u16::try_from(label.width())
			.unwrap_or(u16::MAX)
			.saturating_add(3)
	}
}

fn render_activity(
	frame: &mut Frame,
	area: Rect,
	label: &str,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let muted = theme.empty_style();
	let spinner = Throbber::default().style(muted).throbber_style(muted);
	let mut line = Line::default();
	line.spans.push(spinner.to_symbol_span(throbber_state));
	line.spans.push(Span::styled(label.to_string(), muted));

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	let buffer = frame.buffer_mut();
	let row = area.top();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	// Keep two columns between the typed text and the indicator.
	let last_char_x = (area.left()..area.right()).rev().find(|&x| {
		buffer
			.cell((x, row))
			.is_some_and(|cell| !cell.symbol().trim().is_empty())
	});
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}

	if start_x >= area.right() {
		return;
	}
	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, row, &line, max_width);
}
