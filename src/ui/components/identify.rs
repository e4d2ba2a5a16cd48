use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use throbber_widgets_tui::ThrobberState;

use super::prompt::{ActivityState, PromptContext, render_prompt};
use crate::types::IdentifiedBeer;
use crate::ui::config::UiConfig;
use crate::ui::input::SearchInput;
use crate::ui::theme::Theme;

/// Rows used by the identify pane, borders included.
pub const IDENTIFY_PANE_HEIGHT: u16 = 5;

/// Argument bundle for the identify pane.
pub struct IdentifyContext<'a> {
	pub area: Rect,
	pub ui: &'a UiConfig,
	pub image_input: &'a SearchInput<'a>,
	pub identified: Option<&'a IdentifiedBeer>,
	pub notice: Option<&'a str>,
	pub uploading: bool,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

pub fn render_identify(frame: &mut Frame, ctx: IdentifyContext<'_>) {
	let block = Block::default()
		.borders(Borders::TOP)
		.title(Span::styled(ctx.ui.identify_title.as_str(), ctx.theme.title))
		.border_style(ctx.theme.empty_style());
	let inner = block.inner(ctx.area);
	frame.render_widget(block, ctx.area);

	let rows = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(0),
		])
		.split(inner);

	render_prompt(
		frame,
		PromptContext {
			label: &ctx.ui.image_prompt,
			input: ctx.image_input,
			area: rows[0],
			theme: ctx.theme,
		},
		ActivityState {
			label: "Uploading...",
			busy: ctx.uploading,
			throbber_state: ctx.throbber_state,
		},
	);

	if let Some(identified) = ctx.identified {
		let line = Line::from(vec![
			Span::styled(format!("{} ", ctx.ui.identified_label), ctx.theme.prompt_style()),
			Span::styled(identified.to_string(), ctx.theme.identified),
		]);
		frame.render_widget(Paragraph::new(line), rows[1]);
	}

	if let Some(notice) = ctx.notice {
		frame.render_widget(Paragraph::new(notice).style(ctx.theme.warning), rows[2]);
	}
}
