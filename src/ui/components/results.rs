use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Clear, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::types::Beer;
use crate::ui::theme::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;

/// Argument bundle describing the result table.
pub struct ResultsContext<'a> {
	pub area: Rect,
	pub beers: &'a [Beer],
	pub headers: &'a [String],
	/// Shown in place of the rows when `beers` is empty.
	pub empty_label: &'a str,
	pub theme: &'a Theme,
}

/// Render the Name / Style / IBU table with a divider under the header.
pub fn render_results(frame: &mut Frame, table_state: &mut TableState, ctx: ResultsContext<'_>) {
	let ResultsContext {
		area,
		beers,
		headers,
		empty_label,
		theme,
	} = ctx;

	let header = Row::new(headers.iter().map(|h| Cell::from(h.as_str())))
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);

	let rows = beers.iter().map(beer_row);
	let table = Table::new(rows, column_widths(headers.len()))
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);
	render_header_separator(frame, area, theme);

	if beers.is_empty() && area.height > HEADER_AND_DIVIDER_HEIGHT {
		let message_area = Rect {
			y: area.y + HEADER_AND_DIVIDER_HEIGHT,
			height: area.height - HEADER_AND_DIVIDER_HEIGHT,
			..area
		};
		let empty = Paragraph::new(empty_label)
			.alignment(Alignment::Center)
			.style(theme.empty_style());
		frame.render_widget(Clear, message_area);
		frame.render_widget(empty, message_area);
	}
}

fn beer_row(beer: &Beer) -> Row<'_> {
	Row::new([
		Cell::from(beer.name.as_str()),
		Cell::from(beer.style.as_deref().unwrap_or_default()),
		Cell::from(beer.ibu_label().unwrap_or_default()),
	])
}

fn column_widths(columns: usize) -> Vec<Constraint> {
	match columns {
		0 => vec![Constraint::Fill(1)],
		3 => vec![Constraint::Fill(3), Constraint::Fill(2), Constraint::Length(6)],
		n => vec![Constraint::Fill(1); n],
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width == 0 {
		return;
	}
	let sep_rect = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	let width = area.width as usize;
	let base_style = Style::new().bg(theme.header_bg());
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)).style(base_style), sep_rect);
		return;
	}

	let middle_style = base_style.fg(theme.header_fg());
	let line = Line::from(vec![
		Span::styled(" ", base_style),
		Span::styled("─".repeat(width - 2), middle_style),
		Span::styled(" ", base_style),
	]);
	frame.render_widget(Paragraph::new(Text::from(line)), sep_rect);
}
