use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin};
use ratatui::widgets::Paragraph;

use super::App;
use super::components::{
	ActivityState, IDENTIFY_PANE_HEIGHT, IdentifyContext, PromptContext, ResultsContext,
	render_identify, render_prompt, render_results,
};

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(3),
				Constraint::Length(IDENTIFY_PANE_HEIGHT),
			])
			.split(area);

		let title = Paragraph::new(self.ui.title.as_str())
			.alignment(Alignment::Center)
			.style(self.theme.title);
		frame.render_widget(title, layout[0]);

		render_prompt(
			frame,
			PromptContext {
				label: &self.ui.search_prompt,
				input: &self.search_input,
				area: layout[1],
				theme: &self.theme,
			},
			ActivityState {
				label: &self.ui.loading_label,
				busy: self.search.is_loading(),
				throbber_state: &self.throbber_state,
			},
		);

		render_results(
			frame,
			&mut self.table_state,
			ResultsContext {
				area: layout[2],
				beers: self.search.results(),
				headers: &self.ui.headers,
				empty_label: &self.ui.empty_label,
				theme: &self.theme,
			},
		);

		render_identify(
			frame,
			IdentifyContext {
				area: layout[3],
				ui: &self.ui,
				image_input: &self.image_input,
				identified: self.upload.identified(),
				notice: self.notice.as_deref(),
				uploading: self.is_uploading(),
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
		);
	}
}
