//! Widgets composed by [`App::draw`](crate::ui::App).

mod identify;
mod prompt;
mod results;

pub use identify::{IDENTIFY_PANE_HEIGHT, IdentifyContext, render_identify};
pub use prompt::{ActivityState, PromptContext, render_prompt};
pub use results::{ResultsContext, render_results};
