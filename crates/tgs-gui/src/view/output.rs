//! Generated output pane.
//!
//! A read-only editor (no `on_action`, so edits are ignored) highlighted
//! with the current language's syntax. When the last generation failed
//! the pane is empty and a short notice is shown instead of stale output.

use iced::widget::{column, row, text, text_editor};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SPACING_SM, highlight_theme};

/// Render the output pane.
pub fn view_output(state: &AppState) -> Element<'_, Message> {
    let language = state.computed.language;

    let mut header = row![text(language.display_name).size(14)].spacing(SPACING_SM);
    if state.output_lines.is_none() {
        header = header.push(text("no output").size(14));
    }

    let editor = text_editor(&state.output)
        .highlight(language.syntax_token, highlight_theme())
        .height(Length::Fill);

    column![header, editor]
        .spacing(SPACING_SM)
        .width(Length::FillPortion(2))
        .height(Length::Fill)
        .into()
}
