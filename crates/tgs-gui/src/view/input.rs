//! Sample input pane.
//!
//! Sample name, input-kind selector, and the JSON editor. The selector
//! lists every input kind; picking one that is not available yet is a
//! no-op in the handler.

use iced::widget::{button, column, pick_list, row, text, text_editor, text_input};
use iced::{Element, Length};

use tgs_persistence::InputKind;

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SPACING_SM, highlight_theme};

/// Render the input pane.
pub fn view_input(state: &AppState) -> Element<'_, Message> {
    let name = text_input("Sample name", &state.computed.sample_name)
        .on_input(Message::SampleNameChanged)
        .width(Length::Fill);

    let kind = pick_list(
        InputKind::ALL,
        Some(state.computed.input_kind),
        Message::InputKindSelected,
    );

    let options_toggle = button(text("Options").size(14))
        .on_press(Message::ToggleOptionsPanel)
        .style(button::secondary);

    let header = row![name, kind, options_toggle]
        .spacing(SPACING_SM)
        .align_y(iced::Alignment::Center);

    let editor = text_editor(&state.editor)
        .on_action(Message::EditorAction)
        .highlight("json", highlight_theme())
        .height(Length::Fill);

    column![header, editor]
        .spacing(SPACING_SM)
        .width(Length::FillPortion(2))
        .height(Length::Fill)
        .into()
}
