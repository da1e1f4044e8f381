//! View functions.
//!
//! Views are pure functions that render UI based on application state;
//! every interaction is reported as a [`Message`] and handled in `update`.
//!
//! ## Module Structure
//!
//! - `input.rs` - Sample name, input kind, and the JSON editor
//! - `options.rs` - Language selector and tabbed option controls
//! - `output.rs` - Generated source, read-only with highlighting

mod input;
mod options;
mod output;

use iced::widget::{container, row};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::AppState;
use crate::theme::SPACING_MD;

/// Render the main window.
///
/// Sample input on the left, generated output on the right, and the
/// options sidebar in between when it is shown.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let mut content = row![].spacing(SPACING_MD);

    content = content.push(input::view_input(state));
    if state.show_options {
        content = content.push(options::view_options(state));
    }
    content = content.push(output::view_output(state));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_MD)
        .into()
}
