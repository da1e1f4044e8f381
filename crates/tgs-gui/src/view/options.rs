//! Options sidebar.
//!
//! Language selector on top, then a two-tab panel of option controls.
//! Controls are generated from the catalog definitions of the current
//! language: a toggler per boolean option, a pick list per enumerated
//! option, a text input per free-text option.

use iced::widget::{button, column, pick_list, row, scrollable, text, text_input, toggler};
use iced::{Element, Length};

use tgs_lang::{OptionDefinition, OptionType, OptionValue};

use crate::message::{LanguageChoice, Message};
use crate::state::AppState;
use crate::theme::{SIDEBAR_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS};

/// Render the options sidebar.
pub fn view_options(state: &AppState) -> Element<'_, Message> {
    let languages: Vec<LanguageChoice> = state.registry.iter().map(LanguageChoice).collect();

    let language = pick_list(
        languages,
        Some(LanguageChoice(state.computed.language)),
        Message::LanguageSelected,
    )
    .width(Length::Fill);

    let tabs = row(tgs_lang::OptionKind::ALL.into_iter().map(|kind| {
        let is_active = kind == state.options_tab;
        button(text(kind.label()).size(14))
            .on_press(Message::OptionsTabSelected(kind))
            .style(if is_active {
                button::primary
            } else {
                button::secondary
            })
            .into()
    }))
    .spacing(SPACING_SM);

    let mut controls = column![].spacing(SPACING_MD);
    for definition in state.computed.language.options {
        if definition.kind == state.options_tab {
            controls = controls.push(view_option(state, definition));
        }
    }

    column![
        language,
        tabs,
        scrollable(controls).height(Length::Fill),
    ]
    .spacing(SPACING_MD)
    .width(Length::Fixed(SIDEBAR_WIDTH))
    .height(Length::Fill)
    .into()
}

/// Render the control for one option definition.
fn view_option<'a>(
    state: &'a AppState,
    definition: &'static OptionDefinition,
) -> Element<'a, Message> {
    let current = state.computed.options.get(definition.name);

    match definition.ty {
        OptionType::Boolean { default } => {
            let value = current.and_then(OptionValue::as_bool).unwrap_or(default);
            toggler(value)
                .label(definition.description)
                .on_toggle(move |v| Message::OptionToggled(definition.name, v))
                .into()
        }
        OptionType::Enumerated { legal_values, .. } => {
            let selected = current
                .and_then(OptionValue::as_str)
                .and_then(|s| legal_values.iter().copied().find(|v| *v == s));
            column![
                text(definition.description).size(13),
                pick_list(legal_values, selected, move |v| {
                    Message::OptionPicked(definition.name, v)
                })
                .width(Length::Fill),
            ]
            .spacing(SPACING_XS)
            .into()
        }
        OptionType::FreeText { default } => {
            let value = current.and_then(OptionValue::as_str).unwrap_or(default);
            column![
                text(definition.description).size(13),
                text_input(default, value)
                    .on_input(move |v| Message::OptionTextChanged(definition.name, v))
                    .width(Length::Fill),
            ]
            .spacing(SPACING_XS)
            .into()
        }
    }
}
