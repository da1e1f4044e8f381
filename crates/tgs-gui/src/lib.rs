//! Typegen Studio - GUI library.
//!
//! Paste a JSON sample, pick a target language, tune its renderer
//! options, and read the generated type definitions. Built with Iced
//! 0.14 using the Elm architecture (State, Message, Update, View).

pub mod app;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;
