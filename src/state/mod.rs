//! Application state module

mod app_state;
mod counter;
mod event_log;
mod faq;
mod form;
mod theme;

pub use app_state::*;
pub use counter::*;
pub use event_log::*;
pub use faq::*;
pub use form::*;
pub use theme::*;
