//! Keypad surface: button events, the static layout, and key translation.
//!
//! This module provides:
//! - The [`ButtonEvent`] sum type the controller consumes
//! - The fixed 5-row keypad layout, so a front end can render the buttons
//!   without hardcoding the arrangement
//! - Translation of typed characters into button events, for keyboard
//!   driving and scripted sessions

mod button;
mod keymap;
mod layout;

pub use button::{ButtonEvent, FunctionCommand};
pub use keymap::{KeyError, event_for_key, events_from_str};
pub use layout::{KEYPAD_ROWS, layout};
