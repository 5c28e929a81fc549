//! Translation of typed characters into button events.
//!
//! Lets a front end drive the calculator from a physical keyboard, and lets
//! tests script whole sessions as plain strings ("12.5+3=").

use thiserror::Error;

use super::button::{ButtonEvent, FunctionCommand};
use crate::engine::Operator;

/// A typed character with no keypad equivalent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("key {0:?} does not map to a calculator button")]
    UnrecognizedKey(char),
}

/// Translate a single typed character into a button event.
///
/// Recognized keys: digits, `.`, the four ASCII operators `+ - * /`, `=`,
/// `%`, `c`/`C` for all-clear, and `n` or `±` for the sign toggle.
pub fn event_for_key(key: char) -> Result<ButtonEvent, KeyError> {
    match key {
        '0'..='9' => Ok(ButtonEvent::Digit(key as u8 - b'0')),
        '.' => Ok(ButtonEvent::DecimalPoint),
        '+' => Ok(ButtonEvent::Operator(Operator::Add)),
        '-' => Ok(ButtonEvent::Operator(Operator::Subtract)),
        '*' => Ok(ButtonEvent::Operator(Operator::Multiply)),
        '/' => Ok(ButtonEvent::Operator(Operator::Divide)),
        '=' => Ok(ButtonEvent::Operator(Operator::Equals)),
        '%' => Ok(ButtonEvent::Function(FunctionCommand::Percent)),
        'c' | 'C' => Ok(ButtonEvent::Function(FunctionCommand::AllClear)),
        'n' | '±' => Ok(ButtonEvent::Function(FunctionCommand::ToggleSign)),
        other => Err(KeyError::UnrecognizedKey(other)),
    }
}

/// Translate a whole keystroke string into button events.
///
/// Whitespace is skipped; any other unrecognized character fails the whole
/// translation. Useful for replaying a session written down as a string.
pub fn events_from_str(keys: &str) -> Result<Vec<ButtonEvent>, KeyError> {
    keys.chars()
        .filter(|key| !key.is_whitespace())
        .map(event_for_key)
        .collect()
}
