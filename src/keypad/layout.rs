//! The fixed keypad arrangement.

use super::button::{ButtonEvent, FunctionCommand};
use crate::engine::Operator;

/// The keypad, top row first:
///
/// ```text
/// AC  ±  %  ÷
///  7  8  9  ×
///  4  5  6  −
///  1  2  3  +
///  0     .  =
/// ```
///
/// A front end renders one button per descriptor and feeds the descriptor
/// back into [`Controller::dispatch`](crate::Controller::dispatch) when the
/// button is pressed. The arrangement is a static constant, not
/// runtime-configurable.
pub const KEYPAD_ROWS: [&[ButtonEvent]; 5] = [
    &[
        ButtonEvent::Function(FunctionCommand::AllClear),
        ButtonEvent::Function(FunctionCommand::ToggleSign),
        ButtonEvent::Function(FunctionCommand::Percent),
        ButtonEvent::Operator(Operator::Divide),
    ],
    &[
        ButtonEvent::Digit(7),
        ButtonEvent::Digit(8),
        ButtonEvent::Digit(9),
        ButtonEvent::Operator(Operator::Multiply),
    ],
    &[
        ButtonEvent::Digit(4),
        ButtonEvent::Digit(5),
        ButtonEvent::Digit(6),
        ButtonEvent::Operator(Operator::Subtract),
    ],
    &[
        ButtonEvent::Digit(1),
        ButtonEvent::Digit(2),
        ButtonEvent::Digit(3),
        ButtonEvent::Operator(Operator::Add),
    ],
    &[
        ButtonEvent::Digit(0),
        ButtonEvent::DecimalPoint,
        ButtonEvent::Operator(Operator::Equals),
    ],
];

/// The keypad rows as a slice, for iteration by the front end.
pub fn layout() -> &'static [&'static [ButtonEvent]] {
    &KEYPAD_ROWS
}
