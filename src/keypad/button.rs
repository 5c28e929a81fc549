//! Button event types.

use serde::{Deserialize, Serialize};

use crate::engine::Operator;

/// A non-operator keypad action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionCommand {
    /// `AC`: reset the calculator to its initial state.
    AllClear,
    /// `±`: negate the current number.
    ToggleSign,
    /// `%`: divide the current number by 100.
    Percent,
}

/// A single button press, the sole input to the controller.
///
/// Every keypad button produces exactly one of these. The events are plain
/// data and serialize with serde, so a front end can record a session and
/// replay it later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonEvent {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The decimal point key.
    DecimalPoint,
    /// An operator key, including equals.
    Operator(Operator),
    /// A function key (AC, sign toggle, percent).
    Function(FunctionCommand),
}

impl ButtonEvent {
    /// The cap text printed on this button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Digit(digit) => digit_label(*digit),
            Self::DecimalPoint => ".",
            Self::Operator(Operator::Equals) => "=",
            Self::Operator(op) => op.symbol(),
            Self::Function(FunctionCommand::AllClear) => "AC",
            Self::Function(FunctionCommand::ToggleSign) => "±",
            Self::Function(FunctionCommand::Percent) => "%",
        }
    }

    /// Check if this is a digit or decimal-point key (the "number pad"
    /// part of the keypad, styled differently from operators and functions).
    pub fn is_entry(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::DecimalPoint)
    }
}

impl From<FunctionCommand> for ButtonEvent {
    fn from(command: FunctionCommand) -> Self {
        Self::Function(command)
    }
}

impl From<Operator> for ButtonEvent {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

fn digit_label(digit: u8) -> &'static str {
    const LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    LABELS.get(digit as usize).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(ButtonEvent::Digit(7).label(), "7");
        assert_eq!(ButtonEvent::DecimalPoint.label(), ".");
        assert_eq!(ButtonEvent::Operator(Operator::Divide).label(), "÷");
        assert_eq!(ButtonEvent::Operator(Operator::Equals).label(), "=");
        assert_eq!(ButtonEvent::Function(FunctionCommand::AllClear).label(), "AC");
        assert_eq!(ButtonEvent::Function(FunctionCommand::ToggleSign).label(), "±");
        assert_eq!(ButtonEvent::Function(FunctionCommand::Percent).label(), "%");
    }

    #[test]
    fn test_is_entry() {
        assert!(ButtonEvent::Digit(0).is_entry());
        assert!(ButtonEvent::DecimalPoint.is_entry());
        assert!(!ButtonEvent::Operator(Operator::Add).is_entry());
        assert!(!ButtonEvent::Function(FunctionCommand::Percent).is_entry());
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(
            ButtonEvent::from(Operator::Add),
            ButtonEvent::Operator(Operator::Add)
        );
        assert_eq!(
            ButtonEvent::from(FunctionCommand::Percent),
            ButtonEvent::Function(FunctionCommand::Percent)
        );
    }
}
