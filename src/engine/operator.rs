//! The binary operator enumeration.

use serde::{Deserialize, Serialize};

/// An arithmetic operator selected on the keypad.
///
/// `Equals` triggers the pending computation, `None` means no operator is
/// pending. Both are part of the enumeration so a single value can describe
/// the evaluator's pending slot, the controller's highlight state, and the
/// operator buttons themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`−`).
    Subtract,
    /// Multiplication (`×`).
    Multiply,
    /// Division (`÷`).
    Divide,
    /// Compute the pending operation.
    Equals,
    /// No operator selected.
    #[default]
    None,
}

impl Operator {
    /// The symbol shown in the operation preview line (e.g. `"12 +"`).
    ///
    /// `Equals` and `None` never appear in the preview and render empty.
    /// The minus and multiplication symbols are the typographic ones
    /// (U+2212, U+00D7), not ASCII hyphen/x.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Equals | Self::None => "",
        }
    }

    /// Check if this is a binary operator (not `Equals` or `None`).
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Add | Self::Subtract | Self::Multiply | Self::Divide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "−");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
        assert_eq!(Operator::Equals.symbol(), "");
        assert_eq!(Operator::None.symbol(), "");
    }

    #[test]
    fn test_is_binary() {
        assert!(Operator::Add.is_binary());
        assert!(Operator::Divide.is_binary());
        assert!(!Operator::Equals.is_binary());
        assert!(!Operator::None.is_binary());
    }
}
