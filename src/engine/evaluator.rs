//! The accumulator-based evaluator.

use super::Operator;

/// Pure arithmetic engine behind the keypad.
///
/// The evaluator knows nothing about display text. It holds the running
/// accumulator and the operator waiting to be applied; the controller
/// supplies both operands explicitly, so no second operand is ever stored
/// here.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    /// Running total, or the first operand of the pending operation.
    accumulator: f64,
    /// Operator waiting for its second operand.
    pending: Operator,
}

impl Evaluator {
    /// Create an evaluator with a zero accumulator and nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a keypad operator to the given operand.
    ///
    /// A binary operator (`Add`, `Subtract`, `Multiply`, `Divide`) does not
    /// compute anything yet: it records `operand` as the new accumulator and
    /// remembers the operator, mirroring an operator key pressed after the
    /// first number. `Equals` combines the accumulator with `operand` under
    /// the remembered operator and commits the result. `None` is an identity
    /// pass-through.
    pub fn apply(&mut self, operator: Operator, operand: f64) -> f64 {
        match operator {
            Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide => {
                self.accumulator = operand;
                self.pending = operator;
                self.accumulator
            }
            Operator::Equals => {
                let result = combine(self.accumulator, operand, self.pending);
                self.accumulator = result;
                self.pending = Operator::None;
                result
            }
            Operator::None => operand,
        }
    }

    /// Reset the accumulator and forget any pending operator.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.pending = Operator::None;
    }
}

/// Combine two operands under a binary operator.
///
/// Dividing by zero yields 0, never an error, infinity, or NaN. `Equals` and
/// `None` cannot be pending when this runs under normal dispatch; they fall
/// through to the second operand.
fn combine(first: f64, second: f64, operator: Operator) -> f64 {
    match operator {
        Operator::Add => first + second,
        Operator::Subtract => first - second,
        Operator::Multiply => first * second,
        Operator::Divide => {
            if second == 0.0 {
                0.0
            } else {
                first / second
            }
        }
        Operator::Equals | Operator::None => second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_operator_registers_without_computing() {
        let mut eval = Evaluator::new();
        assert_eq!(eval.apply(Operator::Add, 5.0), 5.0);
        // Nothing computed yet; equals combines with the second operand.
        assert_eq!(eval.apply(Operator::Equals, 3.0), 8.0);
    }

    #[test]
    fn test_all_four_operations() {
        let mut eval = Evaluator::new();

        eval.apply(Operator::Add, 7.0);
        assert_eq!(eval.apply(Operator::Equals, 2.0), 9.0);

        eval.apply(Operator::Subtract, 7.0);
        assert_eq!(eval.apply(Operator::Equals, 2.0), 5.0);

        eval.apply(Operator::Multiply, 7.0);
        assert_eq!(eval.apply(Operator::Equals, 2.0), 14.0);

        eval.apply(Operator::Divide, 7.0);
        assert_eq!(eval.apply(Operator::Equals, 2.0), 3.5);
    }

    #[test]
    fn test_equals_commits_result_as_accumulator() {
        let mut eval = Evaluator::new();
        eval.apply(Operator::Add, 5.0);
        assert_eq!(eval.apply(Operator::Equals, 3.0), 8.0);

        // The committed result is the first operand of the next operation.
        eval.apply(Operator::Multiply, 8.0);
        assert_eq!(eval.apply(Operator::Equals, 2.0), 16.0);
    }

    #[test]
    fn test_divide_by_zero_yields_zero() {
        let mut eval = Evaluator::new();
        eval.apply(Operator::Divide, 5.0);
        assert_eq!(eval.apply(Operator::Equals, 0.0), 0.0);
    }

    #[test]
    fn test_equals_with_nothing_pending_passes_operand_through() {
        let mut eval = Evaluator::new();
        assert_eq!(eval.apply(Operator::Equals, 42.0), 42.0);
    }

    #[test]
    fn test_none_is_identity() {
        let mut eval = Evaluator::new();
        assert_eq!(eval.apply(Operator::None, 13.0), 13.0);
        // Identity must not disturb a pending operation.
        eval.apply(Operator::Add, 1.0);
        eval.apply(Operator::None, 99.0);
        assert_eq!(eval.apply(Operator::Equals, 2.0), 3.0);
    }

    #[test]
    fn test_reset_clears_accumulator_and_pending() {
        let mut eval = Evaluator::new();
        eval.apply(Operator::Add, 5.0);
        eval.reset();
        // Nothing pending: equals passes the operand through, accumulator is 0.
        assert_eq!(eval.apply(Operator::Equals, 3.0), 3.0);
        eval.apply(Operator::Add, 0.0);
        assert_eq!(eval.apply(Operator::Equals, 4.0), 4.0);
    }
}
