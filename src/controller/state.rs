//! The button-event state machine.

use tracing::{debug, trace};

use super::format::format_number;
use crate::engine::{Evaluator, Operator};
use crate::keypad::{ButtonEvent, FunctionCommand};

/// Input/display controller for the calculator.
///
/// Sits above the [`Evaluator`] and owns everything the arithmetic engine
/// does not: the textual display buffer, the operation preview line, the
/// active-operator highlight, and the bookkeeping for whether the user is
/// mid-entry of a number. A front end forwards one [`ButtonEvent`] per
/// button press into [`dispatch`](Self::dispatch) and re-reads the published
/// strings afterwards.
///
/// Every transition is total: there is no error state, and the display is
/// always a valid decimal numeral.
#[derive(Clone, Debug)]
pub struct Controller {
    evaluator: Evaluator,
    /// What the primary display shows. Never empty.
    display_text: String,
    /// Secondary line, e.g. "12 +". Empty when nothing is pending.
    operation_preview: String,
    /// Drives which operator button the front end highlights.
    active_operator: Operator,
    /// Numeric value of `display_text`.
    current_number: f64,
    /// The next digit starts a new number instead of appending.
    awaiting_fresh_entry: bool,
    /// The user is actively composing the current number's digits.
    entering_number: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            evaluator: Evaluator::new(),
            display_text: String::from("0"),
            operation_preview: String::new(),
            active_operator: Operator::None,
            current_number: 0.0,
            awaiting_fresh_entry: false,
            entering_number: false,
        }
    }
}

impl Controller {
    /// Create a controller in its initial state: display "0", no preview,
    /// no operator pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// The text for the primary display line.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// The text for the secondary preview line, e.g. "12 +".
    pub fn operation_preview(&self) -> &str {
        &self.operation_preview
    }

    /// The operator whose button should currently be highlighted.
    pub fn active_operator(&self) -> Operator {
        self.active_operator
    }

    /// Handle one button press. The single entry point; always succeeds.
    pub fn dispatch(&mut self, event: ButtonEvent) {
        trace!(?event, "dispatch");

        match event {
            ButtonEvent::Digit(digit) => self.digit(digit),
            ButtonEvent::DecimalPoint => self.decimal_point(),
            ButtonEvent::Operator(op) => self.operator(op),
            ButtonEvent::Function(command) => self.function(command),
        }
    }

    /// Handle a sequence of button presses, e.g. a recorded session.
    pub fn dispatch_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = ButtonEvent>,
    {
        for event in events {
            self.dispatch(event);
        }
    }

    fn digit(&mut self, digit: u8) {
        if self.awaiting_fresh_entry {
            // Start a fresh display after an operator or equals.
            self.display_text = digit.to_string();
            self.awaiting_fresh_entry = false;
            self.entering_number = true;
        } else if self.display_text == "0" || !self.entering_number {
            // Replace the leading "0" or start a new number.
            self.display_text = digit.to_string();
            self.entering_number = true;
        } else {
            self.display_text.push_str(&digit.to_string());
        }

        self.current_number = parse_display(&self.display_text);
    }

    fn decimal_point(&mut self) {
        if self.awaiting_fresh_entry {
            self.display_text = String::from("0.");
            self.awaiting_fresh_entry = false;
            self.entering_number = true;
        } else if !self.display_text.contains('.') {
            // At most one decimal point per number.
            self.display_text.push('.');
            self.entering_number = true;
        }

        self.current_number = parse_display(&self.display_text);
    }

    fn operator(&mut self, op: Operator) {
        if op == Operator::Equals {
            self.equals();
        } else {
            self.binary_operator(op);
        }
    }

    fn binary_operator(&mut self, op: Operator) {
        // A fresh second number was typed since the last operator: fold the
        // pending operation before registering the next one. This is what
        // makes 5 + 3 × evaluate 5 + 3 first (left-to-right, no precedence).
        if self.active_operator != Operator::None && self.entering_number {
            let result = self.evaluator.apply(Operator::Equals, self.current_number);
            debug!(result, "folded pending operation");
            self.display_text = format_number(result);
            self.current_number = result;
        }

        let first_number = self.current_number;
        self.active_operator = op;
        self.operation_preview = format!("{} {}", format_number(first_number), op.symbol());

        // Register the first operand; the return value is the operand itself.
        let _ = self.evaluator.apply(op, first_number);

        self.awaiting_fresh_entry = true;
        self.entering_number = false;
    }

    fn equals(&mut self) {
        if self.active_operator == Operator::None {
            return;
        }

        let result = self.evaluator.apply(Operator::Equals, self.current_number);
        debug!(result, "equals");
        self.display_text = format_number(result);
        self.current_number = result;
        self.operation_preview.clear();
        self.active_operator = Operator::None;
        self.awaiting_fresh_entry = true;
        self.entering_number = false;
    }

    fn function(&mut self, command: FunctionCommand) {
        match command {
            FunctionCommand::AllClear => {
                debug!("all clear");
                self.evaluator.reset();
                self.display_text = String::from("0");
                self.operation_preview.clear();
                self.active_operator = Operator::None;
                self.current_number = 0.0;
                self.awaiting_fresh_entry = false;
                self.entering_number = false;
            }
            FunctionCommand::ToggleSign => {
                // No-op at exactly zero.
                if self.current_number != 0.0 {
                    self.current_number = -self.current_number;
                    self.display_text = format_number(self.current_number);
                }
            }
            FunctionCommand::Percent => {
                self.current_number /= 100.0;
                self.display_text = format_number(self.current_number);
            }
        }
    }
}

/// Numeric value of the display buffer, defaulting silently to 0 when the
/// text does not parse. Unreachable under the transition rules; the default
/// is a guard, not a code path callers may rely on.
fn parse_display(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}
