//! calcpad: a four-function pocket-calculator core.
//!
//! The crate interprets a stream of keypad button presses (digits, decimal
//! point, operators, clear, percent, sign toggle) into a running accumulator
//! and formatted display strings. Evaluation is strictly left-to-right with
//! a single pending operation, like a basic pocket calculator, not an
//! expression parser.
//!
//! The crate is headless. A front end:
//! - renders one button per descriptor in [`layout`]
//! - forwards each press into [`Controller::dispatch`]
//! - re-reads [`Controller::display_text`], [`Controller::operation_preview`]
//!   and [`Controller::active_operator`] afterwards
//!
//! ```
//! use calcpad::{Controller, events_from_str};
//!
//! let mut calc = Controller::new();
//! calc.dispatch_all(events_from_str("5+3*2=").unwrap());
//! assert_eq!(calc.display_text(), "16");
//! ```

pub mod controller;
pub mod engine;
pub mod keypad;

pub use controller::{Controller, format_number};
pub use engine::{Evaluator, Operator};
pub use keypad::{
    ButtonEvent, FunctionCommand, KEYPAD_ROWS, KeyError, event_for_key, events_from_str, layout,
};
