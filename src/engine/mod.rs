//! Arithmetic engine for the calculator.
//!
//! This module provides:
//! - The [`Operator`] enumeration shared with the keypad and controller
//! - The [`Evaluator`], which holds the running accumulator and the
//!   pending operator and performs the actual arithmetic

mod evaluator;
mod operator;

pub use evaluator::Evaluator;
pub use operator::Operator;
