// SPDX-License-Identifier: MPL-2.0
//! Calculator controller: a text buffer evaluated on demand.
//!
//! The buffer is free text; only [`Calculator::evaluate`] interprets it, using
//! the safe evaluator in [`parser`]. Failures never leave the controller: the
//! buffer is replaced by [`ERROR_TEXT`] and the user clears it manually.

pub mod lexer;
pub mod parser;

use lexer::Token;
use std::fmt;

/// Text shown in place of the buffer when evaluation fails.
pub const ERROR_TEXT: &str = "Error";

/// Characters accepted from the keyboard and appended verbatim.
const INPUT_CHARS: &str = "0123456789+-*/().";

/// Why an expression could not be evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Nothing to evaluate.
    Empty,
    /// A character outside the expression alphabet.
    UnexpectedChar(char),
    /// A numeric literal such as `1.2.3`.
    InvalidNumber(String),
    /// A token where none fits, e.g. the `*` in `*2`.
    UnexpectedToken(Token),
    /// The expression stops mid-way, e.g. `2+`.
    UnexpectedEnd,
    /// `++` or `--`, which are not arithmetic operators.
    IncrementOperator(char),
    /// Nesting exceeds the evaluator's limit.
    TooDeep,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Empty => write!(f, "empty expression"),
            CalcError::UnexpectedChar(c) => write!(f, "unexpected character '{}'", c),
            CalcError::InvalidNumber(n) => write!(f, "invalid number '{}'", n),
            CalcError::UnexpectedToken(t) => write!(f, "unexpected token {:?}", t),
            CalcError::UnexpectedEnd => write!(f, "unexpected end of expression"),
            CalcError::IncrementOperator(c) => write!(f, "'{c}{c}' is not an operator"),
            CalcError::TooDeep => write!(f, "expression nested too deeply"),
        }
    }
}

/// Formats a result the way it is shown in the display.
///
/// Magnitudes below `1e-6` or from `1e21` up use exponent notation with an
/// explicit sign (`1e+21`, `1e-7`). Non-finite results read `Infinity`,
/// `-Infinity` and `NaN`, which the evaluator accepts back as numbers.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Avoid showing "-0"
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}

/// Messages handled by [`Calculator::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Append(String),
    Clear,
    Evaluate,
    Backspace,
}

/// Maps a typed character to a calculator message.
///
/// Digits, operators, parentheses and the decimal point append; `c`/`C`
/// clears; `=` evaluates. Anything else, including multi-character key
/// names, is ignored.
#[must_use]
pub fn message_for_text(text: &str) -> Option<Message> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match c {
        c if INPUT_CHARS.contains(c) => Some(Message::Append(c.to_string())),
        '=' => Some(Message::Evaluate),
        'c' | 'C' => Some(Message::Clear),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    buffer: String,
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn append(&mut self, token: &str) {
        self.buffer.push_str(token);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Replaces the buffer with its value, or with [`ERROR_TEXT`] on failure.
    /// An empty buffer stays empty.
    pub fn evaluate(&mut self) {
        if self.buffer.trim().is_empty() {
            return;
        }
        self.buffer = match parser::evaluate(&self.buffer) {
            Ok(value) => format_number(value),
            Err(err) => {
                tracing::debug!(expression = %self.buffer, %err, "evaluation failed");
                ERROR_TEXT.to_string()
            }
        };
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::Append(token) => self.append(&token),
            Message::Clear => self.clear(),
            Message::Evaluate => self.evaluate(),
            Message::Backspace => self.backspace(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluated(expression: &str) -> String {
        let mut calc = Calculator::new();
        calc.append(expression);
        calc.evaluate();
        calc.buffer().to_string()
    }

    #[test]
    fn evaluates_simple_sum() {
        assert_eq!(evaluated("2+2"), "4");
    }

    #[test]
    fn malformed_expression_shows_error() {
        assert_eq!(evaluated("2+"), ERROR_TEXT);
        assert_eq!(evaluated("((3)"), ERROR_TEXT);
        assert_eq!(evaluated("2--3"), ERROR_TEXT);
        assert_eq!(evaluated("2++3"), ERROR_TEXT);
    }

    #[test]
    fn non_finite_results_are_shown() {
        assert_eq!(evaluated("1/0"), "Infinity");
        assert_eq!(evaluated("-1/0"), "-Infinity");
        assert_eq!(evaluated("0/0"), "NaN");
        assert_eq!(evaluated("2- -3"), "5");

        let mut calc = Calculator::new();
        calc.append("1/0");
        calc.evaluate();
        calc.append("*-1");
        calc.evaluate();
        assert_eq!(calc.buffer(), "-Infinity");
    }

    #[test]
    fn extreme_magnitudes_use_exponents() {
        assert_eq!(evaluated("1000000000*1000000000000"), "1e+21");
        assert_eq!(evaluated("100000000000*1000000000"), "100000000000000000000");
        assert_eq!(evaluated("0.0000001"), "1e-7");
        assert_eq!(evaluated("0.000001"), "0.000001");
        assert_eq!(evaluated("-3/20000000"), "-1.5e-7");
        assert_eq!(format_number(1.5e300), "1.5e+300");

        let mut calc = Calculator::new();
        calc.append("1000000000*1000000000000");
        calc.evaluate();
        calc.append("*2");
        calc.evaluate();
        assert_eq!(calc.buffer(), "2e+21");
    }

    #[test]
    fn formats_results_like_a_display() {
        assert_eq!(evaluated("7/2"), "3.5");
        assert_eq!(evaluated("0.1+0.2"), "0.30000000000000004");
        assert_eq!(evaluated("-0*1"), "0");
        assert_eq!(evaluated("10/4*2"), "5");
    }

    #[test]
    fn append_then_clear_is_empty() {
        let mut calc = Calculator::new();
        calc.append("12");
        calc.append("+");
        calc.clear();
        assert!(calc.is_empty());
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut calc = Calculator::new();
        calc.backspace();
        assert_eq!(calc.buffer(), "");
        calc.append("12");
        calc.backspace();
        assert_eq!(calc.buffer(), "1");
    }

    #[test]
    fn evaluate_empty_buffer_keeps_it_empty() {
        let mut calc = Calculator::new();
        calc.evaluate();
        assert_eq!(calc.buffer(), "");
    }

    #[test]
    fn result_can_be_extended() {
        let mut calc = Calculator::new();
        calc.append("2+2");
        calc.evaluate();
        calc.handle(Message::Append("*3".into()));
        calc.handle(Message::Evaluate);
        assert_eq!(calc.buffer(), "12");
    }

    #[test]
    fn error_stays_until_cleared() {
        let mut calc = Calculator::new();
        calc.append("2+");
        calc.evaluate();
        calc.append("1");
        calc.evaluate();
        assert_eq!(calc.buffer(), ERROR_TEXT);
        calc.handle(Message::Clear);
        assert!(calc.is_empty());
    }

    #[test]
    fn key_text_mapping() {
        assert_eq!(message_for_text("7"), Some(Message::Append("7".into())));
        assert_eq!(message_for_text("("), Some(Message::Append("(".into())));
        assert_eq!(message_for_text("."), Some(Message::Append(".".into())));
        assert_eq!(message_for_text("c"), Some(Message::Clear));
        assert_eq!(message_for_text("C"), Some(Message::Clear));
        assert_eq!(message_for_text("="), Some(Message::Evaluate));
        assert_eq!(message_for_text("x"), None);
        assert_eq!(message_for_text("F1"), None);
        assert_eq!(message_for_text(""), None);
    }
}
