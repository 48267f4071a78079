// SPDX-License-Identifier: MPL-2.0
//! Tokenizer for calculator expressions.

use super::CalcError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Splits `input` into tokens. Whitespace is ignored.
///
/// Besides digits, numbers may carry an exponent (`1e+21`) and the words
/// `Infinity` and `NaN` are numbers, so a displayed result can be extended.
/// Two identical signs written back to back (`2--3`) are an increment or
/// decrement operator, which has no meaning here and is rejected.
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = input[pos..].chars().next() {
        let token = match c {
            c if c.is_whitespace() => {
                pos += c.len_utf8();
                continue;
            }
            '0'..='9' | '.' => {
                let end = number_end(input, pos);
                let literal = &input[pos..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| CalcError::InvalidNumber(literal.to_string()))?;
                tokens.push(Token::Number(value));
                pos = end;
                continue;
            }
            c if c.is_ascii_alphabetic() => {
                let end = input[pos..]
                    .find(|ch: char| !ch.is_ascii_alphabetic())
                    .map_or(input.len(), |len| pos + len);
                let value = match &input[pos..end] {
                    "Infinity" => f64::INFINITY,
                    "NaN" => f64::NAN,
                    _ => return Err(CalcError::UnexpectedChar(c)),
                };
                tokens.push(Token::Number(value));
                pos = end;
                continue;
            }
            '+' | '-' => {
                if input[pos + 1..].starts_with(c) {
                    return Err(CalcError::IncrementOperator(c));
                }
                if c == '+' {
                    Token::Plus
                } else {
                    Token::Minus
                }
            }
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => return Err(CalcError::UnexpectedChar(other)),
        };
        pos += 1;
        tokens.push(token);
    }

    Ok(tokens)
}

/// Byte offset just past the numeric literal starting at `start`.
fn number_end(input: &str, start: usize) -> usize {
    let bytes = input.as_bytes();
    let mut end = start;
    while bytes
        .get(end)
        .is_some_and(|b| b.is_ascii_digit() || *b == b'.')
    {
        end += 1;
    }
    // An exponent only counts when digits follow it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        if bytes.get(exponent).is_some_and(u8::is_ascii_digit) {
            while bytes.get(exponent).is_some_and(u8::is_ascii_digit) {
                exponent += 1;
            }
            end = exponent;
        }
    }
    end
}
