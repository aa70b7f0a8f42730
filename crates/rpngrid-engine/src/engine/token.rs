//! Postfix tokenization.
//!
//! A cell's text is split on whitespace. Each piece is either one of the four
//! binary operators or an operand (numeric literal or cell reference).

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(s: &str) -> Option<Operator> {
        match s {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    /// Apply as `left OP right`. May return NaN or an infinity.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    Operator(Operator),
    Operand(String),
}

impl Token {
    pub fn operand(text: &str) -> Token {
        Token::Operand(text.to_string())
    }
}

/// Split raw cell text into postfix tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .map(|piece| match Operator::from_symbol(piece) {
            Some(op) => Token::Operator(op),
            None => Token::operand(piece),
        })
        .collect()
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$")
            .expect("numeric literal regex must compile")
    })
}

/// Parse a strict numeric literal.
///
/// Accepts an optional sign, digits with an optional fraction and an optional
/// exponent. Words like `inf` or `NaN` and literals that overflow are rejected.
/// The first character need not be a digit: `-3`, `+2` and `.5` are literals.
pub fn parse_number(token: &str) -> Option<f64> {
    if !number_re().is_match(token) {
        return None;
    }
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}
