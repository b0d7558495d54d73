//! FILENAME: engine/src/operators.rs
//! PURPOSE: The twelve binary operators, their precedence and typed semantics.
//! CONTEXT: Both operands must carry the same value type. Operand text is
//! cast only here, at the point of use; casting failures are reported as
//! typecast errors naming the offending text.
//!
//! PRECEDENCE (higher binds tighter):
//!   OR 20 < AND 30 < (= !=) 40 < (> < >= <=) 50 < (+ -) 120 < (* /) 130
//! The opening bracket sits at 10 on the converter's stack.

use risk_parser::{Token, ValueType};

use crate::error::{CalcErrorReason, EvalError};

/// Stack weight of an opening bracket.
pub const LPAREN_PRECEDENCE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Or,
    And,
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        let op = match symbol {
            "OR" => Operator::Or,
            "AND" => Operator::And,
            "=" => Operator::Equal,
            "!=" => Operator::NotEqual,
            ">" => Operator::Greater,
            "<" => Operator::Less,
            ">=" => Operator::GreaterEqual,
            "<=" => Operator::LessEqual,
            "+" => Operator::Add,
            "-" => Operator::Subtract,
            "*" => Operator::Multiply,
            "/" => Operator::Divide,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Or => "OR",
            Operator::And => "AND",
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::GreaterEqual => ">=",
            Operator::LessEqual => "<=",
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Or => 20,
            Operator::And => 30,
            Operator::Equal | Operator::NotEqual => 40,
            Operator::Greater | Operator::Less | Operator::GreaterEqual | Operator::LessEqual => 50,
            Operator::Add | Operator::Subtract => 120,
            Operator::Multiply | Operator::Divide => 130,
        }
    }

    /// Applies the operator to `x` (left) and `y` (right).
    pub fn apply(self, x: &Token, y: &Token) -> Result<Token, EvalError> {
        if x.value_type != y.value_type {
            return Err(EvalError::calculation(
                CalcErrorReason::DifferentTypes,
                format!("'{}' '{}'", x.text, y.text),
            ));
        }

        match (self, x.value_type) {
            (Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide, ValueType::Number) => {
                let (a, b) = cast_numbers(x, y)?;
                let value = match self {
                    Operator::Add => a + b,
                    Operator::Subtract => a - b,
                    Operator::Multiply => a * b,
                    _ => {
                        if b == 0.0 {
                            return Err(EvalError::calculation(
                                CalcErrorReason::DivisionByZero,
                                format!("'{}' '{}'", x.text, y.text),
                            ));
                        }
                        a / b
                    }
                };
                Ok(Token::number(value))
            }

            (Operator::Greater | Operator::Less | Operator::GreaterEqual | Operator::LessEqual, ValueType::Number) => {
                let (a, b) = cast_numbers(x, y)?;
                let value = match self {
                    Operator::Greater => a > b,
                    Operator::Less => a < b,
                    Operator::GreaterEqual => a >= b,
                    _ => a <= b,
                };
                Ok(Token::boolean(value))
            }

            (Operator::Equal | Operator::NotEqual, ValueType::Number) => {
                let (a, b) = cast_numbers(x, y)?;
                Ok(Token::boolean((a == b) == (self == Operator::Equal)))
            }

            (Operator::Equal | Operator::NotEqual, ValueType::Bool) => {
                let (a, b) = cast_bools(x, y)?;
                Ok(Token::boolean((a == b) == (self == Operator::Equal)))
            }

            (Operator::And, ValueType::Bool) => {
                let (a, b) = cast_bools(x, y)?;
                Ok(Token::boolean(a && b))
            }

            (Operator::Or, ValueType::Bool) => {
                let (a, b) = cast_bools(x, y)?;
                Ok(Token::boolean(a || b))
            }

            (_, value_type) => Err(EvalError::calculation(
                CalcErrorReason::OperatorNotDefined,
                format!("'{}'", value_type),
            )),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Casts token text to a float.
pub fn cast_number(text: &str) -> Result<f64, EvalError> {
    text.parse::<f64>().map_err(|_| {
        EvalError::calculation(
            CalcErrorReason::TypeCast,
            format!("'{}' failed cast to '{}'", text, ValueType::Number),
        )
    })
}

/// Casts token text to a boolean. Accepts 1, t, T, TRUE, true, True and
/// their false counterparts 0, f, F, FALSE, false, False.
pub fn cast_bool(text: &str) -> Result<bool, EvalError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(EvalError::calculation(
            CalcErrorReason::TypeCast,
            format!("'{}' failed cast to '{}'", text, ValueType::Bool),
        )),
    }
}

fn cast_numbers(x: &Token, y: &Token) -> Result<(f64, f64), EvalError> {
    Ok((cast_number(&x.text)?, cast_number(&y.text)?))
}

fn cast_bools(x: &Token, y: &Token) -> Result<(bool, bool), EvalError> {
    Ok((cast_bool(&x.text)?, cast_bool(&y.text)?))
}
