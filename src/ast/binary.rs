use thiserror::Error;

use crate::runtime::values::RuntimeValue;

#[derive(Error, Debug, Clone)]
pub enum ASTError {
    #[error("Cannot divide {0:?} by zero.")]
    DivisionByZero(RuntimeValue),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum BinaryOperator {
    Sub,
    Add,
    Mul,
    Div,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '/' => Some(Self::Div),
            '*' => Some(Self::Mul),
            _ => None,
        }
    }

    pub fn to_symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Div => '/',
            Self::Mul => '*',
        }
    }

    /// Applies the operator to two already-reduced values. Addition,
    /// subtraction and multiplication keep the natural numeric type of
    /// their operands; division always yields a float quotient and a zero
    /// divisor is an error rather than an infinity.
    pub fn handle(
        &self,
        left: RuntimeValue,
        right: RuntimeValue,
    ) -> Result<RuntimeValue, ASTError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right.is_zero() {
                    Err(ASTError::DivisionByZero(left))
                } else {
                    Ok(RuntimeValue::Float(left.to_float() / right.to_float()))
                }
            }
        }
    }
}
