use std::{
    fmt::{self, Display},
    ops::{Add, Mul, Neg, Sub},
};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum RuntimeValue {
    Float(f64),
    Integer(i64),
}

impl RuntimeValue {
    pub fn to_float(&self) -> f64 {
        match self {
            Self::Float(x) => *x,
            Self::Integer(x) => *x as f64,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Float(x) => *x == 0.0,
            Self::Integer(x) => *x == 0,
        }
    }
}

// Integer arithmetic that would overflow falls back to floats instead of
// panicking; no crash may escape evaluation.

impl Add for RuntimeValue {
    type Output = RuntimeValue;
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => match a.checked_add(b) {
                Some(x) => Self::Integer(x),
                None => Self::Float(a as f64 + b as f64),
            },
            (a, b) => Self::Float(a.to_float() + b.to_float()),
        }
    }
}

impl Sub for RuntimeValue {
    type Output = RuntimeValue;
    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => match a.checked_sub(b) {
                Some(x) => Self::Integer(x),
                None => Self::Float(a as f64 - b as f64),
            },
            (a, b) => Self::Float(a.to_float() - b.to_float()),
        }
    }
}

impl Mul for RuntimeValue {
    type Output = RuntimeValue;
    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => match a.checked_mul(b) {
                Some(x) => Self::Integer(x),
                None => Self::Float(a as f64 * b as f64),
            },
            (a, b) => Self::Float(a.to_float() * b.to_float()),
        }
    }
}

impl Neg for RuntimeValue {
    type Output = RuntimeValue;
    fn neg(self) -> Self::Output {
        match self {
            Self::Integer(x) => match x.checked_neg() {
                Some(x) => Self::Integer(x),
                None => Self::Float(-(x as f64)),
            },
            Self::Float(x) => Self::Float(-x),
        }
    }
}

impl Display for RuntimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(x) => write!(f, "{}", x),
            Self::Integer(x) => write!(f, "{}", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_ops_stay_integer() {
        assert_eq!(
            RuntimeValue::Integer(2) + RuntimeValue::Integer(3),
            RuntimeValue::Integer(5)
        );
        assert_eq!(
            RuntimeValue::Integer(2) - RuntimeValue::Integer(5),
            RuntimeValue::Integer(-3)
        );
        assert_eq!(
            RuntimeValue::Integer(4) * RuntimeValue::Integer(3),
            RuntimeValue::Integer(12)
        );
    }

    #[test]
    fn test_mixed_ops_promote_to_float() {
        assert_eq!(
            RuntimeValue::Integer(1) + RuntimeValue::Float(0.5),
            RuntimeValue::Float(1.5)
        );
        assert_eq!(
            RuntimeValue::Float(2.0) * RuntimeValue::Integer(3),
            RuntimeValue::Float(6.0)
        );
    }

    #[test]
    fn test_overflow_falls_back_to_float() {
        let result = RuntimeValue::Integer(i64::MAX) + RuntimeValue::Integer(1);
        assert!(matches!(result, RuntimeValue::Float(_)));

        let result = -RuntimeValue::Integer(i64::MIN);
        assert!(matches!(result, RuntimeValue::Float(_)));
    }

    #[test]
    fn test_display_restringifies_cleanly() {
        assert_eq!(RuntimeValue::Integer(-12).to_string(), "-12");
        assert_eq!(RuntimeValue::Float(2.5).to_string(), "2.5");
        assert_eq!(RuntimeValue::Float(2.0).to_string(), "2");
    }

    #[test]
    fn test_is_zero() {
        assert!(RuntimeValue::Integer(0).is_zero());
        assert!(RuntimeValue::Float(0.0).is_zero());
        assert!(!RuntimeValue::Float(0.1).is_zero());
    }
}
