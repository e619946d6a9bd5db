use std::fmt::{self, Display, Formatter};

use ordered_float::OrderedFloat;

/// An argument or result of a memoized function.
///
/// This is the closed set of variants the key codec canonicalizes. Floats are
/// stored as [`OrderedFloat`] so that equality and hashing are total: all NaNs
/// are equal to each other and negative zero is equal to positive zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A float with total equality and hashing.
    Float(OrderedFloat<f64>),
    /// A string.
    Str(String),
    /// An ordered list of values.
    List(Vec<Value>),
}

impl Value {
    /// The payload if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The elements if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(v) => write!(f, "{}", v.0),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(OrderedFloat(v))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_equality_is_total() {
        assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::from(0.0), Value::from(-0.0));
        assert_ne!(Value::from(1.0), Value::from(2.0));
    }

    #[test]
    fn test_variants_are_distinct() {
        assert_ne!(Value::Int(2), Value::from(2.0));
        assert_ne!(Value::Int(2), Value::from("2"));
        assert_ne!(Value::Bool(true), Value::Int(1));
    }

    #[test]
    fn test_display() {
        let value = Value::List(vec![
            Value::Int(1),
            Value::from("two"),
            Value::List(vec![Value::Bool(false)]),
        ]);
        assert_eq!(value.to_string(), "[1, \"two\", [false]]");
    }
}
