//! Formattable argument values

use std::fmt;

/// Fractional digits used for floats unless configured otherwise
pub const DEFAULT_FLOAT_PRECISION: usize = 6;

/// A single format argument
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Inserted verbatim
    Text(String),
    /// Rendered as plain decimal digits
    Integer(i128),
    /// Rendered in fixed notation with a configurable number of fractional digits
    Float(f64),
}

impl Value {
    /// Convert the value to the text that replaces a placeholder
    pub fn to_text(&self, precision: usize) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => float_to_text(*f, precision),
        }
    }
}

fn float_to_text(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() { "-inf" } else { "inf" }.to_string()
    } else {
        format!("{:.*}", precision, value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(DEFAULT_FLOAT_PRECISION))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

macro_rules! integer_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Value::Integer(i as i128)
                }
            }
        )*
    };
}

integer_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<i128> for Value {
    fn from(i: i128) -> Self {
        Value::Integer(i)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f as f64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(Value::from("3").to_text(6), "3");
        assert_eq!(Value::from(String::from(" {1} ")).to_text(6), " {1} ");
    }

    #[test]
    fn test_integers_render_plain() {
        assert_eq!(Value::from(1).to_text(6), "1");
        assert_eq!(Value::from(-42i64).to_text(6), "-42");
        assert_eq!(Value::from(u64::MAX).to_text(6), "18446744073709551615");
        assert_eq!(Value::from(0u8).to_text(6), "0");
    }

    #[test]
    fn test_floats_use_six_digits_by_default() {
        assert_eq!(Value::from(2.0).to_text(DEFAULT_FLOAT_PRECISION), "2.000000");
        assert_eq!(Value::from(-0.5).to_text(DEFAULT_FLOAT_PRECISION), "-0.500000");
        assert_eq!(Value::from(1.0e10).to_text(DEFAULT_FLOAT_PRECISION), "10000000000.000000");
        assert_eq!(Value::from(0.1234567).to_text(DEFAULT_FLOAT_PRECISION), "0.123457");
    }

    #[test]
    fn test_float_precision() {
        assert_eq!(Value::from(2.5).to_text(2), "2.50");
        assert_eq!(Value::from(2.75f32).to_text(0), "3");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(Value::from(f64::NAN).to_text(6), "nan");
        assert_eq!(Value::from(f64::INFINITY).to_text(6), "inf");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_text(6), "-inf");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(3.0).to_string(), "3.000000");
        assert_eq!(Value::from("x").to_string(), "x");
    }
}
