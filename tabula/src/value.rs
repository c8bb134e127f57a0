//! Field values and the `Record` trait used to read them from rows.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A single field value read out of a row.
///
/// Values know how to order themselves against values of the same kind
/// (numbers numerically, strings lexicographically) and how to display
/// themselves as cell text.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Missing or null field
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Natural ordering between two values of comparable kinds.
    ///
    /// Returns `None` for values of different kinds (numbers compare with
    /// each other regardless of int/float), for `Null` and for NaN.
    ///
    /// Integers and floats compare exactly, without rounding the integer to
    /// `f64`. Strings compare by bytes, i.e. by code point; this differs
    /// from UTF-16 code unit order only between characters above U+FFFF
    /// and those in U+E000..=U+FFFF.
    pub fn partial_compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => (!b.is_nan()).then(|| cmp_int_float(*a, *b)),
            (Value::Float(a), Value::Int(b)) => {
                (!a.is_nan()).then(|| cmp_int_float(*b, *a).reverse())
            }
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Total ordering used by the sort comparator.
    ///
    /// Comparable values use their natural ordering. NaN sorts by sign,
    /// after every number when positive and before every number when
    /// negative, as `f64::total_cmp` places it. Everything else falls back
    /// to a fixed kind rank. The fallback order is not part of the public
    /// contract.
    pub fn total_compare(&self, other: &Value) -> Ordering {
        if let Some(ordering) = self.partial_compare(other) {
            return ordering;
        }
        match (self, other) {
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Int(_), Value::Float(b)) => nan_side(*b).reverse(),
            (Value::Float(a), Value::Int(_)) => nan_side(*a),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Str(_) => 3,
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the string content, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer content, if this is an integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

/// Exact ordering of an integer against a non-NaN float.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    // 2^63; every float in [-2^63, 2^63) truncates to a representable i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }
    let whole = f.trunc() as i64;
    i.cmp(&whole).then_with(|| {
        let frac = f.fract();
        if frac > 0.0 {
            Ordering::Less
        } else if frac < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

/// Where a NaN sits relative to any number.
fn nan_side(nan: f64) -> Ordering {
    if nan.is_sign_negative() {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i.into())
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::Str(s.clone()),
            other => Value::Str(other.to_string()),
        }
    }
}

/// A row record whose fields can be read by name.
///
/// Column descriptors select fields through their `data_index`; the sort
/// engine and cell rendering both go through [`Record::field`].
///
/// # Example
///
/// ```ignore
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// impl Record for User {
///     fn field(&self, name: &str) -> Value {
///         match name {
///             "id" => self.id.into(),
///             "name" => self.name.as_str().into(),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Read the named field. Unknown fields return `Value::Null`.
    fn field(&self, name: &str) -> Value;
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Value {
        self.get(name).map(Value::from).unwrap_or_default()
    }
}

impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Value {
        self.get(name).map(Value::from).unwrap_or_default()
    }
}

impl Record for HashMap<String, Value> {
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}
