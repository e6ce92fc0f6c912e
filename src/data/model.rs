use std::fmt;

use crate::error::{DatasetError, Result};

// ---------------------------------------------------------------------------
// ValueKind – the type tag of a data point
// ---------------------------------------------------------------------------

/// The closed set of scalar kinds a data point can hold.
///
/// Tags are stable: `Integer = 0`, `Float = 1`, `Text = 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ValueKind {
    Integer = 0,
    Float = 1,
    Text = 2,
}

impl ValueKind {
    pub const ALL: [ValueKind; 3] = [ValueKind::Integer, ValueKind::Float, ValueKind::Text];

    /// Numeric tag of this kind.
    pub fn tag(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ValueKind {
    type Error = DatasetError;

    fn try_from(tag: i32) -> Result<Self> {
        match tag {
            0 => Ok(ValueKind::Integer),
            1 => Ok(ValueKind::Float),
            2 => Ok(ValueKind::Text),
            other => Err(DatasetError::UnknownKind(other)),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

// ---------------------------------------------------------------------------
// RawValue – borrowed source scalar handed in by callers
// ---------------------------------------------------------------------------

/// A borrowed scalar that gets deep-copied into a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Integer(i32),
    Float(f32),
    Text(&'a str),
}

impl RawValue<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            RawValue::Integer(_) => ValueKind::Integer,
            RawValue::Float(_) => ValueKind::Float,
            RawValue::Text(_) => ValueKind::Text,
        }
    }
}

impl From<i32> for RawValue<'_> {
    fn from(v: i32) -> Self {
        RawValue::Integer(v)
    }
}

impl From<f32> for RawValue<'_> {
    fn from(v: f32) -> Self {
        RawValue::Float(v)
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(v: &'a str) -> Self {
        RawValue::Text(v)
    }
}

// ---------------------------------------------------------------------------
// Value – one owned scalar
// ---------------------------------------------------------------------------

/// An owned scalar. The variant is the kind, so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i32),
    Float(f32),
    Text(String),
}

impl Value {
    /// Deep-copy a raw scalar into freshly allocated storage.
    ///
    /// Text is copied in full; its buffer is reserved with
    /// `try_reserve_exact` so an allocation failure comes back as
    /// [`DatasetError::Allocation`] instead of aborting.
    pub fn copy_from(raw: RawValue<'_>) -> Result<Self> {
        match raw {
            RawValue::Integer(i) => Ok(Value::Integer(i)),
            RawValue::Float(v) => Ok(Value::Float(v)),
            RawValue::Text(s) => {
                let mut buf = String::new();
                buf.try_reserve_exact(s.len())?;
                buf.push_str(s);
                Ok(Value::Text(buf))
            }
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Borrow this value as a raw scalar, e.g. to copy it elsewhere.
    pub fn as_raw(&self) -> RawValue<'_> {
        match self {
            Value::Integer(i) => RawValue::Integer(*i),
            Value::Float(v) => RawValue::Float(*v),
            Value::Text(s) => RawValue::Text(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// DataPoint – a kind tag plus an optional owned value
// ---------------------------------------------------------------------------

/// A tagged scalar. A point without a value is "empty": that is how fresh
/// dataset slots look, and such points are never handed out by
/// [`TypedDataset::get`](super::dataset::TypedDataset::get).
///
/// Invariant: if `value` is present, `value.kind() == kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    kind: ValueKind,
    value: Option<Value>,
}

impl DataPoint {
    /// Build a standalone point holding a deep copy of `raw`.
    ///
    /// Fails if `raw` is not of `kind` or if the copy cannot be allocated.
    pub fn try_new(kind: ValueKind, raw: RawValue<'_>) -> Result<Self> {
        if raw.kind() != kind {
            return Err(DatasetError::RawKindMismatch {
                expected: kind,
                found: raw.kind(),
            });
        }
        let value = Value::copy_from(raw)?;
        Ok(DataPoint {
            kind,
            value: Some(value),
        })
    }

    /// Like [`DataPoint::try_new`], with the kind given as a numeric tag.
    pub fn from_tag(tag: i32, raw: RawValue<'_>) -> Result<Self> {
        Self::try_new(ValueKind::try_from(tag)?, raw)
    }

    /// A point of `kind` carrying no value.
    pub fn empty(kind: ValueKind) -> Self {
        DataPoint { kind, value: None }
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self.value {
            Some(Value::Integer(i)) => Some(i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self.value {
            Some(Value::Float(v)) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            Some(Value::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Swap in a new value and kind, dropping the old value.
    pub(crate) fn replace(&mut self, value: Value) {
        self.kind = value.kind();
        self.value = Some(value);
    }
}

/// Fresh slot state: kind `Integer`, no value. A placeholder, not zero.
impl Default for DataPoint {
    fn default() -> Self {
        DataPoint::empty(ValueKind::Integer)
    }
}

impl From<Value> for DataPoint {
    fn from(value: Value) -> Self {
        DataPoint {
            kind: value.kind(),
            value: Some(value),
        }
    }
}

impl fmt::Display for DataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}({v})", self.kind),
            None => write!(f, "{}(<empty>)", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_round_trip() {
        for kind in ValueKind::ALL {
            assert_eq!(ValueKind::try_from(kind.tag()), Ok(kind));
        }
        assert_eq!(ValueKind::try_from(3), Err(DatasetError::UnknownKind(3)));
        assert_eq!(ValueKind::try_from(-1), Err(DatasetError::UnknownKind(-1)));
    }

    #[test]
    fn point_copies_text() {
        let mut source = String::from("hello");
        let point = DataPoint::try_new(ValueKind::Text, RawValue::Text(&source)).unwrap();
        source.push_str(" world");
        assert_eq!(point.as_text(), Some("hello"));
        assert_eq!(point.kind(), ValueKind::Text);
    }

    #[test]
    fn point_rejects_mismatched_raw() {
        let err = DataPoint::try_new(ValueKind::Integer, RawValue::Float(1.5)).unwrap_err();
        assert_eq!(
            err,
            DatasetError::RawKindMismatch {
                expected: ValueKind::Integer,
                found: ValueKind::Float,
            }
        );
    }

    #[test]
    fn point_from_unknown_tag_fails() {
        assert_eq!(
            DataPoint::from_tag(7, RawValue::Integer(1)),
            Err(DatasetError::UnknownKind(7))
        );
        let point = DataPoint::from_tag(1, RawValue::Float(1.62)).unwrap();
        assert_eq!(point.as_float(), Some(1.62));
    }

    #[test]
    fn default_point_is_empty_integer() {
        let point = DataPoint::default();
        assert_eq!(point.kind(), ValueKind::Integer);
        assert!(point.is_empty());
        assert_eq!(point.as_integer(), None);
        assert_eq!(point.to_string(), "integer(<empty>)");
    }

    #[test]
    fn display_shows_kind_and_value() {
        let point = DataPoint::from(Value::Text("abc".into()));
        assert_eq!(point.to_string(), "text(abc)");
        assert_eq!(Value::Integer(-4).to_string(), "-4");
    }
}
