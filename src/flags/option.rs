//! Flag definitions — one record per registered flag.

use std::fmt;
use std::marker::PhantomData;

/// Declared type of a flag. Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Signed 32-bit integer.
    Integer,
    /// Unsigned 32-bit integer.
    UnsignedInteger,
    /// Owned text.
    String,
}

impl FlagKind {
    /// Type label used in usage output.
    pub fn label(self) -> &'static str {
        match self {
            FlagKind::Integer => "int",
            FlagKind::UnsignedInteger => "unsigned int",
            FlagKind::String => "string",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A typed flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Int(i32),
    Uint(u32),
    Str(String),
}

impl FlagValue {
    /// The kind this value belongs to.
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::Int(_) => FlagKind::Integer,
            FlagValue::Uint(_) => FlagKind::UnsignedInteger,
            FlagValue::Str(_) => FlagKind::String,
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Int(v) => write!(f, "{}", v),
            FlagValue::Uint(v) => write!(f, "{}", v),
            FlagValue::Str(s) => f.write_str(s),
        }
    }
}

/// A single registered flag.
///
/// The registry owns the live value; callers read it back through a
/// [`Flag`] handle or via [`FlagOption::value`].
#[derive(Debug, Clone)]
pub struct FlagOption {
    name: String,
    description: String,
    default: FlagValue,
    value: FlagValue,
    used: bool,
}

impl FlagOption {
    pub(crate) fn new(name: &str, default: FlagValue, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            value: default.clone(),
            default,
            used: false,
        }
    }

    pub fn kind(&self) -> FlagKind {
        self.default.kind()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn default_value(&self) -> &FlagValue {
        &self.default
    }

    /// Current value: the default until a parse or `set` binds one.
    pub fn value(&self) -> &FlagValue {
        &self.value
    }

    /// Whether a value was bound to this flag by the last parse (or `set`).
    pub fn used(&self) -> bool {
        self.used
    }

    pub(crate) fn restore_default(&mut self) {
        self.value = self.default.clone();
    }

    pub(crate) fn reset_used(&mut self) {
        self.used = false;
    }

    pub(crate) fn bind(&mut self, value: FlagValue) {
        debug_assert_eq!(value.kind(), self.kind());
        self.value = value;
        self.used = true;
    }
}

/// Rust types that can back a flag.
pub trait FlagType: Sized {
    const KIND: FlagKind;

    fn into_value(self) -> FlagValue;

    fn from_value(value: &FlagValue) -> Option<Self>;
}

impl FlagType for i32 {
    const KIND: FlagKind = FlagKind::Integer;

    fn into_value(self) -> FlagValue {
        FlagValue::Int(self)
    }

    fn from_value(value: &FlagValue) -> Option<Self> {
        match value {
            FlagValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FlagType for u32 {
    const KIND: FlagKind = FlagKind::UnsignedInteger;

    fn into_value(self) -> FlagValue {
        FlagValue::Uint(self)
    }

    fn from_value(value: &FlagValue) -> Option<Self> {
        match value {
            FlagValue::Uint(v) => Some(*v),
            _ => None,
        }
    }
}

impl FlagType for String {
    const KIND: FlagKind = FlagKind::String;

    fn into_value(self) -> FlagValue {
        FlagValue::Str(self)
    }

    fn from_value(value: &FlagValue) -> Option<Self> {
        match value {
            FlagValue::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Typed handle returned by registration; read it back with
/// [`FlagSet::get`](crate::FlagSet::get).
#[derive(Debug)]
pub struct Flag<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Flag<T> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// Registration index of the flag.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for Flag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Flag<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_option_starts_at_default_and_unused() {
        let opt = FlagOption::new("port", FlagValue::Uint(8080), "Listen port");
        assert_eq!(opt.kind(), FlagKind::UnsignedInteger);
        assert_eq!(opt.value(), &FlagValue::Uint(8080));
        assert!(!opt.used());
    }

    #[test]
    fn bind_sets_used_and_restore_keeps_it() {
        let mut opt = FlagOption::new("name", FlagValue::Str("a".into()), "");
        opt.bind(FlagValue::Str("b".into()));
        assert_eq!(opt.value(), &FlagValue::Str("b".into()));
        assert!(opt.used());

        opt.restore_default();
        assert_eq!(opt.value(), &FlagValue::Str("a".into()));
        assert!(opt.used());
    }

    #[test]
    fn flag_type_rejects_other_kinds() {
        assert_eq!(i32::from_value(&FlagValue::Int(-3)), Some(-3));
        assert_eq!(i32::from_value(&FlagValue::Uint(3)), None);
        assert_eq!(String::from_value(&FlagValue::Int(1)), None);
    }
}
