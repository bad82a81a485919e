//! Visitor context: key/value attributes sent along with decision requests.
//!
//! The client never looks inside a context. It only asks it to export itself
//! as a JSON object, which becomes the `context` field of the request body.

use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::error::ContextParseError;

/// Anything that can be exported as an ordered map of scalar attributes.
pub trait Context {
    fn export(&self) -> Map<String, Value>;
}

impl Context for Map<String, Value> {
    fn export(&self) -> Map<String, Value> {
        self.clone()
    }
}

impl<C: Context + ?Sized> Context for &C {
    fn export(&self) -> Map<String, Value> {
        (**self).export()
    }
}

/// A scalar context attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContextValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ContextValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&ContextValue> for Value {
    fn from(value: &ContextValue) -> Self {
        match value {
            ContextValue::Bool(b) => Self::Bool(*b),
            ContextValue::Integer(i) => Self::Number((*i).into()),
            // Non-finite floats have no JSON representation
            ContextValue::Float(f) => Number::from_f64(*f).map_or(Self::Null, Self::Number),
            ContextValue::String(s) => Self::String(s.clone()),
        }
    }
}

impl FromStr for ContextValue {
    type Err = std::convert::Infallible;

    /// Booleans and numbers are recognised only when they print back to the
    /// exact input text, so `01234`, `1.10` or `+5` stay strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(b) = s.parse::<bool>() {
            return Ok(Self::Bool(b));
        }
        if let Some(i) = s.parse::<i64>().ok().filter(|i| i.to_string() == s) {
            return Ok(Self::Integer(i));
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() && s.contains('.') && f.to_string() == s => Ok(Self::Float(f)),
            _ => Ok(Self::String(s.to_string())),
        }
    }
}

/// Insertion-ordered visitor attributes.
///
/// ```ignore
/// let context = VisitorContext::new()
///     .with("plan", "premium")
///     .with("age", 31)
///     .with("beta", true);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitorContext {
    entries: Vec<(String, ContextValue)>,
}

impl VisitorContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, replacing any earlier value for the same key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a context from `key=value` pairs, as given on the command line.
    ///
    /// # Errors
    /// Returns an error for an entry without `=` or with an empty key.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ContextParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut context = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| ContextParseError::MissingSeparator(pair.to_string()))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(ContextParseError::EmptyKey(pair.to_string()));
            }
            let value = match value.parse::<ContextValue>() {
                Ok(v) => v,
                Err(never) => match never {},
            };
            context.insert(key, value);
        }
        Ok(context)
    }
}

impl Context for VisitorContext {
    fn export(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(v)))
            .collect()
    }
}
