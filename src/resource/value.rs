//! Property values of a resource.

use crate::error::{OslcError, Result};
use oxrdf::{BlankNode, Literal, NamedNode, Term, TermRef};
use std::fmt;

/// The object of one statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    /// A literal, by its lexical form
    Literal(String),
    /// A link to another resource
    Resource(String),
    /// A link to an anonymous node, by its blank node id
    Blank(String),
}

impl Value {
    /// Create a link value
    pub fn uri(uri: impl Into<String>) -> Self {
        Value::Resource(uri.into())
    }

    /// Create a literal value
    pub fn literal(value: impl Into<String>) -> Self {
        Value::Literal(value.into())
    }

    /// Lexical form: the literal text, the linked URI, or the blank node id
    pub fn as_str(&self) -> &str {
        match self {
            Value::Literal(v) | Value::Resource(v) | Value::Blank(v) => v,
        }
    }

    /// Check if this value links to another node
    pub fn is_link(&self) -> bool {
        !matches!(self, Value::Literal(_))
    }

    pub(crate) fn from_term(term: TermRef<'_>) -> Self {
        match term {
            TermRef::NamedNode(node) => Value::Resource(node.as_str().to_string()),
            TermRef::BlankNode(node) => Value::Blank(node.as_str().to_string()),
            TermRef::Literal(literal) => Value::Literal(literal.value().to_string()),
            #[allow(unreachable_patterns)]
            other => Value::Literal(other.to_string()),
        }
    }

    pub(crate) fn to_term(&self) -> Result<Term> {
        Ok(match self {
            Value::Literal(v) => Literal::new_simple_literal(v.as_str()).into(),
            Value::Resource(v) => NamedNode::new(v.as_str())?.into(),
            Value::Blank(v) => BlankNode::new(v.as_str())
                .map_err(|e| OslcError::internal(format!("Invalid blank node id {}: {}", v, e)))?
                .into(),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Literal(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Literal(value)
    }
}

/// All values of one property: a single value, or several when the property repeats.
///
/// RDF properties are unordered, so the order of [`PropertyValue::Multiple`] is not
/// guaranteed to match insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Exactly one statement matched
    Single(Value),
    /// Two or more statements matched
    Multiple(Vec<Value>),
}

impl PropertyValue {
    /// Collapse a list of values: `None` when empty, `Single` for one, `Multiple` otherwise
    pub fn from_values(mut values: Vec<Value>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(PropertyValue::Single),
            _ => Some(PropertyValue::Multiple(values)),
        }
    }

    /// The first value
    pub fn first(&self) -> Option<&Value> {
        match self {
            PropertyValue::Single(v) => Some(v),
            PropertyValue::Multiple(values) => values.first(),
        }
    }

    /// Lexical form of the first value
    pub fn as_str(&self) -> Option<&str> {
        self.first().map(Value::as_str)
    }

    /// All values as a slice
    pub fn values(&self) -> &[Value] {
        match self {
            PropertyValue::Single(v) => std::slice::from_ref(v),
            PropertyValue::Multiple(values) => values,
        }
    }

    /// All values, consuming self
    pub fn into_values(self) -> Vec<Value> {
        match self {
            PropertyValue::Single(v) => vec![v],
            PropertyValue::Multiple(values) => values,
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        PropertyValue::Single(value)
    }
}

impl From<Vec<Value>> for PropertyValue {
    fn from(values: Vec<Value>) -> Self {
        PropertyValue::Multiple(values)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Single(value.into())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Single(value.into())
    }
}
