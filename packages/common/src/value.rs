//! Dynamic property values.
//!
//! Components receive loosely-typed properties: strings, numbers, flags, nested
//! mappings, already-resolved nodes and lists of any of these. `PropValue` is the
//! closed set of shapes the engine understands.
//!
//! ## JSON form
//!
//! Plain JSON maps onto the obvious variants. The three engine-only variants use
//! marker objects so they survive a round trip:
//!
//! - `{"$node": { ...ResolvedNode... }}`
//! - `{"$component": "Button"}`
//! - `{"$handler": "onClick"}`

use crate::error::CommonError;
use crate::node::{ComponentId, ResolvedNode};
use crate::props::Props;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value as Json};

const NODE_MARKER: &str = "$node";
const COMPONENT_MARKER: &str = "$component";
const HANDLER_MARKER: &str = "$handler";

/// A single property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub enum PropValue {
    /// Absent (null / undefined)
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<PropValue>),
    /// Flat property mapping
    Object(Props),
    /// Already-resolved node, passed through untouched
    Node(Box<ResolvedNode>),
    /// Reference to a registered component (usable as `as`)
    Component(ComponentId),
    /// Opaque event handler owned by the host renderer
    Handler(String),
}

impl PropValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }

    /// Truthiness as the markup layer sees it: `null`, `false`, `0`, `NaN` and
    /// the empty string are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Null => false,
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::String(s) => !s.is_empty(),
            PropValue::Array(_)
            | PropValue::Object(_)
            | PropValue::Node(_)
            | PropValue::Component(_)
            | PropValue::Handler(_) => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_props(&self) -> Option<&Props> {
        match self {
            PropValue::Object(props) => Some(props),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&ResolvedNode> {
        match self {
            PropValue::Node(node) => Some(node),
            _ => None,
        }
    }

    /// String form used for class tokens and derived keys.
    ///
    /// Only scalars have one; `None` for everything else.
    pub fn to_token(&self) -> Option<String> {
        match self {
            PropValue::String(s) => Some(s.clone()),
            PropValue::Number(n) => Some(format_number(*n)),
            PropValue::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// List identity for this value. Only non-empty strings and numbers qualify.
    pub fn to_key(&self) -> Option<String> {
        match self {
            PropValue::String(_) | PropValue::Number(_) => self.to_token(),
            _ => None,
        }
        .filter(|key| !key.is_empty())
    }

    /// Short name of the value's shape, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            PropValue::Null => "null",
            PropValue::Bool(_) => "bool",
            PropValue::Number(_) => "number",
            PropValue::String(_) => "string",
            PropValue::Array(_) => "array",
            PropValue::Object(_) => "object",
            PropValue::Node(_) => "node",
            PropValue::Component(_) => "component",
            PropValue::Handler(_) => "handler",
        }
    }

    pub fn handler(name: impl Into<String>) -> Self {
        PropValue::Handler(name.into())
    }
}

/// Format a number without a trailing `.0` for integral values
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl Default for PropValue {
    fn default() -> Self {
        PropValue::Null
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::String(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::String(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(n as f64)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        PropValue::Number(n as f64)
    }
}

impl From<u32> for PropValue {
    fn from(n: u32) -> Self {
        PropValue::Number(n as f64)
    }
}

impl From<usize> for PropValue {
    fn from(n: usize) -> Self {
        PropValue::Number(n as f64)
    }
}

impl From<Props> for PropValue {
    fn from(props: Props) -> Self {
        PropValue::Object(props)
    }
}

impl From<ResolvedNode> for PropValue {
    fn from(node: ResolvedNode) -> Self {
        PropValue::Node(Box::new(node))
    }
}

impl From<ComponentId> for PropValue {
    fn from(id: ComponentId) -> Self {
        PropValue::Component(id)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(values: Vec<T>) -> Self {
        PropValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(PropValue::Null)
    }
}

impl From<PropValue> for Json {
    fn from(value: PropValue) -> Self {
        match value {
            PropValue::Null => Json::Null,
            PropValue::Bool(b) => Json::Bool(b),
            PropValue::Number(n) => Number::from_f64(n)
                .map(|num| {
                    if n.fract() == 0.0 && n.abs() < 1e15 {
                        Json::Number(Number::from(n as i64))
                    } else {
                        Json::Number(num)
                    }
                })
                .unwrap_or(Json::Null),
            PropValue::String(s) => Json::String(s),
            PropValue::Array(values) => Json::Array(values.into_iter().map(Json::from).collect()),
            PropValue::Object(props) => Json::Object(
                props
                    .into_iter()
                    .map(|(key, value)| (key, Json::from(value)))
                    .collect(),
            ),
            PropValue::Node(node) => {
                let inner = serde_json::to_value(&*node).unwrap_or(Json::Null);
                marker(NODE_MARKER, inner)
            }
            PropValue::Component(id) => marker(COMPONENT_MARKER, Json::String(id.to_string())),
            PropValue::Handler(name) => marker(HANDLER_MARKER, Json::String(name)),
        }
    }
}

fn marker(name: &str, inner: Json) -> Json {
    let mut map = Map::new();
    map.insert(name.to_string(), inner);
    Json::Object(map)
}

impl TryFrom<Json> for PropValue {
    type Error = CommonError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        Ok(match json {
            Json::Null => PropValue::Null,
            Json::Bool(b) => PropValue::Bool(b),
            Json::Number(n) => PropValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => PropValue::String(s),
            Json::Array(values) => PropValue::Array(
                values
                    .into_iter()
                    .map(PropValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Json::Object(mut map) => {
                if map.len() == 1 {
                    if let Some(inner) = map.remove(NODE_MARKER) {
                        let node: ResolvedNode = serde_json::from_value(inner)?;
                        return Ok(PropValue::Node(Box::new(node)));
                    }
                    if let Some(inner) = map.remove(COMPONENT_MARKER) {
                        return marker_string(COMPONENT_MARKER, inner)
                            .map(|name| PropValue::Component(ComponentId::new(name)));
                    }
                    if let Some(inner) = map.remove(HANDLER_MARKER) {
                        return marker_string(HANDLER_MARKER, inner).map(PropValue::Handler);
                    }
                }
                PropValue::Object(
                    map.into_iter()
                        .map(|(key, value)| PropValue::try_from(value).map(|v| (key, v)))
                        .collect::<Result<Props, _>>()?,
                )
            }
        })
    }
}

fn marker_string(marker: &str, inner: Json) -> Result<String, CommonError> {
    match inner {
        Json::String(s) => Ok(s),
        other => Err(CommonError::MalformedMarker {
            marker: marker.to_string(),
            details: format!("expected a string, found {}", other),
        }),
    }
}
