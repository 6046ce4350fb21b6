//! Shorthand resolution.
//!
//! A shorthand is a compact stand-in for a child node: a bare string or number,
//! a flat property mapping, an already-resolved node, or a list of those. The
//! resolver turns it into fully rendered nodes of one component.
//!
//! | Shorthand  | Result                                                        |
//! |------------|---------------------------------------------------------------|
//! | `Absent`   | nothing                                                       |
//! | `Node`     | the node, unchanged                                           |
//! | `Primitive`| `rule(value)` over the extra defaults, keyed by the value     |
//! | `Props`    | the mapping over the extra defaults; `key` becomes the node key|
//! | `Sequence` | each item resolved alone, in order, each with a stable key    |

use crate::engine::Engine;
use crate::error::{EngineError, EngineResult};
use std::collections::HashSet;
use std::fmt;
use stencil_classnames::ClassList;
use stencil_common::{format_number, Child, ComponentId, PropValue, Props, ResolvedNode};
use tracing::{debug, instrument};

/// Properties that name a list item when it has no explicit `key`, in priority order
const DISPLAY_KEY_PROPS: [&str; 2] = ["text", "content"];

/// A bare scalar shorthand
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    String(String),
    Number(f64),
    Bool(bool),
}

impl Primitive {
    pub fn to_value(&self) -> PropValue {
        match self {
            Primitive::String(s) => PropValue::String(s.clone()),
            Primitive::Number(n) => PropValue::Number(*n),
            Primitive::Bool(b) => PropValue::Bool(*b),
        }
    }

    /// Strings and numbers identify themselves; flags do not
    pub fn to_key(&self) -> Option<String> {
        match self {
            Primitive::String(s) if !s.is_empty() => Some(s.clone()),
            Primitive::Number(n) => Some(format_number(*n)),
            _ => None,
        }
    }
}

/// A shorthand value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Shorthand {
    #[default]
    Absent,
    Primitive(Primitive),
    Props(Props),
    Node(ResolvedNode),
    Sequence(Vec<Shorthand>),
}

impl Shorthand {
    /// Interpret a property value as shorthand for `component`.
    ///
    /// Handlers and component references have no shorthand meaning.
    pub fn from_value(value: PropValue, component: &ComponentId) -> EngineResult<Self> {
        Ok(match value {
            PropValue::Null => Shorthand::Absent,
            PropValue::String(s) => Shorthand::Primitive(Primitive::String(s)),
            PropValue::Number(n) => Shorthand::Primitive(Primitive::Number(n)),
            PropValue::Bool(b) => Shorthand::Primitive(Primitive::Bool(b)),
            PropValue::Object(props) => Shorthand::Props(props),
            PropValue::Node(node) => Shorthand::Node(*node),
            PropValue::Array(items) => Shorthand::Sequence(
                items
                    .into_iter()
                    .map(|item| Shorthand::from_value(item, component))
                    .collect::<EngineResult<_>>()?,
            ),
            other @ (PropValue::Component(_) | PropValue::Handler(_)) => {
                return Err(EngineError::UnsupportedShorthandType {
                    component: component.to_string(),
                    kind: other.kind().to_string(),
                })
            }
        })
    }
}

impl From<&str> for Shorthand {
    fn from(s: &str) -> Self {
        Shorthand::Primitive(Primitive::String(s.to_string()))
    }
}

impl From<String> for Shorthand {
    fn from(s: String) -> Self {
        Shorthand::Primitive(Primitive::String(s))
    }
}

impl From<f64> for Shorthand {
    fn from(n: f64) -> Self {
        Shorthand::Primitive(Primitive::Number(n))
    }
}

impl From<Props> for Shorthand {
    fn from(props: Props) -> Self {
        Shorthand::Props(props)
    }
}

impl From<ResolvedNode> for Shorthand {
    fn from(node: ResolvedNode) -> Self {
        Shorthand::Node(node)
    }
}

impl<T: Into<Shorthand>> From<Vec<T>> for Shorthand {
    fn from(items: Vec<T>) -> Self {
        Shorthand::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Shorthand>> From<Option<T>> for Shorthand {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Shorthand::Absent)
    }
}

/// How a bare primitive becomes a property record
#[derive(Clone)]
pub enum MappingRule {
    /// The primitive becomes this property: `"Save"` → `{content: "Save"}`
    Prop(String),
    /// As `Prop`, over fixed properties: `"x"` → `{text: true, content: "x"}`
    PropWith { prop: String, fixed: Props },
    Custom(fn(&Primitive) -> Props),
}

impl MappingRule {
    pub fn prop(name: impl Into<String>) -> Self {
        MappingRule::Prop(name.into())
    }

    pub fn prop_with(name: impl Into<String>, fixed: Props) -> Self {
        MappingRule::PropWith {
            prop: name.into(),
            fixed,
        }
    }

    pub fn apply(&self, value: &Primitive) -> Props {
        match self {
            MappingRule::Prop(prop) => Props::new().with(prop.as_str(), value.to_value()),
            MappingRule::PropWith { prop, fixed } => fixed.clone().with(prop.as_str(), value.to_value()),
            MappingRule::Custom(map) => map(value),
        }
    }
}

impl fmt::Debug for MappingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingRule::Prop(prop) => f.debug_tuple("Prop").field(prop).finish(),
            MappingRule::PropWith { prop, fixed } => f
                .debug_struct("PropWith")
                .field("prop", prop)
                .field("fixed", fixed)
                .finish(),
            MappingRule::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Output of shorthand resolution
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Resolution {
    #[default]
    Absent,
    Node(ResolvedNode),
    List(Vec<ResolvedNode>),
}

impl Resolution {
    pub fn is_absent(&self) -> bool {
        matches!(self, Resolution::Absent)
    }

    pub fn as_node(&self) -> Option<&ResolvedNode> {
        match self {
            Resolution::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn into_nodes(self) -> Vec<ResolvedNode> {
        match self {
            Resolution::Absent => Vec::new(),
            Resolution::Node(node) => vec![node],
            Resolution::List(nodes) => nodes,
        }
    }

    pub fn into_children(self) -> Vec<Child> {
        self.into_nodes().into_iter().map(Child::Node).collect()
    }
}

impl Engine {
    /// Resolve `shorthand` into nodes of `component`.
    ///
    /// `defaults` sit underneath whatever the shorthand supplies; explicit values
    /// win, except `className`, which is merged.
    #[instrument(skip_all, fields(component = %component))]
    pub fn create_shorthand(
        &self,
        component: &ComponentId,
        rule: &MappingRule,
        shorthand: Shorthand,
        defaults: Option<&Props>,
    ) -> EngineResult<Resolution> {
        let empty = Props::new();
        let defaults = defaults.unwrap_or(&empty);

        match shorthand {
            Shorthand::Absent => Ok(Resolution::Absent),
            Shorthand::Node(node) => Ok(Resolution::Node(node)),
            Shorthand::Sequence(items) => {
                let nodes = self.resolve_sequence(component, rule, items, defaults)?;
                debug!(items = nodes.len(), "Resolved shorthand list");
                Ok(Resolution::List(nodes))
            }
            single => {
                let node = self.resolve_item(component, rule, single, defaults, false)?;
                Ok(node.map(Resolution::Node).unwrap_or_default())
            }
        }
    }

    fn resolve_sequence(
        &self,
        component: &ComponentId,
        rule: &MappingRule,
        items: Vec<Shorthand>,
        defaults: &Props,
    ) -> EngineResult<Vec<ResolvedNode>> {
        let mut flat = Vec::with_capacity(items.len());
        flatten(items, &mut flat);

        let mut nodes = Vec::with_capacity(flat.len());
        let mut seen_keys = HashSet::new();
        let mut first_keyless: Option<usize> = None;

        for (index, shorthand) in flat.into_iter().enumerate() {
            let Some(node) = self.resolve_item(component, rule, shorthand, defaults, true)? else {
                continue;
            };

            match &node.key {
                Some(key) => {
                    if !seen_keys.insert(key.clone()) {
                        return Err(EngineError::DuplicateKey {
                            component: component.to_string(),
                            key: key.clone(),
                        });
                    }
                }
                None => {
                    if first_keyless.is_some() {
                        return Err(EngineError::MissingKey {
                            component: component.to_string(),
                            index,
                        });
                    }
                    first_keyless = Some(index);
                }
            }

            nodes.push(node);
        }

        Ok(nodes)
    }

    fn resolve_item(
        &self,
        component: &ComponentId,
        rule: &MappingRule,
        shorthand: Shorthand,
        defaults: &Props,
        derive_key: bool,
    ) -> EngineResult<Option<ResolvedNode>> {
        let (props, key) = match shorthand {
            Shorthand::Absent => return Ok(None),
            Shorthand::Node(node) => return Ok(Some(node)),
            Shorthand::Sequence(_) => {
                return Err(EngineError::UnsupportedShorthandType {
                    component: component.to_string(),
                    kind: "nested list".to_string(),
                })
            }
            Shorthand::Primitive(value) => {
                let key = value.to_key();
                (rule.apply(&value), key)
            }
            Shorthand::Props(mut value) => {
                let explicit = value
                    .remove("key")
                    .and_then(|key| key.to_key());
                let key = match explicit {
                    Some(key) => Some(key),
                    None if derive_key => display_key(&value),
                    None => None,
                };
                (value, key)
            }
        };

        let props = merge_defaults(defaults, props);
        self.instantiate_keyed(component, props, key).map(Some)
    }
}

fn flatten(items: Vec<Shorthand>, out: &mut Vec<Shorthand>) {
    for item in items {
        match item {
            Shorthand::Sequence(nested) => flatten(nested, out),
            other => out.push(other),
        }
    }
}

fn display_key(props: &Props) -> Option<String> {
    DISPLAY_KEY_PROPS
        .iter()
        .filter_map(|name| props.get_present(name))
        .find_map(PropValue::to_key)
}

/// `defaults ⊕ props`, with class names concatenated
fn merge_defaults(defaults: &Props, props: Props) -> Props {
    let class_name = ClassList::merge(defaults.get_str("className"), props.get_str("className"));
    let mut merged = props.merged_over(defaults);
    if let Some(class_name) = class_name {
        merged.insert("className", class_name);
    }
    merged
}
