use crate::props::Props;
use crate::value::{format_number, PropValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle identifying one component definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// What a node renders as: a markup tag or another component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Tag(String),
    Component(ComponentId),
}

impl ElementType {
    pub fn tag(name: impl Into<String>) -> Self {
        ElementType::Tag(name.into())
    }

    pub fn component(id: impl Into<ComponentId>) -> Self {
        ElementType::Component(id.into())
    }

    /// True when this is the markup tag `name`
    pub fn is_tag(&self, name: &str) -> bool {
        matches!(self, ElementType::Tag(tag) if tag == name)
    }

    /// Interpret an `as` property value
    pub fn from_value(value: &PropValue) -> Option<Self> {
        match value {
            PropValue::String(tag) if !tag.is_empty() => Some(ElementType::Tag(tag.clone())),
            PropValue::Component(id) => Some(ElementType::Component(id.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Tag(tag) => f.write_str(tag),
            ElementType::Component(id) => write!(f, "<{}>", id),
        }
    }
}

/// A child of a resolved node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    Text(String),
    Node(ResolvedNode),
}

impl Child {
    /// Renderable children of a property value.
    ///
    /// Strings and numbers become text, nodes pass through, arrays are flattened.
    /// Flags, mappings and references render nothing.
    pub fn from_value(value: &PropValue) -> Vec<Child> {
        let mut children = Vec::new();
        collect_children(value, &mut children);
        children
    }
}

fn collect_children(value: &PropValue, out: &mut Vec<Child>) {
    match value {
        PropValue::String(s) => out.push(Child::Text(s.clone())),
        PropValue::Number(n) => out.push(Child::Text(format_number(*n))),
        PropValue::Node(node) => out.push(Child::Node((**node).clone())),
        PropValue::Array(values) => {
            for value in values {
                collect_children(value, out);
            }
        }
        PropValue::Null
        | PropValue::Bool(_)
        | PropValue::Object(_)
        | PropValue::Component(_)
        | PropValue::Handler(_) => {}
    }
}

/// Fully specified node handed to the rendering engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNode {
    pub element_type: ElementType,
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub children: Vec<Child>,
    /// Stable identity among siblings (list items)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ResolvedNode {
    pub fn new(element_type: ElementType) -> Self {
        Self {
            element_type,
            props: Props::new(),
            children: Vec::new(),
            key: None,
        }
    }

    pub fn element(tag: impl Into<String>) -> Self {
        Self::new(ElementType::tag(tag))
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props.extend(props);
        self
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name, value);
        self
    }

    /// Set `name` only when `value` is not `Null`
    pub fn with_optional_prop(mut self, name: impl Into<String>, value: Option<&PropValue>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_null()) {
            self.props.insert(name, value.clone());
        }
        self
    }

    pub fn with_child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Child>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Child::Text(text.into()))
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn class_name(&self) -> Option<&str> {
        self.props.get_str("className")
    }

    /// Child nodes, skipping text
    pub fn child_nodes(&self) -> impl Iterator<Item = &ResolvedNode> {
        self.children.iter().filter_map(|child| match child {
            Child::Node(node) => Some(node),
            Child::Text(_) => None,
        })
    }

    /// All text in document order
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            match child {
                Child::Text(t) => text.push_str(t),
                Child::Node(node) => text.push_str(&node.text_content()),
            }
        }
        text
    }
}

impl From<ResolvedNode> for Child {
    fn from(node: ResolvedNode) -> Self {
        Child::Node(node)
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;

    #[test]
    fn test_children_flatten_arrays_and_skip_flags() {
        let node = ResolvedNode::element("i");
        let value = PropValue::Array(vec![
            PropValue::from("Save"),
            PropValue::Bool(true),
            PropValue::from(vec![PropValue::from(2), PropValue::from(node.clone())]),
            PropValue::Null,
        ]);

        let children = Child::from_value(&value);
        assert_eq!(
            children,
            vec![
                Child::Text("Save".to_string()),
                Child::Text("2".to_string()),
                Child::Node(node),
            ]
        );
    }

    #[test]
    fn test_as_value_interpretation() {
        assert_eq!(
            ElementType::from_value(&PropValue::from("span")),
            Some(ElementType::tag("span"))
        );
        assert_eq!(
            ElementType::from_value(&PropValue::Component(ComponentId::new("Label"))),
            Some(ElementType::component("Label"))
        );
        assert_eq!(ElementType::from_value(&PropValue::from("")), None);
        assert_eq!(ElementType::from_value(&PropValue::Bool(true)), None);
    }

    #[test]
    fn test_text_content_is_depth_first() {
        let node = ResolvedNode::element("div")
            .with_prop("className", "ui label")
            .with_text("Mail ")
            .with_child(ResolvedNode::element("div").with_text("23"));

        assert_eq!(node.text_content(), "Mail 23");
        assert_eq!(node.class_name(), Some("ui label"));
    }

    #[test]
    fn test_node_serialises_with_camel_case_fields() {
        let node = ResolvedNode::element("a")
            .with_props(props! { "href" => "/home" })
            .with_key("Home");

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["elementType"]["tag"], "a");
        assert_eq!(json["props"]["href"], "/home");
        assert_eq!(json["key"], "Home");
    }
}
