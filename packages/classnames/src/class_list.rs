use std::fmt;

/// Ordered collection of class tokens.
///
/// Tokens keep the order they were pushed in. Empty tokens are dropped and the
/// joined output has single spaces with no leading or trailing whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fixed token (may itself contain several space separated classes)
    pub fn add(mut self, token: impl AsRef<str>) -> Self {
        self.push(token);
        self
    }

    /// Append a builder result
    pub fn add_opt(mut self, token: Option<impl AsRef<str>>) -> Self {
        if let Some(token) = token {
            self.push(token);
        }
        self
    }

    pub fn push(&mut self, token: impl AsRef<str>) {
        self.tokens
            .extend(token.as_ref().split_whitespace().map(str::to_string));
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Joined class string
    pub fn build(&self) -> String {
        self.tokens.join(" ")
    }

    /// Join two class strings, either of which may be missing
    pub fn merge(first: Option<&str>, second: Option<&str>) -> Option<String> {
        let merged = ClassList::new().add_opt(first).add_opt(second).build();
        if merged.is_empty() {
            None
        } else {
            Some(merged)
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{use_key_only, use_key_or_value_and_key, use_value, use_value_and_key};
    use stencil_common::PropValue;

    #[test]
    fn test_tokens_join_in_call_order() {
        let red = PropValue::from("red");
        let right = PropValue::from("right");
        let classes = ClassList::new()
            .add("ui")
            .add_opt(use_value(Some(&red)))
            .add_opt(use_key_only(Some(&PropValue::Bool(true)), "active"))
            .add_opt(use_key_only(Some(&PropValue::Bool(false)), "basic"))
            .add_opt(use_value_and_key(Some(&right), "floated"))
            .add("button");

        assert_eq!(classes.build(), "ui red active right floated button");
    }

    #[test]
    fn test_separators_collapse_and_trim() {
        let classes = ClassList::new()
            .add("  ui ")
            .add("")
            .add_opt(use_key_or_value_and_key(Some(&PropValue::from("top")), "attached"))
            .add("  menu  extra  ");

        assert_eq!(classes.build(), "ui top attached menu extra");
        assert_eq!(classes.tokens().len(), 5);
    }

    #[test]
    fn test_empty_list_builds_empty_string() {
        let classes = ClassList::new().add_opt(None::<String>);
        assert!(classes.is_empty());
        assert_eq!(classes.build(), "");
    }

    #[test]
    fn test_merge_class_names() {
        assert_eq!(ClassList::merge(Some("basic"), Some("red")), Some("basic red".to_string()));
        assert_eq!(ClassList::merge(None, Some(" red ")), Some("red".to_string()));
        assert_eq!(ClassList::merge(None, None), None);
    }
}
