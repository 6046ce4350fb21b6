use stencil_common::{PropValue, Props};

/// Everything a validator can look at: the property under validation and the
/// full record it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct PropCheck<'a> {
    pub component: &'a str,
    pub prop: &'a str,
    pub props: &'a Props,
}

impl<'a> PropCheck<'a> {
    pub fn new(component: &'a str, prop: &'a str, props: &'a Props) -> Self {
        Self {
            component,
            prop,
            props,
        }
    }

    /// The property under validation, if present
    pub fn value(&self) -> Option<&'a PropValue> {
        self.props.get_present(self.prop)
    }

    /// Same record, different property
    pub fn for_prop(&self, prop: &'a str) -> PropCheck<'a> {
        PropCheck { prop, ..*self }
    }
}

/// A property validator.
///
/// Type predicates accept absent values; wrap them in [`Validator::Required`]
/// to demand presence.
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    /// Anything, including nothing
    Any,
    Bool,
    String,
    Number,
    /// A flat property mapping
    Object,
    Array,
    /// An event handler
    Func,
    /// A resolved node
    Element,
    /// Anything renderable as children: text, numbers, nodes, lists of those
    Node,
    /// An `as` value: a tag name or a component reference
    ElementType,
    /// A string or number whose token is one of the listed values
    OneOf(Vec<String>),
    ArrayOf(Box<Validator>),
    Equals(PropValue),
    Required(Box<Validator>),
    /// Shorthand for a single child: text, number, mapping or node
    ItemShorthand,
    /// A list of item shorthands
    ItemsShorthand,
    /// Shorthand for primary content
    ContentShorthand,
    Every(Vec<Validator>),
    SomeOf(Vec<Validator>),
    Disallow(Vec<String>),
    Demand(Vec<String>),
    GivenProps {
        conditions: Vec<(String, Validator)>,
        then: Box<Validator>,
    },
}

impl Validator {
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Validator::OneOf(values.into_iter().map(Into::into).collect())
    }

    pub fn array_of(inner: Validator) -> Self {
        Validator::ArrayOf(Box::new(inner))
    }

    pub fn equals(value: impl Into<PropValue>) -> Self {
        Validator::Equals(value.into())
    }

    pub fn required(self) -> Self {
        Validator::Required(Box::new(self))
    }

    /// Check the property named by `cx`
    pub fn check(&self, cx: &PropCheck<'_>) -> Result<(), String> {
        self.check_value(cx.value(), cx)
    }

    /// Check an explicit value in the context of `cx`'s record
    pub fn check_value(&self, value: Option<&PropValue>, cx: &PropCheck<'_>) -> Result<(), String> {
        let value = value.filter(|v| !v.is_null());

        match self {
            Validator::Any => Ok(()),
            Validator::Bool => expect_kind(value, "bool", |v| matches!(v, PropValue::Bool(_))),
            Validator::String => expect_kind(value, "string", |v| matches!(v, PropValue::String(_))),
            Validator::Number => expect_kind(value, "number", |v| matches!(v, PropValue::Number(_))),
            Validator::Object => expect_kind(value, "object", |v| matches!(v, PropValue::Object(_))),
            Validator::Array => expect_kind(value, "array", |v| matches!(v, PropValue::Array(_))),
            Validator::Func => expect_kind(value, "handler", |v| matches!(v, PropValue::Handler(_))),
            Validator::Element => expect_kind(value, "node", |v| matches!(v, PropValue::Node(_))),
            Validator::Node | Validator::ContentShorthand => {
                expect_kind(value, "renderable content", is_renderable)
            }
            Validator::ElementType => expect_kind(value, "tag name or component", |v| {
                matches!(v, PropValue::String(s) if !s.is_empty())
                    || matches!(v, PropValue::Component(_))
            }),
            Validator::ItemShorthand => {
                expect_kind(value, "string, number, object or node", is_item_shorthand)
            }
            Validator::ItemsShorthand => match value {
                None => Ok(()),
                Some(PropValue::Array(items)) => items
                    .iter()
                    .enumerate()
                    .try_for_each(|(index, item)| {
                        Validator::ItemShorthand
                            .check_value(Some(item), cx)
                            .map_err(|reason| format!("item {}: {}", index, reason))
                    }),
                Some(other) => Err(mismatch("array of item shorthands", other)),
            },
            Validator::OneOf(allowed) => match value {
                None => Ok(()),
                Some(v @ (PropValue::String(_) | PropValue::Number(_))) => {
                    let token = v.to_token().unwrap_or_default();
                    if allowed.iter().any(|a| *a == token) {
                        Ok(())
                    } else {
                        Err(format!(
                            "expected one of [{}], found `{}`",
                            allowed.join(", "),
                            token
                        ))
                    }
                }
                Some(other) => Err(mismatch("one of the enumerated values", other)),
            },
            Validator::ArrayOf(inner) => match value {
                None => Ok(()),
                Some(PropValue::Array(items)) => {
                    items.iter().enumerate().try_for_each(|(index, item)| {
                        inner
                            .check_value(Some(item), cx)
                            .map_err(|reason| format!("item {}: {}", index, reason))
                    })
                }
                Some(other) => Err(mismatch("array", other)),
            },
            Validator::Equals(expected) => {
                let actual = value.unwrap_or(&PropValue::Null);
                if actual == expected {
                    Ok(())
                } else {
                    Err(format!("expected {:?}, found {:?}", expected, actual))
                }
            }
            Validator::Required(inner) => match value {
                None => Err("is required".to_string()),
                Some(_) => inner.check_value(value, cx),
            },
            Validator::Every(validators) => validators
                .iter()
                .try_for_each(|validator| validator.check_value(value, cx)),
            Validator::SomeOf(validators) => {
                if validators.is_empty() {
                    return Ok(());
                }
                let mut reasons = Vec::with_capacity(validators.len());
                for validator in validators {
                    match validator.check_value(value, cx) {
                        Ok(()) => return Ok(()),
                        Err(reason) => reasons.push(reason),
                    }
                }
                Err(format!(
                    "must satisfy at least one validator: {}",
                    reasons.join("; ")
                ))
            }
            Validator::Disallow(names) => {
                if value.is_none() {
                    return Ok(());
                }
                let conflicts: Vec<&str> = names
                    .iter()
                    .map(String::as_str)
                    .filter(|name| *name != cx.prop && cx.props.is_present(name))
                    .collect();
                if conflicts.is_empty() {
                    Ok(())
                } else {
                    Err(format!(
                        "conflicts with `{}`; they cannot be defined together",
                        conflicts.join("`, `")
                    ))
                }
            }
            Validator::Demand(names) => {
                if value.is_none() {
                    return Ok(());
                }
                let missing: Vec<&str> = names
                    .iter()
                    .map(String::as_str)
                    .filter(|name| !cx.props.is_present(name))
                    .collect();
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(format!("requires `{}` to also be set", missing.join("`, `")))
                }
            }
            Validator::GivenProps { conditions, then } => {
                let applies = conditions.iter().all(|(name, condition)| {
                    cx.props
                        .get_present(name)
                        .map(|given| condition.check_value(Some(given), &cx.for_prop(name)).is_ok())
                        .unwrap_or(false)
                });
                if applies {
                    then.check_value(value, cx)
                } else {
                    Ok(())
                }
            }
        }
    }
}

fn expect_kind(
    value: Option<&PropValue>,
    expected: &str,
    accepts: impl Fn(&PropValue) -> bool,
) -> Result<(), String> {
    match value {
        Some(v) if !accepts(v) => Err(mismatch(expected, v)),
        _ => Ok(()),
    }
}

fn mismatch(expected: &str, found: &PropValue) -> String {
    format!("expected {}, found `{}`", expected, found.kind())
}

fn is_renderable(value: &PropValue) -> bool {
    match value {
        PropValue::Null
        | PropValue::Bool(_)
        | PropValue::Number(_)
        | PropValue::String(_)
        | PropValue::Node(_) => true,
        PropValue::Array(items) => items.iter().all(is_renderable),
        PropValue::Object(_) | PropValue::Component(_) | PropValue::Handler(_) => false,
    }
}

fn is_item_shorthand(value: &PropValue) -> bool {
    matches!(
        value,
        PropValue::String(_) | PropValue::Number(_) | PropValue::Object(_) | PropValue::Node(_)
    )
}
