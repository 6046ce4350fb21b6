use stencil_common::PropValue;

/// `key` when the value is truthy.
///
/// `active={true}` → `"active"`
pub fn use_key_only(value: Option<&PropValue>, key: &str) -> Option<String> {
    value
        .filter(|v| v.is_truthy())
        .map(|_| key.to_string())
}

/// The value itself is the class name.
///
/// `color="red"` → `"red"`
pub fn use_value(value: Option<&PropValue>) -> Option<String> {
    value
        .filter(|v| v.is_truthy() && !matches!(v, PropValue::Bool(_)))
        .and_then(PropValue::to_token)
}

/// `"<value> <key>"` when the value is truthy and not a flag.
///
/// `floated="right"` → `"right floated"`
pub fn use_value_and_key(value: Option<&PropValue>, key: &str) -> Option<String> {
    match value.filter(|v| v.is_truthy())? {
        PropValue::Bool(_) => None,
        other => other
            .to_token()
            .filter(|token| !token.is_empty())
            .map(|token| format!("{} {}", token, key)),
    }
}

/// `key` for `true`, `"<value> <key>"` for a truthy value, nothing otherwise.
///
/// `attached={true}` → `"attached"`, `attached="top"` → `"top attached"`
pub fn use_key_or_value_and_key(value: Option<&PropValue>, key: &str) -> Option<String> {
    match value? {
        PropValue::Bool(true) => Some(key.to_string()),
        _ => use_value_and_key(value, key),
    }
}

/// `verticalAlign="middle"` → `"middle aligned"`
pub fn use_vertical_align_prop(value: Option<&PropValue>) -> Option<String> {
    use_value_and_key(value, "aligned")
}

/// `textAlign="center"` → `"center aligned"`, `textAlign="justified"` → `"justified"`
pub fn use_text_align_prop(value: Option<&PropValue>) -> Option<String> {
    match value? {
        PropValue::String(s) if s == "justified" => Some("justified".to_string()),
        _ => use_value_and_key(value, "aligned"),
    }
}

/// Width classes with spelled-out numbers.
///
/// `width=3` with `"wide"` → `"three wide"`. When `can_equal` is set,
/// `"equal"` becomes `"equal width"`.
pub fn use_width_prop(value: Option<&PropValue>, width_class: &str, can_equal: bool) -> Option<String> {
    let value = value.filter(|v| !v.is_null() && !matches!(v, PropValue::Bool(_)))?;

    if can_equal && value.as_str() == Some("equal") {
        return Some("equal width".to_string());
    }

    let token = value.to_token()?;
    if token.is_empty() {
        return None;
    }
    let word = number_to_word(&token).unwrap_or(token);
    if width_class.is_empty() {
        Some(word)
    } else {
        Some(format!("{} {}", word, width_class))
    }
}

const NUMBER_WORDS: [&str; 16] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
];

/// Spell out 1-16; anything else has no word form
pub fn number_to_word(token: &str) -> Option<String> {
    let n: usize = token.trim().parse().ok()?;
    NUMBER_WORDS
        .get(n.checked_sub(1)?)
        .map(|word| word.to_string())
}
