//! Shared value domains for enum-like properties

pub const COLORS: [&str; 13] = [
    "red", "orange", "yellow", "olive", "green", "teal", "blue", "violet", "purple", "pink",
    "brown", "grey", "black",
];

pub const SIZES: [&str; 8] = [
    "mini", "tiny", "small", "medium", "large", "big", "huge", "massive",
];

pub const FLOATS: [&str; 2] = ["left", "right"];

pub const VERTICAL_ALIGNMENTS: [&str; 3] = ["bottom", "middle", "top"];

pub const TEXT_ALIGNMENTS: [&str; 4] = ["left", "center", "right", "justified"];

/// Column and item counts, as numbers and as words
pub fn widths() -> Vec<String> {
    (1..=16)
        .map(|n| n.to_string())
        .chain(
            (1..=16).filter_map(|n: usize| stencil_classnames::number_to_word(&n.to_string())),
        )
        .collect()
}

/// `values` without `excluded`
pub fn without<'a>(values: &[&'a str], excluded: &str) -> Vec<&'a str> {
    values.iter().copied().filter(|v| *v != excluded).collect()
}
