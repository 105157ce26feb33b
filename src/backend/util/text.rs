//! Display formatting of upstream identifiers.

/// `"pikachu"` -> `"Pikachu"`. The remainder is lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// `"thunder-punch"` -> `"Thunder Punch"`.
pub fn move_title(s: &str) -> String {
    s.replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flavor texts carry hard line breaks and form feeds.
pub fn clean_flavor_text(s: &str) -> String {
    s.replace(['\n', '\u{c}'], " ")
}
