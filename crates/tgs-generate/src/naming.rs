//! Identifier casing for generated code.
//!
//! JSON property names arrive in arbitrary styles (`camelCase`,
//! `snake_case`, `kebab-case`, spaced words). Everything funnels through
//! [`split_words`] so the casing helpers agree on word boundaries.

/// Split a raw name into lowercase words.
///
/// Boundaries are non-alphanumeric characters and lower-to-upper case
/// transitions. Characters that cannot appear in an identifier are
/// dropped entirely.
fn split_words(raw: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if ch.is_uppercase() && prev_lower && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
            current.extend(ch.to_lowercase());
        } else {
            prev_lower = false;
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `PascalCase` type name. Falls back to a placeholder for names with no
/// identifier characters, and prefixes names that would start with a digit.
pub fn pascal_case(raw: &str) -> String {
    let words = split_words(raw);
    if words.is_empty() {
        return "Generated".to_owned();
    }
    let mut out = String::new();
    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "The");
    }
    out
}

/// `snake_case` field name.
pub fn snake_case(raw: &str) -> String {
    let words = split_words(raw);
    if words.is_empty() {
        return "field".to_owned();
    }
    let mut out = words.join("_");
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "the_");
    }
    out
}

/// `camelCase` property name.
pub fn camel_case(raw: &str) -> String {
    let pascal = pascal_case(raw);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => pascal,
    }
}

/// Whether a JSON property name is already a plain identifier and can be
/// emitted without quoting or renaming.
pub fn is_plain_identifier(raw: &str) -> bool {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_from_mixed_styles() {
        assert_eq!(pascal_case("how to live"), "HowToLive");
        assert_eq!(pascal_case("track_name"), "TrackName");
        assert_eq!(pascal_case("trackName"), "TrackName");
        assert_eq!(pascal_case("kebab-name"), "KebabName");
    }

    #[test]
    fn digits_never_lead() {
        assert_eq!(pascal_case("3d-model"), "The3dModel");
        assert_eq!(snake_case("3d-model"), "the_3d_model");
    }

    #[test]
    fn degenerate_names_get_placeholders() {
        assert_eq!(pascal_case("!!!"), "Generated");
        assert_eq!(snake_case(""), "field");
    }

    #[test]
    fn snake_and_camel() {
        assert_eq!(snake_case("trackName"), "track_name");
        assert_eq!(camel_case("track_name"), "trackName");
    }

    #[test]
    fn plain_identifiers() {
        assert!(is_plain_identifier("name"));
        assert!(is_plain_identifier("_private2"));
        assert!(!is_plain_identifier("2fast"));
        assert!(!is_plain_identifier("has space"));
        assert!(!is_plain_identifier(""));
    }
}
