//! Identifier validation and case conversion.
//!
//! Value type and property names share one identifier rule: an ASCII letter
//! or underscore followed by ASCII letters, digits or underscores. The case
//! conversion helpers are used by code generation backends to derive target
//! names (type names, module names, accessor names) from declared names.

/// Returns true if `name` is a valid identifier.
///
/// The rule is the portable subset accepted by every backend: a non-empty
/// ASCII string starting with a letter or `_`, continuing with letters,
/// digits or `_`.
pub fn is_valid(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Capitalizes the first character, leaving the rest untouched.
///
/// Used to synthesize names for hoisted nested value specs
/// (`book` + `review` -> `bookReview`).
pub fn capitalized_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Converts a declared name to `UpperCamelCase`.
///
/// Segments are split on `_`; an all-uppercase segment is title-cased
/// (`TEXT_BOOK` -> `TextBook`), any other segment keeps its interior casing
/// (`bookFormat` -> `BookFormat`).
pub fn upper_camel(name: &str) -> String {
    name.split('_')
        .filter(|segment| !segment.is_empty())
        .map(camel_segment)
        .collect()
}

/// Converts a declared name to `snake_case`.
///
/// An underscore is inserted before each upper-to-lower case boundary
/// (`bookFormat` -> `book_format`, `ISBNCode` -> `isbn_code`).
pub fn snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let chars: Vec<char> = name.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev_lower = i > 0 && chars[i - 1].is_ascii_lowercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let prev_upper = i > 0 && chars[i - 1].is_ascii_uppercase();
            if prev_lower || (prev_upper && next_lower) {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn camel_segment(segment: &str) -> String {
    let rest_is_upper = segment.chars().all(|c| !c.is_ascii_lowercase());
    let mut chars = segment.chars();
    let first = match chars.next() {
        Some(c) => c.to_ascii_uppercase(),
        None => return String::new(),
    };
    let rest: String = if rest_is_upper {
        chars.map(|c| c.to_ascii_lowercase()).collect()
    } else {
        chars.collect()
    };
    first.to_string() + &rest
}
