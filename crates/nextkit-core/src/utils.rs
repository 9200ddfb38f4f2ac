//! String transformation utilities for scaffolding

/// Convert a string to PascalCase
///
/// Splits on runs of whitespace and hyphens, upper-cases the first letter of
/// each word and joins the words without separators. The rest of each word is
/// kept as-is, so `to_pascal_case(to_pascal_case(s)) == to_pascal_case(s)`.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Convert a string to kebab-case
///
/// Whitespace runs become a single hyphen, a hyphen is inserted between an
/// ASCII lowercase letter and a following ASCII uppercase letter, and the
/// result is lowercased. Inputs with digits or consecutive capitals are not
/// round-tripped through [`to_pascal_case`].
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    let mut in_whitespace = false;

    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                result.push('-');
                in_whitespace = true;
            }
            prev = Some('-');
            continue;
        }
        in_whitespace = false;

        if ch.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            result.push('-');
        }
        result.push(ch);
        prev = Some(ch);
    }

    result.to_lowercase()
}

/// Lowercase a string and upper-case its first character (`GET` -> `Get`)
pub fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Escape a value for use inside a single-quoted TypeScript string literal
pub fn escape_single_quoted(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}
