/// Convert text to slug format: lowercase, hyphen-separated, alphanumerics
/// only, no leading/trailing/repeated hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else if c.is_whitespace() || c == '_' || c == '-' {
            // Separator runs collapse to a single hyphen.
            if !slug.ends_with('-') {
                slug.push('-');
            }
        }
        // Everything else is dropped.
    }
    slug.trim_matches('-').to_string()
}

/// Truncate text to `max_length` characters, appending `suffix` when cut.
///
/// Counts chars, not bytes, so multi-byte text is never split. When
/// `max_length` cannot fit the suffix, the text is hard-cut instead.
pub fn truncate_text(text: &str, max_length: usize, suffix: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_length {
        return text.to_string();
    }

    let suffix_len = suffix.chars().count();
    if max_length > suffix_len {
        let kept: String = chars[..max_length - suffix_len].iter().collect();
        format!("{}{}", kept, suffix)
    } else {
        chars[..max_length].iter().collect()
    }
}
