//! `{{name}}` placeholder substitution for text templates.
//!
//! A placeholder is `{{` followed by one or more ASCII word characters
//! (`A-Z a-z 0-9 _`) and `}}`. Anything else, such as `{{}}`, `{{a b}}` or an
//! unclosed `{{name`, is plain text.

use std::collections::HashMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// A placeholder occurrence: byte range of the whole `{{name}}` span and the
/// identifier inside it.
struct Placeholder<'a> {
    start: usize,
    end: usize,
    name: &'a str,
}

/// Leftmost non-overlapping placeholders, in order.
fn placeholders(template: &str) -> impl Iterator<Item = Placeholder<'_>> {
    let mut pos = 0;
    std::iter::from_fn(move || {
        while let Some(offset) = template[pos..].find(OPEN) {
            let start = pos + offset;
            let name_start = start + OPEN.len();
            let name_len = template.as_bytes()[name_start..]
                .iter()
                .take_while(|&&b| is_word_byte(b))
                .count();
            let name_end = name_start + name_len;
            if name_len > 0 && template[name_end..].starts_with(CLOSE) {
                let end = name_end + CLOSE.len();
                pos = end;
                return Some(Placeholder {
                    start,
                    end,
                    name: &template[name_start..name_end],
                });
            }
            // `{` is ASCII, so the next byte is still a char boundary.
            pos = start + 1;
        }
        pos = template.len();
        None
    })
}

/// Distinct placeholder names in order of first appearance.
pub fn placeholder_names(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for p in placeholders(template) {
        if !names.contains(&p.name) {
            names.push(p.name);
        }
    }
    names
}

/// Replace every `{{name}}` whose name is bound with the bound value.
///
/// Unbound placeholders are left as they are. Substitution is literal and
/// single-pass: placeholders inside a bound value are never expanded.
pub fn inject(template: &str, bindings: &HashMap<String, String>) -> String {
    if template.is_empty() || bindings.is_empty() {
        return template.to_string();
    }

    let mut result = String::with_capacity(template.len());
    let mut copied = 0;
    for p in placeholders(template) {
        let Some(value) = bindings.get(p.name) else {
            continue;
        };
        result.push_str(&template[copied..p.start]);
        result.push_str(value);
        copied = p.end;
    }
    result.push_str(&template[copied..]);
    result
}
