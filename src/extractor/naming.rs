use regex::Regex;
use std::sync::LazyLock;

static STRIP_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[@{}]+").expect("static pattern is valid"));

/// Derive a display name from a path template
///
/// `@`, `{` and `}` are removed, the path is split on `/`, and every
/// non-empty segment is title-cased and concatenated:
/// `/users/{id}/login` becomes `UsersIdLogin`, `/user-profiles` becomes
/// `User-Profiles`.
pub fn display_name(path: &str) -> String {
    let stripped = STRIP_CHARS.replace_all(path, "");

    stripped
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(title_case)
        .collect()
}

/// Upper-case the first letter of every word, leave the rest untouched
fn title_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut word_start = true;

    for c in segment.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = is_word_break(c);
    }

    out
}

/// Characters that end a word; `_`, `.` and `'` join their neighbours
fn is_word_break(c: char) -> bool {
    !(c.is_alphanumeric() || matches!(c, '_' | '.' | '\''))
}
