//! Markdown fixups applied to model output.

use regex::Regex;
use std::sync::LazyLock;

/// Matches either a dollar amount already wrapped in backticks, or a bare
/// one. The wrapped alternative comes first so reapplying the transform
/// leaves earlier wraps untouched.
static DOLLAR_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`\$\s?\d[\d,\.]*`|\$\s?\d[\d,\.]*").unwrap());

/// Wraps dollar amounts in inline code spans so a markdown renderer does
/// not treat `$` as a math or formatting delimiter. Idempotent; the amount
/// itself is never altered.
pub fn wrap_dollar_amounts(text: &str) -> String {
    DOLLAR_AMOUNT
        .replace_all(text, |caps: &regex::Captures| {
            let m = &caps[0];
            if m.starts_with('`') {
                m.to_string()
            } else {
                format!("`{}`", m)
            }
        })
        .into_owned()
}
