//! Keeps literal `{{user}}` / `{{char}}` intact through host parameter substitution.
//!
//! Rendered prompts can legitimately contain the literal participant tokens
//! (the context falls back to them when the host has no names, and example
//! text may quote them). Host substitution would expand them, so they are
//! swapped for sentinels first and restored afterwards:
//! protect → substitute → restore.

use super::context::{CHAR_PLACEHOLDER, USER_PLACEHOLDER};

const SENTINEL_OPEN: char = '\u{E000}';
const SENTINEL_CLOSE: char = '\u{E001}';

/// Run `substitute` over `text` without letting it touch `{{user}}` or `{{char}}`.
pub fn substitute_preserving_placeholders<F>(text: &str, substitute: F) -> String
where
    F: FnOnce(&str) -> String,
{
    let user_sentinel = sentinel_for("user", text);
    let char_sentinel = sentinel_for("char", text);

    let protected =
        text.replace(USER_PLACEHOLDER, &user_sentinel).replace(CHAR_PLACEHOLDER, &char_sentinel);
    let substituted = substitute(&protected);

    substituted.replace(&user_sentinel, USER_PLACEHOLDER).replace(&char_sentinel, CHAR_PLACEHOLDER)
}

/// A sentinel that does not already occur in `text`.
fn sentinel_for(name: &str, text: &str) -> String {
    (0u32..)
        .map(|n| format!("{SENTINEL_OPEN}charforge:{name}:{n}{SENTINEL_CLOSE}"))
        .find(|candidate| !text.contains(candidate.as_str()))
        .unwrap_or_default()
}
