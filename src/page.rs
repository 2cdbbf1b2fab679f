use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

/// Matches any opening tag carrying an `id` attribute; capture 1 is the
/// tag name, capture 2 the id value.
static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    // `\sid` keeps attributes like data-id from matching.
    Regex::new(r#"(?i)<([a-zA-Z][a-zA-Z0-9-]*)\b[^>]*?\sid\s*=\s*["']([^"']*)["'][^>]*>"#).unwrap()
});

/// Replace the inner markup of the element with the given id.
///
/// This is the thin adapter between the pure renderer and the generated
/// host page: everything outside the container survives byte-for-byte,
/// only the container's contents are swapped for `fragment`. Returns
/// `ElementNotFound` when the page has no such element (or the element
/// never closes, which a generated page never produces).
pub fn patch_page(html: &str, container_id: &str, fragment: &str) -> Result<String> {
    let not_found = || Error::ElementNotFound {
        id: container_id.to_string(),
    };

    let open = OPEN_TAG
        .captures_iter(html)
        .find(|c| &c[2] == container_id)
        .ok_or_else(not_found)?;
    let tag = open[1].to_string();
    let whole = open.get(0).ok_or_else(not_found)?;
    if html[whole.range()].ends_with("/>") {
        // Self-closing container cannot hold the fragment.
        return Err(not_found());
    }
    let content_start = whole.end();

    let close_start = find_closing_tag(&html[content_start..], &tag).ok_or_else(not_found)?;
    let content_end = content_start + close_start;

    let mut patched = String::with_capacity(html.len() + fragment.len());
    patched.push_str(&html[..content_start]);
    patched.push_str(fragment);
    patched.push_str(&html[content_end..]);
    Ok(patched)
}

/// Byte offset of the closing tag matching an already-opened `tag`,
/// accounting for nested elements of the same name.
fn find_closing_tag(html: &str, tag: &str) -> Option<usize> {
    let step = close_tag_regex(tag);

    let mut depth = 1usize;
    for m in step.captures_iter(html) {
        let whole = m.get(0)?;
        let closing = !m[1].is_empty();
        if closing {
            depth -= 1;
            if depth == 0 {
                return Some(whole.start());
            }
        } else if !html[whole.range()].ends_with("/>") {
            depth += 1;
        }
    }
    None
}

/// Compiled open/close scanners keyed by tag name, so repeated patches
/// of the same page shape reuse one regex. `Regex` clones share the
/// compiled program.
static CLOSE_TAG_CACHE: LazyLock<Mutex<HashMap<String, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn close_tag_regex(tag: &str) -> Regex {
    let mut cache = CLOSE_TAG_CACHE.lock().expect("close tag cache poisoned");
    cache
        .entry(tag.to_ascii_lowercase())
        .or_insert_with(|| {
            // Tag names come from OPEN_TAG's first capture, so the
            // pattern is always valid.
            Regex::new(&format!(r"(?i)<(/?){tag}\b[^>]*>")).expect("tag scan regex is valid")
        })
        .clone()
}
