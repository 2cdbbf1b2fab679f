use crate::index::Group;

/// Filter the index against a user query with a linear scan.
///
/// An empty query returns the full index unchanged. Otherwise a group
/// whose description contains the query (case-insensitive) is kept with
/// its entire method list; a group that matches only through a method
/// keeps exactly the first matching method; a group with no match at
/// all is omitted.
///
/// The first-match-only truncation on method hits is deliberate and
/// matches the behavior the generated pages ship with. Showing every
/// matching method instead needs product sign-off; flip
/// `test_method_match_keeps_only_first` when that happens.
pub fn filter_groups(groups: &[Group], query: &str) -> Vec<Group> {
    if query.is_empty() {
        return groups.to_vec();
    }

    let needle = query.to_lowercase();
    let mut matched = Vec::new();

    for group in groups {
        if contains_ci(&group.description, &needle) {
            matched.push(group.clone());
            continue;
        }

        if let Some(hit) = group
            .methods
            .iter()
            .find(|m| contains_ci(&m.description, &needle))
        {
            let mut reduced = group.clone();
            reduced.methods = vec![hit.clone()];
            matched.push(reduced);
        }
    }

    tracing::debug!(
        "Filter \"{}\": {} of {} groups matched",
        query,
        matched.len(),
        groups.len()
    );
    matched
}

/// Case-insensitive substring test. `needle` must already be lowercase.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
