use crate::index::Group;

/// CSS class the host page's accordion script delegates its click
/// handling on. Part of the markup contract, not configurable.
const TOGGLE_CLASS: &str = "dd";

/// CSS class of the nested method list.
const SUBLIST_CLASS: &str = "sectlevel2";

/// Render groups as the accordion navigation fragment.
///
/// Each group becomes an `<li>` with a toggle header linking to
/// `#{alias}` and a nested `<ul>` of method links to `#{methodId}`.
/// `open_class` lands on every group `<li>` and `display_style` as the
/// inline style of every nested `<ul>`. An empty group list renders as
/// the empty string.
///
/// Descriptions are emitted verbatim, no escaping: the dataset is fixed
/// generator output, never user input.
pub fn render_accordion(groups: &[Group], open_class: &str, display_style: &str) -> String {
    let mut html = String::new();
    for group in groups {
        html.push_str(&format!("<li class=\"{open_class}\">"));
        html.push_str(&format!(
            "<a class=\"{TOGGLE_CLASS}\" href=\"#{}\">{}.&nbsp;{}</a>",
            group.alias, group.order, group.description
        ));
        html.push_str(&format!(
            "<ul class=\"{SUBLIST_CLASS}\" style=\"{display_style}\">"
        ));
        for method in &group.methods {
            html.push_str(&format!(
                "<li><a href=\"#{}\">{}.{}.&nbsp;{}</a> </li>",
                method.method_id, group.order, method.order, method.description
            ));
        }
        html.push_str("</ul>");
        html.push_str("</li>");
    }
    html
}
