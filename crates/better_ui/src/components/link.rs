//! Link helpers shared by buttons and nav items

use better_ui_core::{option_set, Element, OptionSet};

option_set! {
    /// HTTP method a link submits with
    pub enum Method: "method" {
        #[default]
        Get => "get",
        Post => "post",
        Put => "put",
        Patch => "patch",
        Delete => "delete",
    }
}

impl Method {
    /// Returns true for methods that modify server state
    pub fn is_mutating(self) -> bool {
        self != Method::Get
    }
}

/// Add method attributes to an `<a>` element
///
/// Non-GET methods get `data-turbo-method` and `nofollow` appended to the
/// `rel` tokens.
pub(crate) fn with_method(link: Element, method: Option<Method>, rel: Option<&str>) -> Element {
    let mutating = method.filter(|method| method.is_mutating());

    let mut rel_tokens: Vec<&str> = rel.map(|rel| rel.split_whitespace().collect()).unwrap_or_default();
    if mutating.is_some() && !rel_tokens.contains(&"nofollow") {
        rel_tokens.push("nofollow");
    }
    let rel = (!rel_tokens.is_empty()).then(|| rel_tokens.join(" "));

    link.attr_opt("data-turbo-method", mutating.map(|method| method.as_str()))
        .attr_opt("rel", rel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use better_ui_core::el;

    #[test]
    fn test_get_adds_nothing() {
        let link = with_method(el("a"), Some(Method::Get), None);
        assert_eq!(link.to_html(), "<a></a>");
    }

    #[test]
    fn test_delete_adds_turbo_method_and_nofollow() {
        let link = with_method(el("a"), Some(Method::Delete), Some("noopener"));
        assert_eq!(link.attr_value("data-turbo-method"), Some("delete"));
        assert_eq!(link.attr_value("rel"), Some("noopener nofollow"));

        let link = with_method(el("a"), Some(Method::Post), Some("nofollow"));
        assert_eq!(link.attr_value("rel"), Some("nofollow"));
    }

    #[test]
    fn test_rel_kept_without_method() {
        let link = with_method(el("a"), None, Some("external"));
        assert_eq!(link.attr_value("rel"), Some("external"));
    }
}
