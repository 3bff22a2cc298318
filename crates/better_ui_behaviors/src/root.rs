//! Binding a controller to its own root element
//!
//! A page can hold several roots of the same controller kind. Each
//! controller keeps a [`RootRef`] to the root it was created from, so that
//! applying its state patches or detaches that root and no other.

use better_ui_core::Element;

/// Where a controller's root element sits in a tree
///
/// A root carrying an `id` is found by that id wherever it moves. Any other
/// root is found by its child-index path, which stays valid as long as no
/// element before it in the same parent is detached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootRef {
    Id(String),
    Path(Vec<usize>),
}

impl RootRef {
    /// Every root in `tree`, in document order
    pub fn all(tree: &Element, is_root: fn(&Element) -> bool) -> Vec<RootRef> {
        tree.paths_where(is_root)
            .into_iter()
            .map(|path| match tree.at_path(&path).and_then(|root| root.attr_value("id")) {
                Some(id) if !id.is_empty() => RootRef::Id(id.to_string()),
                _ => RootRef::Path(path),
            })
            .collect()
    }

    /// First root in `tree`, in document order
    pub fn first(tree: &Element, is_root: fn(&Element) -> bool) -> Option<RootRef> {
        Self::all(tree, is_root).into_iter().next()
    }

    pub fn get<'a>(&self, tree: &'a Element, is_root: fn(&Element) -> bool) -> Option<&'a Element> {
        match self {
            RootRef::Id(id) => {
                tree.find(|element| is_root(element) && element.attr_value("id") == Some(id.as_str()))
            }
            RootRef::Path(path) => tree.at_path(path).filter(|root| is_root(root)),
        }
    }

    pub fn get_mut<'a>(
        &self,
        tree: &'a mut Element,
        is_root: fn(&Element) -> bool,
    ) -> Option<&'a mut Element> {
        match self {
            RootRef::Id(id) => tree
                .find_mut(|element| is_root(element) && element.attr_value("id") == Some(id.as_str())),
            RootRef::Path(path) => tree.at_path_mut(path).filter(|root| is_root(root)),
        }
    }

    /// Detach the root from `tree`
    ///
    /// Returns false when the root is gone or is `tree` itself.
    pub fn detach(&self, tree: &mut Element, is_root: fn(&Element) -> bool) -> bool {
        match self {
            RootRef::Id(id) => {
                tree.remove_where(|element| {
                    is_root(element) && element.attr_value("id") == Some(id.as_str())
                }) > 0
            }
            RootRef::Path(path) => {
                self.get(tree, is_root).is_some() && tree.remove_at_path(path).is_some()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use better_ui_core::el;

    fn is_panel(element: &Element) -> bool {
        element.attr_value("data-controller") == Some("panel")
    }

    fn panel(text: &str) -> Element {
        el("div").attr("data-controller", "panel").text(text)
    }

    #[test]
    fn test_all_prefers_id_over_path() {
        let tree = el("main")
            .child(panel("a"))
            .child(el("section").child(panel("b").attr("id", "second")));
        assert_eq!(
            RootRef::all(&tree, is_panel),
            vec![RootRef::Path(vec![0]), RootRef::Id("second".into())]
        );
        assert_eq!(RootRef::first(&tree, is_panel), Some(RootRef::Path(vec![0])));
    }

    #[test]
    fn test_get_checks_the_root_kind() {
        let tree = el("main").child(el("p").text("plain")).child(panel("a"));
        assert!(RootRef::Path(vec![0]).get(&tree, is_panel).is_none());
        assert_eq!(
            RootRef::Path(vec![1]).get(&tree, is_panel).unwrap().text_content(),
            "a"
        );
        assert!(RootRef::Id("missing".into()).get(&tree, is_panel).is_none());
    }

    #[test]
    fn test_detach_removes_only_its_root() {
        let mut tree = el("main")
            .child(panel("a").attr("id", "first"))
            .child(panel("b").attr("id", "second"));
        let second = RootRef::Id("second".into());
        let first = RootRef::Id("first".into());

        assert!(second.detach(&mut tree, is_panel));
        assert!(!second.detach(&mut tree, is_panel));
        assert_eq!(tree.text_content(), "a");
        assert!(first.get(&tree, is_panel).is_some());

        let mut tree = el("main").child(panel("a")).child(panel("b"));
        assert!(RootRef::Path(vec![1]).detach(&mut tree, is_panel));
        assert_eq!(tree.text_content(), "a");
        assert!(!RootRef::Path(vec![]).detach(&mut tree, is_panel));
    }
}
