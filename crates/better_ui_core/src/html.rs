//! HTML element tree
//!
//! Components build an [`Element`] tree with a chained builder and render it
//! to an escaped HTML string. Behaviours read and patch the same tree
//! through attribute lookups and descendant search.
//!
//! # Example
//!
//! ```rust
//! use better_ui_core::el;
//!
//! let button = el("button")
//!     .attr("type", "button")
//!     .class("px-4 py-2")
//!     .bool_attr("disabled", true)
//!     .text("Save & close");
//!
//! assert_eq!(
//!     button.to_html(),
//!     r#"<button type="button" class="px-4 py-2" disabled>Save &amp; close</button>"#
//! );
//! ```

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A node in the element tree
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A nested element
    Element(Element),
    /// Text content, escaped on render
    Text(String),
    /// Trusted markup inserted verbatim (inline SVG icons)
    Raw(String),
}

impl Node {
    /// Trusted markup node
    pub fn raw(html: impl Into<String>) -> Self {
        Node::Raw(html.into())
    }

    /// Text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Returns the element if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => escape_text(text, out),
            Node::Raw(html) => out.push_str(html),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// Serialized slot content: a plain string is text, `{ html = "..." }` is
/// trusted markup.
#[derive(Deserialize)]
#[serde(untagged)]
enum NodeRepr {
    Text(String),
    Html { html: String },
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match NodeRepr::deserialize(deserializer)? {
            NodeRepr::Text(text) => Node::Text(text),
            NodeRepr::Html { html } => Node::Raw(html),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Node),
    Many(Vec<Node>),
}

/// Deserialize slot content given as one node or a sequence of nodes
///
/// Use with `#[serde(deserialize_with = "one_or_many")]` on `Vec<Node>`
/// fields, so that `logo = "Acme"` and `logo = ["Acme", { html = "<b/>" }]`
/// both parse.
pub fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Node>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(node) => vec![node],
        OneOrMany::Many(nodes) => nodes,
    })
}

/// An HTML element with ordered attributes
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    /// `None` values render as boolean attributes
    attrs: IndexMap<Cow<'static, str>, Option<String>>,
    children: Vec<Node>,
}

/// Create an element
pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    // =====================================================================
    // Builder
    // =====================================================================

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute when `value` is present
    pub fn attr_opt<V: Into<String>>(
        self,
        name: impl Into<Cow<'static, str>>,
        value: Option<V>,
    ) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set a boolean attribute when `on` is true
    pub fn bool_attr(mut self, name: impl Into<Cow<'static, str>>, on: bool) -> Self {
        if on {
            self.attrs.insert(name.into(), None);
        }
        self
    }

    /// Set the class attribute; empty class strings are omitted
    pub fn class(mut self, classes: impl Into<String>) -> Self {
        let classes = classes.into();
        if classes.trim().is_empty() {
            self.attrs.shift_remove("class");
        } else {
            self.attrs.insert(Cow::Borrowed("class"), Some(classes));
        }
        self
    }

    /// Append a child node
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child when present
    pub fn child_opt<N: Into<Node>>(self, child: Option<N>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Append several children
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Append trusted markup
    pub fn raw(self, html: impl Into<String>) -> Self {
        self.child(Node::Raw(html.into()))
    }

    // =====================================================================
    // Mutation
    // =====================================================================

    /// Set an attribute in place
    pub fn set_attr(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        self.attrs.insert(name.into(), Some(value.into()));
    }

    /// Set or clear a boolean attribute in place
    pub fn set_bool_attr(&mut self, name: impl Into<Cow<'static, str>>, on: bool) {
        let name = name.into();
        if on {
            self.attrs.insert(name, None);
        } else {
            self.attrs.shift_remove(&name);
        }
    }

    /// Remove an attribute, returning true if it was present
    pub fn remove_attr(&mut self, name: &str) -> bool {
        self.attrs.shift_remove(name).is_some()
    }

    /// Add a class token if missing
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let classes = match self.attr_value("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr("class", classes);
    }

    /// Remove a class token if present
    pub fn remove_class(&mut self, class: &str) {
        if !self.has_class(class) {
            return;
        }
        let classes: Vec<&str> = self.classes().filter(|c| *c != class).collect();
        let classes = classes.join(" ");
        if classes.is_empty() {
            self.attrs.shift_remove("class");
        } else {
            self.set_attr("class", classes);
        }
    }

    /// Add or remove a class token
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Replace every child
    pub fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    /// Detach every descendant element matching `predicate`
    ///
    /// Returns the number of detached elements. `self` is never detached.
    pub fn remove_where(&mut self, predicate: impl Fn(&Element) -> bool + Copy) -> usize {
        let before = self.children.len();
        self.children.retain(|child| match child {
            Node::Element(element) => !predicate(element),
            _ => true,
        });
        let mut removed = before - self.children.len();

        for child in &mut self.children {
            if let Node::Element(element) = child {
                removed += element.remove_where(predicate);
            }
        }
        removed
    }

    // =====================================================================
    // Queries
    // =====================================================================

    /// Tag name
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Attribute value; boolean attributes read as `""`
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .get(name)
            .map(|value| value.as_deref().unwrap_or(""))
    }

    /// Returns true if the attribute is present
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Class tokens in order
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr_value("class").unwrap_or("").split_whitespace()
    }

    /// Returns true if the class attribute contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Child nodes
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of every descendant text node
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.collect_text(out),
                Node::Text(text) => out.push_str(text),
                Node::Raw(_) => {}
            }
        }
    }

    /// First element in depth-first order (self included) matching `predicate`
    pub fn find(&self, predicate: impl Fn(&Element) -> bool + Copy) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find_map(|child| child.find(predicate))
    }

    /// Mutable variant of [`Element::find`]
    pub fn find_mut(
        &mut self,
        predicate: impl Fn(&Element) -> bool + Copy,
    ) -> Option<&mut Element> {
        if predicate(self) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Node::Element(element) = child {
                if let Some(found) = element.find_mut(predicate) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Every element in depth-first order (self included) matching `predicate`
    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool + Copy) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_matching(predicate, &mut found);
        found
    }

    fn collect_matching<'a>(
        &'a self,
        predicate: impl Fn(&Element) -> bool + Copy,
        found: &mut Vec<&'a Element>,
    ) {
        if predicate(self) {
            found.push(self);
        }
        for child in self.children.iter().filter_map(Node::as_element) {
            child.collect_matching(predicate, found);
        }
    }

    /// Child-index paths of every element (self included, as the empty path)
    /// matching `predicate`, in depth-first order
    pub fn paths_where(&self, predicate: impl Fn(&Element) -> bool + Copy) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        self.collect_paths(predicate, &mut Vec::new(), &mut paths);
        paths
    }

    fn collect_paths(
        &self,
        predicate: impl Fn(&Element) -> bool + Copy,
        prefix: &mut Vec<usize>,
        paths: &mut Vec<Vec<usize>>,
    ) {
        if predicate(self) {
            paths.push(prefix.clone());
        }
        for (index, child) in self.children.iter().enumerate() {
            if let Node::Element(element) = child {
                prefix.push(index);
                element.collect_paths(predicate, prefix, paths);
                prefix.pop();
            }
        }
    }

    /// Element at a child-index path; the empty path is `self`
    pub fn at_path(&self, path: &[usize]) -> Option<&Element> {
        match path.split_first() {
            None => Some(self),
            Some((index, rest)) => match self.children.get(*index)? {
                Node::Element(element) => element.at_path(rest),
                _ => None,
            },
        }
    }

    /// Mutable variant of [`Element::at_path`]
    pub fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        match path.split_first() {
            None => Some(self),
            Some((index, rest)) => match self.children.get_mut(*index)? {
                Node::Element(element) => element.at_path_mut(rest),
                _ => None,
            },
        }
    }

    /// Detach the element at a child-index path
    ///
    /// Returns `None` for the empty path or when no element sits there.
    pub fn remove_at_path(&mut self, path: &[usize]) -> Option<Element> {
        let (index, parent) = path.split_last()?;
        let parent = self.at_path_mut(parent)?;
        if !matches!(parent.children.get(*index), Some(Node::Element(_))) {
            return None;
        }
        match parent.children.remove(*index) {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// First element whose attribute `name` equals `value`
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Element> {
        self.find(|element| element.attr_value(name) == Some(value))
    }

    /// Mutable variant of [`Element::find_by_attr`]
    pub fn find_by_attr_mut(&mut self, name: &str, value: &str) -> Option<&mut Element> {
        self.find_mut(|element| element.attr_value(name) == Some(value))
    }

    // =====================================================================
    // Rendering
    // =====================================================================

    /// Render to an HTML string
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                escape_attr(value, out);
                out.push('"');
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
