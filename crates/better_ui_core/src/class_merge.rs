//! Tailwind-aware class merging
//!
//! [`merge`] joins class fragments into one class string and resolves
//! utility conflicts: among classes that set the same CSS property group
//! under the same modifiers, the last one wins.
//!
//! # Algorithm
//!
//! 1. Fragments are flattened and joined, blank entries dropped.
//! 2. Each token is parsed into modifiers (`hover:`, `lg:`, ...), an
//!    important flag and the bare utility. A leading `-` (negative value)
//!    does not change the property group.
//! 3. The utility is classified into a property group (`px`, `bg-color`,
//!    `font-size`, ...). The conflict key is the sorted modifier list, the
//!    important flag and the group.
//! 4. Tokens are scanned from the end. A token whose key was already seen
//!    is dropped. Keeping a token also marks the groups it overrides
//!    (`p-4` overrides earlier `px-*`, `py-*`, `pt-*`, ...).
//! 5. Survivors keep their original relative order.
//!
//! Unknown tokens are never dropped for conflicts; only an exact duplicate
//! of an unknown token collapses to its last occurrence.
//!
//! # Example
//!
//! ```rust
//! use better_ui_core::merge;
//!
//! assert_eq!(merge(["px-4 py-2", "px-6"]), "py-2 px-6");
//! assert_eq!(
//!     merge(["hover:bg-red-500", "bg-blue-500"]),
//!     "hover:bg-red-500 bg-blue-500"
//! );
//! assert_eq!(merge(["p-2", "", "text-sm text-lg"]), "p-2 text-lg");
//! ```

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

// =========================================================================
// Fragment Input
// =========================================================================

/// Anything that can contribute class tokens to [`merge`]
///
/// Implemented for strings, `Option`s of fragments (`None` contributes
/// nothing) and sequences of fragments, so heterogeneous inputs can be
/// combined with [`class_names!`](crate::class_names).
pub trait IntoClasses {
    /// Append this fragment's classes to `buf`, space separated
    fn append_to(self, buf: &mut String);
}

fn push_fragment(buf: &mut String, fragment: &str) {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return;
    }
    if !buf.is_empty() {
        buf.push(' ');
    }
    buf.push_str(fragment);
}

impl IntoClasses for &str {
    fn append_to(self, buf: &mut String) {
        push_fragment(buf, self);
    }
}

impl IntoClasses for String {
    fn append_to(self, buf: &mut String) {
        push_fragment(buf, &self);
    }
}

impl IntoClasses for &String {
    fn append_to(self, buf: &mut String) {
        push_fragment(buf, self);
    }
}

impl<T: IntoClasses> IntoClasses for Option<T> {
    fn append_to(self, buf: &mut String) {
        if let Some(fragment) = self {
            fragment.append_to(buf);
        }
    }
}

impl<T: IntoClasses> IntoClasses for Vec<T> {
    fn append_to(self, buf: &mut String) {
        for fragment in self {
            fragment.append_to(buf);
        }
    }
}

impl<T: IntoClasses, const N: usize> IntoClasses for [T; N] {
    fn append_to(self, buf: &mut String) {
        for fragment in self {
            fragment.append_to(buf);
        }
    }
}

impl<T: IntoClasses + Copy> IntoClasses for &[T] {
    fn append_to(self, buf: &mut String) {
        for &fragment in self {
            fragment.append_to(buf);
        }
    }
}

/// Merge heterogeneous class fragments
///
/// ```rust
/// use better_ui_core::class_names;
///
/// let extra: Option<&str> = None;
/// let sizes = vec!["px-3", "py-1"];
/// assert_eq!(class_names!["px-2 font-bold", sizes, extra], "font-bold px-3 py-1");
/// ```
#[macro_export]
macro_rules! class_names {
    ($($fragment:expr),* $(,)?) => {{
        let mut buf = ::std::string::String::new();
        $( $crate::class_merge::IntoClasses::append_to($fragment, &mut buf); )*
        $crate::class_merge::merge_str(&buf)
    }};
}

/// Merge class fragments, later conflicting utilities win
pub fn merge<I>(fragments: I) -> String
where
    I: IntoIterator,
    I::Item: IntoClasses,
{
    let mut buf = String::new();
    for fragment in fragments {
        fragment.append_to(&mut buf);
    }
    merge_str(&buf)
}

/// Merge a single whitespace-separated class string
pub fn merge_str(classes: &str) -> String {
    let tokens: Vec<&str> = classes.split_whitespace().collect();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    for &token in tokens.iter().rev() {
        let parsed = ParsedClass::parse(token);
        let scope = parsed.scope();

        match classify(parsed.utility) {
            Some(group) => {
                if !seen.insert(format!("{scope}{group}")) {
                    tracing::trace!(class = token, group, "dropped overridden class");
                    continue;
                }
                for overridden in overridden_groups(group) {
                    seen.insert(format!("{scope}{overridden}"));
                }
            }
            None => {
                if !seen.insert(format!("{scope}?{}", parsed.raw_utility)) {
                    continue;
                }
            }
        }
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

// =========================================================================
// Token Parsing
// =========================================================================

/// A class token split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedClass<'a> {
    modifiers: SmallVec<[&'a str; 2]>,
    important: bool,
    /// Utility with any important marker removed, sign kept
    raw_utility: &'a str,
    /// Utility with important marker and negative sign removed
    utility: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(token: &'a str) -> Self {
        let mut modifiers: SmallVec<[&'a str; 2]> = SmallVec::new();
        let mut depth = 0i32;
        let mut start = 0;

        for (index, ch) in token.char_indices() {
            match ch {
                '[' | '(' => depth += 1,
                ']' | ')' => depth -= 1,
                ':' if depth == 0 => {
                    modifiers.push(&token[start..index]);
                    start = index + 1;
                }
                _ => {}
            }
        }

        let mut utility = &token[start..];
        let mut important = false;
        if let Some(rest) = utility.strip_prefix('!') {
            utility = rest;
            important = true;
        } else if let Some(rest) = utility.strip_suffix('!') {
            utility = rest;
            important = true;
        }

        let raw_utility = utility;
        let utility = utility
            .strip_prefix('-')
            .filter(|rest| !rest.is_empty())
            .unwrap_or(utility);

        Self {
            modifiers,
            important,
            raw_utility,
            utility,
        }
    }

    /// Conflict scope: sorted modifiers plus the important flag
    fn scope(&self) -> String {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort_unstable();

        let mut scope = String::new();
        for modifier in modifiers {
            scope.push_str(modifier);
            scope.push(':');
        }
        if self.important {
            scope.push('!');
        }
        scope
    }
}

// =========================================================================
// Property Groups
// =========================================================================

/// Classify a bare utility into its property group
fn classify(utility: &str) -> Option<&'static str> {
    if let Some(group) = keyword_group(utility) {
        return Some(group);
    }

    // Longest prefixes first so `min-w-` beats `w-`-style ambiguity and
    // `justify-items-` beats `justify-`.
    for &(prefix, group) in PREFIX_GROUPS {
        if let Some(value) = utility.strip_prefix(prefix) {
            if !value.is_empty() {
                return Some(group.resolve(value));
            }
        }
    }
    None
}

/// Standalone utilities that carry no value
fn keyword_group(utility: &str) -> Option<&'static str> {
    let group = match utility {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid" | "inline-grid"
        | "table" | "inline-table" | "table-row" | "table-cell" | "contents" | "flow-root"
        | "list-item" | "hidden" => "display",
        "static" | "fixed" | "absolute" | "relative" | "sticky" => "position",
        "visible" | "invisible" | "collapse" => "visibility",
        "italic" | "not-italic" => "font-style",
        "underline" | "overline" | "line-through" | "no-underline" => "text-decoration",
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => "text-transform",
        "truncate" => "text-overflow",
        "list-inside" | "list-outside" => "list-position",
        "antialiased" | "subpixel-antialiased" => "font-smoothing",
        "sr-only" | "not-sr-only" => "sr",
        "isolate" | "isolation-auto" => "isolation",
        "container" => "container",
        "border" => "border-w",
        "rounded" => "rounded",
        "shadow" => "shadow",
        "ring" => "ring-w",
        "ring-inset" => "ring-inset",
        "outline" => "outline-style",
        "transition" => "transition",
        "grow" => "grow",
        "shrink" => "shrink",
        "resize" => "resize",
        "divide-x" => "divide-x",
        "divide-y" => "divide-y",
        "transform" | "transform-gpu" | "transform-none" => "transform",
        _ => return None,
    };
    Some(group)
}

/// How a prefixed utility's value selects its group
#[derive(Clone, Copy)]
enum Resolver {
    /// Every value belongs to one group
    Fixed(&'static str),
    Text,
    Background,
    Border,
    Rounded,
    Font,
    Flex,
    Ring,
    RingOffset,
    Outline,
    Shadow,
    Divide,
    Stroke,
    Decoration,
}

impl Resolver {
    fn resolve(self, value: &str) -> &'static str {
        match self {
            Resolver::Fixed(group) => group,
            Resolver::Text => text_group(value),
            Resolver::Background => background_group(value),
            Resolver::Border => border_group(value),
            Resolver::Rounded => rounded_group(value),
            Resolver::Font => match value {
                "thin" | "extralight" | "light" | "normal" | "medium" | "semibold" | "bold"
                | "extrabold" | "black" => "font-weight",
                _ => "font-family",
            },
            Resolver::Flex => match value {
                "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
                "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
                _ => "flex",
            },
            Resolver::Ring => {
                if is_number(value) || is_arbitrary_length(value) {
                    "ring-w"
                } else {
                    "ring-color"
                }
            }
            Resolver::RingOffset => {
                if is_number(value) || is_arbitrary_length(value) {
                    "ring-offset-w"
                } else {
                    "ring-offset-color"
                }
            }
            Resolver::Outline => match value {
                "none" | "dashed" | "dotted" | "double" | "hidden" => "outline-style",
                _ if is_number(value) || is_arbitrary_length(value) => "outline-w",
                _ => "outline-color",
            },
            Resolver::Shadow => match value {
                "2xs" | "xs" | "sm" | "md" | "lg" | "xl" | "2xl" | "inner" | "none" => "shadow",
                _ => "shadow-color",
            },
            Resolver::Divide => match value {
                "solid" | "dashed" | "dotted" | "double" | "none" => "divide-style",
                _ if value.starts_with("x") => "divide-x",
                _ if value.starts_with("y") => "divide-y",
                _ => "divide-color",
            },
            Resolver::Stroke => {
                if is_number(value) {
                    "stroke-w"
                } else {
                    "stroke"
                }
            }
            Resolver::Decoration => match value {
                "solid" | "double" | "dotted" | "dashed" | "wavy" => "decoration-style",
                "auto" | "from-font" => "decoration-thickness",
                _ if is_number(value) || is_arbitrary_length(value) => "decoration-thickness",
                _ => "decoration-color",
            },
        }
    }
}

use self::Resolver::Fixed;

/// Prefix table, longer prefixes before the shorter ones they extend
const PREFIX_GROUPS: &[(&str, Resolver)] = &[
    // Spacing
    ("px-", Fixed("px")),
    ("py-", Fixed("py")),
    ("ps-", Fixed("ps")),
    ("pe-", Fixed("pe")),
    ("pt-", Fixed("pt")),
    ("pr-", Fixed("pr")),
    ("pb-", Fixed("pb")),
    ("pl-", Fixed("pl")),
    ("p-", Fixed("p")),
    ("mx-", Fixed("mx")),
    ("my-", Fixed("my")),
    ("ms-", Fixed("ms")),
    ("me-", Fixed("me")),
    ("mt-", Fixed("mt")),
    ("mr-", Fixed("mr")),
    ("mb-", Fixed("mb")),
    ("ml-", Fixed("ml")),
    ("m-", Fixed("m")),
    ("space-x-", Fixed("space-x")),
    ("space-y-", Fixed("space-y")),
    ("gap-x-", Fixed("gap-x")),
    ("gap-y-", Fixed("gap-y")),
    ("gap-", Fixed("gap")),
    // Sizing
    ("min-w-", Fixed("min-w")),
    ("max-w-", Fixed("max-w")),
    ("min-h-", Fixed("min-h")),
    ("max-h-", Fixed("max-h")),
    ("size-", Fixed("size")),
    ("w-", Fixed("w")),
    ("h-", Fixed("h")),
    // Positioning
    ("inset-x-", Fixed("inset-x")),
    ("inset-y-", Fixed("inset-y")),
    ("inset-", Fixed("inset")),
    ("top-", Fixed("top")),
    ("right-", Fixed("right")),
    ("bottom-", Fixed("bottom")),
    ("left-", Fixed("left")),
    ("start-", Fixed("start")),
    ("end-", Fixed("end")),
    ("z-", Fixed("z")),
    // Flexbox and grid
    ("flex-", Resolver::Flex),
    ("basis-", Fixed("basis")),
    ("grow-", Fixed("grow")),
    ("shrink-", Fixed("shrink")),
    ("order-", Fixed("order")),
    ("grid-cols-", Fixed("grid-cols")),
    ("grid-rows-", Fixed("grid-rows")),
    ("grid-flow-", Fixed("grid-flow")),
    ("col-span-", Fixed("col-span")),
    ("col-start-", Fixed("col-start")),
    ("col-end-", Fixed("col-end")),
    ("row-span-", Fixed("row-span")),
    ("justify-items-", Fixed("justify-items")),
    ("justify-self-", Fixed("justify-self")),
    ("justify-", Fixed("justify-content")),
    ("items-", Fixed("align-items")),
    ("self-", Fixed("align-self")),
    ("content-", Fixed("align-content")),
    ("place-items-", Fixed("place-items")),
    ("place-content-", Fixed("place-content")),
    ("place-self-", Fixed("place-self")),
    // Typography
    ("text-", Resolver::Text),
    ("font-", Resolver::Font),
    ("leading-", Fixed("leading")),
    ("tracking-", Fixed("tracking")),
    ("whitespace-", Fixed("whitespace")),
    ("break-", Fixed("word-break")),
    ("line-clamp-", Fixed("line-clamp")),
    ("list-", Fixed("list-style")),
    ("underline-offset-", Fixed("underline-offset")),
    ("decoration-", Resolver::Decoration),
    ("placeholder-", Fixed("placeholder-color")),
    ("align-", Fixed("vertical-align")),
    // Backgrounds, borders and effects
    ("bg-", Resolver::Background),
    ("border-", Resolver::Border),
    ("rounded-", Resolver::Rounded),
    ("divide-", Resolver::Divide),
    ("outline-offset-", Fixed("outline-offset")),
    ("outline-", Resolver::Outline),
    ("ring-offset-", Resolver::RingOffset),
    ("ring-", Resolver::Ring),
    ("shadow-", Resolver::Shadow),
    ("opacity-", Fixed("opacity")),
    ("mix-blend-", Fixed("mix-blend")),
    ("blur-", Fixed("blur")),
    ("backdrop-blur-", Fixed("backdrop-blur")),
    ("from-", Fixed("gradient-from")),
    ("via-", Fixed("gradient-via")),
    ("to-", Fixed("gradient-to")),
    // Transitions and transforms
    ("transition-", Fixed("transition")),
    ("duration-", Fixed("duration")),
    ("ease-", Fixed("ease")),
    ("delay-", Fixed("delay")),
    ("animate-", Fixed("animate")),
    ("scale-x-", Fixed("scale-x")),
    ("scale-y-", Fixed("scale-y")),
    ("scale-", Fixed("scale")),
    ("rotate-", Fixed("rotate")),
    ("translate-x-", Fixed("translate-x")),
    ("translate-y-", Fixed("translate-y")),
    ("origin-", Fixed("transform-origin")),
    // Layout and interactivity
    ("overflow-x-", Fixed("overflow-x")),
    ("overflow-y-", Fixed("overflow-y")),
    ("overflow-", Fixed("overflow")),
    ("object-", Fixed("object")),
    ("aspect-", Fixed("aspect")),
    ("cursor-", Fixed("cursor")),
    ("pointer-events-", Fixed("pointer-events")),
    ("select-", Fixed("user-select")),
    ("resize-", Fixed("resize")),
    ("appearance-", Fixed("appearance")),
    ("fill-", Fixed("fill")),
    ("stroke-", Resolver::Stroke),
    ("caret-", Fixed("caret-color")),
    ("accent-", Fixed("accent-color")),
];

fn text_group(value: &str) -> &'static str {
    match value {
        "xs" | "sm" | "base" | "lg" | "xl" | "2xl" | "3xl" | "4xl" | "5xl" | "6xl" | "7xl"
        | "8xl" | "9xl" => "font-size",
        "left" | "center" | "right" | "justify" | "start" | "end" => "text-align",
        "wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
        "ellipsis" | "clip" => "text-overflow",
        _ if is_arbitrary_length(value) => "font-size",
        _ => "text-color",
    }
}

fn background_group(value: &str) -> &'static str {
    match value {
        "fixed" | "local" | "scroll" => "bg-attachment",
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => "bg-position",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        "auto" | "cover" | "contain" => "bg-size",
        "none" => "bg-image",
        _ if value.starts_with("clip-") => "bg-clip",
        _ if value.starts_with("origin-") => "bg-origin",
        _ if value.starts_with("opacity-") => "bg-opacity",
        _ if value.starts_with("gradient-to-") || value.starts_with("linear-") => "bg-image",
        _ => "bg-color",
    }
}

const BORDER_SIDES: &[(&str, &str, &str)] = &[
    ("x", "border-w-x", "border-color-x"),
    ("y", "border-w-y", "border-color-y"),
    ("s", "border-w-s", "border-color-s"),
    ("e", "border-w-e", "border-color-e"),
    ("t", "border-w-t", "border-color-t"),
    ("r", "border-w-r", "border-color-r"),
    ("b", "border-w-b", "border-color-b"),
    ("l", "border-w-l", "border-color-l"),
];

fn border_group(value: &str) -> &'static str {
    for &(side, width_group, color_group) in BORDER_SIDES {
        if value == side {
            return width_group;
        }
        if let Some(side_value) = value
            .strip_prefix(side)
            .and_then(|rest| rest.strip_prefix('-'))
        {
            return if is_number(side_value) || is_arbitrary_length(side_value) {
                width_group
            } else {
                color_group
            };
        }
    }

    match value {
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => "border-style",
        "collapse" | "separate" => "border-collapse",
        _ if value.starts_with("spacing-") => "border-spacing",
        _ if value.starts_with("opacity-") => "border-opacity",
        _ if is_number(value) || is_arbitrary_length(value) => "border-w",
        _ => "border-color",
    }
}

const ROUNDED_SIDES: &[(&str, &str)] = &[
    ("ss", "rounded-ss"),
    ("se", "rounded-se"),
    ("ee", "rounded-ee"),
    ("es", "rounded-es"),
    ("tl", "rounded-tl"),
    ("tr", "rounded-tr"),
    ("br", "rounded-br"),
    ("bl", "rounded-bl"),
    ("s", "rounded-s"),
    ("e", "rounded-e"),
    ("t", "rounded-t"),
    ("r", "rounded-r"),
    ("b", "rounded-b"),
    ("l", "rounded-l"),
];

fn rounded_group(value: &str) -> &'static str {
    for &(side, group) in ROUNDED_SIDES {
        if value == side || value.strip_prefix(side).is_some_and(|rest| rest.starts_with('-')) {
            return group;
        }
    }
    "rounded"
}

/// Groups a class overrides in addition to its own
fn overridden_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "size" => &["w", "h"],
        "inset" => &[
            "inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left",
        ],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "overflow" => &["overflow-x", "overflow-y"],
        "scale" => &["scale-x", "scale-y"],
        "flex" => &["basis", "grow", "shrink"],
        "rounded" => &[
            "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
            "rounded-ss", "rounded-se", "rounded-ee", "rounded-es", "rounded-tl", "rounded-tr",
            "rounded-br", "rounded-bl",
        ],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x", "border-w-y", "border-w-s", "border-w-e", "border-w-t", "border-w-r",
            "border-w-b", "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x",
            "border-color-y",
            "border-color-s",
            "border-color-e",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        _ => &[],
    }
}

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}

fn is_arbitrary_length(value: &str) -> bool {
    let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) else {
        return false;
    };
    if inner.starts_with("length:") {
        return true;
    }
    let number = inner.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
    let unit = &inner[number.len()..];
    is_number(number) && matches!(unit, "px" | "rem" | "em" | "%" | "vh" | "vw" | "ch" | "pt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_wins_within_group() {
        let merged = merge(["px-4 py-2", "px-6"]);
        assert_eq!(merged, "py-2 px-6");
        assert!(merged.split(' ').any(|c| c == "px-6"));
        assert!(!merged.split(' ').any(|c| c == "px-4"));
    }

    #[test]
    fn test_modifiers_scope_conflicts() {
        assert_eq!(
            merge(["hover:bg-red-500", "bg-blue-500"]),
            "hover:bg-red-500 bg-blue-500"
        );
        assert_eq!(
            merge(["hover:bg-red-500", "hover:bg-blue-500"]),
            "hover:bg-blue-500"
        );
        assert_eq!(merge(["lg:px-4", "px-2", "lg:px-8"]), "px-2 lg:px-8");
    }

    #[test]
    fn test_modifier_order_is_irrelevant() {
        assert_eq!(
            merge(["hover:focus:text-red-500", "focus:hover:text-blue-500"]),
            "focus:hover:text-blue-500"
        );
    }

    #[test]
    fn test_blank_and_missing_fragments_dropped() {
        let none: Option<&str> = None;
        assert_eq!(merge([Some("p-2"), none, Some("   ")]), "p-2");
        assert_eq!(merge(Vec::<&str>::new()), "");
        assert_eq!(merge(["  px-2   py-1  "]), "px-2 py-1");
    }

    #[test]
    fn test_nested_fragments_flatten() {
        let merged = merge([vec!["px-2", "py-1"], vec!["px-3"]]);
        assert_eq!(merged, "py-1 px-3");
    }

    #[test]
    fn test_class_names_macro_mixes_types() {
        let owned = String::from("text-sm");
        let merged = crate::class_names!["text-lg font-bold", owned, Some("p-1"), vec!["p-2"]];
        assert_eq!(merged, "font-bold text-sm p-2");
    }

    #[test]
    fn test_shorthand_overrides_longhand() {
        assert_eq!(merge(["px-4 py-2 pt-1", "p-6"]), "p-6");
        // Longhand after shorthand is a refinement, both stay
        assert_eq!(merge(["p-6", "px-4"]), "p-6 px-4");
        assert_eq!(merge(["pl-2", "px-3"]), "px-3");
        assert_eq!(merge(["mt-2 mb-2", "my-4"]), "my-4");
    }

    #[test]
    fn test_text_groups_are_distinct() {
        assert_eq!(
            merge(["text-sm text-red-500 text-center", "text-lg"]),
            "text-red-500 text-center text-lg"
        );
        assert_eq!(
            merge(["text-sm text-red-500", "text-white"]),
            "text-sm text-white"
        );
        assert_eq!(merge(["text-left", "text-right"]), "text-right");
    }

    #[test]
    fn test_border_width_and_color_are_distinct() {
        assert_eq!(
            merge(["border border-grayscale-300", "border-danger-500"]),
            "border border-danger-500"
        );
        assert_eq!(merge(["border", "border-2"]), "border-2");
        assert_eq!(
            merge(["border-l-4 border-l-primary-500", "border-l-2"]),
            "border-l-primary-500 border-l-2"
        );
        assert_eq!(merge(["border-t-2", "border-4"]), "border-4");
        assert_eq!(merge(["border-solid", "border-dashed"]), "border-dashed");
        assert_eq!(
            merge(["border-transparent", "border-t"]),
            "border-transparent border-t"
        );
    }

    #[test]
    fn test_background_groups() {
        assert_eq!(
            merge(["bg-cover bg-center bg-red-500", "bg-white"]),
            "bg-cover bg-center bg-white"
        );
        assert_eq!(merge(["bg-no-repeat", "bg-repeat-x"]), "bg-repeat-x");
    }

    #[test]
    fn test_rounded_sides() {
        assert_eq!(merge(["rounded-t-lg", "rounded-md"]), "rounded-md");
        assert_eq!(merge(["rounded-md", "rounded-t-none"]), "rounded-md rounded-t-none");
        assert_eq!(merge(["rounded-tl-sm", "rounded-l-lg"]), "rounded-l-lg");
        assert_eq!(merge(["rounded", "rounded-full"]), "rounded-full");
    }

    #[test]
    fn test_font_weight_and_family() {
        assert_eq!(
            merge(["font-sans font-medium", "font-bold"]),
            "font-sans font-bold"
        );
        assert_eq!(merge(["font-sans", "font-mono"]), "font-mono");
    }

    #[test]
    fn test_ring_and_shadow_groups() {
        assert_eq!(
            merge(["ring-2 ring-primary-500", "ring-danger-500"]),
            "ring-2 ring-danger-500"
        );
        assert_eq!(merge(["ring", "ring-4"]), "ring-4");
        assert_eq!(merge(["shadow-sm", "shadow-lg"]), "shadow-lg");
        assert_eq!(merge(["shadow", "shadow-none"]), "shadow-none");
        assert_eq!(
            merge(["ring-offset-2", "ring-offset-white"]),
            "ring-offset-2 ring-offset-white"
        );
    }

    #[test]
    fn test_display_keywords_conflict() {
        assert_eq!(merge(["flex", "hidden"]), "hidden");
        assert_eq!(merge(["hidden", "md:flex"]), "hidden md:flex");
        assert_eq!(merge(["relative", "sticky"]), "sticky");
        assert_eq!(merge(["list-disc list-inside", "list-none"]), "list-inside list-none");
    }

    #[test]
    fn test_flex_subgroups() {
        assert_eq!(
            merge(["flex-row flex-wrap", "flex-col"]),
            "flex-wrap flex-col"
        );
        assert_eq!(merge(["flex-1", "flex-none"]), "flex-none");
    }

    #[test]
    fn test_negative_values_share_group() {
        assert_eq!(merge(["-mt-2", "mt-4"]), "mt-4");
        assert_eq!(merge(["mt-4", "-mt-2"]), "-mt-2");
    }

    #[test]
    fn test_important_scopes_conflicts() {
        assert_eq!(merge(["!px-2", "px-4"]), "!px-2 px-4");
        assert_eq!(merge(["!px-2", "!px-4"]), "!px-4");
        assert_eq!(merge(["px-2!", "!px-4"]), "!px-4");
    }

    #[test]
    fn test_arbitrary_values() {
        assert_eq!(merge(["text-[14px]", "text-sm"]), "text-sm");
        assert_eq!(merge(["text-[#fff]", "text-sm"]), "text-[#fff] text-sm");
        assert_eq!(merge(["w-[10px]", "w-4"]), "w-4");
        assert_eq!(
            merge(["[&::-webkit-inner-spin-button]:appearance-none", "appearance-auto"]),
            "[&::-webkit-inner-spin-button]:appearance-none appearance-auto"
        );
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        assert_eq!(
            merge(["card-widget px-2", "js-hook px-4"]),
            "card-widget js-hook px-4"
        );
        assert_eq!(merge(["card-widget", "card-widget"]), "card-widget");
        assert_eq!(
            merge(["[appearance:textfield]", "[appearance:textfield]"]),
            "[appearance:textfield]"
        );
    }

    #[test]
    fn test_cursor_override() {
        assert_eq!(
            merge(["cursor-pointer", "cursor-not-allowed"]),
            "cursor-not-allowed"
        );
    }

    #[test]
    fn test_parse_splits_modifiers_outside_brackets() {
        let parsed = ParsedClass::parse("md:hover:[&>*]:!-mx-2");
        assert_eq!(parsed.modifiers.as_slice(), &["md", "hover", "[&>*]"]);
        assert!(parsed.important);
        assert_eq!(parsed.raw_utility, "-mx-2");
        assert_eq!(parsed.utility, "mx-2");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("px-4"), Some("px"));
        assert_eq!(classify("min-w-0"), Some("min-w"));
        assert_eq!(classify("justify-items-center"), Some("justify-items"));
        assert_eq!(classify("justify-between"), Some("justify-content"));
        assert_eq!(classify("border-x-2"), Some("border-w-x"));
        assert_eq!(classify("border-slate-200"), Some("border-color"));
        assert_eq!(classify("border-white/20"), Some("border-color"));
        assert_eq!(classify("text-danger-600"), Some("text-color"));
        assert_eq!(classify("unknown-thing"), None);
    }
}
