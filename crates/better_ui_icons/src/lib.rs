//! # BetterUi Icons
//!
//! The Lucide icons BetterUi components render inline: dismiss buttons,
//! loading spinners, password visibility toggles, message severity icons
//! and the decorative icons of buttons, nav items and inputs.
//!
//! ```rust
//! use better_ui_icons::{to_svg, X};
//!
//! let svg = to_svg(X, "w-4 h-4");
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains(r#"class="w-4 h-4""#));
//! ```

pub mod icons;

pub use icons::*;

/// Wrap icon inner elements in a complete, decorative SVG tag
///
/// Icons are stroked with `currentColor`, so text color utilities on the
/// SVG or its parent color the icon.
pub fn to_svg(icon: &str, class: &str) -> String {
    let mut svg = String::with_capacity(icon.len() + 220);
    svg.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#);
    if !class.is_empty() {
        svg.push_str(" class=\"");
        svg.push_str(class);
        svg.push('"');
    }
    svg.push_str(r#" aria-hidden="true">"#);
    svg.push_str(icon);
    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_svg_wraps_inner_elements() {
        let svg = to_svg(CHEVRON_UP, "");
        assert!(svg.ends_with(r#"aria-hidden="true"><path d="m18 15-6-6-6 6"/></svg>"#));
        assert!(!svg.contains("class="));
    }

    #[test]
    fn test_to_svg_with_class() {
        let svg = to_svg(X, "w-4 h-4 shrink-0");
        assert!(svg.contains(r#"class="w-4 h-4 shrink-0" aria-hidden="true">"#));
        assert!(svg.contains(X));
    }
}
