//! Component rendering

use better_ui_core::Element;

/// A configured component that renders to an element tree
///
/// Rendering is pure: the same configuration always produces the same
/// tree, and a component can be rendered any number of times.
pub trait Component {
    /// Build the element tree
    fn render(&self) -> Element;

    /// Returns false when the component has nothing to show
    ///
    /// [`to_html`](Component::to_html) renders an empty string for such
    /// components, and pages skip them.
    fn should_render(&self) -> bool {
        true
    }

    /// Render to an HTML string
    fn to_html(&self) -> String {
        if self.should_render() {
            self.render().to_html()
        } else {
            String::new()
        }
    }
}
