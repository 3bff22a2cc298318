//! Named icons accepted by component options

use better_ui_core::{el, option_set, Element, Node};
use better_ui_icons as lucide;

option_set! {
    /// Lucide icon name
    pub enum Icon: "icon" {
        Calendar => "calendar",
        Check => "check",
        ChevronDown => "chevron-down",
        ChevronRight => "chevron-right",
        ChevronUp => "chevron-up",
        CircleAlert => "circle-alert",
        CircleCheck => "circle-check",
        CircleX => "circle-x",
        DollarSign => "dollar-sign",
        Eye => "eye",
        EyeOff => "eye-off",
        Globe => "globe",
        House => "house",
        #[default]
        Info => "info",
        Link => "link",
        LoaderCircle => "loader-circle",
        Lock => "lock",
        Mail => "mail",
        Menu => "menu",
        Percent => "percent",
        Phone => "phone",
        Plus => "plus",
        Search => "search",
        Settings => "settings",
        TriangleAlert => "triangle-alert",
        User => "user",
        X => "x",
    }
}

impl Icon {
    /// SVG inner elements
    pub fn markup(self) -> &'static str {
        match self {
            Icon::Calendar => lucide::CALENDAR,
            Icon::Check => lucide::CHECK,
            Icon::ChevronDown => lucide::CHEVRON_DOWN,
            Icon::ChevronRight => lucide::CHEVRON_RIGHT,
            Icon::ChevronUp => lucide::CHEVRON_UP,
            Icon::CircleAlert => lucide::CIRCLE_ALERT,
            Icon::CircleCheck => lucide::CIRCLE_CHECK,
            Icon::CircleX => lucide::CIRCLE_X,
            Icon::DollarSign => lucide::DOLLAR_SIGN,
            Icon::Eye => lucide::EYE,
            Icon::EyeOff => lucide::EYE_OFF,
            Icon::Globe => lucide::GLOBE,
            Icon::House => lucide::HOUSE,
            Icon::Info => lucide::INFO,
            Icon::Link => lucide::LINK,
            Icon::LoaderCircle => lucide::LOADER_CIRCLE,
            Icon::Lock => lucide::LOCK,
            Icon::Mail => lucide::MAIL,
            Icon::Menu => lucide::MENU,
            Icon::Percent => lucide::PERCENT,
            Icon::Phone => lucide::PHONE,
            Icon::Plus => lucide::PLUS,
            Icon::Search => lucide::SEARCH,
            Icon::Settings => lucide::SETTINGS,
            Icon::TriangleAlert => lucide::TRIANGLE_ALERT,
            Icon::User => lucide::USER,
            Icon::X => lucide::X,
        }
    }

    /// Complete SVG tag
    pub fn svg(self, class: &str) -> String {
        lucide::to_svg(self.markup(), class)
    }

    /// Raw node holding the SVG tag
    pub fn node(self, class: &str) -> Node {
        Node::raw(self.svg(class))
    }
}

/// `<span>` wrapper holding an icon, sized by `class`
pub(crate) fn icon_span(icon: Icon, class: &str) -> Element {
    el("span")
        .class(class.to_string())
        .child(icon.node("w-full h-full"))
}
