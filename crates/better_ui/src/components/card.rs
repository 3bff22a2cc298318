//! Card component
//!
//! A content container with optional header and footer sections. Section
//! padding follows the size and can be switched off per section, which is
//! handy for edge-to-edge tables or images.

use better_ui_core::{
    class_names, el, one_or_many, option_set, Element, Node, Size, SizeRecord, Variant,
};
use serde::Deserialize;

use crate::render::Component;

option_set! {
    /// Visual treatment of a card
    pub enum CardStyle: "style" {
        #[default]
        Solid => "solid",
        Soft => "soft",
        Outline => "outline",
        Ghost => "ghost",
        /// Heavy colored border on a white surface
        Bordered => "bordered",
    }
}

const BASE: &str = "rounded-xl overflow-hidden";
const SHADOW: &str = "shadow-sm";
const DIVIDER: &str = "border-black/5";

fn solid(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "bg-primary-600 text-white",
        Variant::Secondary => "bg-secondary-600 text-white",
        Variant::Accent => "bg-accent-600 text-white",
        Variant::Success => "bg-success-600 text-white",
        Variant::Danger => "bg-danger-600 text-white",
        Variant::Warning => "bg-warning-600 text-white",
        Variant::Info => "bg-info-600 text-white",
        Variant::Light => "bg-white text-grayscale-900",
        Variant::Dark => "bg-grayscale-900 text-white",
    }
}

fn soft(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "bg-primary-50 text-primary-900",
        Variant::Secondary => "bg-secondary-50 text-secondary-900",
        Variant::Accent => "bg-accent-50 text-accent-900",
        Variant::Success => "bg-success-50 text-success-900",
        Variant::Danger => "bg-danger-50 text-danger-900",
        Variant::Warning => "bg-warning-50 text-warning-900",
        Variant::Info => "bg-info-50 text-info-900",
        Variant::Light => "bg-grayscale-50 text-grayscale-900",
        Variant::Dark => "bg-grayscale-800 text-grayscale-50",
    }
}

fn outline(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "bg-white border border-primary-300 text-grayscale-900",
        Variant::Secondary => "bg-white border border-secondary-300 text-grayscale-900",
        Variant::Accent => "bg-white border border-accent-300 text-grayscale-900",
        Variant::Success => "bg-white border border-success-300 text-grayscale-900",
        Variant::Danger => "bg-white border border-danger-300 text-grayscale-900",
        Variant::Warning => "bg-white border border-warning-300 text-grayscale-900",
        Variant::Info => "bg-white border border-info-300 text-grayscale-900",
        Variant::Light => "bg-white border border-grayscale-200 text-grayscale-900",
        Variant::Dark => "bg-white border border-grayscale-700 text-grayscale-900",
    }
}

fn ghost(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "bg-transparent text-primary-900",
        Variant::Secondary => "bg-transparent text-secondary-900",
        Variant::Accent => "bg-transparent text-accent-900",
        Variant::Success => "bg-transparent text-success-900",
        Variant::Danger => "bg-transparent text-danger-900",
        Variant::Warning => "bg-transparent text-warning-900",
        Variant::Info => "bg-transparent text-info-900",
        Variant::Light => "bg-transparent text-grayscale-700",
        Variant::Dark => "bg-transparent text-grayscale-900",
    }
}

fn bordered(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "bg-white border-2 border-primary-500 text-grayscale-900",
        Variant::Secondary => "bg-white border-2 border-secondary-500 text-grayscale-900",
        Variant::Accent => "bg-white border-2 border-accent-500 text-grayscale-900",
        Variant::Success => "bg-white border-2 border-success-500 text-grayscale-900",
        Variant::Danger => "bg-white border-2 border-danger-500 text-grayscale-900",
        Variant::Warning => "bg-white border-2 border-warning-500 text-grayscale-900",
        Variant::Info => "bg-white border-2 border-info-500 text-grayscale-900",
        Variant::Light => "bg-white border-2 border-grayscale-300 text-grayscale-900",
        Variant::Dark => "bg-white border-2 border-grayscale-900 text-grayscale-900",
    }
}

/// Size fragments of a card; `padding` applies to each section
pub fn size_record(size: Size) -> SizeRecord {
    match size {
        Size::Xs => SizeRecord {
            padding: "p-2",
            text: "text-xs",
            icon: "w-3.5 h-3.5",
            gap: "gap-1",
        },
        Size::Sm => SizeRecord {
            padding: "p-3",
            text: "text-sm",
            icon: "w-4 h-4",
            gap: "gap-2",
        },
        Size::Md => SizeRecord {
            padding: "p-4",
            text: "text-sm",
            icon: "w-5 h-5",
            gap: "gap-3",
        },
        Size::Lg => SizeRecord {
            padding: "p-6",
            text: "text-base",
            icon: "w-5 h-5",
            gap: "gap-4",
        },
        Size::Xl => SizeRecord {
            padding: "p-8",
            text: "text-lg",
            icon: "w-6 h-6",
            gap: "gap-5",
        },
    }
}

fn title_text(size: Size) -> &'static str {
    match size {
        Size::Xs => "text-sm",
        Size::Sm => "text-base",
        Size::Md => "text-lg",
        Size::Lg => "text-xl",
        Size::Xl => "text-2xl",
    }
}

/// Class fragments for the card root, before shadow and overrides
pub fn resolve(variant: Variant, style: CardStyle, size: Size) -> Vec<&'static str> {
    let style = match style {
        CardStyle::Solid => solid(variant),
        CardStyle::Soft => soft(variant),
        CardStyle::Outline => outline(variant),
        CardStyle::Ghost => ghost(variant),
        CardStyle::Bordered => bordered(variant),
    };
    vec![BASE, style, size_record(size).text]
}

/// Card configuration
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Card {
    title: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    header: Vec<Node>,
    #[serde(deserialize_with = "one_or_many")]
    body: Vec<Node>,
    #[serde(deserialize_with = "one_or_many")]
    footer: Vec<Node>,
    variant: Variant,
    style: CardStyle,
    size: Size,
    shadow: bool,
    header_padding: bool,
    body_padding: bool,
    footer_padding: bool,
    id: Option<String>,
    class: Option<String>,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            title: None,
            header: Vec::new(),
            body: Vec::new(),
            footer: Vec::new(),
            variant: Variant::default(),
            style: CardStyle::default(),
            size: Size::default(),
            shadow: true,
            header_padding: true,
            body_padding: true,
            footer_padding: true,
            id: None,
            class: None,
        }
    }
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append header content, after the title
    pub fn header(mut self, content: impl Into<Node>) -> Self {
        self.header.push(content.into());
        self
    }

    pub fn body(mut self, content: impl Into<Node>) -> Self {
        self.body.push(content.into());
        self
    }

    pub fn footer(mut self, content: impl Into<Node>) -> Self {
        self.footer.push(content.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn style(mut self, style: CardStyle) -> Self {
        self.style = style;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn header_padding(mut self, padding: bool) -> Self {
        self.header_padding = padding;
        self
    }

    pub fn body_padding(mut self, padding: bool) -> Self {
        self.body_padding = padding;
        self
    }

    pub fn footer_padding(mut self, padding: bool) -> Self {
        self.footer_padding = padding;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn classes(&self) -> String {
        class_names![
            resolve(self.variant, self.style, self.size),
            self.shadow.then_some(SHADOW),
            self.class.as_deref(),
        ]
    }

    fn has_header(&self) -> bool {
        self.title.is_some() || !self.header.is_empty()
    }

    fn section(&self, padded: bool, size: &SizeRecord, divider: Option<&'static str>) -> Element {
        el("div").class(class_names![
            padded.then_some(size.padding),
            divider,
            divider.map(|_| DIVIDER),
        ])
    }
}

impl Component for Card {
    fn render(&self) -> Element {
        let size = size_record(self.size);

        let header = self.has_header().then(|| {
            let title = self.title.as_ref().map(|title| {
                el("h3")
                    .class(class_names!["font-semibold leading-tight", title_text(self.size)])
                    .text(title.clone())
            });
            self.section(self.header_padding, &size, Some("border-b"))
                .child_opt(title)
                .children(self.header.iter().cloned())
        });

        let body = self
            .section(self.body_padding, &size, None)
            .children(self.body.iter().cloned());

        let footer = (!self.footer.is_empty()).then(|| {
            self.section(self.footer_padding, &size, Some("border-t"))
                .children(self.footer.iter().cloned())
        });

        el("div")
            .attr_opt("id", self.id.clone())
            .class(self.classes())
            .child_opt(header)
            .child(body)
            .child_opt(footer)
    }
}
