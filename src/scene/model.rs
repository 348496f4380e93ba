use crate::foundation::color::Color;

/// Size along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Length {
    /// Sized by content and flex rules.
    #[default]
    Auto,
    /// Absolute pixels.
    Px(f32),
    /// Fraction of the parent's content box, in `[0, 1]`.
    Percent(f32),
}

/// Per-side spacing in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Edges {
    /// Top.
    pub top: f32,
    /// Right.
    pub right: f32,
    /// Bottom.
    pub bottom: f32,
    /// Left.
    pub left: f32,
}

impl Edges {
    /// No spacing.
    pub const ZERO: Self = Self::all(0.0);

    /// Same spacing on all sides.
    pub const fn all(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// CSS two-value shorthand.
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Bottom only.
    pub const fn bottom(v: f32) -> Self {
        Self {
            bottom: v,
            ..Self::ZERO
        }
    }
}

/// Paint for a box background or text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fill {
    /// Flat color.
    Solid {
        /// The color.
        color: Color,
    },
    /// Two-stop linear gradient; `angle_deg` follows CSS (`90` = left to right, `135` = towards
    /// the bottom-right corner).
    LinearGradient {
        /// CSS gradient angle.
        angle_deg: f32,
        /// Color at 0%.
        from: Color,
        /// Color at 100%.
        to: Color,
    },
}

impl Fill {
    /// Flat color fill.
    pub const fn solid(color: Color) -> Self {
        Self::Solid { color }
    }

    /// Color used where a gradient cannot be drawn (e.g. text without a gradient-capable path).
    pub fn dominant_color(self) -> Color {
        match self {
            Self::Solid { color } => color,
            Self::LinearGradient { from, .. } => from,
        }
    }
}

/// Stroke drawn inside a box's edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Border {
    /// Stroke width in pixels.
    pub width: f32,
    /// Stroke color.
    pub color: Color,
}

/// Soft drop shadow painted under a box, like CSS `box-shadow: 0 <offset_y> <blur> <color>`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Shadow {
    /// Downward offset in pixels.
    pub offset_y: f32,
    /// Blur radius in pixels.
    pub blur: f32,
    /// Shadow color.
    pub color: Color,
}

/// Font family selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    /// Proportional UI font.
    #[default]
    Sans,
    /// Terminal font.
    Mono,
}

/// Horizontal alignment of lines inside a text box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Left-aligned.
    #[default]
    Start,
    /// Centered.
    Center,
}

/// Typography of a text element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f32,
    /// CSS font weight (100..=900).
    pub weight: u16,
    /// Text color.
    pub color: Color,
    /// Line height as a multiple of `size`.
    pub line_height: f32,
    /// Font family.
    pub font: FontRole,
    /// Line alignment.
    pub align: TextAlign,
    /// Keep newlines and runs of spaces instead of collapsing them.
    pub pre_wrap: bool,
    /// Paint overriding `color` (gradient-clipped text).
    pub fill: Option<Fill>,
}

impl TextStyle {
    /// Regular-weight sans text.
    pub fn sans(size: f32, color: Color) -> Self {
        Self {
            size,
            weight: 400,
            color,
            line_height: 1.2,
            font: FontRole::Sans,
            align: TextAlign::Start,
            pre_wrap: false,
            fill: None,
        }
    }

    /// Regular-weight monospace text.
    pub fn mono(size: f32, color: Color) -> Self {
        Self {
            font: FontRole::Mono,
            ..Self::sans(size, color)
        }
    }

    /// Set the weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Set the line height multiplier.
    pub fn line_height(mut self, lh: f32) -> Self {
        self.line_height = lh;
        self
    }

    /// Center lines.
    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }

    /// Preserve whitespace and newlines.
    pub fn pre_wrap(mut self) -> Self {
        self.pre_wrap = true;
        self
    }

    /// Paint glyphs with `fill` instead of the flat color.
    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Resolved paint for the glyphs.
    pub fn paint(&self) -> Fill {
        self.fill.unwrap_or(Fill::solid(self.color))
    }
}

/// Main axis of a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Children side by side.
    Row,
    /// Children stacked (block flow).
    #[default]
    Column,
}

/// Cross-axis alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Start edge.
    Start,
    /// Centered.
    Center,
    /// End edge.
    End,
    /// Fill the cross axis.
    Stretch,
}

/// Main-axis distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    /// Packed at the start.
    Start,
    /// Packed in the middle.
    Center,
    /// Packed at the end.
    End,
    /// Free space between items.
    SpaceBetween,
}

/// Layout and visual properties of an element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Style {
    /// Group opacity, multiplied into descendants.
    pub opacity: f32,
    /// Vertical offset applied after layout.
    pub translate_y: f32,
    /// Uniform scale around the element center, applied after layout.
    pub scale: f32,
    /// Box fill.
    pub background: Option<Fill>,
    /// Box stroke.
    pub border: Option<Border>,
    /// Corner radius.
    pub radius: f32,
    /// Drop shadow under the box.
    pub shadow: Option<Shadow>,

    /// Main axis.
    pub direction: Direction,
    /// Wrap children onto new lines.
    pub wrap: bool,
    /// Gap between children (both axes).
    pub gap: f32,
    /// Inner spacing.
    pub padding: Edges,
    /// Outer spacing.
    pub margin: Edges,
    /// Cross-axis alignment of children.
    pub align_items: Option<Align>,
    /// Main-axis distribution of children.
    pub justify_content: Option<Justify>,
    /// Width.
    pub width: Length,
    /// Height.
    pub height: Length,
    /// Minimum width in pixels.
    pub min_width: Option<f32>,
    /// Maximum width in pixels.
    pub max_width: Option<f32>,
    /// Flex grow factor.
    pub flex_grow: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
            scale: 1.0,
            background: None,
            border: None,
            radius: 0.0,
            shadow: None,
            direction: Direction::Column,
            wrap: false,
            gap: 0.0,
            padding: Edges::ZERO,
            margin: Edges::ZERO,
            align_items: None,
            justify_content: None,
            width: Length::Auto,
            height: Length::Auto,
            min_width: None,
            max_width: None,
            flex_grow: 0.0,
        }
    }
}

/// What an element draws itself.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    /// Box that only lays out its children (and paints its own background/border).
    Container,
    /// Leaf text run.
    Text {
        /// The characters to show.
        content: String,
        /// Typography.
        text: TextStyle,
    },
}

/// A node of the visual tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Element {
    /// Node kind.
    pub kind: ElementKind,
    /// Layout and visual properties.
    pub style: Style,
    /// Children in paint order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Empty container stacking children vertically.
    pub fn column() -> Self {
        Self {
            kind: ElementKind::Container,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Empty container laying children out horizontally.
    pub fn row() -> Self {
        let mut el = Self::column();
        el.style.direction = Direction::Row;
        el
    }

    /// Text leaf.
    pub fn text(content: impl Into<String>, text: TextStyle) -> Self {
        Self {
            kind: ElementKind::Text {
                content: content.into(),
                text,
            },
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Full-size flex column centering its children on both axes.
    pub fn centered_fill() -> Self {
        Self::column()
            .size(Length::Percent(1.0), Length::Percent(1.0))
            .align_items(Align::Center)
            .justify(Justify::Center)
    }

    /// Append a child.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append children.
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set group opacity.
    pub fn opacity(mut self, v: f64) -> Self {
        self.style.opacity = v as f32;
        self
    }

    /// Set the post-layout vertical offset.
    pub fn translate_y(mut self, v: f64) -> Self {
        self.style.translate_y = v as f32;
        self
    }

    /// Set the post-layout scale.
    pub fn scale(mut self, v: f64) -> Self {
        self.style.scale = v as f32;
        self
    }

    /// Set the box fill.
    pub fn background(mut self, fill: Fill) -> Self {
        self.style.background = Some(fill);
        self
    }

    /// Set the box stroke.
    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.style.border = Some(Border { width, color });
        self
    }

    /// Set the corner radius.
    pub fn radius(mut self, r: f32) -> Self {
        self.style.radius = r;
        self
    }

    /// Set a drop shadow.
    pub fn shadow(mut self, offset_y: f32, blur: f32, color: Color) -> Self {
        self.style.shadow = Some(Shadow {
            offset_y,
            blur,
            color,
        });
        self
    }

    /// Enable wrapping.
    pub fn wrap(mut self) -> Self {
        self.style.wrap = true;
        self
    }

    /// Set the gap between children.
    pub fn gap(mut self, g: f32) -> Self {
        self.style.gap = g;
        self
    }

    /// Set padding.
    pub fn padding(mut self, p: Edges) -> Self {
        self.style.padding = p;
        self
    }

    /// Set margins.
    pub fn margin(mut self, m: Edges) -> Self {
        self.style.margin = m;
        self
    }

    /// Set the bottom margin.
    pub fn margin_bottom(mut self, v: f32) -> Self {
        self.style.margin.bottom = v;
        self
    }

    /// Set the left margin.
    pub fn margin_left(mut self, v: f32) -> Self {
        self.style.margin.left = v;
        self
    }

    /// Set the top margin.
    pub fn margin_top(mut self, v: f32) -> Self {
        self.style.margin.top = v;
        self
    }

    /// Set cross-axis alignment.
    pub fn align_items(mut self, a: Align) -> Self {
        self.style.align_items = Some(a);
        self
    }

    /// Set main-axis distribution.
    pub fn justify(mut self, j: Justify) -> Self {
        self.style.justify_content = Some(j);
        self
    }

    /// Set width and height.
    pub fn size(mut self, width: Length, height: Length) -> Self {
        self.style.width = width;
        self.style.height = height;
        self
    }

    /// Set the width.
    pub fn width(mut self, w: Length) -> Self {
        self.style.width = w;
        self
    }

    /// Set the minimum width.
    pub fn min_width(mut self, w: f32) -> Self {
        self.style.min_width = Some(w);
        self
    }

    /// Set the maximum width.
    pub fn max_width(mut self, w: f32) -> Self {
        self.style.max_width = Some(w);
        self
    }

    /// Set the flex grow factor.
    pub fn grow(mut self, g: f32) -> Self {
        self.style.flex_grow = g;
        self
    }

    /// Text content when this is a text leaf.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { content, .. } => Some(content),
            ElementKind::Container => None,
        }
    }

    /// Depth-first pre-order visit of this element and its descendants.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        f(self);
        for c in &self.children {
            c.visit(f);
        }
    }

    /// First text leaf (pre-order) whose content equals `needle`.
    pub fn find_text(&self, needle: &str) -> Option<&Element> {
        let mut found = None;
        self.visit(&mut |el| {
            if found.is_none() && el.text_content() == Some(needle) {
                found = Some(el);
            }
        });
        found
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
