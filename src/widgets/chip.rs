use crate::foundation::color::Color;
use crate::scene::model::{Edges, Element, Fill, TextStyle};

/// Outlined pill label used for capability and link chips.
pub fn chip(label: &str, accent: Color) -> Element {
    Element::column()
        .background(Fill::solid(accent.with_alpha(0x22)))
        .border(2.0, accent)
        .radius(12.0)
        .padding(Edges::symmetric(16.0, 24.0))
        .child(Element::text(label, TextStyle::sans(20.0, accent).weight(600)))
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/chip.rs"]
mod tests;
