//! Layout helpers: the separator between the inputs and the span caption.

use egui::{RichText, Sense, Ui, vec2};

use crate::{sizing, theme};

/// Draw a small filled dot, used between the two text inputs.
pub fn dot_separator(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(vec2(4.0, 4.0), Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), 2.0, theme::TEXT_MUTED);
}

/// Muted caption under the track showing the selected span.
pub fn span_caption(ui: &mut Ui, span: &str) {
    ui.label(
        RichText::new(format!("Span {}", span))
            .size(sizing::CAPTION_SIZE)
            .color(theme::TEXT_MUTED),
    );
}
