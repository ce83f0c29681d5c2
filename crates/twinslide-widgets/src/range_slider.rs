//! The range slider view: track, handles and the paired text inputs.

use egui::{
    Color32, CornerRadius, CursorIcon, Pos2, Rect, Sense, Stroke, StrokeKind, TextEdit, Ui, pos2,
    vec2,
};
use kurbo::Point;
use twinslide_core::{HandleRole, PointerEvent, SliderBinding, Track};

use crate::layout::{dot_separator, span_caption};
use crate::{sizing, theme};

/// Style configuration for the range slider.
#[derive(Clone)]
pub struct RangeSliderStyle {
    /// Unselected track color
    pub track_color: Color32,
    /// Selected span and inner knob color
    pub accent: Color32,
    /// Outer knob color
    pub knob_color: Color32,
    /// Outer knob outline
    pub knob_border: Color32,
    /// Outer knob diameter
    pub outer_diameter: f32,
    /// Inner knob diameter
    pub inner_diameter: f32,
}

impl Default for RangeSliderStyle {
    fn default() -> Self {
        Self {
            track_color: theme::TRACK,
            accent: theme::ACCENT,
            knob_color: theme::KNOB,
            knob_border: theme::KNOB_BORDER,
            outer_diameter: sizing::HANDLE_OUTER,
            inner_diameter: sizing::HANDLE_INNER,
        }
    }
}

/// Maps between track-local coordinates and screen positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackFrame {
    /// Screen position of the track's left end, on its center line.
    origin: Pos2,
    /// Track-local y of the center line.
    center_y: f64,
}

impl TrackFrame {
    pub fn new(origin: Pos2, track: &Track) -> Self {
        Self {
            origin,
            center_y: track.center_y(),
        }
    }

    pub fn to_screen(&self, point: Point) -> Pos2 {
        pos2(
            self.origin.x + point.x as f32,
            self.origin.y + (point.y - self.center_y) as f32,
        )
    }

    pub fn to_track(&self, pos: Pos2) -> Point {
        Point::new(
            f64::from(pos.x - self.origin.x),
            f64::from(pos.y - self.origin.y) + self.center_y,
        )
    }
}

/// A dual-handle range slider bound to a [`SliderBinding`].
pub struct RangeSliderView<'a> {
    binding: &'a mut SliderBinding,
    style: RangeSliderStyle,
    low_placeholder: &'a str,
    high_placeholder: &'a str,
    show_inputs: bool,
    show_span: bool,
}

impl<'a> RangeSliderView<'a> {
    /// Create a view over a binding.
    pub fn new(binding: &'a mut SliderBinding) -> Self {
        Self {
            binding,
            style: RangeSliderStyle::default(),
            low_placeholder: "From",
            high_placeholder: "To",
            show_inputs: true,
            show_span: true,
        }
    }

    /// Set the slider style.
    pub fn style(mut self, style: RangeSliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the placeholder texts of the low and high inputs.
    pub fn placeholders(mut self, low: &'a str, high: &'a str) -> Self {
        self.low_placeholder = low;
        self.high_placeholder = high;
        self
    }

    /// Hide the text inputs below the track.
    pub fn without_inputs(mut self) -> Self {
        self.show_inputs = false;
        self
    }

    /// Hide the span caption below the track.
    pub fn without_span(mut self) -> Self {
        self.show_span = false;
        self
    }

    /// Show the slider and return true if a handle value changed.
    pub fn show(self, ui: &mut Ui) -> bool {
        let Self {
            binding,
            style,
            low_placeholder,
            high_placeholder,
            show_inputs,
            show_span,
        } = self;

        let mut changed = false;
        ui.vertical(|ui| {
            changed |= track_ui(ui, binding, &style);
            if show_span {
                span_caption(ui, &span_text(binding));
            }
            if show_inputs {
                ui.add_space(sizing::INPUT_GAP);
                changed |= inputs_ui(ui, binding, low_placeholder, high_placeholder);
            }
        });
        changed
    }
}

/// The selected span in the binding's display mode. A zero duration, which
/// formats as empty text, shows as the plain delta.
pub fn span_text(binding: &SliderBinding) -> String {
    let text = binding.format().format(binding.slider().value_delta());
    if text.is_empty() {
        binding.slider().value_delta_text()
    } else {
        text
    }
}

fn track_ui(ui: &mut Ui, binding: &mut SliderBinding, style: &RangeSliderStyle) -> bool {
    let track = *binding.slider().track();
    let pad = style.outer_diameter / 2.0;
    let touch = binding.slider().low().diameter() as f32;
    let size = vec2(track.width() as f32 + pad * 2.0, touch);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
    let frame = TrackFrame::new(pos2(rect.left() + pad, rect.center().y), &track);

    let mut changed = false;
    if let Some(pos) = response.interact_pointer_pos() {
        let position = frame.to_track(pos);
        if response.drag_started() {
            binding.handle_pointer_event(PointerEvent::Down { position });
        }
        if response.dragged() {
            changed |= binding
                .handle_pointer_event(PointerEvent::Move { position })
                .is_some_and(|event| event.moved());
        }
    }
    if response.drag_stopped() {
        let position = response
            .interact_pointer_pos()
            .map(|pos| frame.to_track(pos))
            .unwrap_or(Point::ZERO);
        binding.handle_pointer_event(PointerEvent::Up { position });
    }

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let thickness = track.thickness() as f32;

        // Track
        let track_rect = Rect::from_min_size(
            pos2(frame.origin.x, frame.origin.y - thickness / 2.0),
            vec2(track.width() as f32, thickness),
        );
        painter.rect_filled(
            track_rect,
            CornerRadius::same(thickness.round() as u8),
            style.track_color,
        );

        // Selected span
        let connector = binding.slider().connector();
        painter.line_segment(
            [frame.to_screen(connector.p0), frame.to_screen(connector.p1)],
            Stroke::new(thickness, style.accent),
        );

        // Knobs, inner circle on top
        for role in HandleRole::ALL {
            let center = frame.to_screen(binding.slider().position(role));
            painter.circle_filled(center, style.outer_diameter / 2.0, style.knob_color);
            painter.circle_stroke(
                center,
                style.outer_diameter / 2.0,
                Stroke::new(1.0, style.knob_border),
            );
            painter.circle_filled(center, style.inner_diameter / 2.0, style.accent);
        }
    }

    let cursor = if binding.active_handle().is_some() {
        CursorIcon::Grabbing
    } else {
        CursorIcon::Grab
    };
    response.on_hover_cursor(cursor);
    changed
}

fn inputs_ui(
    ui: &mut Ui,
    binding: &mut SliderBinding,
    low_placeholder: &str,
    high_placeholder: &str,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        for role in HandleRole::ALL {
            let placeholder = match role {
                HandleRole::Low => low_placeholder,
                HandleRole::High => {
                    dot_separator(ui);
                    high_placeholder
                }
            };

            let mut text = binding.text(role).to_string();
            let edit = TextEdit::singleline(&mut text)
                .hint_text(placeholder)
                .interactive(binding.is_editable())
                .text_color(theme::TEXT)
                .min_size(vec2(sizing::INPUT_MIN_WIDTH, sizing::INPUT_HEIGHT));
            let response = ui.add(edit);
            if ui.is_rect_visible(response.rect) {
                ui.painter().rect_stroke(
                    response.rect,
                    CornerRadius::same(sizing::INPUT_RADIUS),
                    Stroke::new(0.5, theme::TEXT_MUTED),
                    StrokeKind::Inside,
                );
            }
            if response.changed() {
                log::debug!("{:?} input edited: {:?}", role, text);
                changed |= binding
                    .text_changed(role, &text)
                    .is_some_and(|event| event.moved());
            }
        }
    });
    changed
}
