//! egui presentation for the Twinslide range slider.
//!
//! This crate draws a [`twinslide_core::SliderBinding`] and feeds egui input
//! back into it:
//!
//! - **Range slider**: track, connector between handles, handle knobs and the
//!   paired text inputs
//! - **Layout**: the span caption and the dot separator between the inputs

pub mod layout;
pub mod range_slider;

pub use layout::{dot_separator, span_caption};
pub use range_slider::{RangeSliderStyle, RangeSliderView, span_text};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Outer handle knob diameter
    pub const HANDLE_OUTER: f32 = 24.0;
    /// Inner handle knob diameter
    pub const HANDLE_INNER: f32 = 16.0;
    /// Height of the text inputs
    pub const INPUT_HEIGHT: f32 = 32.0;
    /// Minimum width of a text input
    pub const INPUT_MIN_WIDTH: f32 = 100.0;
    /// Gap between the track and the inputs
    pub const INPUT_GAP: f32 = 16.0;
    /// Input corner radius
    pub const INPUT_RADIUS: u8 = 8;
    /// Font size of the span caption
    pub const CAPTION_SIZE: f32 = 10.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Unselected track color
    pub const TRACK: Color32 = Color32::from_rgb(209, 213, 219);
    /// Selected span and inner knob color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Outer knob color
    pub const KNOB: Color32 = Color32::WHITE;
    /// Knob outline
    pub const KNOB_BORDER: Color32 = Color32::from_rgb(220, 220, 220);
}
