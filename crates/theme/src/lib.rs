//! Color theme for the floor-plan canvas.
//!
//! All rendering colors come from one [`Theme`] value passed into the paint
//! pass; entities never carry their own style. Colors are HSLA
//! ([`palette::Hsla`], hue in degrees, the rest in 0..=1).

use palette::Hsla;

/// Stroke style: a color plus a line width in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Hsla,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Hsla, width: f32) -> Self {
        Self { color, width }
    }
}

/// The colors used by the floor-plan paint pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub canvas_background: Hsla,
    pub room_fill: Hsla,
    pub room_stroke: Hsla,
    pub stairs_fill: Hsla,
    pub elevator_fill: Hsla,
    pub ramp_fill: Hsla,
    pub link_stroke: Hsla,
    /// Hover accent, also the hovered vertex fill.
    pub hover: Hsla,
    /// Selection accent, also the selected vertex fill.
    pub selection: Hsla,
    /// Fill of a vertex marker at rest.
    pub vertex_fill: Hsla,
    /// Outline of every vertex marker.
    pub vertex_stroke: Hsla,
}

impl Theme {
    /// The standard light theme used by the editor.
    pub fn light() -> Self {
        Self {
            canvas_background: Hsla::new(40.0, 0.12, 0.96, 1.0),
            room_fill: Hsla::new(40.0, 0.25, 0.90, 1.0),
            room_stroke: Hsla::new(30.0, 0.10, 0.35, 1.0),
            stairs_fill: Hsla::new(210.0, 0.45, 0.82, 1.0),
            elevator_fill: Hsla::new(280.0, 0.35, 0.84, 1.0),
            ramp_fill: Hsla::new(150.0, 0.35, 0.82, 1.0),
            link_stroke: Hsla::new(220.0, 0.20, 0.30, 1.0),
            hover: Hsla::new(35.0, 0.95, 0.55, 1.0),
            selection: Hsla::new(215.0, 0.90, 0.55, 1.0),
            vertex_fill: Hsla::new(0.0, 0.0, 1.0, 1.0),
            vertex_stroke: Hsla::new(220.0, 0.25, 0.25, 1.0),
        }
    }

    /// Dark variant for late-night curation sessions.
    pub fn dark() -> Self {
        Self {
            canvas_background: Hsla::new(225.0, 0.12, 0.12, 1.0),
            room_fill: Hsla::new(225.0, 0.10, 0.20, 1.0),
            room_stroke: Hsla::new(225.0, 0.10, 0.60, 1.0),
            stairs_fill: Hsla::new(210.0, 0.40, 0.35, 1.0),
            elevator_fill: Hsla::new(280.0, 0.30, 0.35, 1.0),
            ramp_fill: Hsla::new(150.0, 0.30, 0.32, 1.0),
            link_stroke: Hsla::new(220.0, 0.15, 0.75, 1.0),
            hover: Hsla::new(35.0, 0.95, 0.60, 1.0),
            selection: Hsla::new(215.0, 0.90, 0.62, 1.0),
            vertex_fill: Hsla::new(225.0, 0.10, 0.92, 1.0),
            vertex_stroke: Hsla::new(225.0, 0.15, 0.15, 1.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
