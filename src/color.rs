use std::str::FromStr;

use eframe::egui::Color32;
use palette::Srgb;
use plotters::style::RGBColor;

use crate::error::FluxError;

// ---------------------------------------------------------------------------
// Series colour
// ---------------------------------------------------------------------------

/// Single-letter colour codes as understood by matplotlib.
const SHORTHAND: [(char, (u8, u8, u8)); 8] = [
    ('b', (0, 0, 255)),
    ('g', (0, 128, 0)),
    ('r', (255, 0, 0)),
    ('c', (0, 191, 191)),
    ('m', (191, 0, 191)),
    ('y', (191, 191, 0)),
    ('k', (0, 0, 0)),
    ('w', (255, 255, 255)),
];

/// The colour of the plotted series, shared by the SVG figure and the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColor(Srgb<u8>);

impl SeriesColor {
    /// Parse a shorthand letter (`g`), a CSS colour name (`green`) or a
    /// hex code (`#008000`, `#080`).
    pub fn parse(spec: &str) -> Result<Self, FluxError> {
        let spec = spec.trim();
        let invalid = || FluxError::InvalidColor(spec.to_string());

        let mut chars = spec.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return SHORTHAND
                .iter()
                .find(|(code, _)| *code == c)
                .map(|(_, (r, g, b))| SeriesColor(Srgb::new(*r, *g, *b)))
                .ok_or_else(invalid);
        }

        if spec.starts_with('#') {
            return Srgb::<u8>::from_str(spec)
                .map(SeriesColor)
                .map_err(|_| invalid());
        }

        palette::named::from_str(&spec.to_ascii_lowercase())
            .map(SeriesColor)
            .ok_or_else(invalid)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.0.red, self.0.green, self.0.blue)
    }

    pub fn to_color32(&self) -> Color32 {
        let (r, g, b) = self.rgb();
        Color32::from_rgb(r, g, b)
    }

    pub fn to_plotters(&self) -> RGBColor {
        let (r, g, b) = self.rgb();
        RGBColor(r, g, b)
    }
}

impl Default for SeriesColor {
    fn default() -> Self {
        SeriesColor(Srgb::new(0, 128, 0))
    }
}
