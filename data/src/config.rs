use crate::chart::{GlyphKind, GlyphStyle};

use enum_map::EnumMap;
use iced_core::Color;
use palette::LinSrgba;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Display configuration shared by every graph in the matrix.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Margin around each cell, as a fraction of the cell size.
    pub margin: f32,
    /// Extra headroom on the response axis of bar charts.
    pub y_margin: f32,
    /// Point radius for scatter glyphs, in pixels.
    pub point_radius: f32,
    /// Fill for deselected marks.
    pub deselected: Color,
    /// Fill for selected marks.
    pub selected: Color,
    /// Per-mark opacity used when compositing dense point rasters.
    pub overlay_opacity: f32,
    /// Minimum interval between brush recomputations, in milliseconds.
    pub coalesce_interval_ms: u64,
    /// Scrollbar handle hit tolerance, in pixels (doubled on touch).
    pub handle_tolerance: f32,
    pub styles: EnumMap<GlyphKind, GlyphStyle>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            margin: 0.1,
            y_margin: 0.05,
            point_radius: 3.0,
            deselected: Color::from_rgb8(0x99, 0xbb, 0xdd),
            selected: Color::from_rgb8(0xff, 0x66, 0x33),
            overlay_opacity: 0.3,
            coalesce_interval_ms: 4,
            handle_tolerance: 8.0,
            styles: EnumMap::default(),
        }
    }
}

impl GraphConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..0.5).contains(&self.margin) {
            return Err(ConfigError::Invalid(format!(
                "margin {} outside [0, 0.5)",
                self.margin
            )));
        }
        if !(0.0..=1.0).contains(&self.overlay_opacity) {
            return Err(ConfigError::Invalid(format!(
                "overlay opacity {} outside [0, 1]",
                self.overlay_opacity
            )));
        }
        Ok(())
    }
}

/// Converts a display color to linear premultipliable RGBA for raster
/// compositing.
pub fn to_lin_srgba(color: Color) -> LinSrgba<f32> {
    palette::Srgba::new(color.r, color.g, color.b, color.a).into_linear()
}

pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;

    let parse = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        6 => Some(Color {
            r: f32::from(parse(&hex[0..2])?) / 255.0,
            g: f32::from(parse(&hex[2..4])?) / 255.0,
            b: f32::from(parse(&hex[4..6])?) / 255.0,
            a: 1.0,
        }),
        8 => Some(Color {
            r: f32::from(parse(&hex[0..2])?) / 255.0,
            g: f32::from(parse(&hex[2..4])?) / 255.0,
            b: f32::from(parse(&hex[4..6])?) / 255.0,
            a: f32::from(parse(&hex[6..8])?) / 255.0,
        }),
        _ => None,
    }
}

pub fn color_to_hex(color: Color) -> String {
    use std::fmt::Write;

    let mut hex = String::with_capacity(9);

    let [r, g, b, a] = color.into_rgba8();

    let _ = write!(&mut hex, "#{r:02X}{g:02X}{b:02X}");
    if a < u8::MAX {
        let _ = write!(&mut hex, "{a:02X}");
    }

    hex
}
