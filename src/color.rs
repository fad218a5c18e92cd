//! Hex and HSL color conversion for tag buttons

use crate::config::DisplayMode;
use crate::content::DEFAULT_TAG_COLOR;

/// Color in HSL space: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Returns the same hue and saturation with a new lightness.
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }
}

/// Parses `rrggbb` or `rgb` (with or without `#`) into HSL.
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    let hex = hex.trim().trim_start_matches('#');
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };

    let channel = |i: usize| -> Option<f64> {
        u8::from_str_radix(expanded.get(i..i + 2)?, 16)
            .ok()
            .map(|v| f64::from(v) / 255.0)
    };
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Some(Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        });
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Some(Hsl {
        h: h * 60.0,
        s: s * 100.0,
        l: l * 100.0,
    })
}

/// Formats an HSL color as lowercase `rrggbb` without `#`.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    let s = (hsl.s / 100.0).clamp(0.0, 1.0);
    let l = (hsl.l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = hsl.h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;

    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
}

/// Foreground, background and outline colors of a tag button.
///
/// Values are `rrggbb` strings without `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPalette {
    pub fg: String,
    pub bg: String,
    pub outline: String,
    pub fg_hover: String,
    pub bg_hover: String,
    pub outline_hover: String,
}

impl TagPalette {
    /// Derives the palette from a tag's theme color.
    ///
    /// Hue and saturation come from the theme color; lightness is fixed per
    /// display mode. Invalid colors fall back to the default tag color.
    pub fn generate(theme_hex: &str, mode: DisplayMode) -> Self {
        let theme = hex_to_hsl(theme_hex)
            .or_else(|| hex_to_hsl(DEFAULT_TAG_COLOR))
            .unwrap_or(Hsl {
                h: 0.0,
                s: 0.0,
                l: 40.0,
            });

        let [fg, bg, outline, fg_hover, bg_hover, outline_hover] = match mode {
            DisplayMode::Light => [30.0, 98.0, 30.0, 30.0, 93.0, 30.0],
            DisplayMode::Dark => [75.0, 11.0, 35.0, 75.0, 17.0, 35.0],
        }
        .map(|l| hsl_to_hex(theme.with_lightness(l)));

        Self {
            fg,
            bg,
            outline,
            fg_hover,
            bg_hover,
            outline_hover,
        }
    }

    /// CSS custom properties consumed by the `.tag-button` rules.
    pub fn css_variables(&self) -> String {
        format!(
            "--tag-fg: #{}; --tag-bg: #{}; --tag-outline: #{}; --tag-fg-hover: #{}; --tag-bg-hover: #{}; --tag-outline-hover: #{}",
            self.fg, self.bg, self.outline, self.fg_hover, self.bg_hover, self.outline_hover
        )
    }
}
