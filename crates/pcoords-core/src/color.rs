// File: crates/pcoords-core/src/color.rs
// Summary: Per-class color resolution (discrete palettes and continuous colormaps).

use crate::error::{PcoordsError, Result};
use crate::types::Rgba;

/// Built-in categorical palette, cycled when more classes than entries.
pub const DEFAULT_PALETTE: [Rgba; 10] = [
    Rgba::rgb(31, 119, 180),
    Rgba::rgb(255, 127, 14),
    Rgba::rgb(44, 160, 44),
    Rgba::rgb(214, 39, 40),
    Rgba::rgb(148, 103, 189),
    Rgba::rgb(140, 86, 75),
    Rgba::rgb(227, 119, 194),
    Rgba::rgb(127, 127, 127),
    Rgba::rgb(188, 189, 34),
    Rgba::rgb(23, 190, 207),
];

/// Continuous colormap defined by evenly spaced anchor colors.
#[derive(Clone, Copy, Debug)]
pub struct Colormap {
    pub name: &'static str,
    anchors: &'static [Rgba],
}

impl Colormap {
    /// Sample the map at `t` in [0, 1] by linear interpolation between
    /// the two surrounding anchors.
    pub fn sample(&self, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let last = self.anchors.len() - 1;
        let pos = t * last as f64;
        let lo = pos.floor() as usize;
        if lo >= last {
            return self.anchors[last];
        }
        let frac = pos - lo as f64;
        let a = self.anchors[lo];
        let b = self.anchors[lo + 1];
        let lerp = |x: u8, y: u8| -> u8 {
            (x as f64 + (y as f64 - x as f64) * frac).round() as u8
        };
        Rgba::rgb(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
    }
}

const VIRIDIS: Colormap = Colormap {
    name: "viridis",
    anchors: &[
        Rgba::rgb(68, 1, 84),
        Rgba::rgb(59, 82, 139),
        Rgba::rgb(33, 145, 140),
        Rgba::rgb(94, 201, 98),
        Rgba::rgb(253, 231, 37),
    ],
};

const PLASMA: Colormap = Colormap {
    name: "plasma",
    anchors: &[
        Rgba::rgb(13, 8, 135),
        Rgba::rgb(126, 3, 168),
        Rgba::rgb(204, 71, 120),
        Rgba::rgb(248, 149, 64),
        Rgba::rgb(240, 249, 33),
    ],
};

const GRAY: Colormap = Colormap {
    name: "gray",
    anchors: &[Rgba::rgb(0, 0, 0), Rgba::rgb(255, 255, 255)],
};

/// Built-in continuous colormaps.
pub fn colormaps() -> Vec<Colormap> {
    vec![VIRIDIS, PLASMA, GRAY]
}

/// Find a colormap by name (case-insensitive).
pub fn find_colormap(name: &str) -> Result<Colormap> {
    for cm in colormaps() {
        if cm.name.eq_ignore_ascii_case(name) {
            return Ok(cm);
        }
    }
    Err(PcoordsError::UnknownColormap { name: name.to_string() })
}

/// Produce exactly `count` ordered colors.
///
/// Precedence: an explicit palette wins (cycled when shorter than
/// `count`), then a named colormap sampled at `count` evenly spaced
/// positions, then the default categorical palette, cycled.
pub fn resolve_colors(
    count: usize,
    palette: Option<&[Rgba]>,
    colormap: Option<&str>,
) -> Result<Vec<Rgba>> {
    if let Some(palette) = palette {
        if palette.is_empty() {
            return Err(PcoordsError::EmptyPalette);
        }
        return Ok((0..count).map(|i| palette[i % palette.len()]).collect());
    }
    if let Some(name) = colormap {
        let cm = find_colormap(name)?;
        let denom = count.saturating_sub(1).max(1) as f64;
        return Ok((0..count).map(|i| cm.sample(i as f64 / denom)).collect());
    }
    Ok((0..count).map(|i| DEFAULT_PALETTE[i % DEFAULT_PALETTE.len()]).collect())
}
