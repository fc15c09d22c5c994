//! Android density tiers and their per-tier output configuration.
//!
//! Each tier maps to a drawable scale factor, a fixed launcher-icon pixel
//! size, and the conventional resource directory names. The mapping is
//! static configuration; fan-out logic never hardcodes a tier.

use std::fmt;

/// A target screen pixel-density class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// All tiers, smallest to largest.
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    /// Bucket name as it appears in resource directory names.
    pub fn name(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Scale factor applied to a drawable baseline (xxxhdpi is the baseline).
    pub fn scale(self) -> f64 {
        match self {
            Density::Mdpi => 0.25,
            Density::Hdpi => 0.375,
            Density::Xhdpi => 0.5,
            Density::Xxhdpi => 0.75,
            Density::Xxxhdpi => 1.0,
        }
    }

    /// Fixed square pixel size for the launcher icon.
    pub fn icon_size(self) -> u32 {
        match self {
            Density::Mdpi => 48,
            Density::Hdpi => 72,
            Density::Xhdpi => 96,
            Density::Xxhdpi => 144,
            Density::Xxxhdpi => 192,
        }
    }

    /// Resource directory for generic drawables, e.g. `drawable-mdpi`.
    pub fn drawable_dir(self) -> String {
        format!("drawable-{}", self.name())
    }

    /// Resource directory for launcher icons, e.g. `mipmap-mdpi`.
    pub fn mipmap_dir(self) -> String {
        format!("mipmap-{}", self.name())
    }

    /// Proportionally scaled dimensions for a drawable baseline.
    pub fn scaled_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        let w = (f64::from(width) * self.scale()).round() as u32;
        let h = (f64::from(height) * self.scale()).round() as u32;
        (w, h)
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
