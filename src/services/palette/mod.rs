//! Deterministic per-series colors.
//!
//! A series hashes into a fixed, ordered palette table, so the same series
//! is painted the same way across renders, processes, and restarts. Theme is
//! an explicit parameter; nothing here consults ambient dark-mode state.

use serde::Serialize;

use crate::models::session::{SessionStatus, StyleState, Timing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

fn blend(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Rgb(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Color variants for one presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteVariant {
    pub solid: Rgb,
    /// Washed-out variant for cancelled or past sessions.
    pub ghost: Rgb,
    pub border: Rgb,
    pub text: Rgb,
}

/// A palette slot carrying both light and dark variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub light: PaletteVariant,
    pub dark: PaletteVariant,
}

impl PaletteEntry {
    fn from_base(base: Rgb) -> Self {
        const LIGHT_BG: Rgb = Rgb(248, 248, 248);
        const DARK_BG: Rgb = Rgb(24, 24, 28);

        Self {
            light: PaletteVariant {
                solid: base,
                ghost: blend(base, LIGHT_BG, 0.7),
                border: blend(base, Rgb(0, 0, 0), 0.25),
                text: Rgb(255, 255, 255),
            },
            dark: PaletteVariant {
                solid: blend(base, DARK_BG, 0.15),
                ghost: blend(base, DARK_BG, 0.65),
                border: blend(base, Rgb(255, 255, 255), 0.2),
                text: Rgb(245, 245, 245),
            },
        }
    }

    pub fn variant(&self, theme: Theme) -> &PaletteVariant {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

/// Final paint parameters for one session block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionPaint {
    pub fill: Rgb,
    pub border: Rgb,
    pub text: Rgb,
}

/// Resolve one session's paint from its palette slot, the theme, and its
/// resolved style state. Cancelled and past sessions use the ghost fill.
pub fn resolve_paint(entry: &PaletteEntry, theme: Theme, state: StyleState) -> SessionPaint {
    let variant = entry.variant(theme);
    let ghosted =
        state.status == SessionStatus::Cancelled || state.timing == Timing::Past;
    SessionPaint {
        fill: if ghosted { variant.ghost } else { variant.solid },
        border: variant.border,
        text: variant.text,
    }
}

const BASE_COLORS: [Rgb; 8] = [
    Rgb(59, 130, 246),  // blue
    Rgb(16, 185, 129),  // emerald
    Rgb(249, 115, 22),  // orange
    Rgb(139, 92, 246),  // violet
    Rgb(236, 72, 153),  // pink
    Rgb(20, 184, 166),  // teal
    Rgb(234, 179, 8),   // amber
    Rgb(100, 116, 139), // slate
];

/// FNV-1a over the id bytes. Chosen over the std hasher because the result
/// must be identical across processes and restarts.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Palette slot for a series id. Pure: identical input always yields the
/// identical entry.
pub fn color_for(series_id: i64) -> PaletteEntry {
    let idx = (fnv1a(&series_id.to_le_bytes()) % BASE_COLORS.len() as u64) as usize;
    PaletteEntry::from_base(BASE_COLORS[idx])
}
