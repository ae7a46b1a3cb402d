//! Colour table used to resolve turtle colour indices.

use serde::{Deserialize, Serialize};

/// An 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Converts an HSV colour with components in `[0, 1]`.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match (sector as i32).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        let channel = |c: f32| (c * 255.0) as u8;
        Rgb(channel(r), channel(g), channel(b))
    }
}

/// Palette slot 0 is the background; slots `1..len` are drawing colours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colours: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::hsv(20)
    }
}

impl Palette {
    /// Black background and white, followed by `hues` evenly spaced saturated hues.
    pub fn hsv(hues: usize) -> Self {
        let mut colours = vec![Rgb::BLACK, Rgb::WHITE];
        colours.extend((0..hues).map(|n| Rgb::from_hsv(n as f32 / hues as f32, 1.0, 1.0)));
        Self { colours }
    }

    /// Builds a palette from explicit colours; the first is the background.
    ///
    /// Returns `None` unless there is a background and at least one drawing colour.
    pub fn from_colours(colours: Vec<Rgb>) -> Option<Self> {
        (colours.len() >= 2).then_some(Self { colours })
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn background(&self) -> Rgb {
        self.colours[0]
    }

    /// Maps an unbounded colour index onto a drawing slot in `1..len`.
    pub fn slot(&self, colour_index: i32) -> usize {
        colour_slot(colour_index, self.colours.len())
    }

    pub fn resolve(&self, colour_index: i32) -> Rgb {
        self.colours[self.slot(colour_index)]
    }

    pub fn get(&self, slot: usize) -> Option<Rgb> {
        self.colours.get(slot).copied()
    }
}

/// `(k mod (size - 1)) + 1` with a non-negative remainder, so negative
/// indices wrap too. `size` must be at least 2.
pub fn colour_slot(colour_index: i32, size: usize) -> usize {
    let drawing_colours = (size.max(2) - 1) as i64;
    (i64::from(colour_index).rem_euclid(drawing_colours) + 1) as usize
}
