use std::collections::HashMap as StdHashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use blacktooth_model::ZxColour;
use blacktooth_scene::{Filter, Navigate, Rgb};
use hashbrown::HashMap;
use serde::Deserialize;

/// Edge-highlight colours for one room colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EdgePalette {
    pub towards: Rgb,
    pub right: Rgb,
}

/// Palette swaps for the edge strips, keyed by room colour.
#[derive(Clone, Debug, PartialEq)]
pub struct HintColours {
    /// Colour the edge sprites are drawn in on the sheet.
    pub edge_source: Rgb,
    edges: HashMap<ZxColour, EdgePalette>,
}

#[derive(Deserialize)]
struct HintColoursConfig {
    edge_source: Option<Rgb>,
    #[serde(default)]
    colours: StdHashMap<ZxColour, EdgePalette>,
}

// Spectrum output levels: plain hues use 0xcd, bright ones 0xff.
fn zx(colour: ZxColour, level: u8) -> Rgb {
    let on = |bit: u8| if bit != 0 { level } else { 0 };
    let bits = match colour {
        ZxColour::Black => 0b000,
        ZxColour::Blue => 0b001,
        ZxColour::Red => 0b010,
        ZxColour::Magenta => 0b011,
        ZxColour::Green => 0b100,
        ZxColour::Cyan => 0b101,
        ZxColour::Yellow => 0b110,
        ZxColour::White => 0b111,
    };
    Rgb(on(bits & 0b010), on(bits & 0b100), on(bits & 0b001))
}

impl Default for HintColours {
    /// Bright hue on the towards strip, plain hue on the right strip.
    fn default() -> Self {
        let edges = ZxColour::ALL
            .into_iter()
            .map(|c| {
                (
                    c,
                    EdgePalette {
                        towards: zx(c, 0xff),
                        right: zx(c, 0xcd),
                    },
                )
            })
            .collect();
        Self {
            edge_source: Rgb(0xff, 0xff, 0xff),
            edges,
        }
    }
}

impl HintColours {
    pub fn edges(&self, colour: ZxColour) -> EdgePalette {
        match self.edges.get(&colour) {
            Some(p) => *p,
            None => {
                let fallback = zx(colour, 0xff);
                EdgePalette {
                    towards: fallback,
                    right: fallback,
                }
            }
        }
    }

    pub fn set_edges(&mut self, colour: ZxColour, palette: EdgePalette) {
        self.edges.insert(colour, palette);
    }

    pub fn swap_to(&self, target: Rgb) -> Filter {
        Filter::PaletteSwap {
            from: vec![self.edge_source],
            to: vec![target],
        }
    }

    /// Starts from the defaults; colours the file names replace their entries.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: HintColoursConfig = toml::from_str(toml_str)?;
        let mut out = HintColours::default();
        if let Some(src) = cfg.edge_source {
            out.edge_source = src;
        }
        let mut entries: Vec<(ZxColour, EdgePalette)> = cfg.colours.into_iter().collect();
        entries.sort_by_key(|(c, _)| c.name());
        for (colour, palette) in entries {
            log::debug!("hint colour {}: {:?}", colour.name(), palette);
            out.set_edges(colour, palette);
        }
        Ok(out)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

/// What the composers need from the outside world.
#[derive(Clone)]
pub struct RenderOptions {
    pub on_navigate: Navigate,
    pub hint_colours: HintColours,
}

impl RenderOptions {
    pub fn new(on_navigate: Navigate) -> Self {
        Self {
            on_navigate,
            hint_colours: HintColours::default(),
        }
    }

    pub fn with_hint_colours(mut self, hint_colours: HintColours) -> Self {
        self.hint_colours = hint_colours;
        self
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("hint_colours", &self.hint_colours)
            .finish_non_exhaustive()
    }
}
