// File: crates/plot-core/src/color.rs
// Summary: Opaque RGB colour values, the named trace palette, and plot themes.

/// An RGB triple. Backends convert it to their own colour type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 128);
pub const GREEN: Rgb = Rgb::new(0, 128, 0);
pub const CYAN: Rgb = Rgb::new(0, 128, 128);
pub const RED: Rgb = Rgb::new(128, 0, 0);
pub const MAGENTA: Rgb = Rgb::new(128, 0, 128);
pub const BROWN: Rgb = Rgb::new(128, 128, 0);
pub const LIGHTGRAY: Rgb = Rgb::new(192, 192, 192);
pub const DARKGRAY: Rgb = Rgb::new(128, 128, 128);
pub const LIGHTBLUE: Rgb = Rgb::new(128, 128, 255);
pub const LIGHTGREEN: Rgb = Rgb::new(128, 255, 128);
pub const LIGHTCYAN: Rgb = Rgb::new(128, 255, 255);
pub const LIGHTRED: Rgb = Rgb::new(255, 128, 128);
pub const LIGHTMAGENTA: Rgb = Rgb::new(255, 128, 255);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const CRIMSON: Rgb = Rgb::new(220, 20, 60);
pub const CHOCOLATE: Rgb = Rgb::new(210, 105, 30);
pub const GOLDENROD: Rgb = Rgb::new(218, 165, 32);
pub const DARKORANGE: Rgb = Rgb::new(255, 140, 0);
pub const REDRED: Rgb = Rgb::new(255, 0, 0);
pub const DARKSLATEGRAY: Rgb = Rgb::new(47, 79, 79);
pub const DEEPPINK: Rgb = Rgb::new(255, 20, 147);
pub const TURQUOISE: Rgb = Rgb::new(64, 224, 208);
pub const DARKVIOLET: Rgb = Rgb::new(148, 0, 211);
pub const BEIGE: Rgb = Rgb::new(245, 245, 220);
pub const MEDIUMSEAGREEN: Rgb = Rgb::new(60, 179, 113);
pub const LIMEGREEN: Rgb = Rgb::new(50, 205, 50);
pub const DARKGREEN: Rgb = Rgb::new(0, 100, 0);
pub const MEDIUMBLUE: Rgb = Rgb::new(0, 0, 205);
pub const BLUEBLUE: Rgb = Rgb::new(0, 0, 255);
pub const DODGERBLUE: Rgb = Rgb::new(30, 144, 255);

const NAMED: [(&str, Rgb); 32] = [
    ("black", BLACK),
    ("blue", BLUE),
    ("green", GREEN),
    ("cyan", CYAN),
    ("red", RED),
    ("magenta", MAGENTA),
    ("brown", BROWN),
    ("lightgray", LIGHTGRAY),
    ("darkgray", DARKGRAY),
    ("lightblue", LIGHTBLUE),
    ("lightgreen", LIGHTGREEN),
    ("lightcyan", LIGHTCYAN),
    ("lightred", LIGHTRED),
    ("lightmagenta", LIGHTMAGENTA),
    ("yellow", YELLOW),
    ("white", WHITE),
    ("crimson", CRIMSON),
    ("chocolate", CHOCOLATE),
    ("goldenrod", GOLDENROD),
    ("darkorange", DARKORANGE),
    ("redred", REDRED),
    ("darkslategray", DARKSLATEGRAY),
    ("deeppink", DEEPPINK),
    ("turquoise", TURQUOISE),
    ("darkviolet", DARKVIOLET),
    ("beige", BEIGE),
    ("mediumseagreen", MEDIUMSEAGREEN),
    ("limegreen", LIMEGREEN),
    ("darkgreen", DARKGREEN),
    ("mediumblue", MEDIUMBLUE),
    ("blueblue", BLUEBLUE),
    ("dodgerblue", DODGERBLUE),
];

/// Look up a palette colour by name (case-insensitive).
pub fn named(name: &str) -> Option<Rgb> {
    NAMED.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|&(_, c)| c)
}

/// Colours for everything that is not a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub frame: Rgb,
    pub grid: Rgb,
    pub tick: Rgb,
    pub label: Rgb,
}

impl Theme {
    /// White paper, grey frame, dotted light grid.
    pub fn paper() -> Self {
        Self {
            name: "paper",
            background: WHITE,
            frame: DARKGRAY,
            grid: LIGHTGRAY,
            tick: DARKGRAY,
            label: BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb::new(18, 18, 20),
            frame: Rgb::new(180, 180, 190),
            grid: Rgb::new(60, 60, 68),
            tick: Rgb::new(150, 150, 160),
            label: Rgb::new(235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::paper()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::paper(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to paper.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
