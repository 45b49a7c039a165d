use thiserror::Error;

pub type Rgba = [u8; 4];

pub const DEFAULT_LIVE_COLOR: Rgba = [0x11, 0xd3, 0x19, 0xff];
pub const DEFAULT_BACKGROUND_COLOR: Rgba = [0x00, 0x00, 0x00, 0xff];

const LIVE_COLOR_CYCLE: [Rgba; 6] = [
    DEFAULT_LIVE_COLOR,
    [0xff, 0xff, 0xff, 0xff],
    [0xff, 0xd7, 0x00, 0xff],
    [0x00, 0xbf, 0xff, 0xff],
    [0xff, 0x45, 0x00, 0xff],
    [0xda, 0x70, 0xd6, 0xff],
];

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("expected a color like #11d319, got {0:?}")]
pub struct ColorParseError(String);

/// Parses `#rrggbb` or `rrggbb` into an opaque color.
pub fn parse_hex_color(text: &str) -> Result<Rgba, ColorParseError> {
    let hex = text.strip_prefix('#').unwrap_or(text);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError(text.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorParseError(text.to_string()))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?, 0xff])
}

/// Colors used to draw the board. Not part of the simulation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    live: Rgba,
    background: Rgba,
}

impl Palette {
    pub fn new(live: Rgba, background: Rgba) -> Self {
        Self { live, background }
    }

    pub fn live(&self) -> Rgba {
        self.live
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Switches to the next color in the built-in cycle. A custom color
    /// moves to the start of the cycle.
    pub fn next_live_color(&mut self) -> Rgba {
        let next = LIVE_COLOR_CYCLE
            .iter()
            .position(|color| *color == self.live)
            .map_or(0, |index| (index + 1) % LIVE_COLOR_CYCLE.len());
        self.live = LIVE_COLOR_CYCLE[next];
        self.live
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_LIVE_COLOR, DEFAULT_BACKGROUND_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(parse_hex_color("#11d319"), Ok(DEFAULT_LIVE_COLOR));
        assert_eq!(parse_hex_color("11D319"), Ok(DEFAULT_LIVE_COLOR));
        assert_eq!(parse_hex_color("#000000"), Ok(DEFAULT_BACKGROUND_COLOR));
    }

    #[test]
    fn rejects_malformed_colors() {
        for text in ["", "#", "#12345", "#1234567", "#12345g", "green", "#ééé"] {
            assert!(parse_hex_color(text).is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn cycle_advances_and_wraps() {
        let mut palette = Palette::default();
        assert_eq!(palette.next_live_color(), LIVE_COLOR_CYCLE[1]);
        for _ in 2..LIVE_COLOR_CYCLE.len() {
            palette.next_live_color();
        }
        assert_eq!(palette.live(), LIVE_COLOR_CYCLE[LIVE_COLOR_CYCLE.len() - 1]);
        assert_eq!(palette.next_live_color(), DEFAULT_LIVE_COLOR);
    }

    #[test]
    fn custom_color_joins_cycle_at_start() {
        let mut palette = Palette::new([1, 2, 3, 0xff], DEFAULT_BACKGROUND_COLOR);
        assert_eq!(palette.next_live_color(), DEFAULT_LIVE_COLOR);
        assert_eq!(palette.background(), DEFAULT_BACKGROUND_COLOR);
    }
}
