use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Alpha applied to the accent color for days inside a range.
pub const RANGE_FILL_ALPHA: u8 = 0x55;

/// Colors for every role the month view paints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub header_bg: Color,
    pub header_text: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub today_accent: Color,
    pub today_accent_border: Color,
}

impl Palette {
    pub fn light() -> Self {
        Palette {
            bg: Color::Rgb(0xff, 0xff, 0xff),
            header_bg: Color::Rgb(0xff, 0xff, 0xff),
            header_text: Color::Rgb(0x00, 0x00, 0x00),
            text_primary: Color::Rgb(0x00, 0x00, 0x00),
            text_secondary: Color::Rgb(0x66, 0x66, 0x66),
            accent: Color::Rgb(0xff, 0x7f, 0x00),
            today_accent: Color::Rgb(0xff, 0xee, 0xde),
            today_accent_border: Color::Rgb(0xea, 0x6c, 0x00),
        }
    }

    pub fn dark() -> Self {
        Palette {
            bg: Color::Rgb(0x1e, 0x1e, 0x1e),
            header_bg: Color::Rgb(0x1e, 0x1e, 0x1e),
            header_text: Color::Rgb(0xff, 0xff, 0xff),
            text_primary: Color::Rgb(0xff, 0xff, 0xff),
            text_secondary: Color::Rgb(0x66, 0x66, 0x66),
            accent: Color::Rgb(0xff, 0x7f, 0x00),
            today_accent: Color::Rgb(0x37, 0x33, 0x30),
            today_accent_border: Color::Rgb(0xea, 0x6c, 0x00),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Palette::light(),
            ThemeMode::Dark => Palette::dark(),
        }
    }

    /// Background for days strictly inside a range.
    pub fn range_fill(&self) -> Color {
        blend(self.accent, self.bg, RANGE_FILL_ALPHA)
    }
}

/// Composites `fg` at `alpha` over `bg`. Only RGB colors can be mixed;
/// anything else returns `fg` unchanged.
pub fn blend(fg: Color, bg: Color, alpha: u8) -> Color {
    match (fg, bg) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let a = u32::from(alpha);
            let mix = |top: u8, under: u8| {
                ((u32::from(top) * a + u32::from(under) * (255 - a)) / 255) as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => fg,
    }
}
