use crate::calc::DayMark;
use crate::data::Palette;
use ratatui::style::{Modifier, Style};

/// Everything the month view needs to know about one cell to style it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DayState {
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_cursor: bool,
    pub mark: DayMark,
}

/// Styling capabilities a month rendering needs. Variants plug in here
/// instead of duplicating the view.
pub trait CalendarSkin {
    fn base_style(&self) -> Style;
    fn title_style(&self) -> Style;
    fn weekday_style(&self) -> Style;
    fn day_style(&self, state: &DayState) -> Style;
}

/// Colors from a light or dark `Palette`.
pub struct ThemedSkin {
    palette: Palette,
}

impl ThemedSkin {
    pub fn new(palette: Palette) -> Self {
        ThemedSkin { palette }
    }
}

impl CalendarSkin for ThemedSkin {
    fn base_style(&self) -> Style {
        Style::default().bg(self.palette.bg).fg(self.palette.text_primary)
    }

    fn title_style(&self) -> Style {
        Style::default()
            .bg(self.palette.header_bg)
            .fg(self.palette.header_text)
            .add_modifier(Modifier::BOLD)
    }

    fn weekday_style(&self) -> Style {
        Style::default()
            .fg(self.palette.text_secondary)
            .add_modifier(Modifier::BOLD)
    }

    fn day_style(&self, state: &DayState) -> Style {
        let p = &self.palette;
        let fg = if state.is_current_month {
            p.text_primary
        } else {
            p.text_secondary
        };
        let mut style = Style::default().fg(fg).bg(p.bg);

        if state.is_today {
            style = style
                .bg(p.today_accent)
                .fg(p.today_accent_border)
                .add_modifier(Modifier::BOLD);
        }
        if state.mark.in_range {
            style = style.bg(p.range_fill());
        }
        if state.mark.is_start || state.mark.is_end {
            style = style.bg(p.accent).fg(p.bg).add_modifier(Modifier::BOLD);
        }
        if state.is_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

/// Monochrome variant for terminals without color.
pub struct PlainSkin;

impl CalendarSkin for PlainSkin {
    fn base_style(&self) -> Style {
        Style::default()
    }

    fn title_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    fn weekday_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    fn day_style(&self, state: &DayState) -> Style {
        let mut style = Style::default();
        if !state.is_current_month {
            style = style.add_modifier(Modifier::DIM);
        }
        if state.is_today {
            style = style.add_modifier(Modifier::BOLD);
        }
        if state.mark.in_range {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if state.mark.is_start || state.mark.is_end {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        if state.is_cursor {
            style = style.add_modifier(Modifier::SLOW_BLINK | Modifier::UNDERLINED);
        }
        style
    }
}
