use crate::calc::{DayCell, GRID_ROWS, MonthGrid, Selection, WEEK_LEN};
use crate::data::Labels;
use crate::ui::skin::{CalendarSkin, DayState};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

/// Terminal columns per day cell.
pub const CELL_WIDTH: u16 = 4;
/// Title line plus weekday header above the week rows.
pub const HEADER_ROWS: u16 = 2;
pub const VIEW_WIDTH: u16 = CELL_WIDTH * WEEK_LEN as u16;
pub const VIEW_HEIGHT: u16 = HEADER_ROWS + GRID_ROWS as u16;

/// Inputs of one month rendering: the two core outputs plus presentation
/// context supplied by the caller.
pub struct MonthContext<'a> {
    pub grid: &'a MonthGrid,
    pub selection: Selection,
    pub today: NaiveDate,
    pub cursor: Option<NaiveDate>,
    pub labels: &'a Labels,
}

impl MonthContext<'_> {
    pub fn day_state(&self, cell: &DayCell) -> DayState {
        DayState {
            is_current_month: cell.is_current_month,
            is_today: cell.date == self.today,
            is_cursor: self.cursor == Some(cell.date),
            mark: self.selection.mark(cell.date),
        }
    }

    fn title(&self) -> String {
        self.labels.title(self.grid.year(), self.grid.month())
    }
}

pub fn month_lines(ctx: &MonthContext, skin: &dyn CalendarSkin) -> Vec<Line<'static>> {
    let width = VIEW_WIDTH as usize;
    let mut lines = Vec::with_capacity(VIEW_HEIGHT as usize);

    lines.push(Line::from(Span::styled(
        format!("{:^width$}", ctx.title()),
        skin.title_style(),
    )));

    let header: Vec<Span> = ctx
        .labels
        .weekdays_short
        .iter()
        .map(|name| Span::styled(format!("{:^4}", name), skin.weekday_style()))
        .collect();
    lines.push(Line::from(header));

    for week in ctx.grid.weeks() {
        let spans: Vec<Span> = week
            .iter()
            .map(|cell| {
                let style = skin.day_style(&ctx.day_state(cell));
                Span::styled(format!(" {:>2} ", cell.date.day()), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}

/// Grid index of the cell under terminal position (`x`, `y`) when the lines
/// of `month_lines` are drawn starting at the top-left of `area`.
pub fn cell_index_at(area: Rect, x: u16, y: u16) -> Option<usize> {
    let grid_top = area.y.saturating_add(HEADER_ROWS);
    if x < area.x || x >= area.right() || y < grid_top || y >= area.bottom() {
        return None;
    }
    let col = ((x - area.x) / CELL_WIDTH) as usize;
    let row = (y - grid_top) as usize;
    if col >= WEEK_LEN || row >= GRID_ROWS {
        return None;
    }
    Some(row * WEEK_LEN + col)
}

/// One-line description of a selection, e.g. "Selected: 2024-03-10 – 2024-03-15 (6 day(s))".
pub fn selection_summary(selection: &Selection, labels: &Labels) -> String {
    match *selection {
        Selection::Empty => labels.no_selection.to_string(),
        Selection::Start(start) => format!(
            "{}: {} ({} {})",
            labels.selected,
            start.format("%Y-%m-%d"),
            selection.day_count(),
            labels.days
        ),
        Selection::Range { start, end } => format!(
            "{}: {} – {} ({} {})",
            labels.selected,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
            selection.day_count(),
            labels.days
        ),
    }
}

/// Plain-text month for stdout. `[`/`]` bracket the selection bounds, `-`
/// joins days inside a range and `*` flags today.
pub fn write_month<W: std::io::Write>(ctx: &MonthContext, out: &mut W) -> Result<()> {
    let width = VIEW_WIDTH as usize;
    writeln!(out, "{}", format!("{:^width$}", ctx.title()).trim_end())?;

    let header: String = ctx
        .labels
        .weekdays_short
        .iter()
        .map(|name| format!("{:^4}", name))
        .collect();
    writeln!(out, "{}", header.trim_end())?;

    for week in ctx.grid.weeks() {
        let row: String = week.iter().map(|cell| plain_cell(ctx, cell)).collect();
        writeln!(out, "{}", row.trim_end())?;
    }
    Ok(())
}

fn plain_cell(ctx: &MonthContext, cell: &DayCell) -> String {
    let mark = ctx.selection.mark(cell.date);
    let start_only = ctx.selection.end().is_none();

    let prefix = if mark.is_start {
        '['
    } else if mark.in_range || mark.is_end {
        '-'
    } else {
        ' '
    };
    let suffix = if mark.is_end || (mark.is_start && start_only) {
        ']'
    } else if mark.in_range || mark.is_start {
        '-'
    } else if cell.date == ctx.today {
        '*'
    } else {
        ' '
    };
    format!("{}{:>2}{}", prefix, cell.date.day(), suffix)
}
