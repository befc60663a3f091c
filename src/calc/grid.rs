use crate::calc::month::{days_in_month, first_of_month};
use chrono::{Datelike, Days, NaiveDate};

/// Days per week row.
pub const WEEK_LEN: usize = 7;
/// Week rows in every grid.
pub const GRID_ROWS: usize = 6;
/// Cells in every grid, whatever the month length or starting weekday.
pub const GRID_CELLS: usize = WEEK_LEN * GRID_ROWS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
}

impl DayCell {
    fn new(date: NaiveDate, is_current_month: bool) -> Self {
        DayCell {
            date,
            is_current_month,
        }
    }
}

/// Six Monday-first week rows covering one month plus the leading and
/// trailing days of its neighbours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The grid as 6 rows of 7 cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(WEEK_LEN)
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<&DayCell> {
        if row >= GRID_ROWS || col >= WEEK_LEN {
            return None;
        }
        self.cells.get(row * WEEK_LEN + col)
    }

    pub fn first_date(&self) -> NaiveDate {
        self.cells[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.cells[GRID_CELLS - 1].date
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_date() && date <= self.last_date()
    }

    /// Position of `date` in the grid, if it is shown at all.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }
        Some((date - self.first_date()).num_days() as usize)
    }

    pub fn leading_count(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| !c.is_current_month)
            .count()
    }

    pub fn current_month_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_current_month).count()
    }

    pub fn trailing_count(&self) -> usize {
        GRID_CELLS - self.leading_count() - self.current_month_count()
    }
}

impl<'a> IntoIterator for &'a MonthGrid {
    type Item = &'a DayCell;
    type IntoIter = std::slice::Iter<'a, DayCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Whether every cell of the grid for `reference` is a representable date.
/// Only months at the very edges of chrono's range fail this.
pub fn month_grid_fits(reference: NaiveDate) -> bool {
    let start = first_of_month(reference);
    start.checked_sub_days(Days::new(6)).is_some()
        && start.checked_add_days(Days::new(GRID_CELLS as u64)).is_some()
}

/// Builds the 42-cell grid for the month containing `reference`.
///
/// Pure: the result depends only on the year and month of `reference`.
/// Panics if `month_grid_fits(reference)` is false; callers taking dates
/// from outside check it first.
pub fn build_month_grid(reference: NaiveDate) -> MonthGrid {
    let (year, month) = (reference.year(), reference.month());
    let start_of_month = first_of_month(reference);
    let month_len = days_in_month(year, month);

    // Monday = 0 .. Sunday = 6
    let start_weekday = start_of_month.weekday().num_days_from_monday() as u64;
    let prev_month_last_day = start_of_month - Days::new(1);

    let mut cells = Vec::with_capacity(GRID_CELLS);

    for i in (0..start_weekday).rev() {
        cells.push(DayCell::new(prev_month_last_day - Days::new(i), false));
    }

    for offset in 0..u64::from(month_len) {
        cells.push(DayCell::new(start_of_month + Days::new(offset), true));
    }

    let next_month_start = start_of_month + Days::new(u64::from(month_len));
    let mut offset = 0;
    while cells.len() < GRID_CELLS {
        cells.push(DayCell::new(next_month_start + Days::new(offset), false));
        offset += 1;
    }

    debug_assert_eq!(cells.len(), GRID_CELLS);
    MonthGrid { year, month, cells }
}
