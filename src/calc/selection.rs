use chrono::NaiveDate;
use std::cmp::Ordering;

/// Picked dates of a range picker. An end without a start cannot be expressed.
///
/// Ranges produced by `apply_selection` and `Selection::range` have `start`
/// on or before `end`. A hand-built `Range` may be inverted; the queries below
/// treat it as covering the same days.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Empty,
    Start(NaiveDate),
    Range { start: NaiveDate, end: NaiveDate },
}

/// How a single day relates to a selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DayMark {
    pub is_start: bool,
    pub is_end: bool,
    /// Strictly between the start and end of a complete range.
    pub in_range: bool,
}

impl Selection {
    /// A range over `a` and `b`, whichever order they are given in.
    pub fn range(a: NaiveDate, b: NaiveDate) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Selection::Range { start, end }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        match *self {
            Selection::Empty => None,
            Selection::Start(start) | Selection::Range { start, .. } => Some(start),
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match *self {
            Selection::Range { end, .. } => Some(end),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    pub fn pick(self, date: NaiveDate) -> Self {
        apply_selection(self, date)
    }

    /// Inclusive membership. A start-only selection holds just its start.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Selection::Empty => false,
            Selection::Start(start) => date == start,
            Selection::Range { start, end } => date >= start.min(end) && date <= start.max(end),
        }
    }

    /// Number of days covered, counting both ends.
    pub fn day_count(&self) -> i64 {
        match *self {
            Selection::Empty => 0,
            Selection::Start(_) => 1,
            Selection::Range { start, end } => (end - start).num_days().abs() + 1,
        }
    }

    pub fn mark(&self, date: NaiveDate) -> DayMark {
        match *self {
            Selection::Empty => DayMark::default(),
            Selection::Start(start) => DayMark {
                is_start: date == start,
                ..DayMark::default()
            },
            Selection::Range { start, end } => DayMark {
                is_start: date == start,
                is_end: date == end,
                in_range: date > start.min(end) && date < start.max(end),
            },
        }
    }
}

/// Advances the selection for one picked day.
///
/// An empty or complete selection restarts at `picked`. With only a start
/// set, an earlier pick becomes the new start, a later pick closes the range,
/// and picking the start again clears everything.
pub fn apply_selection(current: Selection, picked: NaiveDate) -> Selection {
    match current {
        Selection::Empty | Selection::Range { .. } => Selection::Start(picked),
        Selection::Start(start) => match picked.cmp(&start) {
            Ordering::Less => Selection::Range {
                start: picked,
                end: start,
            },
            Ordering::Equal => Selection::Empty,
            Ordering::Greater => Selection::Range { start, end: picked },
        },
    }
}
