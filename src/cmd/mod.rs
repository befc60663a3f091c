pub mod init;
pub mod month;
pub mod root;
pub mod select;

use anyhow::{Context, Result, ensure};
use chrono::NaiveDate;
use monthpick::calc::{Selection, apply_selection, month_grid_fits};

/// Parses a YYYY-MM-DD argument. Dates whose month cannot be laid out as a
/// full grid are rejected here rather than panicking later.
pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD"))?;
    ensure!(
        month_grid_fits(date),
        "date '{raw}' is too close to the end of the supported calendar"
    );
    Ok(date)
}

/// Feeds each picked date through the selection state machine, starting empty.
pub(crate) fn fold_picks(raw: &[String]) -> Result<Selection> {
    raw.iter().try_fold(Selection::Empty, |selection, r| -> Result<Selection> {
        let next = apply_selection(selection, parse_date(r)?);
        log::debug!("pick {r}: {selection:?} -> {next:?}");
        Ok(next)
    })
}
