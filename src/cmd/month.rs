use crate::cmd::{fold_picks, parse_date};
use anyhow::{Result, ensure};
use chrono::{Local, NaiveDate};
use monthpick::calc::{Selection, build_month_grid, month_grid_fits};
use monthpick::data::Labels;
use monthpick::ui::month_view::{MonthContext, selection_summary, write_month};

pub fn run(date: Option<&str>, picks: &[String], labels: &Labels) -> Result<()> {
    let today = Local::now().date_naive();
    let reference = date.map(parse_date).transpose()?.unwrap_or(today);
    let selection = fold_picks(picks)?;
    write_month_report(reference, selection, today, labels, &mut std::io::stdout())
}

pub(crate) fn write_month_report<W: std::io::Write>(
    reference: NaiveDate,
    selection: Selection,
    today: NaiveDate,
    labels: &Labels,
    out: &mut W,
) -> Result<()> {
    ensure!(month_grid_fits(reference), "cannot lay out the month of {reference}");
    let grid = build_month_grid(reference);
    let ctx = MonthContext {
        grid: &grid,
        selection,
        today,
        cursor: None,
        labels,
    };
    write_month(&ctx, out)?;
    writeln!(out)?;
    writeln!(out, "{}", selection_summary(&selection, labels))?;
    Ok(())
}
