use crate::cmd::fold_picks;
use anyhow::Result;
use chrono::NaiveDate;
use monthpick::calc::Selection;
use monthpick::data::Labels;
use monthpick::ui::month_view::selection_summary;
use serde::Serialize;

/// JSON shape of a selection; absent bounds serialize as `null`.
#[derive(Serialize, Debug, PartialEq)]
struct SelectionReport {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    days: i64,
}

impl From<Selection> for SelectionReport {
    fn from(selection: Selection) -> Self {
        SelectionReport {
            start: selection.start(),
            end: selection.end(),
            days: selection.day_count(),
        }
    }
}

pub fn run(dates: &[String], json: bool, labels: &Labels) -> Result<()> {
    let selection = fold_picks(dates)?;
    write_selection(selection, json, labels, &mut std::io::stdout())
}

pub(crate) fn write_selection<W: std::io::Write>(
    selection: Selection,
    json: bool,
    labels: &Labels,
    out: &mut W,
) -> Result<()> {
    if json {
        let report = SelectionReport::from(selection);
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "{}", selection_summary(&selection, labels))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use monthpick::data::Language;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn render(selection: Selection, json: bool) -> String {
        let mut buf = Vec::new();
        write_selection(selection, json, &Labels::default(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_range() {
        let out = render(Selection::range(d(2024, 3, 10), d(2024, 3, 15)), false);
        assert_eq!(out, "Selected: 2024-03-10 – 2024-03-15 (6 day(s))\n");
    }

    #[test]
    fn test_text_empty() {
        assert_eq!(render(Selection::Empty, false), "No selection\n");
    }

    #[test]
    fn test_text_localized() {
        let mut buf = Vec::new();
        let labels = Labels::for_language(Language::Uk);
        write_selection(Selection::Empty, false, &labels, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Нічого не вибрано\n");
    }

    #[test]
    fn test_json_range() {
        let out = render(Selection::range(d(2024, 3, 5), d(2024, 3, 10)), true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["start"], "2024-03-05");
        assert_eq!(value["end"], "2024-03-10");
        assert_eq!(value["days"], 6);
    }

    #[test]
    fn test_json_start_only_has_null_end() {
        let out = render(Selection::Start(d(2024, 3, 10)), true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["start"], "2024-03-10");
        assert!(value["end"].is_null());
    }

    #[test]
    fn test_json_empty() {
        let out = render(Selection::Empty, true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["start"].is_null());
        assert!(value["end"].is_null());
        assert_eq!(value["days"], 0);
    }
}
