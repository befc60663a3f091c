use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Uk,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Uk,
            Language::Uk => Language::En,
        }
    }
}

/// Translated strings for the month view. Built per language and handed to
/// the rendering layer; there is no shared registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    pub month_names: [&'static str; 12],
    /// Monday first.
    pub weekdays_short: [&'static str; 7],
    pub today: &'static str,
    pub selected: &'static str,
    pub no_selection: &'static str,
    pub days: &'static str,
    pub help: HelpLabels,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpLabels {
    pub prev_next: &'static str,
    pub pick: &'static str,
    pub clear: &'static str,
    pub theme: &'static str,
    pub language: &'static str,
    pub quit: &'static str,
}

const EN: Labels = Labels {
    month_names: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    weekdays_short: ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
    today: "Today",
    selected: "Selected",
    no_selection: "No selection",
    days: "day(s)",
    help: HelpLabels {
        prev_next: "month",
        pick: "pick",
        clear: "clear",
        theme: "theme",
        language: "language",
        quit: "quit",
    },
};

const UK: Labels = Labels {
    month_names: [
        "Січень", "Лютий", "Березень", "Квітень", "Травень", "Червень", "Липень", "Серпень",
        "Вересень", "Жовтень", "Листопад", "Грудень",
    ],
    weekdays_short: ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Нд"],
    today: "Сьогодні",
    selected: "Вибрано",
    no_selection: "Нічого не вибрано",
    days: "дн.",
    help: HelpLabels {
        prev_next: "місяць",
        pick: "вибрати",
        clear: "скинути",
        theme: "тема",
        language: "мова",
        quit: "вихід",
    },
};

impl Labels {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => EN,
            Language::Uk => UK,
        }
    }

    /// Name of a 1-based month, or "Unknown".
    pub fn month_name(&self, month: u32) -> &'static str {
        month
            .checked_sub(1)
            .and_then(|idx| self.month_names.get(idx as usize))
            .copied()
            .unwrap_or("Unknown")
    }

    pub fn title(&self, year: i32, month: u32) -> String {
        format!("{} {}", self.month_name(month), year)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Labels::for_language(Language::default())
    }
}
