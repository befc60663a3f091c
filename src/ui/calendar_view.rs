use crate::calc::{
    MonthGrid, Selection, add_months, apply_selection, build_month_grid, first_of_month,
    month_grid_fits, next_month, prev_month,
};
use crate::data::{AppSettings, Labels, Palette};
use crate::ui::month_view::{
    MonthContext, VIEW_HEIGHT, VIEW_WIDTH, cell_index_at, month_lines, selection_summary,
};
use crate::ui::skin::{CalendarSkin, PlainSkin, ThemedSkin};
use anyhow::Result;
use chrono::{Datelike, NaiveDate, TimeDelta};
use crossterm::event::{
    self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Paragraph},
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

pub struct App {
    /// Day 1 of the displayed month.
    view_month: NaiveDate,
    grid: MonthGrid,
    cursor: NaiveDate,
    selection: Selection,
    today: NaiveDate,
    pub settings: AppSettings,
    labels: Labels,
    palette: Palette,
    plain: bool,
    /// Where the month was last drawn, for mouse hit-testing.
    grid_area: Option<Rect>,
}

impl App {
    pub fn new(settings: AppSettings, today: NaiveDate, plain: bool) -> Self {
        let view_month = first_of_month(today);
        App {
            view_month,
            grid: build_month_grid(view_month),
            cursor: today,
            selection: Selection::Empty,
            today,
            settings,
            labels: Labels::for_language(settings.language),
            palette: Palette::for_mode(settings.theme),
            plain,
            grid_area: None,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn view_month(&self) -> NaiveDate {
        self.view_month
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    fn show_month(&mut self, date: NaiveDate) {
        self.view_month = first_of_month(date);
        self.grid = build_month_grid(self.view_month);
        log::debug!("showing {}", self.view_month.format("%Y-%m"));
    }

    fn in_view_month(&self, date: NaiveDate) -> bool {
        date.year() == self.view_month.year() && date.month() == self.view_month.month()
    }

    /// Shifts the displayed month, carrying the cursor along when it was
    /// inside the old month.
    fn shift_month(&mut self, months: i32) {
        let target = if months < 0 {
            prev_month(self.view_month)
        } else {
            next_month(self.view_month)
        };
        if !month_grid_fits(target) {
            return;
        }
        let carried = add_months(self.cursor, months);
        self.show_month(target);
        self.cursor = if self.in_view_month(carried) {
            carried
        } else {
            target
        };
    }

    pub fn go_prev_month(&mut self) {
        self.shift_month(-1);
    }

    pub fn go_next_month(&mut self) {
        self.shift_month(1);
    }

    pub fn go_today(&mut self) {
        self.cursor = self.today;
        self.show_month(self.today);
    }

    fn move_cursor(&mut self, days: i64) {
        let target = self
            .cursor
            .checked_add_signed(TimeDelta::days(days))
            .unwrap_or(self.cursor);
        if !self.in_view_month(target) && !month_grid_fits(target) {
            return;
        }
        self.cursor = target;
        if !self.in_view_month(target) {
            self.show_month(target);
        }
    }

    pub fn pick(&mut self, date: NaiveDate) {
        self.selection = apply_selection(self.selection, date);
        log::info!("picked {date}, selection is now {:?}", self.selection);
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::Empty;
    }

    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggle();
        self.palette = Palette::for_mode(self.settings.theme);
        log::debug!("theme switched to {:?}", self.settings.theme);
    }

    pub fn toggle_language(&mut self) {
        self.settings.language = self.settings.language.toggle();
        self.labels = Labels::for_language(self.settings.language);
        log::debug!("language switched to {:?}", self.settings.language);
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('q') => return true,
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-7),
            KeyCode::Down => self.move_cursor(7),
            KeyCode::Char('p') | KeyCode::PageUp => self.go_prev_month(),
            KeyCode::Char('n') | KeyCode::PageDown => self.go_next_month(),
            KeyCode::Char('t') | KeyCode::Home => self.go_today(),
            KeyCode::Char(' ') | KeyCode::Enter => self.pick(self.cursor),
            KeyCode::Char('c') | KeyCode::Esc => self.clear_selection(),
            KeyCode::Char('d') => self.toggle_theme(),
            KeyCode::Char('L') => self.toggle_language(),
            _ => {}
        }
        false
    }

    /// A left click on a day picks it. Days of neighbouring months can be
    /// picked too; the displayed month stays put.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(area) = self.grid_area else {
            return;
        };
        let Some(cell) = cell_index_at(area, mouse.column, mouse.row)
            .and_then(|idx| self.grid.cells().get(idx))
        else {
            return;
        };
        let date = cell.date;
        self.cursor = date;
        self.pick(date);
    }

    fn skin(&self) -> Box<dyn CalendarSkin> {
        if self.plain {
            Box::new(PlainSkin)
        } else {
            Box::new(ThemedSkin::new(self.palette))
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let skin = self.skin();
        let size = f.area();
        f.render_widget(Block::default().style(skin.base_style()), size);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(VIEW_HEIGHT),
                Constraint::Length(1), // spacer
                Constraint::Length(1), // selection summary
                Constraint::Length(1), // key help
                Constraint::Min(0),
            ])
            .split(size);
        let calendar_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(VIEW_WIDTH), Constraint::Min(0)])
            .split(rows[0])[0];

        let ctx = MonthContext {
            grid: &self.grid,
            selection: self.selection,
            today: self.today,
            cursor: Some(self.cursor),
            labels: &self.labels,
        };
        let lines = month_lines(&ctx, skin.as_ref());
        f.render_widget(
            Paragraph::new(lines).style(skin.base_style()),
            calendar_area,
        );
        self.grid_area = Some(calendar_area);

        let summary = selection_summary(&self.selection, &self.labels);
        f.render_widget(
            Paragraph::new(Line::from(summary)).style(skin.base_style()),
            rows[2],
        );
        f.render_widget(
            Paragraph::new(Line::from(self.help_text())).style(skin.weekday_style()),
            rows[3],
        );
    }

    fn help_text(&self) -> String {
        let h = &self.labels.help;
        format!(
            "←↑↓→  n/p {}  space {}  c {}  t {}  d {}  L {}  q {}",
            h.prev_next,
            h.pick,
            h.clear,
            self.labels.today,
            h.theme,
            h.language,
            h.quit
        )
    }
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            match event::read()? {
                CEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code, key.modifiers) {
                        break;
                    }
                }
                CEvent::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Language, ThemeMode};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::empty())
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_new_shows_month_of_today() {
        let app = App::new(AppSettings::default(), d(2024, 2, 14), false);
        assert_eq!(app.view_month(), d(2024, 2, 1));
        assert_eq!(app.cursor(), d(2024, 2, 14));
        assert_eq!(app.selection(), Selection::Empty);
    }

    #[test]
    fn test_arrow_keys_move_cursor() {
        let mut app = App::new(AppSettings::default(), d(2025, 2, 10), false);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor(), d(2025, 2, 11));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor(), d(2025, 2, 10));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor(), d(2025, 2, 17));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor(), d(2025, 2, 10));
    }

    #[test]
    fn test_cursor_leaving_month_moves_view() {
        let mut app = App::new(AppSettings::default(), d(2025, 2, 27), false);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor(), d(2025, 3, 6));
        assert_eq!(app.view_month(), d(2025, 3, 1));
    }

    #[test]
    fn test_n_and_p_navigate_months() {
        let mut app = App::new(AppSettings::default(), d(2024, 1, 31), false);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.view_month(), d(2024, 2, 1));
        assert_eq!(app.cursor(), d(2024, 2, 29));
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.view_month(), d(2023, 12, 1));
        assert_eq!(app.cursor(), d(2023, 12, 29));
    }

    #[test]
    fn test_navigation_stops_at_calendar_edge() {
        let mut app = App::new(AppSettings::default(), d(262142, 11, 28), false);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.view_month(), d(262142, 11, 1));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor(), d(262142, 11, 28));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor(), d(262142, 11, 29));
    }

    #[test]
    fn test_page_down_and_t_return_to_today() {
        let mut app = App::new(AppSettings::default(), d(2024, 6, 15), false);
        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.view_month(), d(2024, 8, 1));
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.view_month(), d(2024, 6, 1));
        assert_eq!(app.cursor(), d(2024, 6, 15));
    }

    #[test]
    fn test_space_picks_range_at_cursor() {
        let mut app = App::new(AppSettings::default(), d(2024, 3, 10), false);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.selection(), Selection::Start(d(2024, 3, 10)));
        for _ in 0..5 {
            press(&mut app, KeyCode::Right);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selection(), Selection::range(d(2024, 3, 10), d(2024, 3, 15)));
    }

    #[test]
    fn test_picking_start_twice_clears() {
        let mut app = App::new(AppSettings::default(), d(2024, 3, 10), false);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.selection(), Selection::Empty);
    }

    #[test]
    fn test_c_and_esc_clear_selection() {
        let mut app = App::new(AppSettings::default(), d(2024, 3, 10), false);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('c'));
        assert!(app.selection().is_empty());
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Esc);
        assert!(app.selection().is_empty());
    }

    #[test]
    fn test_d_toggles_theme_and_l_toggles_language() {
        let mut app = App::new(AppSettings::default(), d(2024, 3, 10), false);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.settings.theme, ThemeMode::Light);
        assert_eq!(app.palette, Palette::light());
        press(&mut app, KeyCode::Char('L'));
        assert_eq!(app.settings.language, Language::Uk);
        assert_eq!(app.labels.today, "Сьогодні");
    }

    #[test]
    fn test_q_returns_true() {
        let mut app = App::new(AppSettings::default(), d(2024, 3, 10), false);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_ctrl_c_returns_true() {
        let mut app = App::new(AppSettings::default(), d(2024, 3, 10), false);
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_other_keys_do_not_quit() {
        let mut app = App::new(AppSettings::default(), d(2024, 3, 10), false);
        assert!(!press(&mut app, KeyCode::Char('x')));
        assert!(!press(&mut app, KeyCode::Char('n')));
    }

    #[test]
    fn test_render_shows_title_and_summary() {
        let mut app = App::new(AppSettings::default(), d(2024, 2, 14), false);
        app.pick(d(2024, 2, 14));
        let screen = draw(&mut app);
        assert!(screen.contains("February 2024"));
        assert!(screen.contains("Selected: 2024-02-14"));
    }

    #[test]
    fn test_render_localized() {
        let settings = AppSettings {
            language: Language::Uk,
            ..AppSettings::default()
        };
        let mut app = App::new(settings, d(2024, 2, 14), true);
        let screen = draw(&mut app);
        assert!(screen.contains("Лютий 2024"));
        assert!(screen.contains("Нічого не вибрано"));
    }

    #[test]
    fn test_click_before_render_is_ignored() {
        let mut app = App::new(AppSettings::default(), d(2024, 2, 14), false);
        app.handle_mouse(click(0, 2));
        assert!(app.selection().is_empty());
    }

    #[test]
    fn test_click_picks_day() {
        let mut app = App::new(AppSettings::default(), d(2024, 2, 14), false);
        draw(&mut app);
        // row 2 is the first week: Jan 29 .. Feb 4; column 12 is the 4th cell
        app.handle_mouse(click(12, 2));
        assert_eq!(app.selection(), Selection::Start(d(2024, 2, 1)));
        assert_eq!(app.cursor(), d(2024, 2, 1));
        // second week row, last column: Feb 11
        app.handle_mouse(click(27, 3));
        assert_eq!(app.selection(), Selection::range(d(2024, 2, 1), d(2024, 2, 11)));
    }

    #[test]
    fn test_click_on_leading_day_keeps_month() {
        let mut app = App::new(AppSettings::default(), d(2024, 2, 14), false);
        draw(&mut app);
        app.handle_mouse(click(0, 2));
        assert_eq!(app.selection(), Selection::Start(d(2024, 1, 29)));
        assert_eq!(app.view_month(), d(2024, 2, 1));
    }

    #[test]
    fn test_non_left_click_ignored() {
        let mut app = App::new(AppSettings::default(), d(2024, 2, 14), false);
        draw(&mut app);
        let mut ev = click(12, 2);
        ev.kind = MouseEventKind::Down(MouseButton::Right);
        app.handle_mouse(ev);
        assert!(app.selection().is_empty());
    }
}
