use anyhow::Result;
use chrono::Local;
use monthpick::data::AppSettings;
use monthpick::ui::calendar_view::{App, run_app};
use monthpick::ui::{restore_terminal, setup_terminal};
use std::path::Path;

pub fn run(data_dir: &Path, settings: AppSettings, plain: bool) -> Result<()> {
    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    let today = Local::now().date_naive();
    let mut app = App::new(settings, today, plain);
    log::info!("picker started on {today}");

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    // Only theme and language survive the session; the selection is dropped.
    if app.settings != settings {
        app.settings.save_to(data_dir)?;
        log::info!("saved settings {:?}", app.settings);
    }

    result
}
