pub mod app_settings;
pub mod locale;
pub mod persistence;
pub mod theme;

pub use app_settings::AppSettings;
pub use locale::{HelpLabels, Labels, Language};
pub use persistence::Persistable;
pub use theme::{Palette, ThemeMode};
