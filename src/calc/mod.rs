pub mod grid;
pub mod month;
pub mod selection;

pub use grid::{
    DayCell, GRID_CELLS, GRID_ROWS, MonthGrid, WEEK_LEN, build_month_grid, month_grid_fits,
};
pub use month::{add_months, days_in_month, first_of_month, next_month, prev_month};
pub use selection::{DayMark, Selection, apply_selection};
