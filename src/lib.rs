//! Month-view date picker: a fixed 42-cell month grid, a single/range
//! selection state machine, and a terminal front-end over both.

pub mod calc;
pub mod data;
pub mod ui;
