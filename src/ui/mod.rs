//! Terminal UI: board with a movable cursor, the step history list, and
//! key handling for play, time travel, and sorting.

mod app;
mod game_view;

pub use app::App;
