pub mod cli;
pub mod clock;
pub mod format;
pub mod gui;
pub mod laps;
pub mod stopwatch;
pub mod ticker;
