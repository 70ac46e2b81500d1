pub mod cli;
pub mod clock;
pub mod commands;
pub mod formatting;
pub mod logging;
