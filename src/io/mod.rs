pub mod cli;
pub mod lines;
pub mod logger;
