pub mod app;
pub mod check;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod pipeline;
pub mod report;
