pub mod batch;
pub mod config;
pub mod extract;
pub mod log;
pub mod process;
pub mod report;
pub mod stats;
pub mod timesheet;
