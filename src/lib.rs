pub mod report;
pub mod sim;
pub mod ui;
pub mod utils;
