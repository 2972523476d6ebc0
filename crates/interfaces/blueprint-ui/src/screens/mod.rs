pub mod dashboard;
pub mod output;
pub mod parameters;
pub mod upload;
pub mod walkthrough;
