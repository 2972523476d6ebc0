pub mod forms;
pub mod header;
pub mod model_viewer;
pub mod processing_status;
