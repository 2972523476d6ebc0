use blueprint_core::{Page, ParamField, UploadedImage, ViewerSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkCommand {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Reset,
}

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Navigation
    Navigate(Page),
    NavigateToken(String),

    // Upload
    UploadImage(UploadedImage),

    // Parameters form
    UpdateParam { field: ParamField, raw: String },
    ResetParams,

    // Pipeline
    StartConversion,

    // Output / walkthrough controls
    UpdateViewer(ViewerSettings),
    Walk(WalkCommand),

    DismissError,
}
