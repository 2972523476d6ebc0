pub mod nav;
pub mod params;
pub mod upload;
pub mod viewer;
pub mod walkthrough;

pub use nav::{NavigationState, Page, UnknownPage};
pub use params::{
    BuildingParameters, BuildingType, NumberInput, ParamError, ParamField, ParamViolation,
};
pub use upload::{BlueprintFormat, UploadError, UploadedImage};
pub use viewer::{RenderQuality, ViewerSettings};
pub use walkthrough::WalkthroughCamera;
