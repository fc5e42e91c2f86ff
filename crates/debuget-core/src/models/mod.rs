pub mod category;
pub mod descriptor;
pub mod frame;
pub mod report;
pub mod theme;

pub use category::{Category, ParseCategoryError};
pub use descriptor::{ErrorDescriptor, ResponseInfo};
pub use frame::Frame;
pub use report::ReportModel;
pub use theme::{Theme, ThemePatch};
