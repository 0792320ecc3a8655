pub mod link;
pub mod markup;
pub mod widget;

pub use crate::domain::model::{ChatLink, WidgetSettings};
pub use crate::domain::ports::BrowsingContext;
pub use crate::utils::error::Result;
