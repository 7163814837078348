pub mod store;

pub use crate::domain::model::TodoList;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
pub use store::ListStore;
