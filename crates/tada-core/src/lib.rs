pub mod error;
pub mod models;
pub mod render;
pub mod storage;
pub mod store;

pub use error::{Error, Result, ValidationError};
