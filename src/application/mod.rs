pub mod error;
pub mod task_service;

pub use error::*;
pub use task_service::*;
