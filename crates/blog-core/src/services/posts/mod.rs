//! Post foundation service and its validation rules.

mod service;
mod validations;

pub use service::PostService;
pub use validations::PostValidator;
