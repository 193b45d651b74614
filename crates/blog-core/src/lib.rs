//! # Blog Core
//!
//! The domain layer of the blog backend.
//! This crate contains the post entity, the validation rules guarding every
//! write, and the post service. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

pub use error::{PostServiceError, PostValidationError, RepoError};
