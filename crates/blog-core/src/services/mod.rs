//! Application services built on the domain and its ports.

pub mod posts;

pub use posts::{PostService, PostValidator};
