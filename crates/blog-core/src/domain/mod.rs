//! Domain entities - the core business objects.

pub mod post;

pub use post::Post;
