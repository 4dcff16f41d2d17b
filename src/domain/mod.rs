//! Domain entities - the core value objects.

mod post;

pub use post::Post;
