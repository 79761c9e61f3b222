//! Markup transforms.
//!
//! - [`link`]: relative `href`/`src` values made absolute (for feeds and
//!   other places where content is read outside its page)

pub mod link;

pub use link::LinkRewriter;
