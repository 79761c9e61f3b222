//! Command-line interface module.

mod args;
pub mod absolutize;
pub mod redirect;
pub mod serve;
pub mod slugs;
pub mod url;

pub use args::{AbsolutizeArgs, AddressArgs, Cli, Commands, PermalinkArgs, UrlFlags};
