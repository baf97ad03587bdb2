//! The HTTP transport related stuff.

mod filters;
mod handlers;
pub(crate) mod rejection;


pub use filters::root;
