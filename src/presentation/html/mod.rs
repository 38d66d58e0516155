//! Server-side HTML for the public blog, written with maud.
//!
//! Every function here is pure: it takes already-fetched data and returns
//! [`maud::Markup`]. Escaping of post fields is handled by maud.

pub mod blog;
pub mod dates;
pub mod layout;
pub mod styles;

pub use blog::BlogListingPage;
