//! Question store operations behind the HTTP routes.
//!
//! Every listing is ordered by question id, so a page number always refers to
//! the same slice of an unchanged store.

pub mod categories;
mod error;
pub mod pagination;
pub mod questions;
pub mod quiz;

pub use error::{TriviaError, TriviaResult};
