//! Doctor directory core: roster loading, search, attribute filters, and the
//! page controller that mirrors filter state into the page URL.

pub mod config;
pub mod controller;
pub mod error;
pub mod filter_panel;
pub mod query;
pub mod render;
pub mod search;
pub mod source;

pub use controller::{PageController, PageState};
pub use error::DirectoryError;
pub use query::{QueryParams, QueryPatch};
pub use source::{RosterLocation, RosterSource};

#[cfg(test)]
pub(crate) mod test_support;
