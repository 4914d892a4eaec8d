//! Curated-list ("Awesome Ethereum") parsing and search.
//!
//! A remote markdown document is fetched once per load through a
//! [`CatalogSource`], split into categories by [`parse_catalog`], and narrowed
//! by [`filter_catalog`]. [`CatalogView`] tells the caller whether there is
//! anything to show.

pub mod filter;
pub mod parser;
pub mod source;

pub use filter::{CatalogView, filter_catalog};
pub use parser::{parse_catalog, slugify};
pub use source::{CatalogSource, load_catalog};
