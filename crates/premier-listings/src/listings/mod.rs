pub mod catalog;
pub mod domain;
pub mod form;
pub mod import;
pub mod query;
mod router;
mod sample;
pub mod views;

pub use catalog::{CatalogError, InMemoryListingCatalog, ListingCatalog};
pub use domain::{Coordinates, Listing, ListingId, PropertyCategory};
pub use form::SearchForm;
pub use import::load_catalog;
pub use query::{matches, query, query_refs, FilterCriteria, SortKey};
pub use router::listing_router;
pub use sample::sample_listings;
