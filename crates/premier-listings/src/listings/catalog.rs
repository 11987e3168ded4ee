use super::domain::{Listing, ListingId};
use super::query::{self, FilterCriteria, SortKey};
use super::sample::sample_listings;
use std::collections::HashSet;
use std::path::PathBuf;

/// Read-only source of listings the query engine runs against.
///
/// Implementations decide where listings come from; searching, lookups and
/// featured selection are shared.
pub trait ListingCatalog: Send + Sync {
    fn listings(&self) -> &[Listing];

    fn find(&self, id: &ListingId) -> Option<&Listing> {
        self.listings().iter().find(|listing| &listing.id == id)
    }

    fn featured(&self) -> Vec<&Listing> {
        self.listings()
            .iter()
            .filter(|listing| listing.featured)
            .collect()
    }

    fn search(&self, criteria: &FilterCriteria, sort: SortKey) -> Vec<&Listing> {
        query::query_refs(self.listings(), criteria, sort)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("listing id must not be empty (record {position})")]
    EmptyId { position: usize },
    #[error("duplicate listing id '{0}'")]
    DuplicateId(ListingId),
    #[error("listing '{0}' must have a positive area")]
    InvalidArea(ListingId),
    #[error("listing '{0}' not found")]
    NotFound(ListingId),
    #[error("failed to read listings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listings CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid listings JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported listings file '{}' (expected .csv or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Catalog held entirely in memory, validated on construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryListingCatalog {
    listings: Vec<Listing>,
}

impl InMemoryListingCatalog {
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());

        for (position, listing) in listings.iter().enumerate() {
            if listing.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyId { position });
            }
            if !seen.insert(&listing.id) {
                return Err(CatalogError::DuplicateId(listing.id.clone()));
            }
            if listing.area_sq_ft == 0 {
                return Err(CatalogError::InvalidArea(listing.id.clone()));
            }
        }

        Ok(Self { listings })
    }

    pub fn sample() -> Self {
        Self {
            listings: sample_listings(),
        }
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl ListingCatalog for InMemoryListingCatalog {
    fn listings(&self) -> &[Listing] {
        &self.listings
    }
}
