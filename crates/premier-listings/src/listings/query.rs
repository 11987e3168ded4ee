use super::domain::{Listing, PropertyCategory};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// User supplied constraints narrowing the listing set.
///
/// Every field is optional. `None` means the criterion was not supplied and
/// has no filtering effect; `Some(0)` is a supplied criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<PropertyCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bathrooms: Option<u32>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of criteria that were supplied.
    pub fn active_count(&self) -> usize {
        [
            self.location.is_some(),
            self.category.is_some(),
            self.price_min.is_some(),
            self.price_max.is_some(),
            self.min_bedrooms.is_some(),
            self.min_bathrooms.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keeps catalog order. Listings carry no creation date, so this is not a
    /// recency sort.
    #[default]
    Newest,
    PriceAscending,
    PriceDescending,
    BedroomsDescending,
    AreaDescending,
}

impl SortKey {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Newest,
            Self::PriceAscending,
            Self::PriceDescending,
            Self::BedroomsDescending,
            Self::AreaDescending,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAscending => "price-ascending",
            Self::PriceDescending => "price-descending",
            Self::BedroomsDescending => "bedrooms-descending",
            Self::AreaDescending => "area-descending",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::PriceAscending => "Price: Low to High",
            Self::PriceDescending => "Price: High to Low",
            Self::BedroomsDescending => "Bedrooms",
            Self::AreaDescending => "Area",
        }
    }

    fn compare(self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            Self::Newest => Ordering::Equal,
            Self::PriceAscending => a.price.cmp(&b.price),
            Self::PriceDescending => b.price.cmp(&a.price),
            Self::BedroomsDescending => b.bedrooms.cmp(&a.bedrooms),
            Self::AreaDescending => b.area_sq_ft.cmp(&a.area_sq_ft),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order '{0}'")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    /// Accepts the canonical names as well as the option values used by the
    /// site's sort dropdown (`price-low`, `price-high`, `bedrooms`, `area`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "price-ascending" | "price-low" => Ok(Self::PriceAscending),
            "price-descending" | "price-high" => Ok(Self::PriceDescending),
            "bedrooms-descending" | "bedrooms" => Ok(Self::BedroomsDescending),
            "area-descending" | "area" => Ok(Self::AreaDescending),
            _ => Err(ParseSortKeyError(raw.trim().to_string())),
        }
    }
}

/// Returns true when the listing satisfies every supplied criterion.
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let location = criteria.location.as_deref().map(str::to_lowercase);
    matches_prepared(listing, criteria, location.as_deref())
}

fn matches_prepared(
    listing: &Listing,
    criteria: &FilterCriteria,
    location_lower: Option<&str>,
) -> bool {
    if let Some(needle) = location_lower {
        if !listing.location.to_lowercase().contains(needle) {
            return false;
        }
    }

    if let Some(category) = criteria.category {
        if listing.category != category {
            return false;
        }
    }

    if let Some(min) = criteria.price_min {
        if listing.price < min {
            return false;
        }
    }

    if let Some(max) = criteria.price_max {
        if listing.price > max {
            return false;
        }
    }

    if let Some(min) = criteria.min_bedrooms {
        if listing.bedrooms < min {
            return false;
        }
    }

    if let Some(min) = criteria.min_bathrooms {
        if listing.bathrooms < min {
            return false;
        }
    }

    true
}

/// Filters and orders listings without copying them.
///
/// Sorting is stable, so ties keep their catalog order.
pub fn query_refs<'a>(
    listings: &'a [Listing],
    criteria: &FilterCriteria,
    sort: SortKey,
) -> Vec<&'a Listing> {
    let location = criteria.location.as_deref().map(str::to_lowercase);

    let mut selected: Vec<&Listing> = listings
        .iter()
        .filter(|listing| matches_prepared(listing, criteria, location.as_deref()))
        .collect();

    if sort != SortKey::Newest {
        selected.sort_by(|a, b| sort.compare(a, b));
    }

    debug!(
        total = listings.len(),
        matched = selected.len(),
        active_criteria = criteria.active_count(),
        sort = %sort,
        "listing query evaluated"
    );

    selected
}

/// Produces the ordered subset of `listings` to display.
pub fn query(listings: &[Listing], criteria: &FilterCriteria, sort: SortKey) -> Vec<Listing> {
    query_refs(listings, criteria, sort)
        .into_iter()
        .cloned()
        .collect()
}
