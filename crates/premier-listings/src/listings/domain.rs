use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier wrapper for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub String);

impl ListingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    Apartment,
    House,
    Condo,
    Villa,
    Townhouse,
}

impl PropertyCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Apartment,
            Self::House,
            Self::Condo,
            Self::Villa,
            Self::Townhouse,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Condo => "condo",
            Self::Villa => "villa",
            Self::Townhouse => "townhouse",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Condo => "Condo",
            Self::Villa => "Villa",
            Self::Townhouse => "Townhouse",
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown property type '{0}' (expected apartment, house, condo, villa or townhouse)")]
pub struct ParseCategoryError(pub String);

impl FromStr for PropertyCategory {
    type Err = ParseCategoryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ParseCategoryError(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A single property record available for display and search.
///
/// Only price, category, location, room counts, area and the featured flag
/// take part in searching; the remaining fields pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub price: u64,
    #[serde(rename = "type")]
    pub category: PropertyCategory,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub coordinates: Coordinates,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(rename = "area")]
    pub area_sq_ft: u32,
    #[serde(default)]
    pub featured: bool,
}
