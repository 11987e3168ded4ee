use super::catalog::{CatalogError, InMemoryListingCatalog};
use super::domain::{Coordinates, Listing, ListingId, PropertyCategory};
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Loads a catalog file, choosing the format from its extension.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<InMemoryListingCatalog, CatalogError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let listings = match extension.as_deref() {
        Some("csv") => parse_csv(File::open(path)?)?,
        Some("json") => parse_json(File::open(path)?)?,
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };

    info!(path = %path.display(), count = listings.len(), "listing catalog loaded");
    InMemoryListingCatalog::new(listings)
}

pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Listing>, CatalogError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Listing>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut listings = Vec::new();

    for record in csv_reader.deserialize::<ListingRow>() {
        listings.push(record?.into_listing());
    }

    Ok(listings)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    id: String,
    title: String,
    price: u64,
    #[serde(rename = "type")]
    category: PropertyCategory,
    location: String,
    bedrooms: u32,
    bathrooms: u32,
    area: u32,
    #[serde(default, deserialize_with = "flexible_bool")]
    featured: bool,
    #[serde(default)]
    description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    amenities: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    images: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lng: Option<f64>,
}

impl ListingRow {
    fn into_listing(self) -> Listing {
        Listing {
            id: ListingId(self.id),
            title: self.title,
            price: self.price,
            category: self.category,
            location: self.location,
            description: self.description,
            images: split_list(self.images.as_deref()),
            amenities: split_list(self.amenities.as_deref()),
            coordinates: Coordinates {
                lat: self.lat.unwrap_or_default(),
                lng: self.lng.unwrap_or_default(),
            },
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area_sq_ft: self.area,
            featured: self.featured,
        }
    }
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(';')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Ok(false),
        "true" | "yes" | "y" | "1" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean for 'featured', found '{other}'"
        ))),
    }
}
