use super::domain::{Coordinates, Listing, ListingId, PropertyCategory};
use super::query::SortKey;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ListingCardView {
    pub id: ListingId,
    pub title: String,
    pub price: u64,
    pub price_label: String,
    pub category: PropertyCategory,
    pub category_label: &'static str,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area_sq_ft: u32,
    pub area_label: String,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl From<&Listing> for ListingCardView {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            price: listing.price,
            price_label: format_price(listing.price),
            category: listing.category,
            category_label: listing.category.label(),
            location: listing.location.clone(),
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
            area_sq_ft: listing.area_sq_ft,
            area_label: format_area(listing.area_sq_ft),
            featured: listing.featured,
            cover_image: listing.images.first().cloned(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingDetailView {
    #[serde(flatten)]
    pub card: ListingCardView,
    pub description: String,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub coordinates: Coordinates,
}

impl From<&Listing> for ListingDetailView {
    fn from(listing: &Listing) -> Self {
        Self {
            card: ListingCardView::from(listing),
            description: listing.description.clone(),
            amenities: listing.amenities.clone(),
            images: listing.images.clone(),
            coordinates: listing.coordinates,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResultsView {
    pub total_found: usize,
    pub sort: SortKey,
    pub sort_label: &'static str,
    pub active_criteria: usize,
    pub listings: Vec<ListingCardView>,
}

impl SearchResultsView {
    pub fn new(results: &[&Listing], sort: SortKey, active_criteria: usize) -> Self {
        Self {
            total_found: results.len(),
            sort,
            sort_label: sort.label(),
            active_criteria,
            listings: results
                .iter()
                .map(|listing| ListingCardView::from(*listing))
                .collect(),
        }
    }

    /// Result count line shown above the listing grid.
    pub fn headline(&self) -> String {
        match self.total_found {
            0 => "No properties found".to_string(),
            1 => "1 property found".to_string(),
            count => format!("{count} properties found"),
        }
    }
}

/// Formats whole dollars the way the site renders prices, e.g. `$2,500,000`.
pub fn format_price(price: u64) -> String {
    format!("${}", group_thousands(price))
}

pub fn format_area(area_sq_ft: u32) -> String {
    format!("{} sq ft", group_thousands(u64::from(area_sq_ft)))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
