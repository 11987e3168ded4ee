use crate::infra::open_catalog;
use clap::Args;
use premier_listings::error::AppError;
use premier_listings::listings::views::{ListingCardView, ListingDetailView, SearchResultsView};
use premier_listings::listings::{
    CatalogError, FilterCriteria, ListingCatalog, ListingId, PropertyCategory, SortKey,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Case-insensitive fragment of the listing location
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Property type (apartment, house, condo, villa, townhouse)
    #[arg(long = "type")]
    pub(crate) category: Option<PropertyCategory>,
    /// Minimum price in whole dollars
    #[arg(long)]
    pub(crate) min_price: Option<u64>,
    /// Maximum price in whole dollars
    #[arg(long)]
    pub(crate) max_price: Option<u64>,
    /// Minimum number of bedrooms
    #[arg(long)]
    pub(crate) bedrooms: Option<u32>,
    /// Minimum number of bathrooms
    #[arg(long)]
    pub(crate) bathrooms: Option<u32>,
    /// Ordering: newest, price-low, price-high, bedrooms, area
    #[arg(long, default_value_t = SortKey::Newest)]
    pub(crate) sort: SortKey,
    /// Listings file (.csv or .json); defaults to APP_LISTINGS_PATH or the sample catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print JSON instead of a text table
    #[arg(long)]
    pub(crate) json: bool,
}

impl SearchArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            location: self.location.clone(),
            category: self.category,
            price_min: self.min_price,
            price_max: self.max_price,
            min_bedrooms: self.bedrooms,
            min_bathrooms: self.bathrooms,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Listing identifier
    pub(crate) id: String,
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct FeaturedArgs {
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let catalog = open_catalog(args.catalog.clone())?;
    let criteria = args.criteria();
    let results = catalog.search(&criteria, args.sort);
    let view = SearchResultsView::new(&results, args.sort, criteria.active_count());

    if args.json {
        print_json(&view)?;
    } else {
        render_search_results(&view);
    }

    Ok(())
}

pub(crate) fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let catalog = open_catalog(args.catalog)?;
    let id = ListingId(args.id);
    let listing = catalog
        .find(&id)
        .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
    let view = ListingDetailView::from(listing);

    if args.json {
        print_json(&view)?;
    } else {
        render_listing_detail(&view);
    }

    Ok(())
}

pub(crate) fn run_featured(args: FeaturedArgs) -> Result<(), AppError> {
    let catalog = open_catalog(args.catalog)?;
    let featured = catalog.featured();

    if featured.is_empty() {
        println!("Featured properties: none");
        return Ok(());
    }

    println!("Featured properties");
    for listing in featured {
        println!("{}", card_line(&ListingCardView::from(listing)));
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(CatalogError::from)?;
    println!("{rendered}");
    Ok(())
}

fn card_line(card: &ListingCardView) -> String {
    let featured = if card.featured { " [featured]" } else { "" };
    format!(
        "- {} | {} | {} | {} | {} bd / {} ba | {} | {}{}",
        card.id,
        card.title,
        card.price_label,
        card.category_label,
        card.bedrooms,
        card.bathrooms,
        card.area_label,
        card.location,
        featured
    )
}

fn render_search_results(view: &SearchResultsView) {
    println!("{} (sorted by {})", view.headline(), view.sort_label);

    if view.listings.is_empty() {
        println!("Try adjusting your search criteria to find more properties.");
        return;
    }

    for card in &view.listings {
        println!("{}", card_line(card));
    }
}

fn render_listing_detail(view: &ListingDetailView) {
    let card = &view.card;
    println!("{} ({})", card.title, card.id);
    println!("{} | {}", card.price_label, card.category_label);
    println!("Location: {}", card.location);
    println!(
        "{} bedrooms, {} bathrooms, {}",
        card.bedrooms, card.bathrooms, card.area_label
    );

    if !view.description.is_empty() {
        println!("\n{}", view.description);
    }

    if !view.amenities.is_empty() {
        println!("\nAmenities");
        for amenity in &view.amenities {
            println!("- {amenity}");
        }
    }

    println!(
        "\nCoordinates: {:.4}, {:.4}",
        view.coordinates.lat, view.coordinates.lng
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use premier_listings::listings::InMemoryListingCatalog;

    #[test]
    fn card_line_includes_formatted_fields() {
        let catalog = InMemoryListingCatalog::sample();
        let listing = catalog.find(&ListingId::new("2")).expect("villa present");
        let line = card_line(&ListingCardView::from(listing));

        assert!(line.contains("$3,800,000"));
        assert!(line.contains("5 bd / 4 ba"));
        assert!(line.ends_with("[featured]"));
    }

    #[test]
    fn search_args_map_to_criteria() {
        let args = SearchArgs {
            location: Some("hills".to_string()),
            category: None,
            min_price: None,
            max_price: Some(2_000_000),
            bedrooms: Some(0),
            bathrooms: None,
            sort: SortKey::Newest,
            catalog: None,
            json: false,
        };

        let criteria = args.criteria();
        assert_eq!(criteria.active_count(), 3);
        let catalog = InMemoryListingCatalog::sample();
        let results = catalog.search(&criteria, args.sort);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.as_str(), "4");
    }
}
