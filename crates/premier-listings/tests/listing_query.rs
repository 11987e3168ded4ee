use premier_listings::listings::{
    matches, query, sample_listings, FilterCriteria, Listing, PropertyCategory, SearchForm,
    SortKey,
};

fn ids(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|listing| listing.id.as_str()).collect()
}

fn prices(listings: &[Listing]) -> Vec<u64> {
    listings.iter().map(|listing| listing.price).collect()
}

fn criteria_grid() -> Vec<FilterCriteria> {
    let mut grid = vec![FilterCriteria::default()];
    for location in [None, Some("district"), Some("HEIGHTS"), Some("nowhere")] {
        for category in [
            None,
            Some(PropertyCategory::Condo),
            Some(PropertyCategory::House),
        ] {
            for (price_min, price_max) in [
                (None, None),
                (Some(1_000_000), None),
                (None, Some(2_500_000)),
                (Some(850_000), Some(1_650_000)),
            ] {
                for min_bedrooms in [None, Some(0), Some(3)] {
                    grid.push(FilterCriteria {
                        location: location.map(str::to_string),
                        category,
                        price_min,
                        price_max,
                        min_bedrooms,
                        min_bathrooms: min_bedrooms.map(|beds| beds.saturating_sub(1)),
                    });
                }
            }
        }
    }
    grid
}

#[test]
fn empty_criteria_return_full_catalog_in_order() {
    let listings = sample_listings();
    let result = query(&listings, &FilterCriteria::default(), SortKey::Newest);
    assert_eq!(result, listings);
}

#[test]
fn scenario_price_floor_keeps_original_order() {
    let listings = sample_listings();
    let criteria = FilterCriteria {
        price_min: Some(1_000_000),
        ..Default::default()
    };

    let result = query(&listings, &criteria, SortKey::Newest);
    assert_eq!(ids(&result), ["1", "2", "4"]);
}

#[test]
fn scenario_category_selects_the_villa() {
    let listings = sample_listings();
    let criteria = FilterCriteria {
        category: Some(PropertyCategory::Villa),
        ..Default::default()
    };

    let result = query(&listings, &criteria, SortKey::Newest);
    assert_eq!(ids(&result), ["2"]);
}

#[test]
fn scenario_price_ascending_without_filters() {
    let listings = sample_listings();
    let result = query(&listings, &FilterCriteria::default(), SortKey::PriceAscending);
    assert_eq!(prices(&result), [850_000, 1_650_000, 2_500_000, 3_800_000]);
}

#[test]
fn scenario_too_many_bedrooms_yields_nothing() {
    let listings = sample_listings();
    let criteria = FilterCriteria {
        min_bedrooms: Some(6),
        ..Default::default()
    };

    assert!(query(&listings, &criteria, SortKey::Newest).is_empty());
}

#[test]
fn filtering_is_sound_and_complete() {
    let listings = sample_listings();

    for criteria in criteria_grid() {
        let result = query(&listings, &criteria, SortKey::Newest);

        for listing in &result {
            assert!(matches(listing, &criteria), "{criteria:?} kept {}", listing.id);
        }
        for listing in listings.iter().filter(|listing| !result.contains(listing)) {
            assert!(
                !matches(listing, &criteria),
                "{criteria:?} dropped {}",
                listing.id
            );
        }
    }
}

#[test]
fn price_orders_reverse_each_other_and_stay_stable() {
    let mut listings = sample_listings();
    let mut twin = listings[2].clone();
    twin.id = premier_listings::listings::ListingId::new("3b");
    listings.push(twin);

    let ascending = query(&listings, &FilterCriteria::default(), SortKey::PriceAscending);
    let descending = query(&listings, &FilterCriteria::default(), SortKey::PriceDescending);

    assert_eq!(ids(&ascending), ["3", "3b", "4", "1", "2"]);
    assert_eq!(ids(&descending), ["2", "1", "4", "3", "3b"]);
}

#[test]
fn requerying_sorted_output_is_idempotent() {
    let listings = sample_listings();

    for sort in SortKey::ordered() {
        let first = query(&listings, &FilterCriteria::default(), sort);
        let second = query(&first, &FilterCriteria::default(), sort);
        assert_eq!(first, second, "{sort} should be repeatable");
    }
}

#[test]
fn query_leaves_input_untouched() {
    let listings = sample_listings();
    let snapshot = listings.clone();

    let _ = query(&listings, &FilterCriteria::default(), SortKey::AreaDescending);
    assert_eq!(listings, snapshot);
}

#[test]
fn form_values_drive_the_same_query() {
    let listings = sample_listings();
    let form = SearchForm {
        location: Some("district".to_string()),
        bathrooms: Some("2".to_string()),
        sort: Some("area".to_string()),
        ..Default::default()
    };

    let result = query(&listings, &form.criteria(), form.sort_key());
    assert_eq!(ids(&result), ["1", "3"]);
}
