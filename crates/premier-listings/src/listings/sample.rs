use super::domain::{Coordinates, Listing, ListingId, PropertyCategory};

const PLACEHOLDER_IMAGE: &str = "/api/placeholder/800/600";

struct SampleListing {
    id: &'static str,
    title: &'static str,
    price: u64,
    category: PropertyCategory,
    location: &'static str,
    description: &'static str,
    image_count: usize,
    amenities: &'static [&'static str],
    coordinates: (f64, f64),
    bedrooms: u32,
    bathrooms: u32,
    area_sq_ft: u32,
    featured: bool,
}

const SAMPLE_LISTINGS: [SampleListing; 4] = [
    SampleListing {
        id: "1",
        title: "Luxury Downtown Penthouse",
        price: 2_500_000,
        category: PropertyCategory::Apartment,
        location: "Downtown District",
        description: "Stunning penthouse with panoramic city views, featuring modern amenities and premium finishes throughout.",
        image_count: 3,
        amenities: &[
            "City Views",
            "Private Balcony",
            "Modern Kitchen",
            "Gym Access",
            "Concierge Service",
        ],
        coordinates: (40.7128, -74.0060),
        bedrooms: 3,
        bathrooms: 2,
        area_sq_ft: 2_200,
        featured: true,
    },
    SampleListing {
        id: "2",
        title: "Modern Waterfront Villa",
        price: 3_800_000,
        category: PropertyCategory::Villa,
        location: "Waterfront Heights",
        description: "Exclusive waterfront villa with private dock, infinity pool, and breathtaking ocean views.",
        image_count: 3,
        amenities: &[
            "Ocean Views",
            "Private Dock",
            "Infinity Pool",
            "Wine Cellar",
            "Smart Home",
        ],
        coordinates: (40.7589, -73.9851),
        bedrooms: 5,
        bathrooms: 4,
        area_sq_ft: 4_200,
        featured: true,
    },
    SampleListing {
        id: "3",
        title: "Contemporary Garden Condo",
        price: 850_000,
        category: PropertyCategory::Condo,
        location: "Garden District",
        description: "Beautifully designed condo with garden access, modern finishes, and excellent natural light.",
        image_count: 2,
        amenities: &[
            "Garden Access",
            "Natural Light",
            "Modern Design",
            "Parking Space",
        ],
        coordinates: (40.7505, -73.9934),
        bedrooms: 2,
        bathrooms: 2,
        area_sq_ft: 1_200,
        featured: false,
    },
    SampleListing {
        id: "4",
        title: "Executive Townhouse",
        price: 1_650_000,
        category: PropertyCategory::Townhouse,
        location: "Executive Hills",
        description: "Spacious townhouse perfect for families, featuring a private garage and beautiful landscaping.",
        image_count: 2,
        amenities: &[
            "Private Garage",
            "Landscaped Yard",
            "Family Room",
            "Storage Space",
        ],
        coordinates: (40.7282, -74.0776),
        bedrooms: 4,
        bathrooms: 3,
        area_sq_ft: 2_800,
        featured: false,
    },
];

/// The demo catalog served when no listings file is configured.
pub fn sample_listings() -> Vec<Listing> {
    SAMPLE_LISTINGS.iter().map(SampleListing::to_listing).collect()
}

impl SampleListing {
    fn to_listing(&self) -> Listing {
        Listing {
            id: ListingId::new(self.id),
            title: self.title.to_string(),
            price: self.price,
            category: self.category,
            location: self.location.to_string(),
            description: self.description.to_string(),
            images: vec![PLACEHOLDER_IMAGE.to_string(); self.image_count],
            amenities: self.amenities.iter().map(|item| item.to_string()).collect(),
            coordinates: Coordinates {
                lat: self.coordinates.0,
                lng: self.coordinates.1,
            },
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area_sq_ft: self.area_sq_ft,
            featured: self.featured,
        }
    }
}
