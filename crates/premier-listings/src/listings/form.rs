use super::query::{FilterCriteria, SortKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw search form state as submitted by a browser form or query string.
///
/// Values are kept as strings so that an empty input can be told apart from
/// a zero. Conversion to typed criteria happens in [`SearchForm::criteria`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub location: Option<String>,
    #[serde(alias = "priceMin")]
    pub price_min: Option<String>,
    #[serde(alias = "priceMax")]
    pub price_max: Option<String>,
    #[serde(alias = "propertyType", alias = "type")]
    pub property_type: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    #[serde(alias = "sortBy")]
    pub sort: Option<String>,
}

impl SearchForm {
    /// Maps the raw values onto typed criteria.
    ///
    /// Blank values are absent. Values that do not parse are also treated as
    /// absent rather than rejected.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            location: non_blank(self.location.as_deref()).map(str::to_string),
            category: non_blank(self.property_type.as_deref())
                .and_then(|raw| parse_lenient("property_type", raw)),
            price_min: non_blank(self.price_min.as_deref()).and_then(parse_amount),
            price_max: non_blank(self.price_max.as_deref()).and_then(parse_amount),
            min_bedrooms: non_blank(self.bedrooms.as_deref())
                .and_then(|raw| parse_lenient("bedrooms", raw)),
            min_bathrooms: non_blank(self.bathrooms.as_deref())
                .and_then(|raw| parse_lenient("bathrooms", raw)),
        }
    }

    /// Resolves the sort dropdown value, falling back to [`SortKey::Newest`].
    pub fn sort_key(&self) -> SortKey {
        non_blank(self.sort.as_deref())
            .and_then(|raw| parse_lenient("sort", raw))
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_lenient<T: std::str::FromStr>(field: &'static str, raw: &str) -> Option<T> {
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!(field, value = raw, "ignoring unparseable search input");
            None
        }
    }
}

/// Parses a dollar amount such as `1000000`, `$1,000,000` or `1 000 000`.
fn parse_amount(raw: &str) -> Option<u64> {
    let digits: String = raw
        .strip_prefix('$')
        .unwrap_or(raw)
        .chars()
        .filter(|ch| !matches!(ch, ',' | ' ' | '_'))
        .collect();
    parse_lenient("price", &digits)
}

impl From<&SearchForm> for FilterCriteria {
    fn from(form: &SearchForm) -> Self {
        form.criteria()
    }
}

impl From<&FilterCriteria> for SearchForm {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            location: criteria.location.clone(),
            price_min: criteria.price_min.map(|value| value.to_string()),
            price_max: criteria.price_max.map(|value| value.to_string()),
            property_type: criteria
                .category
                .map(|category| category.as_str().to_string()),
            bedrooms: criteria.min_bedrooms.map(|value| value.to_string()),
            bathrooms: criteria.min_bathrooms.map(|value| value.to_string()),
            sort: None,
        }
    }
}
