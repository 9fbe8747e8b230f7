use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Cuisine tags the service recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CuisineStyle {
    Italian,
    French,
    Korean,
    Chinese,
    Indian,
    Mexican,
    Japanese,
    Vegan,
}

impl CuisineStyle {
    /// Every known style, in declaration order.
    pub const ALL: [CuisineStyle; 8] = [
        CuisineStyle::Italian,
        CuisineStyle::French,
        CuisineStyle::Korean,
        CuisineStyle::Chinese,
        CuisineStyle::Indian,
        CuisineStyle::Mexican,
        CuisineStyle::Japanese,
        CuisineStyle::Vegan,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CuisineStyle::Italian => "italian",
            CuisineStyle::French => "french",
            CuisineStyle::Korean => "korean",
            CuisineStyle::Chinese => "chinese",
            CuisineStyle::Indian => "indian",
            CuisineStyle::Mexican => "mexican",
            CuisineStyle::Japanese => "japanese",
            CuisineStyle::Vegan => "vegan",
        }
    }

    /// Case-insensitive lookup of an exact style tag.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(raw))
    }

    /// Comma-separated list of known styles, for user-facing messages.
    pub fn known_list() -> String {
        Self::ALL
            .iter()
            .map(|style| style.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CuisineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A restaurant as stored in the record store.
///
/// Records are written by seeding and only read on the request path. Fields
/// other than `name` tolerate absence so a partially populated item still
/// deserializes; missing or non-text hours make the record count as closed
/// without failing the scan that returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    pub name: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub address: String,
    #[serde(
        default,
        deserialize_with = "lenient_hour",
        skip_serializing_if = "Option::is_none"
    )]
    pub open_hour: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_hour",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_hour: Option<String>,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub deliveries: bool,
}

impl RestaurantRecord {
    pub fn new(name: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: style.into(),
            address: String::new(),
            open_hour: None,
            close_hour: None,
            vegetarian: false,
            deliveries: false,
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    #[must_use]
    pub fn with_hours(
        mut self,
        open_hour: impl Into<String>,
        close_hour: impl Into<String>,
    ) -> Self {
        self.open_hour = Some(open_hour.into());
        self.close_hour = Some(close_hour.into());
        self
    }

    #[must_use]
    pub fn with_vegetarian(mut self, vegetarian: bool) -> Self {
        self.vegetarian = vegetarian;
        self
    }

    #[must_use]
    pub fn with_deliveries(mut self, deliveries: bool) -> Self {
        self.deliveries = deliveries;
        self
    }

    /// Lower-cases the text fields the store filters and displays on.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_lowercase();
        self.style = self.style.trim().to_lowercase();
        self.address = self.address.trim().to_lowercase();
        self
    }

}

/// Keeps a non-text hour (e.g. `900`) as its JSON text so it fails time parsing later.
fn lenient_hour<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}
