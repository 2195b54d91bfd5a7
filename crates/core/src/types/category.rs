//! Product category type.
//!
//! Categories are stored as free text in the catalogue table - there is no
//! category table and no referential invariant. A fixed set of well-known
//! values gets curated display metadata; anything else (seed data uses
//! extensions like "calibration") round-trips untouched through
//! [`ProductCategory::Other`].

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product category.
///
/// Parsing is total: unknown values become [`ProductCategory::Other`] and
/// display with a label derived from the stored text, so free-form categories
/// filter and render without any lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductCategory {
    /// Counter and bench scales for shops.
    Retail,
    /// Floor, pallet and weighbridge equipment.
    Industrial,
    /// Replacement parts: load cells, indicators, platters.
    SparePart,
    /// Repair, calibration and verification services.
    Service,
    /// Free-form category used by later seed data.
    Other(String),
}

impl ProductCategory {
    /// Canonical slugs for the well-known categories.
    pub const KNOWN: [Self; 4] = [Self::Retail, Self::Industrial, Self::SparePart, Self::Service];

    /// The stored text form of the category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Retail => "retail",
            Self::Industrial => "industrial",
            Self::SparePart => "spare-part",
            Self::Service => "service",
            Self::Other(s) => s,
        }
    }

    /// Human-readable label for navigation and cards.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Retail => "Retail Scales".to_owned(),
            Self::Industrial => "Industrial Weighing".to_owned(),
            Self::SparePart => "Spare Parts".to_owned(),
            Self::Service => "Services".to_owned(),
            Self::Other(s) => title_case(s),
        }
    }

    /// One-line description shown on category tiles.
    ///
    /// Free-form categories have no curated copy and return `None`.
    #[must_use]
    pub fn blurb(&self) -> Option<&'static str> {
        match self {
            Self::Retail => Some("Price-computing and counter scales for the shop floor."),
            Self::Industrial => Some("Platform scales, pallet beams and weighbridges."),
            Self::SparePart => Some("Load cells, indicators and wear parts for every brand."),
            Self::Service => Some("On-site repair, calibration and trade verification."),
            Self::Other(_) => None,
        }
    }

    /// Parse a stored or user-supplied value. Never fails.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "retail" => Self::Retail,
            "industrial" => Self::Industrial,
            "spare-part" => Self::SparePart,
            "service" => Self::Service,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for ProductCategory {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ProductCategory> for String {
    fn from(category: ProductCategory) -> Self {
        category.as_str().to_owned()
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Title-case a free-form slug: "calibration-weights" -> "Calibration Weights".
fn title_case(s: &str) -> String {
    s.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// SQLx support (with postgres feature): stored as TEXT
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for ProductCategory {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ProductCategory {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::parse(&s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for ProductCategory {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!(ProductCategory::parse("retail"), ProductCategory::Retail);
        assert_eq!(
            ProductCategory::parse("spare-part"),
            ProductCategory::SparePart
        );
        assert_eq!(ProductCategory::parse(" service "), ProductCategory::Service);
    }

    #[test]
    fn test_parse_free_form_roundtrip() {
        let category = ProductCategory::parse("calibration");
        assert_eq!(
            category,
            ProductCategory::Other("calibration".to_owned())
        );
        assert_eq!(category.as_str(), "calibration");
    }

    #[test]
    fn test_free_form_label_is_title_cased() {
        let category = ProductCategory::parse("calibration-weights");
        assert_eq!(category.label(), "Calibration Weights");
        assert!(category.blurb().is_none());
    }

    #[test]
    fn test_known_categories_have_blurbs() {
        for category in ProductCategory::KNOWN {
            assert!(category.blurb().is_some(), "{category} missing blurb");
        }
    }

    #[test]
    fn test_display_matches_stored_form() {
        assert_eq!(ProductCategory::SparePart.to_string(), "spare-part");
        assert_eq!(
            ProductCategory::Other("weighbridge".to_owned()).to_string(),
            "weighbridge"
        );
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&ProductCategory::Industrial).unwrap();
        assert_eq!(json, "\"industrial\"");

        let parsed: ProductCategory = serde_json::from_str("\"calibration\"").unwrap();
        assert_eq!(parsed, ProductCategory::Other("calibration".to_owned()));
    }
}
