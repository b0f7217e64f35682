//! Artwork Listing Validation
//!
//! Validates a candidate artwork listing as a listing form posts it: numeric
//! values arrive as text and enumerated values as labels. Every rule is
//! checked — nothing short-circuits — so a caller can present the complete
//! set of problems at once, and the checks run in a fixed field order so
//! identical input always yields an identical violation list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    artworks::{
        ArtworkCategory, ArtworkListing, CopyKind, CopyPolicy, DimensionUnit, Dimensions,
        ImageRef, MAX_IMAGES, SellingStatus,
    },
    sellers::SellerId,
    utils::{non_empty, parse_positive_decimal, parse_positive_int},
    violations::{Field, Violation, Violations},
};

/// A not-yet-validated artwork submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    /// Artwork name.
    pub name: String,

    /// Category label, one of [`ArtworkCategory::LABELS`].
    pub category: String,

    /// Optional free-text sub-category.
    #[serde(default)]
    pub sub_category: Option<String>,

    /// Optional artist name.
    #[serde(default)]
    pub artist: Option<String>,

    /// Artwork description.
    pub description: String,

    /// Price of the original piece, as text.
    pub price: String,

    /// Reproduction terms, when the seller offers copies.
    #[serde(default)]
    pub copy: Option<CopyDraft>,

    /// Physical extent of the artwork.
    #[serde(default)]
    pub dimensions: DimensionsDraft,

    /// Minimum purchase quantity per buyer, as text.
    #[serde(default = "one")]
    pub minimum_quantity_per_buyer: String,

    /// Uploaded images, in submission order.
    pub images: Vec<ImageRef>,

    /// Submitting seller.
    pub seller: SellerId,
}

/// Reproduction terms as the form posts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyDraft {
    /// Copy kind label, one of [`CopyKind::LABELS`].
    pub kind: String,

    /// Price of a single copy, as text.
    pub price: String,

    /// Number of copies offered, as text. Defaults to 1 when absent.
    #[serde(default)]
    pub count: Option<String>,
}

/// Artwork dimensions as the form posts them. Extents left blank are
/// treated as not provided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionsDraft {
    /// Width, as text.
    #[serde(default)]
    pub width: Option<String>,

    /// Height, as text.
    #[serde(default)]
    pub height: Option<String>,

    /// Length, as text.
    #[serde(default)]
    pub length: Option<String>,

    /// Unit label, one of [`DimensionUnit::LABELS`].
    #[serde(default = "centimeters")]
    pub unit: String,
}

impl Default for DimensionsDraft {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            length: None,
            unit: centimeters(),
        }
    }
}

fn one() -> String {
    "1".to_string()
}

fn centimeters() -> String {
    "cm".to_string()
}

/// Validate a candidate listing, collecting every violation.
///
/// On success the returned [`ArtworkListing`] has every numeric field
/// coerced to its canonical type and `selling_status` set to
/// [`SellingStatus::Available`].
///
/// # Errors
///
/// Returns the ordered list of violations when any check fails. Copy
/// pricing above the kind's ceiling is a hard rejection
/// ([`Violation::CopyPriceExceedsCeiling`]), never a silent clamp.
pub fn validate(draft: &ListingDraft) -> Result<ArtworkListing, Violations> {
    let mut violations = Vec::new();

    let name = non_empty(&draft.name);
    if name.is_none() {
        violations.push(Violation::MissingRequiredField(Field::Name));
    }

    let category_label = non_empty(&draft.category);
    if category_label.is_none() {
        violations.push(Violation::MissingRequiredField(Field::Category));
    }

    let description = non_empty(&draft.description);
    if description.is_none() {
        violations.push(Violation::MissingRequiredField(Field::Description));
    }

    let category = match category_label.map(ArtworkCategory::from_label) {
        Some(Some(category)) => Some(category),
        Some(None) => {
            violations.push(Violation::InvalidEnumValue {
                field: Field::Category,
                allowed: &ArtworkCategory::LABELS,
            });

            None
        }
        None => None,
    };

    let price = parse_positive_decimal(&draft.price);
    if price.is_none() {
        violations.push(Violation::InvalidNumber(Field::Price));
    }

    let image_count = draft.images.len();
    if !(1..=MAX_IMAGES).contains(&image_count) {
        violations.push(Violation::ImageCountOutOfRange(image_count));
    }

    let copy_policy = match &draft.copy {
        Some(copy) => validate_copy(copy, price, &mut violations),
        None => None,
    };

    let minimum_quantity = parse_positive_int(&draft.minimum_quantity_per_buyer);
    if minimum_quantity.is_none() {
        violations.push(Violation::InvalidNumber(Field::MinimumQuantityPerBuyer));
    }

    let dimensions = validate_dimensions(&draft.dimensions, &mut violations);

    if violations.is_empty()
        && let (
            Some(name),
            Some(category),
            Some(description),
            Some(price),
            Some(minimum_quantity),
            Some(dimensions),
        ) = (name, category, description, price, minimum_quantity, dimensions)
    {
        debug!(seller = %draft.seller, "listing draft accepted");

        return Ok(ArtworkListing {
            name: name.to_owned(),
            category,
            sub_category: draft.sub_category.as_deref().and_then(non_empty).map(str::to_owned),
            artist: draft.artist.as_deref().and_then(non_empty).map(str::to_owned),
            description: description.to_owned(),
            price,
            copy_policy,
            dimensions,
            minimum_quantity_per_buyer: minimum_quantity,
            selling_status: SellingStatus::Available,
            images: draft.images.iter().cloned().collect(),
            seller: draft.seller,
        });
    }

    debug!(violations = violations.len(), "listing draft rejected");

    Err(Violations::new(violations))
}

/// Validate reproduction terms: the kind label, the copy price, the pricing
/// ceiling, then the copy count. The ceiling is only computable when both
/// the original price and the copy price parsed as positive numbers.
fn validate_copy(
    draft: &CopyDraft,
    price: Option<Decimal>,
    violations: &mut Vec<Violation>,
) -> Option<CopyPolicy> {
    let kind = match CopyKind::from_label(draft.kind.trim()) {
        Some(kind) => Some(kind),
        None => {
            violations.push(Violation::InvalidEnumValue {
                field: Field::CopyKind,
                allowed: &CopyKind::LABELS,
            });

            None
        }
    };

    let copy_price = parse_positive_decimal(&draft.price);
    if copy_price.is_none() {
        violations.push(Violation::InvalidNumber(Field::CopyPrice));
    }

    let mut over_ceiling = false;
    if let (Some(kind), Some(copy_price), Some(price)) = (kind, copy_price, price) {
        let ceiling = kind.ceiling(price);

        if copy_price > ceiling {
            violations.push(Violation::CopyPriceExceedsCeiling {
                copy_price,
                ceiling,
                kind,
            });

            over_ceiling = true;
        }
    }

    let count = match &draft.count {
        Some(raw) => {
            let count = parse_positive_int(raw);

            if count.is_none() {
                violations.push(Violation::InvalidNumber(Field::CopyCount));
            }

            count
        }
        None => Some(1),
    };

    if over_ceiling {
        return None;
    }

    if let (Some(kind), Some(copy_price), Some(count)) = (kind, copy_price, count) {
        Some(CopyPolicy {
            kind,
            price: copy_price,
            count,
        })
    } else {
        None
    }
}

/// Validate dimensions: each provided extent must be a non-negative number,
/// and the unit label must be one of the allowed units.
fn validate_dimensions(
    draft: &DimensionsDraft,
    violations: &mut Vec<Violation>,
) -> Option<Dimensions> {
    let width = parse_extent(draft.width.as_deref(), Field::Width, violations);
    let height = parse_extent(draft.height.as_deref(), Field::Height, violations);
    let length = parse_extent(draft.length.as_deref(), Field::Length, violations);

    let unit = match DimensionUnit::from_label(draft.unit.trim()) {
        Some(unit) => Some(unit),
        None => {
            violations.push(Violation::InvalidEnumValue {
                field: Field::Unit,
                allowed: &DimensionUnit::LABELS,
            });

            None
        }
    };

    if let (Some(width), Some(height), Some(length), Some(unit)) = (width, height, length, unit) {
        Some(Dimensions {
            width,
            height,
            length,
            unit,
        })
    } else {
        None
    }
}

/// Parse one extent. Blank text counts as not provided; anything else must
/// be a non-negative number. The outer `None` marks an invalid value.
fn parse_extent(
    raw: Option<&str>,
    field: Field,
    violations: &mut Vec<Violation>,
) -> Option<Option<Decimal>> {
    use std::str::FromStr;

    let Some(trimmed) = raw.map(str::trim) else {
        return Some(None);
    };

    if trimmed.is_empty() {
        return Some(None);
    }

    match Decimal::from_str(trimmed) {
        Ok(value) if value >= Decimal::ZERO => Some(Some(value)),
        _ => {
            violations.push(Violation::InvalidNumber(field));

            None
        }
    }
}
