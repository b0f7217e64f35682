//! Artworks
//!
//! Value types for artwork listings: the fixed category enumeration, copy
//! policies and their pricing ceilings, dimensions, and the accepted
//! (normalized) listing record produced by [`crate::listings::validate`].

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::sellers::SellerId;

/// Maximum number of images a listing may carry.
pub const MAX_IMAGES: usize = 10;

/// Opaque artwork identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ArtworkId(u64);

impl ArtworkId {
    /// Create an artwork id from its raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Return the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Reference to an uploaded listing image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Create an image reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Return the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed set of artwork categories a listing may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtworkCategory {
    /// Oil paintings.
    OilPaintings,

    /// Acrylic paintings.
    AcrylicPaintings,

    /// Watercolor paintings.
    WatercolorPaintings,

    /// Charcoal drawings.
    CharcoalDrawings,

    /// Pencil sketches.
    PencilSketches,

    /// Ink drawings.
    InkDrawings,

    /// Pastel artworks.
    PastelArtworks,

    /// Mixed media artworks.
    MixedMediaArtworks,

    /// Lithographs, screen prints, etchings and similar print runs.
    Prints,

    /// Photography prints.
    PhotographyPrints,

    /// Digital art prints.
    DigitalArtPrints,

    /// Collages.
    Collages,

    /// Typography and quote posters.
    TypographyPosters,

    /// Vintage or modern maps.
    Maps,

    /// Pressed flower art.
    PressedFlowerArt,

    /// Calligraphy art.
    CalligraphyArt,

    /// Framed cross-stitch or embroidery on fabric.
    Needlework,

    /// Silhouette cutouts.
    SilhouetteCutouts,

    /// Papercut art.
    PapercutArt,

    /// Architectural blueprints.
    Blueprints,
}

impl ArtworkCategory {
    /// Every category, in form display order.
    pub const ALL: [ArtworkCategory; 20] = [
        ArtworkCategory::OilPaintings,
        ArtworkCategory::AcrylicPaintings,
        ArtworkCategory::WatercolorPaintings,
        ArtworkCategory::CharcoalDrawings,
        ArtworkCategory::PencilSketches,
        ArtworkCategory::InkDrawings,
        ArtworkCategory::PastelArtworks,
        ArtworkCategory::MixedMediaArtworks,
        ArtworkCategory::Prints,
        ArtworkCategory::PhotographyPrints,
        ArtworkCategory::DigitalArtPrints,
        ArtworkCategory::Collages,
        ArtworkCategory::TypographyPosters,
        ArtworkCategory::Maps,
        ArtworkCategory::PressedFlowerArt,
        ArtworkCategory::CalligraphyArt,
        ArtworkCategory::Needlework,
        ArtworkCategory::SilhouetteCutouts,
        ArtworkCategory::PapercutArt,
        ArtworkCategory::Blueprints,
    ];

    /// Every category label, in the same order as [`ArtworkCategory::ALL`].
    pub const LABELS: [&'static str; 20] = [
        "Oil Paintings",
        "Acrylic Paintings",
        "Watercolor Paintings",
        "Charcoal Drawings",
        "Pencil Sketches",
        "Ink Drawings",
        "Pastel Artworks",
        "Mixed Media Artworks",
        "Prints (Lithographs, Screen Prints, Etchings, etc.)",
        "Photography Prints",
        "Digital Art Prints",
        "Collages",
        "Typography/Quote Posters",
        "Maps (Vintage or Modern)",
        "Pressed Flower Art",
        "Calligraphy Art",
        "Needlework (Framed cross-stitch or embroidery on fabric)",
        "Silhouette Cutouts",
        "Papercut Art",
        "Blueprints (Architectural Drawings)",
    ];

    /// The label a listing form submits for this category.
    pub const fn label(self) -> &'static str {
        match self {
            ArtworkCategory::OilPaintings => "Oil Paintings",
            ArtworkCategory::AcrylicPaintings => "Acrylic Paintings",
            ArtworkCategory::WatercolorPaintings => "Watercolor Paintings",
            ArtworkCategory::CharcoalDrawings => "Charcoal Drawings",
            ArtworkCategory::PencilSketches => "Pencil Sketches",
            ArtworkCategory::InkDrawings => "Ink Drawings",
            ArtworkCategory::PastelArtworks => "Pastel Artworks",
            ArtworkCategory::MixedMediaArtworks => "Mixed Media Artworks",
            ArtworkCategory::Prints => "Prints (Lithographs, Screen Prints, Etchings, etc.)",
            ArtworkCategory::PhotographyPrints => "Photography Prints",
            ArtworkCategory::DigitalArtPrints => "Digital Art Prints",
            ArtworkCategory::Collages => "Collages",
            ArtworkCategory::TypographyPosters => "Typography/Quote Posters",
            ArtworkCategory::Maps => "Maps (Vintage or Modern)",
            ArtworkCategory::PressedFlowerArt => "Pressed Flower Art",
            ArtworkCategory::CalligraphyArt => "Calligraphy Art",
            ArtworkCategory::Needlework => {
                "Needlework (Framed cross-stitch or embroidery on fabric)"
            }
            ArtworkCategory::SilhouetteCutouts => "Silhouette Cutouts",
            ArtworkCategory::PapercutArt => "Papercut Art",
            ArtworkCategory::Blueprints => "Blueprints (Architectural Drawings)",
        }
    }

    /// Resolve a submitted label to a category.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == label)
    }
}

impl fmt::Display for ArtworkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of reproduction a seller offers for an artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CopyKind {
    /// A physical copy of the artwork.
    CopyOfArt,

    /// A virtual (digital) copy of the artwork.
    VirtualCopy,
}

impl CopyKind {
    /// Every copy kind label.
    pub const LABELS: [&'static str; 2] = ["COPY_OF_ART", "VIRTUAL_COPY"];

    /// The label a listing form submits for this copy kind.
    pub const fn label(self) -> &'static str {
        match self {
            CopyKind::CopyOfArt => "COPY_OF_ART",
            CopyKind::VirtualCopy => "VIRTUAL_COPY",
        }
    }

    /// Resolve a submitted label to a copy kind.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "COPY_OF_ART" => Some(CopyKind::CopyOfArt),
            "VIRTUAL_COPY" => Some(CopyKind::VirtualCopy),
            _ => None,
        }
    }

    /// The share of the original price a copy of this kind may charge.
    pub fn ceiling_rate(self) -> Percentage {
        match self {
            CopyKind::CopyOfArt => Percentage::from(Decimal::new(40, 2)),
            CopyKind::VirtualCopy => Percentage::from(Decimal::new(20, 2)),
        }
    }

    /// The maximum permitted copy price for an original at `price`.
    pub fn ceiling(self, price: Decimal) -> Decimal {
        self.ceiling_rate() * price
    }
}

impl fmt::Display for CopyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reproduction pricing terms attached to a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CopyPolicy {
    /// Kind of copy offered.
    pub kind: CopyKind,

    /// Price of a single copy. Never exceeds the kind's ceiling.
    pub price: Decimal,

    /// Number of copies offered.
    pub count: u32,
}

/// Measurement unit for artwork dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionUnit {
    /// Centimeters.
    #[serde(rename = "cm")]
    Centimeters,

    /// Inches.
    #[serde(rename = "in")]
    Inches,

    /// Pixels.
    #[serde(rename = "px")]
    Pixels,
}

impl DimensionUnit {
    /// Every unit label.
    pub const LABELS: [&'static str; 3] = ["cm", "in", "px"];

    /// The label a listing form submits for this unit.
    pub const fn label(self) -> &'static str {
        match self {
            DimensionUnit::Centimeters => "cm",
            DimensionUnit::Inches => "in",
            DimensionUnit::Pixels => "px",
        }
    }

    /// Resolve a submitted label to a unit.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "cm" => Some(DimensionUnit::Centimeters),
            "in" => Some(DimensionUnit::Inches),
            "px" => Some(DimensionUnit::Pixels),
            _ => None,
        }
    }
}

impl fmt::Display for DimensionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical extent of an artwork. Every extent is optional; whatever is
/// provided is non-negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimensions {
    /// Width in `unit`.
    pub width: Option<Decimal>,

    /// Height in `unit`.
    pub height: Option<Decimal>,

    /// Length in `unit`.
    pub length: Option<Decimal>,

    /// Unit the extents are measured in.
    pub unit: DimensionUnit,
}

/// Sale state of a listed artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SellingStatus {
    /// Listed and purchasable; eligible for auction.
    Available,

    /// Committed to an accepted auction proposal.
    PendingAuction,

    /// Sold; no longer purchasable or auctionable.
    Sold,
}

/// An accepted, normalized artwork listing.
///
/// Produced only by [`crate::listings::validate`]: every numeric field is
/// coerced to its canonical type and `selling_status` starts as
/// [`SellingStatus::Available`]. Status transitions happen outside this
/// crate; see [`crate::auctions`] for the auction authorization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtworkListing {
    /// Artwork name.
    pub name: String,

    /// Artwork category.
    pub category: ArtworkCategory,

    /// Optional free-text sub-category.
    pub sub_category: Option<String>,

    /// Optional artist name.
    pub artist: Option<String>,

    /// Artwork description.
    pub description: String,

    /// Price of the original piece.
    pub price: Decimal,

    /// Reproduction terms, when the seller offers copies.
    pub copy_policy: Option<CopyPolicy>,

    /// Physical extent of the artwork.
    pub dimensions: Dimensions,

    /// Minimum purchase quantity per buyer.
    pub minimum_quantity_per_buyer: u32,

    /// Sale state. Always [`SellingStatus::Available`] at acceptance.
    pub selling_status: SellingStatus,

    /// Uploaded images, in submission order. Between 1 and 10 entries.
    pub images: SmallVec<[ImageRef; 10]>,

    /// Owning seller.
    pub seller: SellerId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip() {
        for category in ArtworkCategory::ALL {
            assert_eq!(
                ArtworkCategory::from_label(category.label()),
                Some(category),
                "label should resolve back to its category"
            );
        }
    }

    #[test]
    fn category_labels_match_all_order() {
        for (category, label) in ArtworkCategory::ALL.iter().zip(ArtworkCategory::LABELS) {
            assert_eq!(category.label(), label, "ALL and LABELS must stay aligned");
        }
    }

    #[test]
    fn unknown_category_label_resolves_to_none() {
        assert_eq!(ArtworkCategory::from_label("Macaroni Art"), None);
        assert_eq!(ArtworkCategory::from_label(""), None);
    }

    #[test]
    fn copy_of_art_ceiling_is_forty_percent() {
        let ceiling = CopyKind::CopyOfArt.ceiling(Decimal::from(100));

        assert_eq!(ceiling, Decimal::from(40));
    }

    #[test]
    fn virtual_copy_ceiling_is_twenty_percent() {
        let ceiling = CopyKind::VirtualCopy.ceiling(Decimal::from(100));

        assert_eq!(ceiling, Decimal::from(20));
    }

    #[test]
    fn copy_kind_labels_round_trip() {
        assert_eq!(
            CopyKind::from_label("COPY_OF_ART"),
            Some(CopyKind::CopyOfArt)
        );
        assert_eq!(
            CopyKind::from_label("VIRTUAL_COPY"),
            Some(CopyKind::VirtualCopy)
        );
        assert_eq!(CopyKind::from_label("copy_of_art"), None);
    }

    #[test]
    fn dimension_unit_labels_round_trip() {
        for label in DimensionUnit::LABELS {
            let unit = DimensionUnit::from_label(label);

            assert!(unit.is_some(), "every listed label should resolve");
            assert_eq!(unit.map(DimensionUnit::label), Some(label));
        }

        assert_eq!(DimensionUnit::from_label("ft"), None);
    }

    #[test]
    fn artwork_id_display_shows_raw_value() {
        assert_eq!(ArtworkId::new(42).to_string(), "42");
        assert_eq!(ArtworkId::new(42).get(), 42);
    }
}
