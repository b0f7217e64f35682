//! Catalog
//!
//! The caller-supplied snapshot of a seller's artworks used by auction
//! validation. The engine never fetches or mutates a catalog; each call
//! receives its own snapshot.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    artworks::{ArtworkId, SellingStatus},
    sellers::SellerId,
};

/// One artwork as seen by the catalog: just enough to decide auction
/// eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogArtwork {
    /// Artwork identifier.
    pub id: ArtworkId,

    /// Owning seller.
    pub seller: SellerId,

    /// Current sale state.
    pub selling_status: SellingStatus,
}

/// An indexed snapshot of catalog artworks.
#[derive(Debug, Clone, Default)]
pub struct SellerCatalog {
    by_id: FxHashMap<ArtworkId, CatalogArtwork>,
}

impl SellerCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a sequence of entries. Later entries replace
    /// earlier ones with the same id.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogArtwork>) -> Self {
        let mut catalog = Self::new();

        for entry in entries {
            catalog.insert(entry);
        }

        catalog
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, entry: CatalogArtwork) {
        self.by_id.insert(entry.id, entry);
    }

    /// Look up an artwork by id.
    pub fn get(&self, id: ArtworkId) -> Option<&CatalogArtwork> {
        self.by_id.get(&id)
    }

    /// Whether the artwork exists, belongs to `seller`, and is available
    /// for sale.
    pub fn is_eligible(&self, id: ArtworkId, seller: SellerId) -> bool {
        self.get(id).is_some_and(|artwork| {
            artwork.seller == seller && artwork.selling_status == SellingStatus::Available
        })
    }

    /// Number of artworks in the snapshot.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the snapshot holds no artworks.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
