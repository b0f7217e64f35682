//! Fixtures
//!
//! YAML-backed sets of catalog snapshots and draft submissions, used by the
//! integration tests and demo programs. A set is three files sharing one
//! name: `fixtures/catalogs/<name>.yml`, `fixtures/listings/<name>.yml` and
//! `fixtures/auctions/<name>.yml`.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    auctions::AuctionDraft,
    catalog::{CatalogArtwork, SellerCatalog},
    listings::ListingDraft,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Listing draft not found
    #[error("Listing draft not found: {0}")]
    ListingNotFound(String),

    /// Auction draft not found
    #[error("Auction draft not found: {0}")]
    AuctionNotFound(String),
}

/// Catalog fixture file shape.
#[derive(Debug, Deserialize)]
struct CatalogFixture {
    artworks: Vec<CatalogArtwork>,
}

/// Listings fixture file shape.
#[derive(Debug, Deserialize)]
struct ListingsFixture {
    listings: FxHashMap<String, ListingDraft>,
}

/// Auctions fixture file shape.
#[derive(Debug, Deserialize)]
struct AuctionsFixture {
    auctions: FxHashMap<String, AuctionDraft>,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// The seller catalog snapshot for auction validation
    catalog: SellerCatalog,

    /// Listing drafts by string key
    listings: FxHashMap<String, ListingDraft>,

    /// Auction drafts by string key
    auctions: FxHashMap<String, AuctionDraft>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: SellerCatalog::new(),
            listings: FxHashMap::default(),
            auctions: FxHashMap::default(),
        }
    }

    /// Load a catalog snapshot from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_catalog(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("catalogs").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CatalogFixture = serde_norway::from_str(&contents)?;

        for artwork in fixture.artworks {
            self.catalog.insert(artwork);
        }

        Ok(self)
    }

    /// Load listing drafts from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_listings(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("listings").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ListingsFixture = serde_norway::from_str(&contents)?;

        self.listings.extend(fixture.listings);

        Ok(self)
    }

    /// Load auction drafts from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_auctions(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("auctions").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: AuctionsFixture = serde_norway::from_str(&contents)?;

        self.auctions.extend(fixture.auctions);

        Ok(self)
    }

    /// Load a complete fixture set (catalog, listings and auctions with the
    /// same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_catalog(name)?
            .load_listings(name)?
            .load_auctions(name)?;

        Ok(fixture)
    }

    /// The loaded catalog snapshot
    pub fn catalog(&self) -> &SellerCatalog {
        &self.catalog
    }

    /// Get a listing draft by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the listing draft is not found.
    pub fn listing(&self, key: &str) -> Result<&ListingDraft, FixtureError> {
        self.listings
            .get(key)
            .ok_or_else(|| FixtureError::ListingNotFound(key.to_string()))
    }

    /// Get an auction draft by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the auction draft is not found.
    pub fn auction(&self, key: &str) -> Result<&AuctionDraft, FixtureError> {
        self.auctions
            .get(key)
            .ok_or_else(|| FixtureError::AuctionNotFound(key.to_string()))
    }

    /// All loaded listing drafts, keyed by name
    pub fn listings(&self) -> &FxHashMap<String, ListingDraft> {
        &self.listings
    }

    /// All loaded auction drafts, keyed by name
    pub fn auctions(&self) -> &FxHashMap<String, AuctionDraft> {
        &self.auctions
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
