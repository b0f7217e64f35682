//! Dashboard
//!
//! Pure aggregation over a seller's accepted listings, as shown on the
//! artist dashboard: counts by selling status, total listed value of the
//! originals, and the value of the copy inventory.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::artworks::{ArtworkListing, SellingStatus};

/// Aggregated view of a seller's listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SellerDashboard {
    /// Total number of listings.
    pub total: usize,

    /// Listings currently available for sale.
    pub available: usize,

    /// Listings committed to a pending auction.
    pub pending_auction: usize,

    /// Listings already sold.
    pub sold: usize,

    /// Sum of the original prices across all listings.
    pub listed_value: Decimal,

    /// Sum of copy price times copy count across listings offering copies.
    pub copy_inventory_value: Decimal,
}

impl SellerDashboard {
    /// Fold a seller's listings into a dashboard summary.
    pub fn summarize<'a>(listings: impl IntoIterator<Item = &'a ArtworkListing>) -> Self {
        listings
            .into_iter()
            .fold(Self::default(), |mut summary, listing| {
                summary.total += 1;

                match listing.selling_status {
                    SellingStatus::Available => summary.available += 1,
                    SellingStatus::PendingAuction => summary.pending_auction += 1,
                    SellingStatus::Sold => summary.sold += 1,
                }

                summary.listed_value += listing.price;

                if let Some(copy_policy) = &listing.copy_policy {
                    summary.copy_inventory_value +=
                        copy_policy.price * Decimal::from(copy_policy.count);
                }

                summary
            })
    }
}
