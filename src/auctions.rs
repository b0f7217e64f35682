//! Auction Proposal Validation
//!
//! Validates a candidate auction against the caller-supplied catalog
//! snapshot of the seller's artworks. The submission clock is an explicit
//! `now` parameter so validation stays deterministic and testable. On
//! acceptance the validator reports which artworks the caller should move
//! to [`SellingStatus::PendingAuction`]; it never performs the transition.
//!
//! [`SellingStatus::PendingAuction`]: crate::artworks::SellingStatus::PendingAuction

use jiff::Timestamp;
use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    artworks::ArtworkId,
    catalog::SellerCatalog,
    sellers::SellerId,
    utils::{non_empty, parse_positive_decimal},
    violations::{Field, Violation, Violations},
};

/// Maximum auction name length in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// One artwork entered into an auction, as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionItemDraft {
    /// The artwork to auction.
    pub artwork: ArtworkId,

    /// Minimum opening bid for this artwork, as text.
    pub minimum_bid: String,
}

/// A not-yet-validated auction submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionDraft {
    /// Auction name.
    pub name: String,

    /// Submitting seller.
    pub seller: SellerId,

    /// When bidding opens.
    pub start_time: Timestamp,

    /// When bidding closes.
    pub end_time: Timestamp,

    /// Artworks entered into the auction, each with its own minimum bid.
    pub items: Vec<AuctionItemDraft>,
}

/// One artwork in an accepted auction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuctionItem {
    /// The artwork to auction.
    pub artwork: ArtworkId,

    /// Minimum opening bid for this artwork.
    pub minimum_bid: Decimal,
}

/// An accepted, normalized auction proposal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuctionProposal {
    /// Auction name.
    pub name: String,

    /// Submitting seller.
    pub seller: SellerId,

    /// When bidding opens. Not before the submission time.
    pub start_time: Timestamp,

    /// When bidding closes. Strictly after `start_time`.
    pub end_time: Timestamp,

    /// Artworks entered into the auction, in submission order.
    pub items: Vec<AuctionItem>,
}

/// The result of accepting an auction proposal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedAuction {
    /// The normalized proposal.
    pub proposal: AuctionProposal,

    /// Artworks the caller should transition to pending-auction, in
    /// submission order.
    pub to_pending: Vec<ArtworkId>,
}

/// Validate a candidate auction against the seller's catalog snapshot,
/// collecting every violation.
///
/// `now` is the submission time; a start time at exactly `now` is accepted,
/// and the end time must be strictly after the start time. Each referenced
/// artwork must exist in `catalog`, belong to the submitting seller, be
/// available for sale, and appear only once.
///
/// # Errors
///
/// Returns the ordered list of violations when any check fails.
pub fn validate(
    draft: &AuctionDraft,
    catalog: &SellerCatalog,
    now: Timestamp,
) -> Result<AcceptedAuction, Violations> {
    let mut violations = Vec::new();

    let name = match non_empty(&draft.name) {
        Some(name) if name.chars().count() > MAX_NAME_LENGTH => {
            violations.push(Violation::FieldTooLong {
                field: Field::AuctionName,
                max: MAX_NAME_LENGTH,
            });

            None
        }
        Some(name) => Some(name),
        None => {
            violations.push(Violation::MissingRequiredField(Field::AuctionName));

            None
        }
    };

    if draft.items.is_empty() {
        violations.push(Violation::NoItemsSelected);
    }

    let mut seen = FxHashSet::default();
    let mut items = Vec::with_capacity(draft.items.len());

    for item in &draft.items {
        if !catalog.is_eligible(item.artwork, draft.seller) {
            violations.push(Violation::ArtworkNotEligible(item.artwork));
        }

        let bid = parse_positive_decimal(&item.minimum_bid);
        if bid.is_none() {
            violations.push(Violation::InvalidBid(item.artwork));
        }

        if !seen.insert(item.artwork) {
            violations.push(Violation::DuplicateArtwork(item.artwork));
        }

        if let Some(minimum_bid) = bid {
            items.push(AuctionItem {
                artwork: item.artwork,
                minimum_bid,
            });
        }
    }

    if draft.start_time < now {
        violations.push(Violation::StartTimeInPast);
    }

    if draft.end_time <= draft.start_time {
        violations.push(Violation::EndBeforeStart);
    }

    if violations.is_empty()
        && let Some(name) = name
    {
        let to_pending = items.iter().map(|item| item.artwork).collect();

        debug!(items = items.len(), "auction proposal accepted");

        return Ok(AcceptedAuction {
            proposal: AuctionProposal {
                name: name.to_owned(),
                seller: draft.seller,
                start_time: draft.start_time,
                end_time: draft.end_time,
                items,
            },
            to_pending,
        });
    }

    debug!(violations = violations.len(), "auction proposal rejected");

    Err(Violations::new(violations))
}
