//! Integration tests for auction proposal validation: the authorize-then-
//! transition handshake between the validator and the caller's catalog,
//! plus the documented time and duplicate scenarios.

use jiff::Timestamp;
use rust_decimal::Decimal;
use testresult::TestResult;

use artify::{
    artworks::{ArtworkId, SellingStatus},
    auctions::{self, AuctionDraft, AuctionItemDraft},
    catalog::{CatalogArtwork, SellerCatalog},
    sellers::SellerId,
    violations::{Violation, Violations},
};

const SELLER: SellerId = SellerId::new(7);

fn catalog() -> SellerCatalog {
    SellerCatalog::from_entries([
        CatalogArtwork {
            id: ArtworkId::new(1),
            seller: SELLER,
            selling_status: SellingStatus::Available,
        },
        CatalogArtwork {
            id: ArtworkId::new(2),
            seller: SELLER,
            selling_status: SellingStatus::Available,
        },
    ])
}

fn proposal(now: Timestamp) -> AuctionDraft {
    AuctionDraft {
        name: "Spring Sale".to_string(),
        seller: SELLER,
        start_time: now,
        end_time: now + jiff::Span::new().hours(24 * 7),
        items: vec![
            AuctionItemDraft {
                artwork: ArtworkId::new(1),
                minimum_bid: "50".to_string(),
            },
            AuctionItemDraft {
                artwork: ArtworkId::new(2),
                minimum_bid: "60".to_string(),
            },
        ],
    }
}

fn now() -> TestResult<Timestamp> {
    Ok(Timestamp::from_second(1_900_000_000)?)
}

#[test]
fn accepted_proposal_authorizes_the_pending_transition() -> TestResult {
    let now = now()?;
    let catalog = catalog();

    let accepted = auctions::validate(&proposal(now), &catalog, now)?;

    assert_eq!(
        accepted.to_pending,
        vec![ArtworkId::new(1), ArtworkId::new(2)]
    );
    assert_eq!(
        accepted.proposal.items.first().map(|item| item.minimum_bid),
        Some(Decimal::from(50))
    );

    // The caller applies the authorized transition to its own catalog...
    let mut transitioned = catalog.clone();
    for id in &accepted.to_pending {
        transitioned.insert(CatalogArtwork {
            id: *id,
            seller: SELLER,
            selling_status: SellingStatus::PendingAuction,
        });
    }

    // ...after which resubmitting the same proposal is rejected.
    let resubmitted = auctions::validate(&proposal(now), &transitioned, now);

    assert_eq!(
        resubmitted.map(|_| ()).err().map(Violations::into_vec),
        Some(vec![
            Violation::ArtworkNotEligible(ArtworkId::new(1)),
            Violation::ArtworkNotEligible(ArtworkId::new(2)),
        ])
    );

    Ok(())
}

#[test]
fn duplicate_artwork_scenario_is_rejected() -> TestResult {
    let now = now()?;
    let mut draft = proposal(now);
    draft.items = vec![
        AuctionItemDraft {
            artwork: ArtworkId::new(1),
            minimum_bid: "50".to_string(),
        },
        AuctionItemDraft {
            artwork: ArtworkId::new(1),
            minimum_bid: "60".to_string(),
        },
    ];

    let result = auctions::validate(&draft, &catalog(), now);

    assert_eq!(
        result.map(|_| ()).err().map(Violations::into_vec),
        Some(vec![Violation::DuplicateArtwork(ArtworkId::new(1))])
    );

    Ok(())
}

#[test]
fn start_time_is_inclusive_and_end_time_is_strict() -> TestResult {
    let now = now()?;

    // A proposal starting exactly at the submission time passes.
    assert!(auctions::validate(&proposal(now), &catalog(), now).is_ok());

    let mut past = proposal(now);
    past.start_time = now - jiff::Span::new().seconds(1);

    assert_eq!(
        auctions::validate(&past, &catalog(), now)
            .map(|_| ())
            .err()
            .map(Violations::into_vec),
        Some(vec![Violation::StartTimeInPast])
    );

    let mut instant = proposal(now);
    instant.end_time = instant.start_time;

    assert_eq!(
        auctions::validate(&instant, &catalog(), now)
            .map(|_| ())
            .err()
            .map(Violations::into_vec),
        Some(vec![Violation::EndBeforeStart])
    );

    Ok(())
}

#[test]
fn auction_draft_parses_from_request_json() -> TestResult {
    let now = now()?;
    let json = r#"
        {
            "name": "Spring Sale",
            "seller": 7,
            "start_time": "2031-04-01T10:00:00Z",
            "end_time": "2031-04-08T18:00:00Z",
            "items": [
                { "artwork": 1, "minimum_bid": "50" },
                { "artwork": 2, "minimum_bid": "60" }
            ]
        }
    "#;

    let draft: AuctionDraft = serde_json::from_str(json)?;
    let accepted = auctions::validate(&draft, &catalog(), now)?;

    assert_eq!(accepted.proposal.name, "Spring Sale");
    assert_eq!(
        accepted.to_pending,
        vec![ArtworkId::new(1), ArtworkId::new(2)]
    );

    Ok(())
}
