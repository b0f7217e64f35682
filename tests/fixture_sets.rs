//! Integration test for the gallery fixture set: every listing and auction
//! draft runs through the validators the way the demo drives them, and the
//! accepted listings roll up into a dashboard summary.
//!
//! Expected outcomes for the set:
//!
//! - `sunset` and `harbour-lights` are accepted; both carry copy policies
//!   priced under their ceilings (39 <= 40% of 100, 16 <= 20% of 80).
//! - `overpriced-copy` is rejected: 41 is above the 40% ceiling of 100.
//! - `missing-images` is rejected: a listing needs at least one image.
//! - `spring-sale` is accepted and authorizes artworks 1 and 2 to move to
//!   pending-auction.
//! - `double-entry` is rejected for referencing artwork 1 twice.

use jiff::Timestamp;
use rust_decimal::Decimal;
use testresult::TestResult;

use artify::{
    artworks::{ArtworkId, CopyKind},
    auctions,
    dashboard::SellerDashboard,
    fixtures::Fixture,
    listings,
    violations::{Violation, Violations},
};

#[test]
fn gallery_set_validates_as_documented() -> TestResult {
    let fixture = Fixture::from_set("gallery")?;
    let now: Timestamp = "2030-01-01T00:00:00Z".parse()?;

    let sunset = listings::validate(fixture.listing("sunset")?)?;
    let harbour = listings::validate(fixture.listing("harbour-lights")?)?;

    assert_eq!(sunset.copy_policy.as_ref().map(|policy| policy.count), Some(2));
    assert_eq!(
        harbour.copy_policy.as_ref().map(|policy| policy.kind),
        Some(CopyKind::VirtualCopy)
    );

    let overpriced = listings::validate(fixture.listing("overpriced-copy")?);

    assert_eq!(
        overpriced.map(|_| ()).err().map(Violations::into_vec),
        Some(vec![Violation::CopyPriceExceedsCeiling {
            copy_price: Decimal::from(41),
            ceiling: Decimal::from(40),
            kind: CopyKind::CopyOfArt,
        }])
    );

    let missing = listings::validate(fixture.listing("missing-images")?);

    assert_eq!(
        missing.map(|_| ()).err().map(Violations::into_vec),
        Some(vec![Violation::ImageCountOutOfRange(0)])
    );

    let spring = auctions::validate(fixture.auction("spring-sale")?, fixture.catalog(), now)?;

    assert_eq!(
        spring.to_pending,
        vec![ArtworkId::new(1), ArtworkId::new(2)]
    );

    let double = auctions::validate(fixture.auction("double-entry")?, fixture.catalog(), now);

    assert_eq!(
        double.map(|_| ()).err().map(Violations::into_vec),
        Some(vec![Violation::DuplicateArtwork(ArtworkId::new(1))])
    );

    let summary = SellerDashboard::summarize([&sunset, &harbour]);

    assert_eq!(summary.total, 2);
    assert_eq!(summary.available, 2);
    assert_eq!(summary.listed_value, Decimal::from(180));

    // 2 copies at 39 plus 1 virtual copy at 16.
    assert_eq!(summary.copy_inventory_value, Decimal::from(94));

    Ok(())
}
