//! Validation Demo
//!
//! Loads a fixture set and runs every listing and auction draft through the
//! validators, printing the outcome of each.
//!
//! Use `-f` to load a fixture set by name

use anyhow::Result;
use clap::Parser;
use jiff::Timestamp;

use artify::{auctions, fixtures::Fixture, listings, utils::DemoArgs};

/// Validation Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let now = Timestamp::now();

    let mut listing_keys: Vec<_> = fixture.listings().keys().collect();
    listing_keys.sort();

    for key in listing_keys {
        let draft = fixture.listing(key)?;

        match listings::validate(draft) {
            Ok(accepted) => {
                println!("listing {key}: accepted ({} at {})", accepted.name, accepted.price);
            }
            Err(violations) => println!("listing {key}: rejected ({violations})"),
        }
    }

    let mut auction_keys: Vec<_> = fixture.auctions().keys().collect();
    auction_keys.sort();

    for key in auction_keys {
        let draft = fixture.auction(key)?;

        match auctions::validate(draft, fixture.catalog(), now) {
            Ok(accepted) => println!(
                "auction {key}: accepted ({} artworks to transition)",
                accepted.to_pending.len()
            ),
            Err(violations) => println!("auction {key}: rejected ({violations})"),
        }
    }

    Ok(())
}
