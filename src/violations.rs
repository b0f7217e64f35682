//! Violations
//!
//! The shared taxonomy for every validator in the crate. Violations are
//! expected, data-level outcomes: validators collect them into an ordered
//! list and return them as the `Err` arm of a `Result`, never as a panic,
//! so a caller can surface every problem with a submission at once.

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::artworks::{ArtworkId, CopyKind};

/// Input fields that can be named by a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Artwork name.
    Name,

    /// Artwork category.
    Category,

    /// Artwork description.
    Description,

    /// Original price of the artwork.
    Price,

    /// Copy kind label on a copy policy.
    CopyKind,

    /// Price of a single copy.
    CopyPrice,

    /// Number of copies offered.
    CopyCount,

    /// Minimum purchase quantity per buyer.
    MinimumQuantityPerBuyer,

    /// Artwork width.
    Width,

    /// Artwork height.
    Height,

    /// Artwork length.
    Length,

    /// Dimension unit label.
    Unit,

    /// Auction name.
    AuctionName,

    /// Seller or artist type on an application.
    SellerType,

    /// Business or artist name.
    BusinessName,

    /// Business contact email.
    BusinessEmail,

    /// Business contact phone.
    BusinessPhone,

    /// Owner NIC or passport number.
    OwnerNic,

    /// Owner contact phone.
    OwnerPhone,

    /// Owner postal address.
    OwnerAddress,

    /// Account username.
    Username,

    /// Account holder first name.
    FirstName,

    /// Account holder last name.
    LastName,

    /// Account email.
    Email,

    /// Account password.
    Password,
}

impl Field {
    /// Human-readable field label used in violation messages.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Description => "description",
            Field::Price => "price",
            Field::CopyKind => "copy kind",
            Field::CopyPrice => "copy price",
            Field::CopyCount => "number of copies",
            Field::MinimumQuantityPerBuyer => "minimum quantity per buyer",
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
            Field::Unit => "unit",
            Field::AuctionName => "auction name",
            Field::SellerType => "seller type",
            Field::BusinessName => "business name",
            Field::BusinessEmail => "business email",
            Field::BusinessPhone => "business phone",
            Field::OwnerNic => "owner NIC",
            Field::OwnerPhone => "owner phone",
            Field::OwnerAddress => "owner address",
            Field::Username => "username",
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single validation failure.
///
/// Variants carry stable, structured data so callers can localize messages
/// without re-deriving any rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    /// A required field was empty after trimming whitespace.
    #[error("{0} is required")]
    MissingRequiredField(Field),

    /// A label did not match any member of a fixed enumeration.
    #[error("{field} must be one of: {}", .allowed.join(", "))]
    InvalidEnumValue {
        /// The offending field.
        field: Field,

        /// The labels the field accepts.
        allowed: &'static [&'static str],
    },

    /// A numeric field failed to parse or was outside its permitted sign.
    #[error("invalid number for {0}")]
    InvalidNumber(Field),

    /// The image list was empty or had more than the permitted maximum.
    #[error("image count {0} is outside the allowed range of 1 to 10")]
    ImageCountOutOfRange(usize),

    /// A copy price exceeded the ceiling derived from the original price.
    #[error("copy price {copy_price} exceeds the {kind} ceiling of {ceiling}")]
    CopyPriceExceedsCeiling {
        /// The submitted copy price.
        copy_price: Decimal,

        /// The maximum permitted copy price.
        ceiling: Decimal,

        /// The copy kind the ceiling was derived for.
        kind: CopyKind,
    },

    /// A text field exceeded its maximum length.
    #[error("{field} exceeds the maximum length of {max}")]
    FieldTooLong {
        /// The offending field.
        field: Field,

        /// The maximum permitted length in characters.
        max: usize,
    },

    /// An auction proposal referenced no artworks.
    #[error("no artworks selected")]
    NoItemsSelected,

    /// A referenced artwork is unknown, foreign, or not available for sale.
    #[error("artwork {0} is not eligible for auction")]
    ArtworkNotEligible(ArtworkId),

    /// A minimum bid failed to parse as a positive number.
    #[error("invalid minimum bid for artwork {0}")]
    InvalidBid(ArtworkId),

    /// The same artwork was referenced more than once in one proposal.
    #[error("artwork {0} appears more than once")]
    DuplicateArtwork(ArtworkId),

    /// The auction start time was before the submission time.
    #[error("start time is in the past")]
    StartTimeInPast,

    /// The auction end time was not strictly after the start time.
    #[error("end time must be after the start time")]
    EndBeforeStart,

    /// An email field was not a well-formed address.
    #[error("{0} is not a valid email address")]
    InvalidEmail(Field),

    /// A password did not satisfy the account password policy.
    #[error("password must be at least 8 characters with uppercase, lowercase, digit and special character")]
    WeakPassword,
}

/// An ordered list of violations, as collected by a validator.
///
/// Validators only construct this with at least one entry, and always in the
/// documented field order, so repeated calls over identical input produce
/// identical lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self(violations)
    }

    /// View the violations as a slice.
    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    /// Number of violations collected.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no violations. Validators never return an
    /// empty list; this exists for symmetry with [`Violations::len`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the given violation was collected.
    pub fn contains(&self, violation: &Violation) -> bool {
        self.0.contains(violation)
    }

    /// Iterate over the violations in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Consume the list, yielding the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }

            write!(f, "{violation}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Violations {}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
