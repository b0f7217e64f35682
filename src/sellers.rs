//! Sellers
//!
//! Seller identity plus the onboarding validators: the application a
//! prospective seller submits and the buyer account registration form.
//! Both validators collect every violation before returning, in form field
//! order, mirroring the listing and auction validators.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    utils::non_empty,
    violations::{Field, Violation, Violations},
};

/// Opaque seller identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SellerId(u64);

impl SellerId {
    /// Create a seller id from its raw value.
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

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A prospective seller's application, as submitted by the onboarding form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerApplication {
    /// Artist or business type.
    pub seller_type: String,

    /// Business or artist name.
    pub business_name: String,

    /// Business contact email.
    pub business_email: String,

    /// Business contact phone.
    pub business_phone: String,

    /// Optional fax number.
    #[serde(default)]
    pub fax_number: Option<String>,

    /// Optional business registration number.
    #[serde(default)]
    pub business_reg_no: Option<String>,

    /// Optional business location.
    #[serde(default)]
    pub location: Option<String>,

    /// Owner NIC or passport number.
    pub owner_nic: String,

    /// Owner contact phone.
    pub owner_phone: String,

    /// Owner postal address.
    pub owner_address: String,
}

/// A buyer account registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRegistration {
    /// Account username.
    pub username: String,

    /// Account holder first name.
    pub first_name: String,

    /// Account holder last name.
    pub last_name: String,

    /// Account email.
    pub email: String,

    /// Account password. Never trimmed or normalized.
    pub password: String,
}

/// Validate a seller application, collecting every violation.
///
/// Required fields are checked in form order, then the business email is
/// checked for a well-formed address. On success the returned application
/// has its text fields trimmed and empty optional fields dropped.
///
/// # Errors
///
/// Returns the ordered list of violations when any check fails.
pub fn validate_application(draft: &SellerApplication) -> Result<SellerApplication, Violations> {
    let mut violations = Vec::new();

    let seller_type = require(&mut violations, Field::SellerType, &draft.seller_type);
    let business_name = require(&mut violations, Field::BusinessName, &draft.business_name);
    let business_email = require(&mut violations, Field::BusinessEmail, &draft.business_email);
    let business_phone = require(&mut violations, Field::BusinessPhone, &draft.business_phone);
    let owner_nic = require(&mut violations, Field::OwnerNic, &draft.owner_nic);
    let owner_phone = require(&mut violations, Field::OwnerPhone, &draft.owner_phone);
    let owner_address = require(&mut violations, Field::OwnerAddress, &draft.owner_address);

    if let Some(email) = business_email
        && !is_email(email)
    {
        violations.push(Violation::InvalidEmail(Field::BusinessEmail));
    }

    if violations.is_empty()
        && let (
            Some(seller_type),
            Some(business_name),
            Some(business_email),
            Some(business_phone),
            Some(owner_nic),
            Some(owner_phone),
            Some(owner_address),
        ) = (
            seller_type,
            business_name,
            business_email,
            business_phone,
            owner_nic,
            owner_phone,
            owner_address,
        )
    {
        return Ok(SellerApplication {
            seller_type: seller_type.to_owned(),
            business_name: business_name.to_owned(),
            business_email: business_email.to_owned(),
            business_phone: business_phone.to_owned(),
            fax_number: optional(draft.fax_number.as_deref()),
            business_reg_no: optional(draft.business_reg_no.as_deref()),
            location: optional(draft.location.as_deref()),
            owner_nic: owner_nic.to_owned(),
            owner_phone: owner_phone.to_owned(),
            owner_address: owner_address.to_owned(),
        });
    }

    debug!(violations = violations.len(), "seller application rejected");

    Err(Violations::new(violations))
}

/// Validate an account registration, collecting every violation.
///
/// Username and names must be non-empty, the email must be well-formed, and
/// the password must be at least 8 characters with lowercase, uppercase, a
/// digit and a special character. On success the returned registration has
/// its text fields trimmed; the password is returned exactly as submitted.
///
/// # Errors
///
/// Returns the ordered list of violations when any check fails.
pub fn validate_registration(
    draft: &AccountRegistration,
) -> Result<AccountRegistration, Violations> {
    let mut violations = Vec::new();

    let username = require(&mut violations, Field::Username, &draft.username);
    let first_name = require(&mut violations, Field::FirstName, &draft.first_name);
    let last_name = require(&mut violations, Field::LastName, &draft.last_name);

    let email = non_empty(&draft.email).filter(|email| is_email(email));
    if email.is_none() {
        violations.push(Violation::InvalidEmail(Field::Email));
    }

    if !password_meets_policy(&draft.password) {
        violations.push(Violation::WeakPassword);
    }

    if violations.is_empty()
        && let (Some(username), Some(first_name), Some(last_name), Some(email)) =
            (username, first_name, last_name, email)
    {
        return Ok(AccountRegistration {
            username: username.to_owned(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            password: draft.password.clone(),
        });
    }

    debug!(violations = violations.len(), "account registration rejected");

    Err(Violations::new(violations))
}

/// Record a missing-field violation when the field trims to nothing.
fn require<'a>(violations: &mut Vec<Violation>, field: Field, raw: &'a str) -> Option<&'a str> {
    let value = non_empty(raw);

    if value.is_none() {
        violations.push(Violation::MissingRequiredField(field));
    }

    value
}

/// Normalize an optional text field: trimmed, with empty values dropped.
fn optional(raw: Option<&str>) -> Option<String> {
    raw.and_then(non_empty).map(str::to_owned)
}

/// Whether the text is a plausible email address: a non-empty local part, an
/// `@`, and a domain with a dot separating non-empty labels, none of it
/// containing whitespace or further `@` signs.
fn is_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty() && !tld.is_empty()
}

/// Whether the password is at least 8 characters and mixes lowercase,
/// uppercase, a digit and a special character.
fn password_meets_policy(password: &str) -> bool {
    let long_enough = password.chars().count() >= 8;
    let has_lower = password.chars().any(char::is_lowercase);
    let has_upper = password.chars().any(char::is_uppercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    long_enough && has_lower && has_upper && has_digit && has_special
}
