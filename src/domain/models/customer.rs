//! Customer entity and filter types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Maximum accepted length for a customer identifier.
const MAX_ID_LEN: usize = 16;

/// Customer entity, keyed by a case-insensitive string identifier.
///
/// The identifier is always normalized to uppercase before it is used as a
/// cache key or a store primary key; `normalized` returns a copy with that
/// applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer identifier (uppercase once normalized)
    pub id: String,

    /// Company name
    pub company_name: String,

    /// Contact person
    pub contact_name: Option<String>,

    /// Contact person's title
    pub contact_title: Option<String>,

    /// Street address
    pub address: Option<String>,

    /// City
    pub city: Option<String>,

    /// Region or state
    pub region: Option<String>,

    /// Postal code
    pub postal_code: Option<String>,

    /// Country
    pub country: Option<String>,

    /// Phone number
    pub phone: Option<String>,

    /// Fax number
    pub fax: Option<String>,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer with the given id and company name.
    pub fn new(id: impl Into<String>, company_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: normalize_id(&id.into()),
            company_name: company_name.into(),
            contact_name: None,
            contact_title: None,
            address: None,
            city: None,
            region: None,
            postal_code: None,
            country: None,
            phone: None,
            fax: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Return a copy with the identifier normalized to canonical uppercase.
    pub fn normalized(mut self) -> Self {
        self.id = normalize_id(&self.id);
        self
    }

    /// Validate the identifier: non-empty after trimming, bounded length.
    pub fn validate_id(&self) -> DomainResult<()> {
        validate_id(&self.id)
    }

    /// Stamp `updated_at` with the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Normalize a customer identifier: trim whitespace, uppercase.
pub fn normalize_id(id: &str) -> String {
    id.trim().to_uppercase()
}

/// Validate a customer identifier independent of an entity.
pub fn validate_id(id: &str) -> DomainResult<()> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(DomainError::ValidationFailed(
            "customer id cannot be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_ID_LEN {
        return Err(DomainError::ValidationFailed(format!(
            "customer id '{trimmed}' exceeds {MAX_ID_LEN} characters"
        )));
    }
    Ok(())
}

/// Filter criteria for listing customers.
///
/// Matching is exact on the stored field values; an unset field matches
/// everything.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub country: Option<String>,
    pub city: Option<String>,
}

impl CustomerFilter {
    /// True when no criteria are set.
    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.city.is_none()
    }

    /// Whether the given customer satisfies every set criterion.
    pub fn matches(&self, customer: &Customer) -> bool {
        if let Some(country) = &self.country {
            if customer.country.as_deref() != Some(country.as_str()) {
                return false;
            }
        }
        if let Some(city) = &self.city {
            if customer.city.as_deref() != Some(city.as_str()) {
                return false;
            }
        }
        true
    }
}
