//! # Wire-Facing Types
//!
//! Types shared between the remote API, the stores, and the frontend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Wire Types                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │   Credentials   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  id (u64)       │   │  username       │       │
//! │  │  title          │   │  username       │   │  password       │       │
//! │  │  price          │   │  email          │   │  (never stored) │       │
//! │  │  rating?        │   │  first/last     │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Rule
//! Products are externally supplied records: the catalog replaces whole
//! pages of them and never mutates one locally. The cart snapshots the
//! fields it needs instead of holding a `Product`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Product
// =============================================================================

/// A product as returned by the remote catalog API.
///
/// Read-only from the stores' perspective. Optional fields reflect what the
/// API actually sends: older listings have no rating or discount data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Remote identifier. Unique within the catalog.
    pub id: u64,

    /// Display title shown in the grid and on the checkout summary.
    pub title: String,

    /// Current price in the API's currency unit.
    #[ts(as = "String")]
    pub price: Decimal,

    /// Category slug (e.g. "smartphones"), when the API provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Thumbnail image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Average review rating. Absent ratings sort as zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub rating: Option<Decimal>,

    /// Active discount, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub discount_percentage: Option<Decimal>,

    /// Price before discount, when the API provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub original_price: Option<Decimal>,

    /// Customer reviews. Defaults to empty when the API omits the field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Creates a minimal product. Intended for tests and examples; real
    /// products arrive fully populated from the API.
    pub fn new(id: u64, title: impl Into<String>, price: Decimal) -> Self {
        Product {
            id,
            title: title.into(),
            price,
            category: None,
            thumbnail: None,
            rating: None,
            discount_percentage: None,
            original_price: None,
            reviews: Vec::new(),
        }
    }

    /// Rating used for ordering: absent ratings count as zero.
    #[inline]
    pub fn rating_or_zero(&self) -> Decimal {
        self.rating.unwrap_or(Decimal::ZERO)
    }
}

/// A single customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub rating: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
}

// =============================================================================
// User & Credentials
// =============================================================================

/// The authenticated user as returned by `POST /auth/login`.
///
/// Opaque to the stores: the session keeps it whole and never inspects
/// individual fields beyond display purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Login credentials.
///
/// ## Lifetime Rule
/// Credentials live exactly as long as the single login request they feed.
/// They are never persisted and never cached; only the returned session
/// token is written to durable storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Validates that both fields are present before any network round trip.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "username".to_string(),
            });
        }
        if self.password.is_empty() {
            return Err(ValidationError::Required {
                field: "password".to_string(),
            });
        }
        Ok(())
    }
}

/// Successful response from `POST /auth/login`.
///
/// The API flattens user fields and the session token into one object;
/// `#[serde(flatten)]` splits them back apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Opaque session token, persisted to durable client storage.
    pub token: String,

    /// The user fields of the payload.
    #[serde(flatten)]
    pub user: User,
}

// =============================================================================
// Unit Tests
// =============================================================================
