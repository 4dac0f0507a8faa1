//! # Error Types
//!
//! Validation errors for shopfront-core.
//!
//! ## Where Errors Live
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shopfront-api errors (separate crate)                                 │
//! │  └── ApiError         - Network / server failures                      │
//! │                                                                         │
//! │  Stores hold `error: Option<String>` - a user-facing message.          │
//! │  Operations translate typed errors into that message; nothing          │
//! │  throws past a store boundary.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutations deliberately have NO error type: they are total.
//! Removing or updating an id that is not in the cart is a silent no-op.

use thiserror::Error;

/// Input validation errors.
///
/// Raised before any network round trip; a failed validation never leaves
/// the device.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value must be positive (e.g. page limit).
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}
