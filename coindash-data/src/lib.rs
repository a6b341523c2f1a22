//! # Coindash-Data
//! Market data model, chart-series projection and display formatting for the
//! coindash terminal dashboard.
//!
//! The crate is deliberately free of I/O and terminal code:
//! - [`quote`] holds the [`AssetQuote`] snapshot record, the closed
//!   [`QuoteField`] selector, and the validated immutable [`Listing`].
//! - [`chart`] projects quote sequences into the `{name, value}` shape
//!   chart widgets consume.
//! - [`format`] scales raw magnitudes into abbreviated display strings and
//!   renders signed 24h changes, with an explicit [`UnitConvention`].
//! - [`error`] defines the [`ListingError`] taxonomy.

/// Errors generated when constructing a [`Listing`].
pub mod error;

/// Chart-series projection ([`ChartPoint`], [`project_series`]).
pub mod chart;

/// Display formatting for market figures.
pub mod format;

/// Core market snapshot types.
pub mod quote;

// Re-export commonly used types for convenience
pub use chart::{ChartPoint, project_series, share_of_total};
pub use error::ListingError;
pub use format::{UnitConvention, format_change, format_magnitude, format_price, is_gain};
pub use quote::{AssetQuote, Listing, QuoteField};
