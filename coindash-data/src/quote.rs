/// Core data types for market snapshots
///
/// An [`AssetQuote`] is one market snapshot record for a single asset. A
/// [`Listing`] is a validated, immutable collection of quotes constructed
/// once for the lifetime of a rendering session.
use crate::error::ListingError;
use serde::{Deserialize, Serialize};

/// Embedded static market snapshot used when no external source is wired in.
const BUILTIN_LISTING: &str = include_str!("../assets/listing.json");

/// One market snapshot record for a single asset.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssetQuote {
    /// Display name (e.g., "Bitcoin")
    pub name: String,
    /// Ticker symbol, unique within a [`Listing`] (e.g., "BTC")
    pub symbol: String,
    /// Latest unit price in the quote currency, non-negative
    pub price: f64,
    /// Signed percentage change over the last 24 hours
    pub change_24h: f64,
    /// Market capitalization in the quote currency, non-negative
    pub market_cap: f64,
    /// Traded volume over the last 24 hours in the quote currency, non-negative
    pub volume_24h: f64,
}

impl AssetQuote {
    /// Select one numeric field by its [`QuoteField`] discriminant.
    pub fn value(&self, field: QuoteField) -> f64 {
        match field {
            QuoteField::Price => self.price,
            QuoteField::MarketCap => self.market_cap,
            QuoteField::Volume24h => self.volume_24h,
        }
    }
}

/// Closed enum of the numeric [`AssetQuote`] fields a chart series can be
/// projected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum QuoteField {
    Price,
    MarketCap,
    Volume24h,
}

impl QuoteField {
    /// Convert to display string
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteField::Price => "Price",
            QuoteField::MarketCap => "Market Cap",
            QuoteField::Volume24h => "24h Volume",
        }
    }
}

impl std::fmt::Display for QuoteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable collection of [`AssetQuote`] with validated invariants: symbols
/// are unique, and price / market cap / 24h volume are non-negative.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Vec<AssetQuote>")]
pub struct Listing(Vec<AssetQuote>);

impl Listing {
    /// Construct a `Listing`, validating the quote invariants.
    pub fn new(quotes: Vec<AssetQuote>) -> Result<Self, ListingError> {
        let mut seen = std::collections::HashSet::with_capacity(quotes.len());
        for quote in &quotes {
            if !seen.insert(quote.symbol.as_str()) {
                return Err(ListingError::DuplicateSymbol(quote.symbol.clone()));
            }
            for (field, value) in [
                ("price", quote.price),
                ("market_cap", quote.market_cap),
                ("volume_24h", quote.volume_24h),
            ] {
                if value < 0.0 || !value.is_finite() {
                    return Err(ListingError::InvalidValue {
                        symbol: quote.symbol.clone(),
                        field: field.to_string(),
                    });
                }
            }
        }
        Ok(Self(quotes))
    }

    /// Deserialize a `Listing` from a JSON array of quotes and validate it.
    pub fn from_json(json: &str) -> Result<Self, ListingError> {
        let quotes: Vec<AssetQuote> = serde_json::from_str(json)?;
        Self::new(quotes)
    }

    /// The static five-asset snapshot embedded in the crate.
    ///
    /// The embedded asset is validated by the crate's own tests, so failure
    /// here indicates a broken build rather than bad runtime input.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_LISTING).unwrap_or_else(|error| {
            tracing::error!(%error, "embedded listing.json is invalid");
            Self(Vec::new())
        })
    }

    /// All quotes, in listing order.
    pub fn quotes(&self) -> &[AssetQuote] {
        &self.0
    }

    /// Number of quotes in the listing.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the listing holds no quotes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Find a quote by its ticker symbol.
    pub fn find(&self, symbol: &str) -> Option<&AssetQuote> {
        self.0.iter().find(|quote| quote.symbol == symbol)
    }
}

impl TryFrom<Vec<AssetQuote>> for Listing {
    type Error = ListingError;

    fn try_from(quotes: Vec<AssetQuote>) -> Result<Self, Self::Error> {
        Self::new(quotes)
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a AssetQuote;
    type IntoIter = std::slice::Iter<'a, AssetQuote>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
