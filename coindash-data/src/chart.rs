//! Chart-series projection
//!
//! Reduces a sequence of [`AssetQuote`] into the minimal `{name, value}`
//! shape chart widgets consume. Pure and total: the field selector is a
//! closed enum, so there are no error cases.

use crate::quote::{AssetQuote, QuoteField};
use serde::{Deserialize, Serialize};

/// A reduced `{name, value}` pair used as chart input, produced fresh on
/// every render. `name` is the quote's ticker symbol.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

/// Project an ordered sequence of quotes into an ordered series of
/// [`ChartPoint`], selecting `value` by `field` and preserving input order.
pub fn project_series(quotes: &[AssetQuote], field: QuoteField) -> Vec<ChartPoint> {
    quotes
        .iter()
        .map(|quote| ChartPoint {
            name: quote.symbol.clone(),
            value: quote.value(field),
        })
        .collect()
}

/// Each point's fraction of the series total, in series order.
///
/// An all-zero (or empty) series yields `0.0` shares; otherwise the shares
/// sum to 1.0. This is the percentage a pie-style breakdown labels each
/// slice with.
pub fn share_of_total(points: &[ChartPoint]) -> Vec<f64> {
    let total: f64 = points.iter().map(|point| point.value).sum();
    if total <= 0.0 {
        return vec![0.0; points.len()];
    }
    points.iter().map(|point| point.value / total).collect()
}
