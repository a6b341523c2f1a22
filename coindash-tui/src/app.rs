//! Application state
//!
//! All mutable UI state lives in one explicit [`App`] struct owned by the
//! view layer: the selected panel and timeframe, the asset cursor, the clock
//! updated by the one-second tick task, and the mock intraday series cache.
//! The market data itself is an immutable [`Listing`] constructed once.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use coindash_data::{AssetQuote, Listing, UnitConvention};
use rand::Rng;

/// Mock intraday prices wander within ±5% of the quote price.
const MOCK_DRIFT: f64 = 0.05;

/// Which of the dashboard presentations is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Market cap bar chart and 24h volume share breakdown
    Overview,
    /// Intraday price line chart for the selected asset
    Charts,
    /// Full listing table
    Table,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Overview, Panel::Charts, Panel::Table];

    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Overview => "Overview",
            Panel::Charts => "Charts",
            Panel::Table => "Table",
        }
    }

    pub fn next(&self) -> Panel {
        match self {
            Panel::Overview => Panel::Charts,
            Panel::Charts => Panel::Table,
            Panel::Table => Panel::Overview,
        }
    }
}

/// Timeframe selector for the mock intraday series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    H24,
    D7,
    D30,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::H24 => "24h",
            Timeframe::D7 => "7d",
            Timeframe::D30 => "30d",
        }
    }

    /// Number of points in a mock series for this timeframe.
    pub fn points(&self) -> usize {
        match self {
            Timeframe::H24 => 24,
            Timeframe::D7 => 7 * 24,
            Timeframe::D30 => 30 * 24,
        }
    }

    pub fn next(&self) -> Timeframe {
        match self {
            Timeframe::H24 => Timeframe::D7,
            Timeframe::D7 => Timeframe::D30,
            Timeframe::D30 => Timeframe::H24,
        }
    }
}

/// Dashboard state shared between the render loop, the keyboard handler and
/// the clock tick task.
#[derive(Debug, Clone)]
pub struct App {
    /// Immutable market snapshot
    pub listing: Listing,
    /// Panel currently on screen
    pub panel: Panel,
    /// Timeframe for the mock intraday series
    pub timeframe: Timeframe,
    /// Suffix vocabulary for magnitude cells, toggled with the locale key
    pub convention: UnitConvention,
    /// Asset cursor into the listing (Charts panel and table highlight)
    pub selected: usize,
    /// Last clock tick, rendered in the status bar
    pub clock: DateTime<Utc>,
    /// Set false by the keyboard handler to stop the render loop
    pub running: bool,
    /// Mock intraday series per symbol, regenerated on timeframe change
    series: HashMap<String, Vec<(f64, f64)>>,
}

impl App {
    pub fn new(listing: Listing) -> Self {
        let mut app = Self {
            listing,
            panel: Panel::Overview,
            timeframe: Timeframe::H24,
            convention: UnitConvention::Abbreviated,
            selected: 0,
            clock: Utc::now(),
            running: true,
            series: HashMap::new(),
        };
        app.regenerate_series();
        app
    }

    /// Advance the displayed clock. Called by the one-second tick task.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.clock = now;
    }

    pub fn next_panel(&mut self) {
        self.panel = self.panel.next();
    }

    pub fn select_panel(&mut self, panel: Panel) {
        self.panel = panel;
    }

    /// Swap between the English abbreviation and German word suffix
    /// vocabularies. The four original dashboard variants differed only in
    /// this choice, so it is one formatter with a toggled configuration.
    pub fn toggle_convention(&mut self) {
        self.convention = match self.convention {
            UnitConvention::Abbreviated => UnitConvention::GermanWords,
            _ => UnitConvention::Abbreviated,
        };
    }

    pub fn cycle_timeframe(&mut self) {
        self.timeframe = self.timeframe.next();
        self.regenerate_series();
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.listing.len() {
            self.selected += 1;
        }
    }

    /// Quote under the asset cursor, if the listing is non-empty.
    pub fn selected_quote(&self) -> Option<&AssetQuote> {
        self.listing.quotes().get(self.selected)
    }

    /// Mock intraday series for a symbol, as (index, price) pairs.
    pub fn intraday(&self, symbol: &str) -> Option<&[(f64, f64)]> {
        self.series.get(symbol).map(Vec::as_slice)
    }

    /// Rebuild the mock series for every listed asset at the current
    /// timeframe. Each point wanders uniformly within ±5% of the quote
    /// price.
    fn regenerate_series(&mut self) {
        let mut rng = rand::rng();
        let points = self.timeframe.points();

        self.series = self
            .listing
            .quotes()
            .iter()
            .map(|quote| {
                let series = (0..points)
                    .map(|i| {
                        let jitter = rng.random_range(-MOCK_DRIFT..MOCK_DRIFT);
                        (i as f64, quote.price * (1.0 + jitter))
                    })
                    .collect();
                (quote.symbol.clone(), series)
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Listing::builtin())
    }

    #[test]
    fn test_series_length_matches_timeframe() {
        let mut app = app();
        assert_eq!(app.intraday("BTC").unwrap().len(), 24);

        app.cycle_timeframe();
        assert_eq!(app.timeframe, Timeframe::D7);
        assert_eq!(app.intraday("BTC").unwrap().len(), 7 * 24);

        app.cycle_timeframe();
        assert_eq!(app.intraday("BTC").unwrap().len(), 30 * 24);

        app.cycle_timeframe();
        assert_eq!(app.timeframe, Timeframe::H24);
    }

    #[test]
    fn test_series_stays_within_drift() {
        let app = app();
        for quote in app.listing.quotes() {
            let series = app.intraday(&quote.symbol).unwrap();
            for &(_, price) in series {
                assert!(price >= quote.price * (1.0 - MOCK_DRIFT));
                assert!(price <= quote.price * (1.0 + MOCK_DRIFT));
            }
        }
    }

    #[test]
    fn test_panel_cycle_wraps() {
        let mut app = app();
        assert_eq!(app.panel, Panel::Overview);
        app.next_panel();
        assert_eq!(app.panel, Panel::Charts);
        app.next_panel();
        assert_eq!(app.panel, Panel::Table);
        app.next_panel();
        assert_eq!(app.panel, Panel::Overview);
    }

    #[test]
    fn test_asset_cursor_clamps_to_listing() {
        let mut app = app();
        app.select_previous();
        assert_eq!(app.selected, 0);

        for _ in 0..100 {
            app.select_next();
        }
        assert_eq!(app.selected, app.listing.len() - 1);
        assert_eq!(app.selected_quote().map(|q| q.symbol.as_str()), Some("ADA"));
    }

    #[test]
    fn test_convention_toggle() {
        let mut app = app();
        assert_eq!(app.convention, UnitConvention::Abbreviated);
        app.toggle_convention();
        assert_eq!(app.convention, UnitConvention::GermanWords);
        app.toggle_convention();
        assert_eq!(app.convention, UnitConvention::Abbreviated);
    }

    #[test]
    fn test_tick_updates_clock() {
        let mut app = app();
        let later = Utc::now() + chrono::Duration::seconds(5);
        app.tick(later);
        assert_eq!(app.clock, later);
    }
}
