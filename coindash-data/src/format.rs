//! Display formatting for market figures
//!
//! Pure functions that scale raw magnitudes into human-readable abbreviated
//! strings and render signed 24h changes. The suffix vocabulary is an
//! explicit caller choice via [`UnitConvention`] rather than a hidden
//! default, so the English (`1.31T`) and German (`1310.00 Mrd. €`) renderings
//! are one formatter with two configurations.

/// Suffix vocabulary used by [`format_magnitude`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitConvention {
    /// `T` / `B` / `M` abbreviations, plain two-decimal fallback.
    #[default]
    Abbreviated,
    /// German word suffixes with a euro sign: `Mrd. €` / `Mio. €` / `Tsd. €`,
    /// plain ` €` fallback.
    GermanWords,
    /// Bare two-decimal rendering, no suffix at any scale.
    Plain,
}

/// Scale a non-negative magnitude to its largest applicable unit and render
/// it with exactly two decimal digits and the convention's suffix.
///
/// Negative input is out of contract: magnitudes only. Callers format the
/// sign separately, see [`format_change`].
///
/// ```
/// use coindash_data::format::{format_magnitude, UnitConvention};
///
/// assert_eq!(format_magnitude(1_500_000_000_000.0, UnitConvention::Abbreviated), "1.50T");
/// assert_eq!(format_magnitude(28_970_000_000.0, UnitConvention::GermanWords), "28.97 Mrd. €");
/// assert_eq!(format_magnitude(999.0, UnitConvention::Abbreviated), "999.00");
/// ```
pub fn format_magnitude(value: f64, convention: UnitConvention) -> String {
    match convention {
        UnitConvention::Abbreviated => {
            if value >= 1e12 {
                format!("{:.2}T", value / 1e12)
            } else if value >= 1e9 {
                format!("{:.2}B", value / 1e9)
            } else if value >= 1e6 {
                format!("{:.2}M", value / 1e6)
            } else {
                format!("{value:.2}")
            }
        }
        UnitConvention::GermanWords => {
            if value >= 1e9 {
                format!("{:.2} Mrd. €", value / 1e9)
            } else if value >= 1e6 {
                format!("{:.2} Mio. €", value / 1e6)
            } else if value >= 1e3 {
                format!("{:.2} Tsd. €", value / 1e3)
            } else {
                format!("{value:.2} €")
            }
        }
        UnitConvention::Plain => format!("{value:.2}"),
    }
}

/// Render a signed 24h percentage change with two decimals: explicit `+` for
/// gains, the natural `-` for losses, unprefixed for exactly zero.
pub fn format_change(change_pct: f64) -> String {
    if change_pct > 0.0 {
        format!("+{change_pct:.2}%")
    } else {
        format!("{change_pct:.2}%")
    }
}

/// The single boolean the view layer branches on for the up/down indicator
/// and its color. Zero counts as a gain.
pub fn is_gain(change_pct: f64) -> bool {
    change_pct >= 0.0
}

/// Render a unit price for table and axis cells, e.g. `$66584.23`.
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_magnitude_abbreviated() {
        struct TestCase {
            input: f64,
            expected: &'static str,
        }

        let tests = vec![
            TestCase {
                // TC0: zero renders with two decimals, no suffix
                input: 0.0,
                expected: "0.00",
            },
            TestCase {
                // TC1: below the million bracket, no suffix
                input: 999.0,
                expected: "999.00",
            },
            TestCase {
                // TC2: million bracket
                input: 2_500_000.0,
                expected: "2.50M",
            },
            TestCase {
                // TC3: billion bracket, exact boundary
                input: 1_000_000_000.0,
                expected: "1.00B",
            },
            TestCase {
                // TC4: trillion bracket
                input: 1_500_000_000_000.0,
                expected: "1.50T",
            },
            TestCase {
                // TC5: just below the billion boundary stays in millions
                input: 999_999_999.0,
                expected: "1000.00M",
            },
        ];

        for (index, test) in tests.into_iter().enumerate() {
            let actual = format_magnitude(test.input, UnitConvention::Abbreviated);
            assert_eq!(actual, test.expected, "TC{} failed", index);
        }
    }

    #[test]
    fn test_format_magnitude_german_words() {
        struct TestCase {
            input: f64,
            expected: &'static str,
        }

        let tests = vec![
            TestCase {
                // TC0: plain euro fallback below the thousands bracket
                input: 567.89,
                expected: "567.89 €",
            },
            TestCase {
                // TC1: thousands bracket
                input: 3_456.78,
                expected: "3.46 Tsd. €",
            },
            TestCase {
                // TC2: millions bracket
                input: 5_970_000.0,
                expected: "5.97 Mio. €",
            },
            TestCase {
                // TC3: billions bracket covers everything above 1e9
                input: 1_310_000_000_000.0,
                expected: "1310.00 Mrd. €",
            },
        ];

        for (index, test) in tests.into_iter().enumerate() {
            let actual = format_magnitude(test.input, UnitConvention::GermanWords);
            assert_eq!(actual, test.expected, "TC{} failed", index);
        }
    }

    #[test]
    fn test_format_magnitude_plain_ignores_scale() {
        assert_eq!(
            format_magnitude(1_000_000_000.0, UnitConvention::Plain),
            "1000000000.00"
        );
        assert_eq!(format_magnitude(0.0, UnitConvention::Plain), "0.00");
    }

    #[test]
    fn test_format_magnitude_monotonic_within_bracket() {
        // Within one unit bracket the rendered numeric value never decreases
        let samples = [1.2e9, 3.4e9, 17.0e9, 999.0e9];
        let rendered: Vec<f64> = samples
            .iter()
            .map(|&v| {
                format_magnitude(v, UnitConvention::Abbreviated)
                    .trim_end_matches('B')
                    .parse()
                    .unwrap()
            })
            .collect();
        for pair in rendered.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_format_change_sign() {
        assert_eq!(format_change(2.34), "+2.34%");
        assert_eq!(format_change(-1.23), "-1.23%");
        assert_eq!(format_change(0.0), "0.00%");
    }

    #[test]
    fn test_is_gain() {
        assert!(is_gain(2.34));
        assert!(is_gain(0.0));
        assert!(!is_gain(-0.01));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(66584.23), "$66584.23");
        assert_eq!(format_price(0.89), "$0.89");
    }
}
