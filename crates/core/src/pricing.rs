//! Pricing engine: per-asset totals and the display rounding rule.
//!
//! Every total shown or aggregated goes through [`round_display`], which
//! snaps the fractional part into half-unit buckets at the quarter marks.
//! Totals are recomputed on every call and never stored.

use serde::Serialize;

use crate::catalog::AssetKind;

/// Seconds per minute, used to fold `duration_seconds` into minutes.
pub const SECS_PER_MINUTE: f64 = 60.0;

/// Fractional part below which a value rounds down to its integer part.
const LOWER_QUARTER: f64 = 0.25;
/// Fractional part at or above which a value rounds up to the next integer.
const UPPER_QUARTER: f64 = 0.75;

// ---------------------------------------------------------------------------
// Input contract
// ---------------------------------------------------------------------------

/// Anything the engine can price.
///
/// Implemented by the persisted asset row and by the in-memory seed
/// records. The reel count must come from the same snapshot as the other
/// fields.
pub trait Priceable {
    fn kind(&self) -> AssetKind;
    fn duration_minutes(&self) -> i32;
    fn duration_seconds(&self) -> i32;
    fn per_minute_rate(&self) -> f64;
    fn per_reel_rate(&self) -> f64;
    fn flat_rate(&self) -> f64;
    fn reel_count(&self) -> i64;
}

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

/// Quantize a raw total for display.
///
/// Works on the magnitude: with `i` the truncated integer part and `f` the
/// remainder, `f < 0.25` gives `i`, `f < 0.75` gives `i + 0.5`, anything
/// higher gives `i + 1`. The sign of the input is dropped and not restored.
/// NaN and infinities yield `0.0`.
pub fn round_display(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    let magnitude = value.abs();
    let integer_part = magnitude.trunc();
    let fractional_part = magnitude - integer_part;

    if fractional_part < LOWER_QUARTER {
        integer_part
    } else if fractional_part < UPPER_QUARTER {
        integer_part + 0.5
    } else {
        integer_part + 1.0
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Duration in fractional minutes (`minutes + seconds / 60`).
pub fn duration_in_minutes<A: Priceable + ?Sized>(asset: &A) -> f64 {
    f64::from(asset.duration_minutes()) + f64::from(asset.duration_seconds()) / SECS_PER_MINUTE
}

/// Unrounded subtotal for one asset, selected by kind.
///
/// Unknown kinds price at zero.
pub fn precise_total<A: Priceable + ?Sized>(asset: &A) -> f64 {
    match asset.kind() {
        AssetKind::CompositeWithReels => {
            duration_in_minutes(asset) * asset.per_minute_rate()
                + asset.reel_count() as f64 * asset.per_reel_rate()
        }
        AssetKind::SingleLongForm => duration_in_minutes(asset) * asset.per_minute_rate(),
        AssetKind::ShortFormStandalone => asset.flat_rate(),
        AssetKind::Unknown(_) => 0.0,
    }
}

/// Rounded total for one asset.
pub fn total_for<A: Priceable + ?Sized>(asset: &A) -> f64 {
    round_display(precise_total(asset))
}

/// Sum of per-asset rounded totals.
///
/// Each asset is rounded before summation; this is not the same as
/// rounding the sum of precise subtotals.
pub fn grand_total<'a, A, I>(assets: I) -> f64
where
    A: Priceable + ?Sized + 'a,
    I: IntoIterator<Item = &'a A>,
{
    assets.into_iter().map(|a| total_for(a)).sum()
}

// ---------------------------------------------------------------------------
// Quote
// ---------------------------------------------------------------------------

/// How a single asset's total was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub kind: AssetKind,
    pub duration_minutes: f64,
    pub reel_count: i64,
    pub precise_total: f64,
    pub total: f64,
}

/// Build a [`PriceQuote`] for one asset.
pub fn quote<A: Priceable + ?Sized>(asset: &A) -> PriceQuote {
    let precise = precise_total(asset);
    PriceQuote {
        kind: asset.kind(),
        duration_minutes: duration_in_minutes(asset),
        reel_count: asset.reel_count(),
        precise_total: precise,
        total: round_display(precise),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
