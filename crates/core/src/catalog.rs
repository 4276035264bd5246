//! Catalog vocabulary: asset kinds, default rates, and input validation.
//!
//! The API runs every admin-supplied asset and reel through the validators
//! here before it reaches the database. The pricing engine does not
//! validate anything, so a row that bypassed these checks is still priced
//! literally.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default rate applied per minute of duration.
pub const DEFAULT_PER_MINUTE_RATE: f64 = 3.5;
/// Default rate applied per attached reel.
pub const DEFAULT_PER_REEL_RATE: f64 = 2.5;
/// Default fixed price for a standalone short-form asset.
pub const DEFAULT_FLAT_RATE: f64 = 5.0;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of an asset or reel name. Columns are `TEXT`; the limit
/// is enforced here.
pub const MAX_NAME_LEN: usize = 200;
/// Maximum length of a source URL.
pub const MAX_URL_LEN: usize = 500;

// ---------------------------------------------------------------------------
// Asset kind
// ---------------------------------------------------------------------------

pub const KIND_COMPOSITE_WITH_REELS: &str = "composite_with_reels";
pub const KIND_SINGLE_LONG_FORM: &str = "single_long_form";
pub const KIND_SHORT_FORM_STANDALONE: &str = "short_form_standalone";

/// All kind names accepted by [`AssetKind::parse_known`].
pub const VALID_KINDS: &[&str] = &[
    KIND_COMPOSITE_WITH_REELS,
    KIND_SINGLE_LONG_FORM,
    KIND_SHORT_FORM_STANDALONE,
];

/// Pricing model of an asset.
///
/// The three known variants each select a formula in
/// [`crate::pricing::precise_total`]. Text stored in the database that is
/// not one of the known names is carried as [`AssetKind::Unknown`] and
/// prices at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetKind {
    /// Long-form video plus attached reels: duration rate + per-reel rate.
    CompositeWithReels,
    /// Long-form video on its own: duration rate only.
    SingleLongForm,
    /// Standalone short clip: flat rate only.
    ShortFormStandalone,
    /// Any other stored value, kept verbatim.
    Unknown(String),
}

impl AssetKind {
    /// Parse a stored kind name. Never fails.
    pub fn parse(s: &str) -> Self {
        match s {
            KIND_COMPOSITE_WITH_REELS => Self::CompositeWithReels,
            KIND_SINGLE_LONG_FORM => Self::SingleLongForm,
            KIND_SHORT_FORM_STANDALONE => Self::ShortFormStandalone,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Parse a kind name supplied by an admin, rejecting unknown values.
    pub fn parse_known(s: &str) -> Result<Self, CoreError> {
        match Self::parse(s) {
            Self::Unknown(_) => Err(CoreError::Validation(format!(
                "Invalid kind: '{s}'. Must be one of: {}",
                VALID_KINDS.join(", ")
            ))),
            kind => Ok(kind),
        }
    }

    /// The stored form of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::CompositeWithReels => KIND_COMPOSITE_WITH_REELS,
            Self::SingleLongForm => KIND_SINGLE_LONG_FORM,
            Self::ShortFormStandalone => KIND_SHORT_FORM_STANDALONE,
            Self::Unknown(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AssetKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AssetKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Admin-supplied asset fields, borrowed from whatever DTO carries them.
#[derive(Debug, Clone, Copy)]
pub struct AssetInput<'a> {
    pub name: &'a str,
    pub kind: &'a str,
    pub source_url: &'a str,
    pub duration_minutes: i32,
    pub duration_seconds: i32,
    pub per_minute_rate: f64,
    pub per_reel_rate: f64,
    pub flat_rate: f64,
}

/// Validate an asset before it is created or replaced.
///
/// Returns the parsed kind so callers don't parse twice.
pub fn validate_asset_input(input: &AssetInput<'_>) -> Result<AssetKind, CoreError> {
    validate_name(input.name, "Asset name")?;
    validate_url(input.source_url)?;
    let kind = AssetKind::parse_known(input.kind)?;

    if input.duration_minutes < 0 {
        return Err(CoreError::Validation(format!(
            "duration_minutes must not be negative, got {}",
            input.duration_minutes
        )));
    }
    if input.duration_seconds < 0 {
        return Err(CoreError::Validation(format!(
            "duration_seconds must not be negative, got {}",
            input.duration_seconds
        )));
    }

    validate_rate(input.per_minute_rate, "per_minute_rate")?;
    validate_rate(input.per_reel_rate, "per_reel_rate")?;
    validate_rate(input.flat_rate, "flat_rate")?;

    Ok(kind)
}

/// Validate a reel's descriptive fields.
pub fn validate_reel_input(name: &str, source_url: &str) -> Result<(), CoreError> {
    validate_name(name, "Reel name")?;
    validate_url(source_url)
}

fn validate_name(name: &str, label: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!("{label} must not be empty")));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{label} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_url(url: &str) -> Result<(), CoreError> {
    if url.chars().count() > MAX_URL_LEN {
        return Err(CoreError::Validation(format!(
            "source_url must be at most {MAX_URL_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_rate(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}
