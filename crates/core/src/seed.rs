//! Demo catalog inserted on first start.
//!
//! Pure data only; `montage_db::seed` decides whether to insert it.

use crate::catalog::{
    AssetKind, DEFAULT_FLAT_RATE, DEFAULT_PER_MINUTE_RATE, DEFAULT_PER_REEL_RATE,
    KIND_COMPOSITE_WITH_REELS, KIND_SHORT_FORM_STANDALONE, KIND_SINGLE_LONG_FORM,
};
use crate::pricing::Priceable;

/// Username of the admin account created when no admin exists.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// A reel attached to a demo asset.
#[derive(Debug, Clone, Copy)]
pub struct SeedReel {
    pub name: &'static str,
    pub source_url: &'static str,
}

/// A demo asset with its reels.
#[derive(Debug, Clone, Copy)]
pub struct SeedAsset {
    pub name: &'static str,
    pub kind: &'static str,
    pub source_url: &'static str,
    pub duration_minutes: i32,
    pub duration_seconds: i32,
    pub per_minute_rate: f64,
    pub per_reel_rate: f64,
    pub flat_rate: f64,
    pub reels: &'static [SeedReel],
}

impl SeedAsset {
    const fn standalone(name: &'static str, source_url: &'static str) -> Self {
        Self {
            name,
            kind: KIND_SHORT_FORM_STANDALONE,
            source_url,
            duration_minutes: 0,
            duration_seconds: 0,
            per_minute_rate: DEFAULT_PER_MINUTE_RATE,
            per_reel_rate: DEFAULT_PER_REEL_RATE,
            flat_rate: DEFAULT_FLAT_RATE,
            reels: &[],
        }
    }

    const fn long_form(
        name: &'static str,
        source_url: &'static str,
        minutes: i32,
        seconds: i32,
    ) -> Self {
        Self {
            name,
            kind: KIND_SINGLE_LONG_FORM,
            source_url,
            duration_minutes: minutes,
            duration_seconds: seconds,
            per_minute_rate: DEFAULT_PER_MINUTE_RATE,
            per_reel_rate: DEFAULT_PER_REEL_RATE,
            flat_rate: DEFAULT_FLAT_RATE,
            reels: &[],
        }
    }

    const fn composite(
        name: &'static str,
        source_url: &'static str,
        minutes: i32,
        seconds: i32,
        reels: &'static [SeedReel],
    ) -> Self {
        Self {
            kind: KIND_COMPOSITE_WITH_REELS,
            reels,
            ..Self::long_form(name, source_url, minutes, seconds)
        }
    }
}

impl Priceable for SeedAsset {
    fn kind(&self) -> AssetKind {
        AssetKind::parse(self.kind)
    }
    fn duration_minutes(&self) -> i32 {
        self.duration_minutes
    }
    fn duration_seconds(&self) -> i32 {
        self.duration_seconds
    }
    fn per_minute_rate(&self) -> f64 {
        self.per_minute_rate
    }
    fn per_reel_rate(&self) -> f64 {
        self.per_reel_rate
    }
    fn flat_rate(&self) -> f64 {
        self.flat_rate
    }
    fn reel_count(&self) -> i64 {
        self.reels.len() as i64
    }
}

const ODDITIES_6_REELS: &[SeedReel] = &[
    SeedReel {
        name: "Oddities 6 - reel 1",
        source_url: "https://www.youtube.com/shorts/jNQXAC9IVRw",
    },
    SeedReel {
        name: "Oddities 6 - reel 2",
        source_url: "https://www.youtube.com/shorts/Z8GEh4KLMgc",
    },
    SeedReel {
        name: "Oddities 6 - reel 3",
        source_url: "https://www.youtube.com/shorts/L_jWHffIx5E",
    },
];

const CHAMPIONS_2_REELS: &[SeedReel] = &[
    SeedReel {
        name: "Champions 2 - reel 1",
        source_url: "https://www.youtube.com/shorts/kJQP7kiw5Fk",
    },
    SeedReel {
        name: "Champions 2 - reel 2",
        source_url: "https://www.youtube.com/shorts/gCNeDWCI0vo",
    },
];

const ODDITIES_8_REELS: &[SeedReel] = &[
    SeedReel {
        name: "Oddities 8 - reel 1",
        source_url: "https://www.youtube.com/shorts/L_jWHffIx5E",
    },
    SeedReel {
        name: "Oddities 8 - reel 2",
        source_url: "https://www.youtube.com/shorts/Z8GEh4KLMgc",
    },
    SeedReel {
        name: "Oddities 8 - reel 3",
        source_url: "https://www.youtube.com/shorts/jNQXAC9IVRw",
    },
    SeedReel {
        name: "Oddities 8 - reel 4",
        source_url: "https://www.youtube.com/shorts/kJQP7kiw5Fk",
    },
];

const DEMO_CATALOG: &[SeedAsset] = &[
    SeedAsset::standalone("Milan reels video", "https://www.youtube.com/shorts/Z8GEh4KLMgc"),
    SeedAsset::composite(
        "League oddities, week 6",
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        4,
        31,
        ODDITIES_6_REELS,
    ),
    SeedAsset::composite(
        "Champions league 2",
        "https://www.youtube.com/watch?v=9bZkp7q19f0",
        3,
        45,
        CHAMPIONS_2_REELS,
    ),
    SeedAsset::long_form(
        "League oddities, week 7",
        "https://www.youtube.com/watch?v=jNQXAC9IVRw",
        4,
        17,
    ),
    SeedAsset::standalone(
        "Players older than their coaches",
        "https://www.youtube.com/shorts/kJQP7kiw5Fk",
    ),
    SeedAsset::long_form(
        "The Andres Escobar story",
        "https://www.youtube.com/watch?v=M7lc1UVf-VE",
        5,
        42,
    ),
    SeedAsset::standalone(
        "Andres Escobar story, short cut",
        "https://www.youtube.com/shorts/gCNeDWCI0vo",
    ),
    SeedAsset::composite(
        "League oddities, week 8",
        "https://www.youtube.com/watch?v=ZZ5LpwO-An4",
        5,
        34,
        ODDITIES_8_REELS,
    ),
    SeedAsset::long_form(
        "Champions league 3",
        "https://www.youtube.com/watch?v=OPf0YbXqDm0",
        4,
        6,
    ),
];

/// The demo catalog, in insertion order.
pub fn demo_catalog() -> &'static [SeedAsset] {
    DEMO_CATALOG
}
