//! Regressions and the baker's-percent mass balance.
//!
//! All percentages are against total flour unless a function says otherwise. Nothing here
//! clamps or rejects input: a zero pie count gives a zero-weight recipe, a tiny pie size gives
//! negative weights, and a zero denominator gives `inf`/`NaN`.

use crate::profile::{base_yeast_percent, effective_yeast, StarterProfile};
use doughcalc_types::{Inputs, Starter, Yeast};
use serde::Serialize;
use tracing::debug;

/// Planned overage for the dough left behind in the tub.
pub const FUDGE_FACTOR: f64 = 1.01;

/// Share of the recipe's yeast percent that goes into a yeasted pre-ferment, per unit of
/// pre-ferment flour.
pub const STARTER_YEAST_MULTIPLIER: f64 = 0.4628099174;

pub const SALT_BAKERS_PERCENT: f64 = 2.8;

/// Above this the oven is hot enough for a lean, low-hydration dough.
const HOT_OVEN_F: f64 = 900.0;
/// Below this the dough gets the home-oven maximum of oil and water.
const COOL_OVEN_F: f64 = 450.0;

/// Dough ball weight in grams for a pie of `pie_size` inches.
///
/// Linear fit over (10in, 200g), (12in, 280g), (16in, 400g).
pub fn ball_weight_grams(pie_size: f64) -> f64 {
    -122.9 + 32.86 * pie_size
}

pub fn oil_bakers_percent(oven_temp: f64) -> f64 {
    if oven_temp > HOT_OVEN_F {
        return 0.0;
    }
    if oven_temp < COOL_OVEN_F {
        return 2.0;
    }
    4.0 - 0.004444 * oven_temp
}

pub fn hydration_percent(oven_temp: f64) -> f64 {
    if oven_temp > HOT_OVEN_F {
        return 57.0;
    }
    if oven_temp < COOL_OVEN_F {
        return 65.0;
    }
    73.0 - 0.01778 * oven_temp
}

/// Yeast baker's percent after the aging adjustment.
///
/// Each night of aging adds another 10% of the base amount. Longer cold ferments usually call
/// for less yeast, not more; the formula is kept as the recipe has always computed it.
pub fn yeast_bakers_percent(yeast: Yeast, nights_aging: u32, starter: Starter) -> f64 {
    let base = base_yeast_percent(effective_yeast(yeast, starter));
    base + base * 0.1 * f64::from(nights_aging)
}

/// What gets built ahead of the final mix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StarterBuild {
    /// Levain: existing culture fed with fresh flour and water.
    Culture { flour: f64, water: f64, culture: f64 },
    /// Poolish or biga: flour, water and a slice of the recipe's yeast.
    PreFerment { flour: f64, water: f64, yeast: f64 },
}

impl StarterBuild {
    pub fn flour(&self) -> f64 {
        match *self {
            StarterBuild::Culture { flour, .. } | StarterBuild::PreFerment { flour, .. } => flour,
        }
    }

    pub fn water(&self) -> f64 {
        match *self {
            StarterBuild::Culture { water, .. } | StarterBuild::PreFerment { water, .. } => water,
        }
    }

    /// Commercial yeast that went into the build (zero for a levain).
    pub fn yeast(&self) -> f64 {
        match *self {
            StarterBuild::PreFerment { yeast, .. } => yeast,
            StarterBuild::Culture { .. } => 0.0,
        }
    }

    /// Mass of the finished starter as it is added to the dough.
    ///
    /// A pre-ferment's flour and water already make up `starter_percent` of the dough flour by
    /// construction, so its yeast is not added on top.
    pub fn total(&self) -> f64 {
        match *self {
            StarterBuild::Culture {
                flour,
                water,
                culture,
            } => flour + water + culture,
            StarterBuild::PreFerment { flour, water, .. } => flour + water,
        }
    }
}

/// Numeric result of one calculation, before any formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MassBalance {
    pub ball_weight: f64,
    pub total_weight: f64,
    pub hydration_percent: f64,
    pub oil_percent: f64,
    pub yeast_percent: f64,
    pub flour: f64,
    pub water: f64,
    pub salt: f64,
    pub yeast: f64,
    pub oil: f64,
    pub starter: Option<StarterBuild>,
    /// Bloom water for active dry yeast, taken out of the main water.
    pub yeast_water: Option<f64>,
}

impl MassBalance {
    pub fn starter_flour(&self) -> f64 {
        self.starter.map_or(0.0, |s| s.flour())
    }

    pub fn starter_water(&self) -> f64 {
        self.starter.map_or(0.0, |s| s.water())
    }

    pub fn starter_yeast(&self) -> f64 {
        self.starter.map_or(0.0, |s| s.yeast())
    }

    pub fn starter_weight(&self) -> f64 {
        self.starter.map_or(0.0, |s| s.total())
    }

    /// Yeast not already spent in a pre-ferment.
    pub fn remaining_yeast(&self) -> f64 {
        self.yeast - self.starter_yeast()
    }

    pub fn remaining_water(&self) -> f64 {
        self.water - self.yeast_water.unwrap_or(0.0) - self.starter_water()
    }

    pub fn remaining_flour(&self) -> f64 {
        self.flour - self.starter_flour()
    }
}

/// Run the mass balance for `inputs`.
pub fn compute_mass_balance(inputs: &Inputs) -> MassBalance {
    let ball_weight = ball_weight_grams(inputs.pie_size);
    let total_weight = f64::from(inputs.pie_count) * ball_weight * FUDGE_FACTOR;
    let oil_percent = oil_bakers_percent(inputs.oven_temp);
    let hydration = hydration_percent(inputs.oven_temp);
    let yeast_percent = yeast_bakers_percent(inputs.yeast_type, inputs.nights_aging, inputs.starter);

    let flour = total_weight * 100.0
        / (100.0 + hydration + SALT_BAKERS_PERCENT + yeast_percent + oil_percent);
    let water = flour * (hydration / 100.0);
    let salt = flour * (SALT_BAKERS_PERCENT / 100.0);
    let yeast = flour * (yeast_percent / 100.0);
    let oil = flour * (oil_percent / 100.0);

    let starter = match StarterProfile::for_starter(inputs.starter) {
        StarterProfile::Culture {
            hydration_percent,
            levain_percent,
        } => {
            let starter_flour = yeast * 100.0 / levain_percent;
            Some(StarterBuild::Culture {
                flour: starter_flour,
                water: starter_flour * (hydration_percent / 100.0),
                culture: yeast,
            })
        }
        StarterProfile::PreFerment {
            starter_percent,
            hydration_percent,
        } => {
            let starter_weight = flour * (starter_percent / 100.0);
            let starter_flour = starter_weight * 100.0 / (100.0 + hydration_percent);
            Some(StarterBuild::PreFerment {
                flour: starter_flour,
                water: starter_flour * (hydration_percent / 100.0),
                yeast: starter_flour * ((STARTER_YEAST_MULTIPLIER * yeast_percent) / 100.0),
            })
        }
        StarterProfile::Direct => None,
    };

    let yeast_water = (!inputs.starter.is_levain() && inputs.yeast_type == Yeast::Active)
        .then(|| water / 3.0);

    debug!(
        ball_weight,
        total_weight,
        hydration,
        oil_percent,
        yeast_percent,
        flour,
        starter = inputs.starter.name(),
        "computed mass balance"
    );

    MassBalance {
        ball_weight,
        total_weight,
        hydration_percent: hydration,
        oil_percent,
        yeast_percent,
        flour,
        water,
        salt,
        yeast,
        oil,
        starter,
        yeast_water,
    }
}
