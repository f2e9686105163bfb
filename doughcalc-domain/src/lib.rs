//! Domain logic: turn a handful of dough settings into a weighed, step-by-step recipe.
//!
//! Everything here is pure arithmetic over [`Inputs`] plus fixed constant tables. Nothing is
//! validated: out-of-range inputs give out-of-range weights, never errors. Bounding inputs is the
//! caller's job.
//!
//! [`Inputs`]: doughcalc_types::Inputs

mod catalog;
mod format;
mod formula;
mod profile;
mod recipe;

pub use catalog::{starter_catalog, yeast_catalog, StarterSummary, YeastSummary};
pub use format::{as_bakers_percent, as_grams};
pub use formula::{
    ball_weight_grams, compute_mass_balance, hydration_percent, oil_bakers_percent,
    yeast_bakers_percent, MassBalance, StarterBuild, FUDGE_FACTOR, SALT_BAKERS_PERCENT,
    STARTER_YEAST_MULTIPLIER,
};
pub use profile::{base_yeast_percent, effective_yeast, StarterProfile};
pub use recipe::compute_recipe;
