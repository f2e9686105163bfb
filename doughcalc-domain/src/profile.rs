use doughcalc_types::{Starter, Yeast};
use serde::Serialize;

/// Physical constants of a starter, as a closed set of shapes.
///
/// All percentages are against the starter's own flour unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StarterProfile {
    /// Naturally leavened build. The recipe's yeast mass becomes the culture.
    Culture {
        hydration_percent: f64,
        levain_percent: f64,
    },
    /// Yeasted pre-ferment. `starter_percent` is starter mass against the final
    /// recipe's flour (not strictly a baker's percent).
    PreFerment {
        starter_percent: f64,
        hydration_percent: f64,
    },
    /// Straight dough, nothing built ahead.
    Direct,
}

impl StarterProfile {
    pub fn for_starter(starter: Starter) -> Self {
        match starter {
            Starter::Levain => StarterProfile::Culture {
                hydration_percent: 100.0,
                levain_percent: 50.0,
            },
            Starter::Poolish => StarterProfile::PreFerment {
                starter_percent: 20.0,
                hydration_percent: 100.0,
            },
            Starter::Biga => StarterProfile::PreFerment {
                starter_percent: 20.0,
                hydration_percent: 70.0,
            },
            Starter::None => StarterProfile::Direct,
        }
    }

    pub fn starter_percent(&self) -> Option<f64> {
        match *self {
            StarterProfile::PreFerment {
                starter_percent, ..
            } => Some(starter_percent),
            _ => None,
        }
    }

    pub fn starter_hydration_percent(&self) -> Option<f64> {
        match *self {
            StarterProfile::Culture {
                hydration_percent, ..
            }
            | StarterProfile::PreFerment {
                hydration_percent, ..
            } => Some(hydration_percent),
            StarterProfile::Direct => None,
        }
    }

    pub fn starter_levain_percent(&self) -> Option<f64> {
        match *self {
            StarterProfile::Culture { levain_percent, .. } => Some(levain_percent),
            _ => None,
        }
    }
}

/// The yeast whose base quantity applies. A levain starter always leavens with its culture.
pub fn effective_yeast(yeast: Yeast, starter: Starter) -> Yeast {
    if starter.is_levain() {
        Yeast::LevainCulture
    } else {
        yeast
    }
}

/// Base baker's percent for a yeast before any aging adjustment.
pub fn base_yeast_percent(yeast: Yeast) -> f64 {
    match yeast {
        Yeast::Active => 0.55,
        Yeast::Instant => 0.45,
        Yeast::Fresh => 1.2,
        Yeast::LevainCulture => 10.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levain_exposes_only_culture_fields() {
        let p = StarterProfile::for_starter(Starter::Levain);
        assert_eq!(p.starter_percent(), None);
        assert_eq!(p.starter_hydration_percent(), Some(100.0));
        assert_eq!(p.starter_levain_percent(), Some(50.0));
    }

    #[test]
    fn biga_is_a_stiffer_pre_ferment_than_poolish() {
        let poolish = StarterProfile::for_starter(Starter::Poolish);
        let biga = StarterProfile::for_starter(Starter::Biga);
        assert_eq!(poolish.starter_percent(), biga.starter_percent());
        assert_eq!(poolish.starter_hydration_percent(), Some(100.0));
        assert_eq!(biga.starter_hydration_percent(), Some(70.0));
        assert_eq!(biga.starter_levain_percent(), None);
    }

    #[test]
    fn no_starter_has_no_fields() {
        let p = StarterProfile::for_starter(Starter::None);
        assert_eq!(p, StarterProfile::Direct);
        assert_eq!(p.starter_percent(), None);
        assert_eq!(p.starter_hydration_percent(), None);
        assert_eq!(p.starter_levain_percent(), None);
    }

    #[test]
    fn levain_starter_overrides_selected_yeast() {
        for yeast in Yeast::ALL {
            assert_eq!(effective_yeast(yeast, Starter::Levain), Yeast::LevainCulture);
        }
        assert_eq!(effective_yeast(Yeast::Fresh, Starter::Biga), Yeast::Fresh);
    }
}
