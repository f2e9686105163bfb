use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the dough is leavened before the final mix.
///
/// - levain: a naturally leavened culture built the night before
/// - poolish / biga: a commercially yeasted pre-ferment (100% / 70% hydration)
/// - none: straight dough, yeast goes into the final mix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Starter {
    Levain,
    Poolish,
    Biga,
    None,
}

impl Starter {
    pub const ALL: [Starter; 4] = [
        Starter::Levain,
        Starter::Poolish,
        Starter::Biga,
        Starter::None,
    ];

    /// Name used for section titles and ingredient rows.
    pub fn name(self) -> &'static str {
        match self {
            Starter::Levain => "Levain",
            Starter::Poolish => "Poolish",
            Starter::Biga => "Biga",
            Starter::None => "None",
        }
    }

    /// Longer label shown when choosing a starter.
    pub fn label(self) -> &'static str {
        match self {
            Starter::Levain => "Levain",
            Starter::Poolish => "Poolish (100% Hydration)",
            Starter::Biga => "Biga (70% Hydration)",
            Starter::None => "None",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Starter::Levain => "levain",
            Starter::Poolish => "poolish",
            Starter::Biga => "biga",
            Starter::None => "none",
        }
    }

    pub fn is_levain(self) -> bool {
        matches!(self, Starter::Levain)
    }
}

impl fmt::Display for Starter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown starter '{0}' (expected levain, poolish, biga or none)")]
pub struct ParseStarterError(pub String);

impl FromStr for Starter {
    type Err = ParseStarterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "levain" => Ok(Starter::Levain),
            "poolish" => Ok(Starter::Poolish),
            "biga" => Ok(Starter::Biga),
            "none" | "straight" => Ok(Starter::None),
            _ => Err(ParseStarterError(s.to_string())),
        }
    }
}

/// Commercial yeast (or culture) used to leaven the dough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Yeast {
    Active,
    Instant,
    Fresh,
    LevainCulture,
}

impl Yeast {
    pub const ALL: [Yeast; 4] = [
        Yeast::Active,
        Yeast::Instant,
        Yeast::Fresh,
        Yeast::LevainCulture,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Yeast::Active => "Active Dry Yeast",
            Yeast::Instant => "Instant Yeast",
            Yeast::Fresh => "Fresh (Brewer's) Yeast",
            Yeast::LevainCulture => "Levain Culture",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Yeast::Active => "active",
            Yeast::Instant => "instant",
            Yeast::Fresh => "fresh",
            Yeast::LevainCulture => "levain-culture",
        }
    }
}

impl fmt::Display for Yeast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown yeast '{0}' (expected active, instant, fresh or levain-culture)")]
pub struct ParseYeastError(pub String);

impl FromStr for Yeast {
    type Err = ParseYeastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "active" | "active-dry" | "active-dry-yeast" => Ok(Yeast::Active),
            "instant" | "instant-yeast" => Ok(Yeast::Instant),
            "fresh" | "brewers" | "fresh-yeast" => Ok(Yeast::Fresh),
            "levain-culture" | "levain" | "culture" => Ok(Yeast::LevainCulture),
            _ => Err(ParseYeastError(s.to_string())),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

/// Everything the calculator needs for one recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Oven temperature in °F.
    pub oven_temp: f64,
    pub pie_count: u32,
    /// Target pie diameter in inches.
    pub pie_size: f64,
    pub starter: Starter,
    /// Carried through for callers; the calculation ignores it.
    #[serde(default)]
    pub use_malt: bool,
    /// Nights the balled dough spends in the fridge.
    #[serde(default)]
    pub nights_aging: u32,
    pub yeast_type: Yeast,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            oven_temp: 550.0,
            pie_count: 3,
            pie_size: 16.0,
            starter: Starter::Levain,
            use_malt: true,
            nights_aging: 1,
            yeast_type: Yeast::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_parses_case_and_separator_insensitive() {
        assert_eq!("Levain".parse::<Starter>().unwrap(), Starter::Levain);
        assert_eq!(" POOLISH ".parse::<Starter>().unwrap(), Starter::Poolish);
        assert_eq!("none".parse::<Starter>().unwrap(), Starter::None);
        assert!("sourdough".parse::<Starter>().is_err());
    }

    #[test]
    fn yeast_parses_aliases() {
        assert_eq!("levain_culture".parse::<Yeast>().unwrap(), Yeast::LevainCulture);
        assert_eq!("Active Dry Yeast".parse::<Yeast>().unwrap(), Yeast::Active);
        assert_eq!("fresh".parse::<Yeast>().unwrap(), Yeast::Fresh);
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = "rye".parse::<Yeast>().unwrap_err();
        assert!(err.to_string().contains("'rye'"));
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for starter in Starter::ALL {
            assert_eq!(starter.key().parse::<Starter>().unwrap(), starter);
        }
        for yeast in Yeast::ALL {
            assert_eq!(yeast.key().parse::<Yeast>().unwrap(), yeast);
        }
    }
}
