//! Listing of the built-in starters and yeasts, for callers that offer a choice.

use crate::profile::{base_yeast_percent, StarterProfile};
use doughcalc_types::{Starter, Yeast};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarterSummary {
    pub starter: Starter,
    pub label: &'static str,
    pub profile: StarterProfile,
    /// Base yeast percent when this starter leavens with its own culture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YeastSummary {
    pub yeast: Yeast,
    pub name: &'static str,
    pub base_percent: f64,
}

pub fn starter_catalog() -> Vec<StarterSummary> {
    Starter::ALL
        .into_iter()
        .map(|starter| StarterSummary {
            starter,
            label: starter.label(),
            profile: StarterProfile::for_starter(starter),
            culture_percent: starter
                .is_levain()
                .then(|| base_yeast_percent(Yeast::LevainCulture)),
        })
        .collect()
}

pub fn yeast_catalog() -> Vec<YeastSummary> {
    Yeast::ALL
        .into_iter()
        .map(|yeast| YeastSummary {
            yeast,
            name: yeast.display_name(),
            base_percent: base_yeast_percent(yeast),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_starter_in_order() {
        let keys: Vec<_> = starter_catalog().iter().map(|s| s.starter).collect();
        assert_eq!(keys, Starter::ALL.to_vec());
    }

    #[test]
    fn only_levain_carries_a_culture_percent() {
        for summary in starter_catalog() {
            assert_eq!(summary.culture_percent.is_some(), summary.starter.is_levain());
        }
    }

    #[test]
    fn yeast_catalog_has_base_percents() {
        let fresh = yeast_catalog()
            .into_iter()
            .find(|y| y.yeast == Yeast::Fresh)
            .unwrap();
        assert_eq!(fresh.base_percent, 1.2);
        assert_eq!(fresh.name, "Fresh (Brewer's) Yeast");
    }
}
