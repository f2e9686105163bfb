use serde::{Deserialize, Serialize};

/// One titled table of the recipe (totals, a build step, or the final mix).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            rows: vec![],
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// First row whose item label is exactly `item`.
    pub fn row(&self, item: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.item == item)
    }
}

/// A weighed ingredient, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub item: String,
    pub weight_grams: String,
    pub bakers_percent: String,
}

impl Row {
    pub fn new(
        item: impl Into<String>,
        weight_grams: impl Into<String>,
        bakers_percent: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            weight_grams: weight_grams.into(),
            bakers_percent: bakers_percent.into(),
        }
    }
}
