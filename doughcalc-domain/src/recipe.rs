use crate::format::{as_bakers_percent, as_grams};
use crate::formula::{compute_mass_balance, MassBalance, StarterBuild, SALT_BAKERS_PERCENT};
use crate::profile::StarterProfile;
use doughcalc_types::{Inputs, Row, Section};
use tracing::debug;

/// Decimal places for commercial yeast and its bloom water.
const SMALL_MASS_PRECISION: usize = 2;

const LEVAIN_SUBTITLE: &str = "Dissolve levain in water, add flour, and mix to combine. Then cover \
and leave at room temperate overnight to mix dough the following evening.";
const PRE_FERMENT_SUBTITLE: &str = "Dissolve yeast in water, add flour, and mix to combine. Then \
cover and leave at room temperate overnight to mix dough the following evening.";
const YEAST_SUBTITLE: &str = "Dissolve yeast in water to activate prior to adding to dough.";

/// Compute the full recipe: a totals section, then one section per preparation step in mixing
/// order, ending with the final dough.
pub fn compute_recipe(inputs: &Inputs) -> Vec<Section> {
    let mb = compute_mass_balance(inputs);
    let mut sections = vec![totals_section(inputs, &mb)];

    if let Some(build) = mb.starter {
        sections.push(starter_section(inputs, &build));
    }
    if let Some(yeast_water) = mb.yeast_water {
        sections.push(yeast_section(inputs, &mb, yeast_water));
    }
    sections.push(dough_section(inputs, &mb));

    debug!(
        sections = sections.len(),
        starter = inputs.starter.name(),
        nights = inputs.nights_aging,
        "assembled recipe"
    );
    sections
}

fn share(part: f64, whole: f64) -> String {
    as_bakers_percent(part / whole * 100.0)
}

/// "8 hours" for a same-day dough, otherwise the night count.
fn lead_time(nights_aging: u32) -> String {
    if nights_aging == 0 {
        "8 hours".to_string()
    } else {
        format!("{nights_aging} nights")
    }
}

fn totals_section(inputs: &Inputs, mb: &MassBalance) -> Section {
    let mut section = Section::new(format!(
        "For {} balls at {} each:",
        inputs.pie_count,
        as_grams(mb.ball_weight, 0)
    ))
    .with_subtitle("Individual steps described below.")
    .with_row(Row::new("Flour", as_grams(mb.flour, 0), as_bakers_percent(100.0)))
    .with_row(Row::new(
        "Water",
        as_grams(mb.water, 0),
        share(mb.water, mb.flour),
    ));

    if inputs.starter.is_levain() {
        section = section.with_row(Row::new(
            "Levain culture",
            as_grams(mb.yeast, 0),
            share(mb.yeast, mb.flour),
        ));
    }

    section = section.with_row(Row::new(
        "Salt",
        as_grams(mb.salt, 0),
        share(mb.salt, mb.flour),
    ));

    if !inputs.starter.is_levain() && mb.yeast != 0.0 {
        section = section.with_row(Row::new(
            "Yeast",
            as_grams(mb.yeast, SMALL_MASS_PRECISION),
            share(mb.yeast, mb.flour),
        ));
    }
    if mb.oil != 0.0 {
        section = section.with_row(Row::new(
            "Oil",
            as_grams(mb.oil, 0),
            share(mb.oil, mb.flour),
        ));
    }
    section
}

fn starter_section(inputs: &Inputs, build: &StarterBuild) -> Section {
    let profile = StarterProfile::for_starter(inputs.starter);
    let hydration = profile.starter_hydration_percent().unwrap_or(0.0);
    let title = format!(
        "{} ({} nights ahead)",
        inputs.starter.name(),
        1 + inputs.nights_aging
    );

    let lead_row = match *build {
        StarterBuild::Culture { flour, .. } => {
            let levain_percent = profile.starter_levain_percent().unwrap_or(0.0);
            Row::new(
                "Levain culture",
                as_grams(flour * (levain_percent / 100.0), 0),
                as_bakers_percent(levain_percent),
            )
        }
        StarterBuild::PreFerment { flour, yeast, .. } => Row::new(
            inputs.yeast_type.display_name(),
            as_grams(yeast, SMALL_MASS_PRECISION),
            share(yeast, flour),
        ),
    };
    let subtitle = match build {
        StarterBuild::Culture { .. } => LEVAIN_SUBTITLE,
        StarterBuild::PreFerment { .. } => PRE_FERMENT_SUBTITLE,
    };

    Section::new(title)
        .with_subtitle(subtitle)
        .with_row(lead_row)
        .with_row(Row::new(
            "Water at 90°",
            as_grams(build.water(), 0),
            as_bakers_percent(hydration),
        ))
        .with_row(Row::new(
            "Flour",
            as_grams(build.flour(), 0),
            as_bakers_percent(100.0),
        ))
}

fn yeast_section(inputs: &Inputs, mb: &MassBalance, yeast_water: f64) -> Section {
    let remaining_yeast = mb.remaining_yeast();
    Section::new(format!("Yeast ({} ahead)", lead_time(inputs.nights_aging)))
        .with_subtitle(YEAST_SUBTITLE)
        .with_row(Row::new(
            "Water at 85°",
            as_grams(yeast_water, SMALL_MASS_PRECISION),
            share(yeast_water, mb.flour),
        ))
        .with_row(Row::new(
            "Active Dry Yeast",
            as_grams(remaining_yeast, SMALL_MASS_PRECISION),
            share(remaining_yeast, mb.flour),
        ))
}

fn dough_section(inputs: &Inputs, mb: &MassBalance) -> Section {
    let ball = as_grams(mb.ball_weight, 0);
    let subtitle = if inputs.nights_aging > 0 {
        format!(
            "After mixing, bulk ferment for 20 minutes, then ball at {ball} and refrigerate for {} \
night(s). Remove from fridge at least 1 hour before shaping (i.e. while preheating the oven!).",
            inputs.nights_aging
        )
    } else {
        format!(
            "After mixing, bulk ferment for 2 hours, then ball at {ball} and leave at room \
temperature for 6-8 hours for secondary fermentation."
        )
    };

    let yeast_water = mb.yeast_water.unwrap_or(0.0);
    let water_item = if mb.yeast_water.is_some() {
        "Water, Chilled"
    } else {
        "Water at 90°"
    };

    // The water percent leaves starter water in, matching the totals row minus bloom water.
    let mut section = Section::new(format!("Dough ({} ahead)", lead_time(inputs.nights_aging)))
        .with_subtitle(subtitle)
        .with_row(Row::new(
            water_item,
            as_grams(mb.remaining_water(), 0),
            share(mb.water - yeast_water, mb.flour),
        ))
        .with_row(Row::new(
            "Fine sea salt",
            as_grams(mb.flour * (SALT_BAKERS_PERCENT / 100.0), 0),
            as_bakers_percent(SALT_BAKERS_PERCENT),
        ));

    if mb.yeast_water.is_some() {
        let activated = yeast_water + mb.remaining_yeast();
        section = section.with_row(Row::new(
            "Yeast water",
            as_grams(activated, 0),
            share(activated, mb.flour),
        ));
    }
    if mb.starter.is_some() {
        section = section.with_row(Row::new(
            inputs.starter.name(),
            as_grams(mb.starter_weight(), 0),
            share(mb.starter_weight(), mb.flour),
        ));
    }

    section.with_row(Row::new(
        "Flour",
        as_grams(mb.remaining_flour(), 0),
        as_bakers_percent(100.0),
    ))
}
