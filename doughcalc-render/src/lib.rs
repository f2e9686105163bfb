//! Rendering helpers (plain text and markdown) for recipes and the starter catalog.

use doughcalc_domain::{StarterProfile, StarterSummary, YeastSummary};
use doughcalc_types::{Row, Section};

const HEADERS: [&str; 3] = ["Item", "Weight (g)", "Baker's %"];

/// Render sections as aligned plain-text tables, subtitle under each table.
pub fn render_recipe_text(sections: &[Section]) -> String {
    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&section.title);
        out.push('\n');
        out.push_str(&text_table(&section.rows));
        if let Some(subtitle) = &section.subtitle {
            out.push('\n');
            out.push_str(subtitle);
            out.push('\n');
        }
    }
    out
}

fn text_table(rows: &[Row]) -> String {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        widths[0] = widths[0].max(row.item.chars().count());
        widths[1] = widths[1].max(row.weight_grams.chars().count());
        widths[2] = widths[2].max(row.bakers_percent.chars().count());
    }

    let mut out = String::new();
    push_text_line(&mut out, HEADERS, widths);
    out.push_str(&format!(
        "{}  {}  {}\n",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    ));
    for row in rows {
        push_text_line(
            &mut out,
            [row.item.as_str(), row.weight_grams.as_str(), row.bakers_percent.as_str()],
            widths,
        );
    }
    out
}

fn push_text_line(out: &mut String, cells: [&str; 3], widths: [usize; 3]) {
    // `{:>w$}` pads by char count, so "°" lines up.
    out.push_str(&format!(
        "{:<w0$}  {:>w1$}  {:>w2$}\n",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    ));
}

/// Render sections as markdown: one `##` heading and table per section.
pub fn render_recipe_md(sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("# Dough recipe\n\n");
    if sections.is_empty() {
        out.push_str("_Nothing to mix._\n");
        return out;
    }

    for section in sections {
        out.push_str(&format!("## {}\n\n", section.title));
        out.push_str("| Item | Weight (g) | Baker's % |\n");
        out.push_str("|---|---:|---:|\n");
        for row in &section.rows {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                md_cell(&row.item),
                md_cell(&row.weight_grams),
                md_cell(&row.bakers_percent)
            ));
        }
        if let Some(subtitle) = &section.subtitle {
            out.push_str(&format!("\n{}\n", subtitle));
        }
        out.push('\n');
    }
    out
}

fn md_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

pub fn render_starters_text(starters: &[StarterSummary], yeasts: &[YeastSummary]) -> String {
    let mut out = String::new();
    out.push_str("Starters:\n\n");
    for s in starters {
        out.push_str(&format!("  {:<10} {}\n", s.starter.key(), s.label));
        out.push_str(&format!("  {:<10} {}\n", "", profile_summary(&s.profile)));
        if let Some(culture) = s.culture_percent {
            out.push_str(&format!("  {:<10} culture {}% of flour\n", "", culture));
        }
    }
    out.push_str("\nYeasts:\n\n");
    for y in yeasts {
        out.push_str(&format!(
            "  {:<16} {:<24} base {}%\n",
            y.yeast.key(),
            y.name,
            y.base_percent
        ));
    }
    out
}

pub fn render_starters_md(starters: &[StarterSummary], yeasts: &[YeastSummary]) -> String {
    let mut out = String::new();
    out.push_str("# Starters\n\n");
    out.push_str("| Key | Label | Profile |\n");
    out.push_str("|---|---|---|\n");
    for s in starters {
        out.push_str(&format!(
            "| `{}` | {} | {} |\n",
            s.starter.key(),
            md_cell(s.label),
            profile_summary(&s.profile)
        ));
    }
    out.push_str("\n# Yeasts\n\n");
    out.push_str("| Key | Name | Base % |\n");
    out.push_str("|---|---|---:|\n");
    for y in yeasts {
        out.push_str(&format!(
            "| `{}` | {} | {} |\n",
            y.yeast.key(),
            md_cell(y.name),
            y.base_percent
        ));
    }
    out
}

fn profile_summary(profile: &StarterProfile) -> String {
    match *profile {
        StarterProfile::Culture {
            hydration_percent,
            levain_percent,
        } => format!(
            "levain build: {}% culture, {}% hydration",
            levain_percent, hydration_percent
        ),
        StarterProfile::PreFerment {
            starter_percent,
            hydration_percent,
        } => format!(
            "pre-ferment: {}% of flour, {}% hydration",
            starter_percent, hydration_percent
        ),
        StarterProfile::Direct => "straight dough".to_string(),
    }
}
