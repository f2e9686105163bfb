mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use config::{ConfigMerger, OutputFormat, RecipeOverrides};
use doughcalc_domain::{compute_recipe, starter_catalog, yeast_catalog};
use doughcalc_render::{
    render_recipe_md, render_recipe_text, render_starters_md, render_starters_text,
};
use doughcalc_types::{Starter, Yeast};
use fs_err as fs;
use std::ops::RangeInclusive;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "doughcalc",
    version,
    about = "Baker's-percentage calculator for pizza dough."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a recipe: totals, build steps and the final mix.
    Recipe(RecipeArgs),
    /// List the available starters and yeasts with their constants.
    Starters(StartersArgs),
}

#[derive(Debug, Parser)]
struct RecipeArgs {
    /// Config file (default: ./doughcalc.toml if present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Oven temperature in °F (0-1000).
    #[arg(long, value_parser = parse_oven_temp)]
    oven_temp: Option<f64>,

    /// Number of pies (0-24).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=24))]
    pie_count: Option<u32>,

    /// Target pie size in inches (8-24).
    #[arg(long, value_parser = parse_pie_size)]
    pie_size: Option<f64>,

    /// Starter: levain, poolish, biga or none.
    #[arg(long)]
    starter: Option<Starter>,

    /// Yeast: active, instant, fresh or levain-culture. Ignored with a levain starter.
    #[arg(long)]
    yeast: Option<Yeast>,

    /// Nights of cold aging after balling (0-2).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=2))]
    nights: Option<u32>,

    /// Use a little diastatic malt.
    #[arg(long, overrides_with = "no_malt")]
    malt: bool,

    /// Leave the malt out.
    #[arg(long, overrides_with = "malt")]
    no_malt: bool,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write output to this file instead of stdout.
    #[arg(long)]
    out: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct StartersArgs {
    /// Output format (text, markdown, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Recipe(args) => cmd_recipe(args),
        Command::Starters(args) => cmd_starters(args),
    }
}

fn cmd_recipe(args: RecipeArgs) -> anyhow::Result<()> {
    let cwd = Utf8PathBuf::from(".");
    let file_config = config::load_or_default(args.config.as_deref(), &cwd)
        .context("load doughcalc.toml config")?;

    let use_malt = match (args.malt, args.no_malt) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let overrides = RecipeOverrides {
        oven_temp: args.oven_temp,
        pie_count: args.pie_count,
        pie_size: args.pie_size,
        starter: args.starter,
        yeast: args.yeast,
        nights_aging: args.nights,
        use_malt,
        format: args.format,
    };
    let merged = ConfigMerger::new(file_config)
        .merge_recipe_args(&overrides)
        .context("resolve recipe settings")?;

    debug!("merged config: inputs={:?}, format={:?}", merged.inputs, merged.format);

    let sections = compute_recipe(&merged.inputs);
    let rendered = match merged.format {
        OutputFormat::Text => render_recipe_text(&sections),
        OutputFormat::Markdown => render_recipe_md(&sections),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&sections).context("serialize recipe")?;
            json.push('\n');
            json
        }
    };

    emit(&rendered, args.out.as_deref())
}

fn cmd_starters(args: StartersArgs) -> anyhow::Result<()> {
    let starters = starter_catalog();
    let yeasts = yeast_catalog();

    let rendered = match args.format {
        OutputFormat::Text => render_starters_text(&starters, &yeasts),
        OutputFormat::Markdown => render_starters_md(&starters, &yeasts),
        OutputFormat::Json => {
            let value = serde_json::json!({ "starters": starters, "yeasts": yeasts });
            let mut json = serde_json::to_string_pretty(&value).context("serialize catalog")?;
            json.push('\n');
            json
        }
    };

    emit(&rendered, None)
}

fn emit(rendered: &str, out: Option<&Utf8Path>) -> anyhow::Result<()> {
    let Some(path) = out else {
        print!("{rendered}");
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
    }
    fs::write(path, rendered).with_context(|| format!("write {}", path))?;
    info!("wrote {}", path);
    Ok(())
}

fn parse_oven_temp(s: &str) -> Result<f64, String> {
    parse_bounded(s, config::OVEN_TEMP_RANGE)
}

fn parse_pie_size(s: &str) -> Result<f64, String> {
    parse_bounded(s, config::PIE_SIZE_RANGE)
}

fn parse_bounded(s: &str, range: RangeInclusive<f64>) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !range.contains(&value) {
        return Err(format!(
            "{} is not in {}..={}",
            value,
            range.start(),
            range.end()
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bounded_parse_accepts_edges_and_rejects_outside() {
        assert_eq!(parse_oven_temp("0"), Ok(0.0));
        assert_eq!(parse_oven_temp("1000"), Ok(1000.0));
        assert!(parse_oven_temp("1000.5").is_err());
        assert!(parse_pie_size("7.9").is_err());
        assert!(parse_pie_size("NaN").is_err());
        assert!(parse_pie_size("twelve").unwrap_err().contains("not a number"));
    }

    #[test]
    fn malt_flags_resolve_last_one_wins() {
        let cli = Cli::try_parse_from(["doughcalc", "recipe", "--malt", "--no-malt"]).unwrap();
        let Command::Recipe(args) = cli.cmd else {
            panic!("expected recipe");
        };
        assert!(!args.malt);
        assert!(args.no_malt);
    }

    #[test]
    fn starter_and_yeast_parse_from_flags() {
        let cli = Cli::try_parse_from([
            "doughcalc",
            "recipe",
            "--starter",
            "biga",
            "--yeast",
            "levain-culture",
        ])
        .unwrap();
        let Command::Recipe(args) = cli.cmd else {
            panic!("expected recipe");
        };
        assert_eq!(args.starter, Some(Starter::Biga));
        assert_eq!(args.yeast, Some(Yeast::LevainCulture));
    }
}
