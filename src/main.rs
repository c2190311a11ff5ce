//! fo2dmg - Command line entry point
//!
//! Loads the mod data document, then answers damage queries: a single
//! computation, a weapon x ammo table for one mod, or one weapon compared
//! across every mod.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use fo2dmg::analysis::{chart_title, damage_table, mod_comparison, DamageMode, DamageSeries, Scenario};
use fo2dmg::core::error::{DamageError, Result};
use fo2dmg::core::ModRegistry;
use fo2dmg::data::ModData;
use fo2dmg::formula::{damage_type, resolve_resistance, DamageRange};

/// Fallout 2 damage calculator
#[derive(Parser, Debug)]
#[command(name = "fo2dmg")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Mod data document (JSON) produced by the data build
    #[arg(long, default_value = "data.json", global = true)]
    data: PathBuf,

    /// Mod registry (TOML); the built-in registry is used when omitted
    #[arg(long, global = true)]
    mods: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List configured mods and their formulas
    Mods,

    /// Damage of one weapon + ammo against one armor
    Damage {
        #[arg(long = "mod", default_value = "vanilla")]
        mod_id: String,
        #[arg(long)]
        weapon: String,
        #[arg(long)]
        ammo: String,
        #[arg(long)]
        armor: String,
        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Every weapon + compatible ammo of a mod against the armor list
    Table {
        #[arg(long = "mod", default_value = "vanilla")]
        mod_id: String,
        /// Only weapons of this caliber
        #[arg(long)]
        caliber: Option<String>,
        /// average, min, max or range
        #[arg(long, default_value = "range")]
        mode: DamageMode,
        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// One weapon + ammo across every mod
    Compare {
        #[arg(long)]
        weapon: String,
        #[arg(long)]
        ammo: String,
        /// average, min, max or range
        #[arg(long, default_value = "average")]
        mode: DamageMode,
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct ScenarioArgs {
    /// Fire a burst (burst-capable weapons only)
    #[arg(long)]
    burst: bool,
    /// Every burst round lands
    #[arg(long)]
    point_blank: bool,
    #[arg(long)]
    critical: bool,
    /// Bonus Ranged Damage per bullet
    #[arg(long, default_value_t = 0)]
    ranged_bonus: i32,
    /// Sniper perk with 10 Luck
    #[arg(long)]
    sniper_luck: bool,
}

impl From<ScenarioArgs> for Scenario {
    fn from(args: ScenarioArgs) -> Self {
        Scenario {
            burst: args.burst,
            point_blank: args.point_blank,
            critical: args.critical,
            ranged_bonus: args.ranged_bonus,
            sniper_luck: args.sniper_luck,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON output of the `damage` command
#[derive(Serialize)]
struct DamageReport<'a> {
    formula: &'static str,
    weapon: &'a str,
    ammo: &'a str,
    armor: &'a str,
    damage_type: String,
    dr: i32,
    dt: i32,
    range: DamageRange,
    text: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` when set and valid, `info` otherwise
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn run(cli: Cli) -> Result<()> {
    let registry = match &cli.mods {
        Some(path) => ModRegistry::load(path)?,
        None => ModRegistry::builtin(),
    };

    if let Commands::Mods = cli.command {
        return print_mods(&registry, cli.format);
    }

    let data = ModData::load(&cli.data)?;

    match cli.command {
        Commands::Mods => Ok(()),
        Commands::Damage {
            mod_id,
            weapon,
            ammo,
            armor,
            scenario,
        } => {
            let config = registry.require(&mod_id)?;
            let tables = data.require(&mod_id)?;
            let weapon = tables
                .find_weapon(&weapon)
                .ok_or_else(|| DamageError::UnknownWeapon {
                    mod_id: mod_id.clone(),
                    weapon: weapon.clone(),
                })?;
            let ammo = tables
                .ammo
                .iter()
                .find(|a| a.name == ammo)
                .ok_or_else(|| DamageError::UnknownAmmo {
                    mod_id: mod_id.clone(),
                    ammo: ammo.clone(),
                    caliber: weapon.caliber.clone(),
                })?;
            if ammo.caliber != weapon.caliber {
                return Err(DamageError::CaliberMismatch {
                    weapon: weapon.caliber.clone(),
                    ammo: ammo.caliber.clone(),
                });
            }
            let reference = data
                .vanilla()?
                .find_armor(&armor)
                .or_else(|| tables.find_armor(&armor))
                .ok_or_else(|| DamageError::InvalidConfig(format!("unknown armor '{}'", armor)))?;
            let armor = tables.armor_or(reference);

            let formula = config.formula();
            let attack = Scenario::from(scenario).attack_for(weapon);
            let range = formula.evaluate(weapon, ammo, armor, &attack)?;
            let resistance = resolve_resistance(armor, weapon, ammo);

            match cli.format {
                OutputFormat::Text => println!("{}", range),
                OutputFormat::Json => {
                    let report = DamageReport {
                        formula: formula.id(),
                        weapon: &weapon.name,
                        ammo: &ammo.name,
                        armor: &armor.name,
                        damage_type: damage_type(weapon, ammo).to_string(),
                        dr: resistance.dr,
                        dt: resistance.dt,
                        range,
                        text: range.to_string(),
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
            Ok(())
        }
        Commands::Table {
            mod_id,
            caliber,
            mode,
            scenario,
        } => {
            let scenario = Scenario::from(scenario);
            let series = damage_table(&data, &registry, &mod_id, caliber.as_deref(), &scenario)?;
            let config = registry.require(&mod_id)?;
            let base = match &caliber {
                Some(c) => format!("{} {} weapons", config.name, c),
                None => format!("{} weapons", config.name),
            };
            print_series(&chart_title(&base, mode, &scenario), &series, mode, cli.format)
        }
        Commands::Compare {
            weapon,
            ammo,
            mode,
            scenario,
        } => {
            let scenario = Scenario::from(scenario);
            let record = data
                .vanilla()?
                .find_weapon(&weapon)
                .ok_or_else(|| DamageError::UnknownWeapon {
                    mod_id: "vanilla".into(),
                    weapon: weapon.clone(),
                })?;
            let series = mod_comparison(&data, &registry, record, &ammo, &scenario)?;
            let base = format!("{} + {}", weapon, ammo);
            print_series(&chart_title(&base, mode, &scenario), &series, mode, cli.format)
        }
    }
}

fn print_mods(registry: &ModRegistry, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let ordered: Vec<_> = registry.ordered().collect();
            println!("{}", serde_json::to_string_pretty(&ordered)?);
        }
        OutputFormat::Text => {
            for config in registry.ordered() {
                println!(
                    "{:<10} {:<10} {:<10} {}",
                    config.id,
                    config.name,
                    config.formula().id(),
                    config.description
                );
            }
        }
    }
    Ok(())
}

fn print_series(
    title: &str,
    series: &[DamageSeries],
    mode: DamageMode,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(series)?);
        return Ok(());
    }

    println!("{}", title);
    let Some(first) = series.first() else {
        println!("(no matching weapons)");
        return Ok(());
    };

    let label_width = series.iter().map(|s| s.label.len()).max().unwrap_or(0);
    let header: Vec<String> = first
        .points
        .iter()
        .map(|p| format!("{:>12}", truncate(&p.armor, 12)))
        .collect();
    println!("{:<width$} {}", "", header.join(""), width = label_width);

    for line in series {
        let cells: Vec<String> = line
            .points
            .iter()
            .map(|p| format!("{:>12}", mode.render(&p.range)))
            .collect();
        println!("{:<width$} {}", line.label, cells.join(""), width = label_width);
    }
    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
