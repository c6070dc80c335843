use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use simanfor_report::{
    catalog::VariableCatalog,
    config::LayoutConfig,
    io::{self, CsvFormat, ExcelFormat, JsonFormat, ReportWriter},
    labels::{LabelTable, Locale, Namespace, TEMPLATE_ASSET},
    layout::build_report,
    visualization::print_report_preview,
};

#[derive(Parser)]
#[command(
    name = "simanfor-report",
    about = "SIMANFOR report layout engine - renders simulation reports from a context file",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a report context to a spreadsheet, CSV grids or JSON plans
    Render {
        /// Path to the report context (JSON)
        #[arg(short, long)]
        context: PathBuf,

        /// Output path: .xlsx, .json, or a directory for CSV grids
        #[arg(short, long)]
        output: PathBuf,

        /// Layout configuration file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Variable catalog override (TOML)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Report locale, overrides the configuration
        #[arg(short, long)]
        locale: Option<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Preview the planned sheets in the terminal
    Preview {
        /// Path to the report context (JSON)
        #[arg(short, long)]
        context: PathBuf,

        /// Layout configuration file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Report locale, overrides the configuration
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Dump a locale's label table, or export the blank authoring template
    Labels {
        /// Locale to dump
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Restrict the dump to one namespace
        #[arg(short, long)]
        namespace: Option<String>,

        /// Print the blank translation template instead
        #[arg(long)]
        template: bool,
    },

    /// Show the variable catalog group cardinalities
    Catalog {
        /// Variable catalog override (TOML)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>, locale: Option<&str>) -> Result<LayoutConfig> {
    let mut config = match path {
        Some(p) => LayoutConfig::from_file(p)?,
        None => LayoutConfig::default(),
    };
    if let Some(locale) = locale {
        config.locale = locale.parse::<Locale>()?;
    }
    Ok(config)
}

fn load_catalog(path: Option<&PathBuf>) -> Result<VariableCatalog> {
    match path {
        Some(p) => {
            let source = std::fs::read_to_string(p)?;
            Ok(VariableCatalog::from_toml(&source)?)
        }
        None => Ok(VariableCatalog::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            context,
            output,
            config,
            catalog,
            locale,
            pretty,
        } => {
            let config = load_config(config.as_ref(), locale.as_deref())?;
            let catalog = load_catalog(catalog.as_ref())?;
            let labels = LabelTable::load(config.locale)?;
            let ctx = io::read_context(&context)?;
            let report = build_report(&ctx, &labels, &catalog, &config)?;

            let ext = output
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();
            match ext.as_str() {
                "xlsx" => ExcelFormat {
                    logo: config.logo.clone(),
                }
                .write(&report, &output)?,
                "json" => JsonFormat { pretty }.write(&report, &output)?,
                "" => CsvFormat {
                    decimals: config.decimals,
                }
                .write(&report, &output)?,
                _ => anyhow::bail!(
                    "Unsupported output: .{ext}. Use .xlsx, .json, or a directory for CSV"
                ),
            }

            println!(
                "{} Rendered plot {} -> {}",
                "Success:".green().bold(),
                ctx.plot_id,
                output.display()
            );
        }

        Commands::Preview {
            context,
            config,
            locale,
        } => {
            let config = load_config(config.as_ref(), locale.as_deref())?;
            let labels = LabelTable::load(config.locale)?;
            let ctx = io::read_context(&context)?;
            let report = build_report(&ctx, &labels, &VariableCatalog::default(), &config)?;
            print_report_preview(&report, config.decimals);
        }

        Commands::Labels {
            locale,
            namespace,
            template,
        } => {
            if template {
                print!("{TEMPLATE_ASSET}");
                return Ok(());
            }

            let locale = locale.parse::<Locale>()?;
            let labels = LabelTable::load(locale)?;
            let namespaces: Vec<Namespace> = match namespace.as_deref() {
                Some(name) => {
                    let ns = Namespace::from_table_name(name).ok_or_else(|| {
                        anyhow::anyhow!("Unknown namespace: {name}")
                    })?;
                    vec![ns]
                }
                None => Namespace::ALL.to_vec(),
            };

            for ns in namespaces {
                println!("\n{}", format!("[{ns}]").bold().cyan());
                for (key, value) in labels.namespace_entries(ns) {
                    println!("  {key} = {value}");
                }
            }
        }

        Commands::Catalog { catalog } => {
            let catalog = load_catalog(catalog.as_ref())?;
            println!("\n{}", "Variable catalog".bold().cyan());
            println!("{}", "=".repeat(40));
            println!("  Area:       {}", catalog.area.len());
            println!("  Model:      {}", catalog.model.len());
            println!("  Scenario:   {}", catalog.scenario.len());
            println!("  Summary:    {}", catalog.summary.len());
            println!("  Cuts:       {}", catalog.cuts.len());
            println!("  Plot:       {}", catalog.plot.len());
            println!("  Tree:       {}", catalog.tree.len());
            println!("  Metadata:   {}", catalog.metadata.len());
            println!("  Warnings:   {}", catalog.warnings.len());
        }
    }

    Ok(())
}
