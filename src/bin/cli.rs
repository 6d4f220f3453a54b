//! Planboard CLI
//!
//! Command-line interface for Planboard:
//! - Render a dashboard to a static HTML file
//! - Inspect how each widget of a plan dispatches
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use planboard::api::dto::WidgetSummary;
use planboard::api::AppState;
use planboard::config::{generate_default_config, Config};
use planboard::loader::{LoadState, ReportParams};
use planboard::plan::plan_from_file;
use planboard::render::render_document;
use planboard::widget::RenderOptions;

#[derive(Parser)]
#[command(name = "planboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render report dashboards described by a JSON plan")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Report service URL (overrides config)
    #[arg(long, global = true)]
    pub source_url: Option<String>,
}

/// Where the plan comes from; the fixture plan when none is given
#[derive(Args)]
pub struct PlanArgs {
    /// Report to fetch from the report service
    #[arg(long, conflicts_with_all = ["plan_file", "url"])]
    pub report_id: Option<String>,

    /// Read the plan from a local JSON file
    #[arg(long, conflicts_with = "url")]
    pub plan_file: Option<PathBuf>,

    /// Page address to take `report_id` / `print_mode` from
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard to HTML
    Render {
        #[command(flatten)]
        plan: PlanArgs,
        /// Expand details sections and add the print footer
        #[arg(long)]
        print: bool,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the widgets of a plan and how each one renders
    Inspect {
        #[command(flatten)]
        plan: PlanArgs,
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.source_url {
        config.source.base_url = url.clone();
    }
    planboard::logging::init_stderr(&config.logging);

    match cli.command {
        Commands::Render {
            plan,
            print,
            output,
        } => {
            let (state, options) = load(&config, &plan, print).await?;
            let document = render_document(&state, &options);
            write_output(output.as_deref(), &document)?;

            if let LoadState::Failed(message) = &state {
                bail!("Failed to load dashboard: {}", message);
            }
        }

        Commands::Inspect { plan, format } => {
            let (state, options) = load(&config, &plan, false).await?;
            let plan = match &state {
                LoadState::Ready(plan) => Arc::clone(plan),
                LoadState::Failed(message) => bail!("Failed to load dashboard: {}", message),
                LoadState::Pending => bail!("Dashboard load did not settle"),
            };

            let widgets: Vec<WidgetSummary> = plan
                .dashboard_plan
                .iter()
                .map(|descriptor| WidgetSummary::from_descriptor(descriptor, &options))
                .collect();

            match format.as_str() {
                "json" => {
                    let report = serde_json::json!({
                        "global_title": plan.global_title,
                        "global_subtitle": plan.global_subtitle,
                        "widgets": widgets,
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                "table" => print_table(&plan.global_title, &widgets),
                other => bail!("Unknown format: {}. Use: table, json", other),
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Settle the plan the way a page display would
async fn load(
    config: &Config,
    args: &PlanArgs,
    print: bool,
) -> anyhow::Result<(LoadState, RenderOptions)> {
    if let Some(path) = &args.plan_file {
        let state = match plan_from_file(path) {
            Ok(plan) => LoadState::Ready(Arc::new(plan)),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        return Ok((state, RenderOptions { print_mode: print }));
    }

    let mut params = match &args.url {
        Some(address) => ReportParams::from_address(address),
        None => ReportParams::default(),
    };
    if let Some(report_id) = &args.report_id {
        params.report_id = Some(report_id.clone());
    }
    if print {
        params = params.with_print_mode(true);
    }

    let app = AppState::from_config(config.clone()).context("Failed to set up plan source")?;
    let state = app.loader().load(&params).await;

    Ok((state, params.render_options()))
}

fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {:?}", path))?;
            eprintln!("Dashboard written to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn print_table(title: &str, widgets: &[WidgetSummary]) {
    println!("{}", title);
    println!();

    if widgets.is_empty() {
        println!("No widgets in plan");
        return;
    }

    println!(
        "{:<24} {:<12} {:>4}  {:<10} {}",
        "Widget", "Type", "Span", "Outcome", "Detail"
    );
    println!("{}", "-".repeat(80));

    for widget in widgets {
        println!(
            "{:<24} {:<12} {:>4}  {:<10} {}",
            widget.widget_id,
            widget.component_type.as_deref().unwrap_or("-"),
            widget.span,
            widget.outcome,
            widget.detail
        );
    }
}
