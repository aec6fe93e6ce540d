use anyhow::{bail, Context, Result};
use calcvis_color::{color_from_derivative, gradient, ColorScheme, CriticalPoint};
use calcvis_numeric::{MalformedPolicy, Sampler, MAX_STEPS};
use calcvis_oracle::{oracle_from_config, Analyzer, OracleConfig};
use calcvis_plot::{compose, PlotInput, Viewport, DEFAULT_STEPS};
use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::PathBuf;

mod formatting;

use formatting::{format_analysis, parse_point};

/// calcvis - plot expressions shaded by their derivative
#[derive(Parser)]
#[command(name = "calcvis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plot mathematical expressions shaded by their derivative")]
struct Cli {
    /// Oracle configuration file (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Color scheme: light or dark
    #[arg(long, global = true, default_value_t = ColorScheme::Light)]
    scheme: ColorScheme,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the analysis service for derivative, integral and critical points
    Analyze {
        expression: String,
        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sample an expression over an interval and print JSON
    Sample {
        expression: String,
        #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
        min: f64,
        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        max: f64,
        #[arg(long, default_value_t = DEFAULT_STEPS)]
        steps: usize,
        /// Emit nothing for unparseable text instead of y = 0 everywhere
        #[arg(long)]
        omit_malformed: bool,
        /// Include each sample's grid index
        #[arg(long)]
        grid: bool,
    },
    /// Print the color for a derivative value
    Color {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    /// Print the CSS background gradient for critical points
    Gradient {
        /// Critical point as x:kind, e.g. -1:max (repeatable)
        #[arg(
            long = "point",
            value_name = "X:KIND",
            value_parser = parse_point,
            allow_hyphen_values = true
        )]
        points: Vec<CriticalPoint>,
    },
    /// Analyse an expression and write the plot as SVG
    Render {
        expression: String,
        #[arg(long, short)]
        out: PathBuf,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
    },
    /// Open the desktop window
    Gui,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let scheme = cli.scheme;

    match cli.command {
        Commands::Analyze { expression, json } => {
            analyze_command(cli.config, &expression, json)
        }
        Commands::Sample {
            expression,
            min,
            max,
            steps,
            omit_malformed,
            grid,
        } => sample_command(&expression, min, max, steps, omit_malformed, grid),
        Commands::Color { value } => {
            println!("{}", color_from_derivative(value, scheme));
            Ok(())
        }
        Commands::Gradient { points } => {
            println!("{}", gradient(&points, scheme).to_css());
            Ok(())
        }
        Commands::Render {
            expression,
            out,
            width,
            height,
        } => render_command(cli.config, &expression, out, width, height, scheme),
        Commands::Gui => gui_command(cli.config, scheme),
    }
}

fn build_analyzer(config: Option<PathBuf>) -> Result<Analyzer> {
    let config = OracleConfig::load(config.as_deref()).context("failed to load configuration")?;
    Ok(Analyzer::new(oracle_from_config(&config)))
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}

fn analyze_command(config: Option<PathBuf>, expression: &str, json: bool) -> Result<()> {
    let analyzer = build_analyzer(config)?;
    let Some(result) = runtime()?.block_on(analyzer.analyze(expression)) else {
        bail!("Please enter a mathematical expression");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_analysis(&result));
    }
    Ok(())
}

fn sample_command(
    expression: &str,
    min: f64,
    max: f64,
    steps: usize,
    omit_malformed: bool,
    grid: bool,
) -> Result<()> {
    if min.is_nan() || max.is_nan() || min >= max || steps == 0 {
        bail!("need --min < --max and --steps >= 1 (got [{}, {}] with {} steps)", min, max, steps);
    }
    if steps > MAX_STEPS {
        bail!("--steps is limited to {} (got {})", MAX_STEPS, steps);
    }

    let policy = if omit_malformed {
        MalformedPolicy::Omit
    } else {
        MalformedPolicy::ZeroSentinel
    };
    let sampler = Sampler::with_policy(policy);

    let json = if grid {
        serde_json::to_string_pretty(&sampler.sample_grid(expression, min, max, steps))?
    } else {
        serde_json::to_string_pretty(&sampler.sample(expression, min, max, steps))?
    };
    println!("{}", json);
    Ok(())
}

fn render_command(
    config: Option<PathBuf>,
    expression: &str,
    out: PathBuf,
    width: f64,
    height: f64,
    scheme: ColorScheme,
) -> Result<()> {
    let analyzer = build_analyzer(config)?;
    let Some(result) = runtime()?.block_on(analyzer.analyze(expression)) else {
        bail!("Please enter a mathematical expression");
    };

    let input = PlotInput::from_analysis(&result, scheme);
    let scene = compose(&input, Viewport::new(width, height))
        .with_context(|| format!("cannot plot {:?}", expression))?;

    fs::write(&out, scene.to_svg())
        .with_context(|| format!("failed to write {}", out.display()))?;
    info!("wrote {}", out.display());
    Ok(())
}

#[cfg(feature = "gui")]
fn gui_command(config: Option<PathBuf>, scheme: ColorScheme) -> Result<()> {
    let analyzer = build_analyzer(config)?;
    calcvis_gui::run_native(analyzer, scheme)
}

#[cfg(not(feature = "gui"))]
fn gui_command(_config: Option<PathBuf>, _scheme: ColorScheme) -> Result<()> {
    bail!("calcvis was built without the `gui` feature")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rejects_bad_requests() {
        assert!(sample_command("x", 1.0, 0.0, 10, false, false).is_err());
        assert!(sample_command("x", 0.0, 1.0, 0, false, false).is_err());
        assert!(sample_command("x", 0.0, 1.0, MAX_STEPS + 1, false, false).is_err());
        assert!(sample_command("x", 0.0, 1.0, usize::MAX, false, true).is_err());
    }

    #[test]
    fn test_sample_small_grid_succeeds() {
        assert!(sample_command("x", 0.0, 1.0, 4, false, true).is_ok());
    }
}
