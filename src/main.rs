// algoscope: step-by-step algorithm simulator

use std::io;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use algoscope::playback::PlaybackConfig;
use algoscope::problems::{self, Problem, StepRequest};
use algoscope::step::Variant;
use algoscope::ui::App;

#[derive(Parser)]
#[command(name = "algoscope")]
#[command(about = "Generate and replay step-by-step traces of classic algorithms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every problem with a simulator
    List,

    /// Print the brute-force and optimal step lists as JSON
    Steps {
        /// Problem id or slug, e.g. `1` or `two-sum`
        problem: String,

        #[command(flatten)]
        args: InputArgs,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Replay one step list in the terminal player
    Play {
        /// Problem id or slug, e.g. `1` or `two-sum`
        problem: String,

        #[command(flatten)]
        args: InputArgs,

        /// Which step list to open with (`v` switches inside the player)
        #[arg(long, value_enum, default_value = "optimal")]
        variant: VariantArg,

        /// Milliseconds between steps while auto-playing
        #[arg(long, default_value = "1000")]
        interval_ms: u64,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Primary input; parsed as JSON when possible, else taken as a string
    #[arg(short, long)]
    input: String,

    /// Second parameter (sum, second list, row count or pattern)
    #[arg(short, long)]
    target: Option<String>,
}

impl InputArgs {
    fn request(&self, problem: Problem) -> StepRequest {
        let request = StepRequest::new(problem, parse_value(&self.input));
        match self.target.as_deref() {
            Some(target) => request.with_target(parse_value(target)),
            None => request,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Brute,
    Optimal,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Brute => Variant::Brute,
            VariantArg::Optimal => Variant::Optimal,
        }
    }
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `steps` output stays pipeable
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::List => {
            for problem in Problem::ALL {
                println!(
                    "{:>4}  {:<48} {}",
                    problem.id(),
                    problem.slug(),
                    problem.parameters()
                );
            }
        }
        Commands::Steps {
            problem,
            args,
            pretty,
        } => {
            let problem: Problem = problem.parse()?;
            let pair = problems::simulate(&args.request(problem))?;
            let json = if pretty {
                serde_json::to_string_pretty(&pair)?
            } else {
                serde_json::to_string(&pair)?
            };
            println!("{}", json);
        }
        Commands::Play {
            problem,
            args,
            variant,
            interval_ms,
        } => {
            let problem: Problem = problem.parse()?;
            let pair = problems::simulate(&args.request(problem))?;
            let config = PlaybackConfig::with_interval(Duration::from_millis(interval_ms));
            let app = App::new(problem.to_string(), pair, variant.into(), config);
            run_player(app).context("terminal player failed")?;
        }
    }

    Ok(())
}

fn run_player(mut app: App) -> io::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
