use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use nines::round::{CommitPolicy, HoleCount, HoleStrokes, Round, RoundSummary, PLAYERS_PER_ROUND};

const EXIT_SUCCESS: i32 = 0;
const EXIT_ROUND: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum OutputFormat {
    /// Scorecard grid followed by the leaderboard
    Table,
    /// Tab-separated: name, points, strokes, hole 1..N
    Tsv,
    /// Full round summary as JSON
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a round interactively (default if no subcommand)
    Play {
        /// Round length, 9 or 18 (defaults to config)
        #[arg(long, value_parser = parse_holes)]
        holes: Option<HoleCount>,

        /// Refuse holes that are missing a player's strokes
        #[arg(long)]
        strict: bool,
    },
    /// Score a round from the command line
    Score {
        /// Exactly three comma-separated player names, e.g. "Ann,Bo,Cy"
        #[arg(long, value_delimiter = ',')]
        players: Vec<String>,

        /// Round length, 9 or 18 (defaults to config)
        #[arg(long, value_parser = parse_holes)]
        holes: Option<HoleCount>,

        /// Strokes for one hole in player order, e.g. "4,5,6". Repeat per hole.
        /// Use "-" for a player with no score.
        #[arg(long = "hole", value_name = "STROKES")]
        hole: Vec<String>,

        /// Refuse holes that are missing a player's strokes
        #[arg(long)]
        strict: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write the round summary to this JSON file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Print a previously exported round
    Show {
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "nines")]
#[command(about = "Scorekeeper for the three-player Nines golf game", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/nines/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn parse_holes(s: &str) -> Result<HoleCount, String> {
    let n: u8 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    HoleCount::try_from(n)
}

/// Parse one hole's strokes in roster order. There must be one field per
/// player. "-" or an empty field means no score for that player; anything
/// else must be a whole number >= 1.
fn parse_hole_strokes(s: &str) -> Result<Vec<Option<u32>>, String> {
    let fields: Vec<&str> = s.split(',').collect();
    if fields.len() != PLAYERS_PER_ROUND {
        return Err(format!(
            "expected {} comma-separated fields, got {} (use \"-\" for a missing score)",
            PLAYERS_PER_ROUND,
            fields.len()
        ));
    }

    fields
        .into_iter()
        .map(|field| {
            let field = field.trim();
            if field.is_empty() || field == "-" {
                return Ok(None);
            }
            match field.parse::<u32>() {
                Ok(n) if n >= 1 => Ok(Some(n)),
                _ => Err(format!("invalid stroke count '{}'", field)),
            }
        })
        .collect()
}

fn strokes_for_round(round: &Round, parsed: &[Option<u32>]) -> HoleStrokes {
    round
        .players()
        .iter()
        .zip(parsed)
        .filter_map(|(p, &s)| s.map(|s| (p.id, s)))
        .collect()
}

fn print_summary(summary: &RoundSummary, format: OutputFormat) {
    let rows = nines::output::rows_from_summary(summary);
    match format {
        OutputFormat::Table => {
            let use_colors = nines::output::should_use_colors();
            println!("{}", nines::output::format_scorecard(&rows, use_colors));
            println!();
            println!("{}", nines::output::format_leaderboard(&rows, use_colors));
        }
        OutputFormat::Tsv => println!("{}", nines::output::format_tsv(&rows)),
        OutputFormat::Json => match serde_json::to_string_pretty(summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize round: {}", e);
                std::process::exit(EXIT_IO);
            }
        },
    }
}

/// Load and validate config, exiting with `EXIT_CONFIG` on any problem.
fn load_validated_config(path: Option<PathBuf>, verbose: bool) -> nines::config::Config {
    let config = match nines::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = nines::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if verbose {
        eprintln!(
            "Config: {} holes, {} commit, theme {:?}",
            config.holes.get(),
            config.commit_policy,
            config.theme
        );
    }

    config
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        holes: None,
        strict: false,
    });
    let config_path = cli.config.map(PathBuf::from);

    match command {
        Commands::Init => {
            if let Err(e) = nines::config::init::run_init_wizard(config_path) {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_IO);
            }
        }
        Commands::Play { holes, strict } => {
            let mut config = load_validated_config(config_path, cli.verbose);
            if let Some(holes) = holes {
                config.holes = holes;
            }
            if strict {
                config.commit_policy = CommitPolicy::Strict;
            }

            let colors = nines::tui::resolve_theme(config.theme);
            let app = nines::tui::App::new(&config, colors, cli.verbose);
            if let Err(e) = nines::tui::run_tui(app).await {
                eprintln!("Terminal error: {:#}", e);
                std::process::exit(EXIT_IO);
            }
        }
        Commands::Score {
            players,
            holes,
            hole,
            strict,
            format,
            export,
        } => {
            let config = load_validated_config(config_path, cli.verbose);
            let holes = holes.unwrap_or(config.holes);
            let policy = if strict {
                CommitPolicy::Strict
            } else {
                config.commit_policy
            };

            let mut round = match Round::from_names(players, holes) {
                Ok(r) => r.with_policy(policy),
                Err(e) => {
                    eprintln!("Round error: {}", e);
                    std::process::exit(EXIT_ROUND);
                }
            };

            for (i, raw) in hole.iter().enumerate() {
                let parsed = match parse_hole_strokes(raw) {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("Hole {}: {}", i + 1, e);
                        std::process::exit(EXIT_ROUND);
                    }
                };
                let strokes = strokes_for_round(&round, &parsed);
                let current = round.current_hole();
                match round.commit_hole(&strokes) {
                    Ok(Some(award)) => {
                        if cli.verbose {
                            let rows = nines::output::rows_from_round(&round);
                            eprintln!("{}", nines::output::format_award(&award, &rows));
                        }
                    }
                    Ok(None) => {
                        eprintln!("Hole {}: recorded without points (missing strokes)", current);
                    }
                    Err(e) => {
                        eprintln!("Hole {}: {}", current, e);
                        std::process::exit(EXIT_ROUND);
                    }
                }
            }

            let summary = RoundSummary::from_round(&round);
            print_summary(&summary, format);

            if let Some(path) = export {
                if let Err(e) = nines::round::save_summary(&path, &summary) {
                    eprintln!("Export failed: {:#}", e);
                    std::process::exit(EXIT_IO);
                }
                if cli.verbose {
                    eprintln!("Round exported to {}", path.display());
                }
            }
        }
        Commands::Show { file, format } => {
            let summary = match nines::round::load_summary(&file) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("{:#}", e);
                    std::process::exit(EXIT_IO);
                }
            };
            print_summary(&summary, format);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
