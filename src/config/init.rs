use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, validate_config, Config};
use crate::round::{CommitPolicy, HoleCount, PLAYERS_PER_ROUND};
use crate::tui::Theme;

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

fn parse_holes(input: &str) -> Result<HoleCount, String> {
    let n: u8 = input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", input))?;
    HoleCount::try_from(n)
}

fn parse_policy(input: &str) -> Result<CommitPolicy, String> {
    match input.trim().to_lowercase().as_str() {
        "lenient" => Ok(CommitPolicy::Lenient),
        "strict" => Ok(CommitPolicy::Strict),
        other => Err(format!("expected 'lenient' or 'strict', got '{}'", other)),
    }
}

fn parse_theme(input: &str) -> Result<Theme, String> {
    match input.trim().to_lowercase().as_str() {
        "auto" => Ok(Theme::Auto),
        "dark" => Ok(Theme::Dark),
        "light" => Ok(Theme::Light),
        other => Err(format!("expected auto, dark or light, got '{}'", other)),
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("Nines Configuration Wizard");
    println!("==========================");
    println!();
    println!("Nines is played by exactly three golfers. Each hole hands out 9 points:");
    println!("  no ties           5 / 3 / 1");
    println!("  two tied low      4 / 4 / 1");
    println!("  two tied high     5 / 2 / 2");
    println!("  all tied          3 / 3 / 3");
    println!();

    let holes = loop {
        let input = prompt_with_default("Default round length (9 or 18)", "9")?;
        match parse_holes(&input) {
            Ok(h) => break h,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    println!();
    println!("When a hole is committed without strokes for every player:");
    println!("  lenient -- keep what was entered and move on");
    println!("  strict  -- refuse the hole until all three have strokes");
    let commit_policy = loop {
        let input = prompt_with_default("Commit policy", "lenient")?;
        match parse_policy(&input) {
            Ok(p) => break p,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    println!();
    let players = if prompt_yes_no("Save a default roster?", false)? {
        let mut names = Vec::with_capacity(PLAYERS_PER_ROUND);
        while names.len() < PLAYERS_PER_ROUND {
            let name = prompt(&format!("  Player {} name: ", names.len() + 1))?;
            if name.is_empty() {
                println!("  Name is required.");
                continue;
            }
            names.push(name);
        }
        Some(names)
    } else {
        None
    };

    println!();
    let theme = loop {
        let input = prompt_with_default("Color theme (auto, dark, light)", "auto")?;
        match parse_theme(&input) {
            Ok(t) => break t,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    println!();
    let export_input = prompt_with_default("Directory for exported rounds (empty for default)", "")?;
    let export_dir = if export_input.is_empty() {
        None
    } else {
        Some(PathBuf::from(export_input))
    };

    let config = Config {
        holes,
        commit_policy,
        players,
        theme,
        export_dir,
    };

    if let Err(errors) = validate_config(&config) {
        for error in errors {
            println!("  - {}", error);
        }
        anyhow::bail!("Generated config is invalid");
    }

    // Config path
    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `nines` to start a round.");

    Ok(())
}
