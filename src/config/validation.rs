use super::schema::Config;
use crate::round::PLAYERS_PER_ROUND;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref players) = config.players {
        if players.len() != PLAYERS_PER_ROUND {
            errors.push(format!(
                "players: expected exactly {} names, got {}",
                PLAYERS_PER_ROUND,
                players.len()
            ));
        }
        for (i, name) in players.iter().enumerate() {
            if name.trim().is_empty() {
                errors.push(format!("players[{}]: name cannot be empty", i));
            }
        }
    }

    if let Some(ref dir) = config.export_dir {
        if dir.is_file() {
            errors.push(format!(
                "export_dir: '{}' is a file, expected a directory",
                dir.display()
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
