use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::awards::HoleAward;
use super::engine::{CommitPolicy, HoleCount, Round};
use super::player::Player;

const SUMMARY_VERSION: u32 = 1;

/// Snapshot of a round written to disk when a round is exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSummary {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub holes: HoleCount,
    pub holes_played: usize,
    pub policy: CommitPolicy,
    pub players: Vec<PlayerSummary>,
    #[serde(default)]
    pub awards: Vec<HoleAward>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    #[serde(flatten)]
    pub player: Player,
    pub strokes: Vec<u32>,
}

impl RoundSummary {
    pub fn from_round(round: &Round) -> Self {
        let players = round
            .players()
            .iter()
            .zip(round.scorecard())
            .map(|(player, strokes)| PlayerSummary {
                player: player.clone(),
                strokes: strokes.clone(),
            })
            .collect();

        Self {
            version: SUMMARY_VERSION,
            exported_at: Utc::now(),
            holes: round.hole_count(),
            holes_played: round.holes_played(),
            policy: round.policy(),
            players,
            awards: round.award_history().to_vec(),
        }
    }

    /// Players ordered by descending points, roster order on ties.
    pub fn standings(&self) -> Vec<&PlayerSummary> {
        let mut standings: Vec<&PlayerSummary> = self.players.iter().collect();
        standings.sort_by(|a, b| b.player.total_score.cmp(&a.player.total_score));
        standings
    }
}

/// Default file name for an export: `nines-<timestamp>-<millis>-<id>.json`.
/// `id` is the first eight hex digits of a v4 UUID.
pub fn summary_file_name(at: DateTime<Utc>) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("nines-{}-{}.json", at.format("%Y%m%d-%H%M%S-%3f"), &id[..8])
}

/// Resolve where an export goes: an explicit path wins, then the configured
/// export directory, then the config directory.
pub fn resolve_export_path(explicit: Option<&Path>, export_dir: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let dir = export_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(crate::config::get_config_dir);
    dir.join(summary_file_name(Utc::now()))
}

/// Write a round summary atomically, creating parent directories as needed.
pub fn save_summary(path: &Path, summary: &RoundSummary) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, summary).context("Failed to serialize round summary")?;

    file.commit()
        .with_context(|| format!("Failed to save round summary to {}", path.display()))?;

    Ok(())
}

/// Load a previously exported round summary.
pub fn load_summary(path: &Path) -> Result<RoundSummary> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open round summary at {}", path.display()))?;

    let summary: RoundSummary = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse round summary at {}", path.display()))?;

    if summary.version != SUMMARY_VERSION {
        anyhow::bail!("Unsupported round summary version: {}", summary.version);
    }

    Ok(summary)
}
