use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::round::{CommitPolicy, HoleCount};
use crate::tui::Theme;

/// User configuration, read from `~/.config/nines/config.yaml`.
///
/// Example YAML:
/// ```yaml
/// holes: 18
/// commit_policy: strict
/// players: ["Matteo", "Mo", "Sam"]
/// theme: dark
/// export_dir: ~/golf/rounds
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Round length used when none is given on the command line
    #[serde(default)]
    pub holes: HoleCount,

    /// How a hole with missing strokes is committed
    #[serde(default)]
    pub commit_policy: CommitPolicy,

    /// Default roster, pre-filled on the setup screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<String>>,

    #[serde(default)]
    pub theme: Theme,

    /// Where finished rounds are exported (defaults to the config directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}
