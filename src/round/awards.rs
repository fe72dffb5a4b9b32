//! Point table for a single Nines hole.
//!
//! Three players are ranked by stroke count (fewer is better). Equal stroke
//! counts are ties, never ordered against each other, and tied players always
//! receive the same points. Every outcome hands out 9 points in total.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Points handed out on every hole, whatever the outcome.
pub const POINTS_PER_HOLE: u32 = 9;

/// The four mutually exclusive ways three stroke counts can rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// low == mid == high
    AllTied,
    /// low == mid < high
    LowTied,
    /// low < mid == high
    HighTied,
    /// low < mid < high
    NoTies,
}

impl Outcome {
    /// Classify three stroke counts already sorted ascending.
    /// Checked in priority order: all tied, low pair, high pair, none.
    pub fn classify(low: u32, mid: u32, high: u32) -> Self {
        debug_assert!(low <= mid && mid <= high);
        if low == mid && mid == high {
            Outcome::AllTied
        } else if low == mid {
            Outcome::LowTied
        } else if mid == high {
            Outcome::HighTied
        } else {
            Outcome::NoTies
        }
    }

    /// Points for the lowest, middle and highest ranked positions.
    pub fn points(&self) -> [u32; 3] {
        match self {
            Outcome::AllTied => [3, 3, 3],
            Outcome::LowTied => [4, 4, 1],
            Outcome::HighTied => [5, 2, 2],
            Outcome::NoTies => [5, 3, 1],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::AllTied => "all tied",
            Outcome::LowTied => "low tie",
            Outcome::HighTied => "high tie",
            Outcome::NoTies => "no ties",
        }
    }
}

/// One player's line in a hole award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardLine {
    pub player: PlayerId,
    pub strokes: u32,
    pub points: u32,
}

/// Result of scoring one hole, lines ordered from fewest to most strokes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleAward {
    /// Hole number, set when the award came from a full hole submission.
    #[serde(default)]
    pub hole: Option<usize>,
    pub outcome: Outcome,
    pub lines: Vec<AwardLine>,
}

impl HoleAward {
    pub fn points_for(&self, player: PlayerId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.player == player)
            .map(|line| line.points)
    }

    pub fn total_points(&self) -> u32 {
        self.lines.iter().map(|line| line.points).sum()
    }
}

/// Rank three players' strokes and compute the points each one earns.
///
/// Input order does not affect who gets what: the sort is stable, so
/// players with equal strokes keep input order, but they land in positions
/// that the point table always pays identically.
pub fn award_hole(entries: [(PlayerId, u32); 3]) -> HoleAward {
    let mut ranked = entries;
    ranked.sort_by_key(|(_, strokes)| *strokes);

    let outcome = Outcome::classify(ranked[0].1, ranked[1].1, ranked[2].1);
    let points = outcome.points();

    let lines = ranked
        .iter()
        .zip(points)
        .map(|(&(player, strokes), points)| AwardLine {
            player,
            strokes,
            points,
        })
        .collect();

    HoleAward {
        hole: None,
        outcome,
        lines,
    }
}
