use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::round::{HoleAward, PlayerId, Round, RoundSummary};

/// One player's line on a printed scorecard.
pub struct ScorecardRow<'a> {
    pub id: PlayerId,
    pub name: &'a str,
    pub strokes: &'a [u32],
    pub total_strokes: u32,
    pub total_score: u32,
}

/// Rows for a live round, in roster order.
pub fn rows_from_round(round: &Round) -> Vec<ScorecardRow<'_>> {
    round
        .players()
        .iter()
        .zip(round.scorecard())
        .map(|(p, strokes)| ScorecardRow {
            id: p.id,
            name: &p.name,
            strokes,
            total_strokes: p.total_strokes,
            total_score: p.total_score,
        })
        .collect()
}

/// Rows for an exported round, in roster order.
pub fn rows_from_summary(summary: &RoundSummary) -> Vec<ScorecardRow<'_>> {
    summary
        .players
        .iter()
        .map(|s| ScorecardRow {
            id: s.player.id,
            name: &s.player.name,
            strokes: &s.strokes,
            total_strokes: s.player.total_strokes,
            total_score: s.player.total_score,
        })
        .collect()
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
pub fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// A scorecard cell: unplayed holes (0) show as "-"
pub fn format_strokes(strokes: u32) -> String {
    if strokes == 0 {
        "-".to_string()
    } else {
        strokes.to_string()
    }
}

/// Format the per-hole grid: one header line, one line per player.
/// Columns: name, hole 1..N, total strokes, points.
pub fn format_scorecard(rows: &[ScorecardRow], use_colors: bool) -> String {
    let holes = rows.iter().map(|r| r.strokes.len()).max().unwrap_or(0);

    // Fixed part: holes at 3 chars each, "  Tot" and "  Pts"
    let fixed_width = holes * 3 + 10;
    let longest = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let name_width = match get_terminal_width() {
        Some(width) if width > fixed_width + 6 => longest.min(width - fixed_width).max(6),
        Some(_) => 6,
        None => longest.max(6),
    };

    let mut header = format!("{:<width$}", "Player", width = name_width);
    for hole in 1..=holes {
        header.push_str(&format!("{:>3}", hole));
    }
    header.push_str("  Tot  Pts");

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });

    for row in rows {
        let name = truncate_name(row.name, name_width);
        let name = format!("{:<width$}", name, width = name_width);
        let cells: String = row
            .strokes
            .iter()
            .map(|&s| format!("{:>3}", format_strokes(s)))
            .collect();
        let totals = format!("  {:>3}  {:>3}", row.total_strokes, row.total_score);

        if use_colors {
            lines.push(format!("{}{}{}", name.cyan(), cells, totals.bold()));
        } else {
            lines.push(format!("{}{}{}", name, cells, totals));
        }
    }

    lines.join("\n")
}

/// Format standings sorted by points (descending), roster order on ties.
/// Format: " 1. {name}  {points} pts  {strokes} strokes"
pub fn format_leaderboard(rows: &[ScorecardRow], use_colors: bool) -> String {
    let mut ranked: Vec<&ScorecardRow> = rows.iter().collect();
    ranked.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    let name_width = ranked
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);

    ranked
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let index_str = format!("{:>2}.", idx + 1);
            let name = format!("{:<width$}", row.name, width = name_width);
            let points = format!("{:>3} pts", row.total_score);
            let strokes = format!("{} strokes", row.total_strokes);

            if use_colors {
                format!(
                    "{} {}  {}  {}",
                    index_str.dimmed(),
                    name,
                    points.bold(),
                    strokes.dimmed()
                )
            } else {
                format!("{} {}  {}  {}", index_str, name, points, strokes)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a hole's award on one line, e.g. "Hole 3 (low tie): Ann +4, Bo +4, Cy +1"
pub fn format_award(award: &HoleAward, rows: &[ScorecardRow]) -> String {
    let name_of = |id: PlayerId| {
        rows.iter()
            .find(|r| r.id == id)
            .map(|r| r.name)
            .unwrap_or("?")
    };
    let parts: Vec<String> = award
        .lines
        .iter()
        .map(|line| format!("{} +{}", name_of(line.player), line.points))
        .collect();

    match award.hole {
        Some(hole) => format!("Hole {} ({}): {}", hole, award.outcome.label(), parts.join(", ")),
        None => format!("({}): {}", award.outcome.label(), parts.join(", ")),
    }
}

/// Format standings as tab-separated values for scripting
/// Columns: name, points, strokes, hole 1..N (no headers, no colors)
pub fn format_tsv(rows: &[ScorecardRow]) -> String {
    rows.iter()
        .map(|row| {
            let mut fields = vec![
                row.name.to_string(),
                row.total_score.to_string(),
                row.total_strokes.to_string(),
            ];
            fields.extend(row.strokes.iter().map(|s| s.to_string()));
            fields.join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
