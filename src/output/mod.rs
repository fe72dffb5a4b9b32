pub mod formatter;

pub use formatter::{
    format_award, format_leaderboard, format_scorecard, format_strokes, format_tsv,
    rows_from_round, rows_from_summary, should_use_colors, truncate_name, ScorecardRow,
};
