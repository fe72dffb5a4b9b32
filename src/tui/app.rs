use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::round::{
    resolve_export_path, save_summary, CommitPolicy, HoleAward, HoleCount, HoleStrokes, Round,
    RoundSummary, PLAYERS_PER_ROUND,
};
use crate::tui::theme::ThemeColors;

const MAX_NAME_LEN: usize = 24;
const MAX_STROKE_DIGITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Setup,
    Play,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
}

/// Which setup control has focus: one of the name fields or the hole toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetupField {
    Name(usize),
    Holes,
}

pub struct App {
    pub screen: Screen,
    pub input_mode: InputMode,
    pub names: Vec<String>,
    pub holes: HoleCount,
    pub policy: CommitPolicy,
    pub setup_field: SetupField,
    pub round: Option<Round>,
    pub stroke_inputs: Vec<String>,
    pub stroke_focus: usize,
    pub last_award: Option<HoleAward>,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub colors: ThemeColors,
    pub export_dir: Option<PathBuf>,
    pub exported_to: Option<PathBuf>,
    pub verbose: bool,
}

impl App {
    pub fn new(config: &Config, colors: ThemeColors, verbose: bool) -> Self {
        let mut names = config.players.clone().unwrap_or_default();
        names.resize(PLAYERS_PER_ROUND, String::new());

        Self {
            screen: Screen::Setup,
            input_mode: InputMode::Normal,
            names,
            holes: config.holes,
            policy: config.commit_policy,
            setup_field: SetupField::Name(0),
            round: None,
            stroke_inputs: vec![String::new(); PLAYERS_PER_ROUND],
            stroke_focus: 0,
            last_award: None,
            flash_message: None,
            should_quit: false,
            colors,
            export_dir: config.export_dir.clone(),
            exported_to: None,
            verbose,
        }
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    // Setup screen

    pub fn next_setup_field(&mut self) {
        self.setup_field = match self.setup_field {
            SetupField::Name(i) if i + 1 < PLAYERS_PER_ROUND => SetupField::Name(i + 1),
            SetupField::Name(_) => SetupField::Holes,
            SetupField::Holes => SetupField::Name(0),
        };
    }

    pub fn previous_setup_field(&mut self) {
        self.setup_field = match self.setup_field {
            SetupField::Name(0) => SetupField::Holes,
            SetupField::Name(i) => SetupField::Name(i - 1),
            SetupField::Holes => SetupField::Name(PLAYERS_PER_ROUND - 1),
        };
    }

    pub fn setup_type(&mut self, c: char) {
        match self.setup_field {
            SetupField::Name(i) => {
                let name = &mut self.names[i];
                if name.chars().count() < MAX_NAME_LEN {
                    name.push(c);
                }
            }
            SetupField::Holes => {
                if c == ' ' {
                    self.toggle_holes();
                }
            }
        }
    }

    pub fn setup_backspace(&mut self) {
        if let SetupField::Name(i) = self.setup_field {
            self.names[i].pop();
        }
    }

    pub fn toggle_holes(&mut self) {
        self.holes = self.holes.toggled();
    }

    /// Build the round from the setup form and move to the play screen.
    pub fn start_round(&mut self) {
        match Round::from_names(self.names.iter().cloned(), self.holes) {
            Ok(round) => {
                let round = round.with_policy(self.policy);
                if self.verbose {
                    crate::buffered_eprintln!(
                        "Started {} round ({} commit) for {}",
                        round.hole_count(),
                        round.policy(),
                        self.names.join(", ")
                    );
                }
                self.round = Some(round);
                self.clear_stroke_inputs();
                self.last_award = None;
                self.exported_to = None;
                self.screen = Screen::Play;
                self.show_flash(format!("Round started: {}", self.holes));
            }
            Err(e) => self.show_flash(format!("Error: {}", e)),
        }
    }

    // Play screen

    pub fn next_input(&mut self) {
        self.stroke_focus = (self.stroke_focus + 1) % PLAYERS_PER_ROUND;
    }

    pub fn previous_input(&mut self) {
        self.stroke_focus = (self.stroke_focus + PLAYERS_PER_ROUND - 1) % PLAYERS_PER_ROUND;
    }

    pub fn type_digit(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        let input = &mut self.stroke_inputs[self.stroke_focus];
        if input.len() < MAX_STROKE_DIGITS {
            input.push(c);
        }
    }

    pub fn input_backspace(&mut self) {
        self.stroke_inputs[self.stroke_focus].pop();
    }

    fn clear_stroke_inputs(&mut self) {
        for input in &mut self.stroke_inputs {
            input.clear();
        }
        self.stroke_focus = 0;
    }

    /// Parse the stroke fields in roster order. Empty fields are skipped,
    /// anything else must be a whole number of at least 1.
    pub fn parsed_strokes(&self) -> Result<Vec<Option<u32>>, String> {
        self.stroke_inputs
            .iter()
            .enumerate()
            .map(|(i, input)| {
                if input.is_empty() {
                    return Ok(None);
                }
                match input.parse::<u32>() {
                    Ok(n) if n >= 1 => Ok(Some(n)),
                    _ => Err(format!(
                        "Invalid strokes for {}: '{}'",
                        self.names[i], input
                    )),
                }
            })
            .collect()
    }

    /// Commit the current hole from the stroke fields.
    pub fn submit_hole(&mut self) {
        let parsed = match self.parsed_strokes() {
            Ok(parsed) => parsed,
            Err(msg) => {
                self.show_flash(format!("Error: {}", msg));
                return;
            }
        };
        if parsed.iter().all(Option::is_none) {
            self.show_flash("Error: enter strokes before submitting".to_string());
            return;
        }

        let Some(round) = self.round.as_mut() else {
            return;
        };

        let strokes: HoleStrokes = round
            .players()
            .iter()
            .zip(&parsed)
            .filter_map(|(p, &s)| s.map(|s| (p.id, s)))
            .collect();

        let hole = round.current_hole();
        match round.commit_hole(&strokes) {
            Ok(Some(award)) => {
                if self.verbose {
                    crate::buffered_eprintln!("Hole {}: {}", hole, award.outcome.label());
                }
                let message = {
                    let rows = crate::output::rows_from_round(round);
                    crate::output::format_award(&award, &rows)
                };
                self.last_award = Some(award);
                self.clear_stroke_inputs();
                self.show_flash(message);
            }
            Ok(None) => {
                self.last_award = None;
                self.clear_stroke_inputs();
                self.show_flash(format!(
                    "Hole {} recorded without points (missing strokes)",
                    hole
                ));
            }
            Err(e) => {
                self.show_flash(format!("Error: {}", e));
                return;
            }
        }

        if self.round.as_ref().is_some_and(Round::is_complete) {
            self.screen = Screen::Finished;
        }
    }

    /// Write the round summary to disk.
    pub fn export_round(&mut self) {
        let Some(round) = self.round.as_ref() else {
            return;
        };
        let summary = RoundSummary::from_round(round);
        let path = resolve_export_path(None, self.export_dir.as_deref());
        match save_summary(&path, &summary) {
            Ok(()) => {
                self.show_flash(format!("Exported to {}", path.display()));
                self.exported_to = Some(path);
            }
            Err(e) => self.show_flash(format!("Failed to export: {}", e)),
        }
    }

    /// Leave the finished round and return to setup with the same roster.
    pub fn new_round(&mut self) {
        self.round = None;
        self.last_award = None;
        self.exported_to = None;
        self.clear_stroke_inputs();
        self.setup_field = SetupField::Name(0);
        self.screen = Screen::Setup;
    }
}
