use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::awards::{award_hole, HoleAward};
use super::error::{RoundError, PLAYERS_PER_ROUND};
use super::player::{Player, PlayerId};

/// Stroke counts submitted for one hole, keyed by player.
pub type HoleStrokes = HashMap<PlayerId, u32>;

/// Round length. Only 9 and 18 holes are playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HoleCount {
    #[default]
    Nine,
    Eighteen,
}

impl HoleCount {
    pub fn get(self) -> usize {
        match self {
            HoleCount::Nine => 9,
            HoleCount::Eighteen => 18,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            HoleCount::Nine => HoleCount::Eighteen,
            HoleCount::Eighteen => HoleCount::Nine,
        }
    }
}

impl TryFrom<u8> for HoleCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(HoleCount::Nine),
            18 => Ok(HoleCount::Eighteen),
            other => Err(format!("hole count must be 9 or 18, got {}", other)),
        }
    }
}

impl From<HoleCount> for u8 {
    fn from(value: HoleCount) -> Self {
        value.get() as u8
    }
}

impl fmt::Display for HoleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} holes", self.get())
    }
}

/// What `record_hole` does when some players have no strokes for the hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitPolicy {
    /// Write whatever was supplied and advance anyway.
    #[default]
    Lenient,
    /// Refuse the hole unless every player has strokes.
    Strict,
}

impl fmt::Display for CommitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitPolicy::Lenient => write!(f, "lenient"),
            CommitPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// State of one Nines round: three players, their per-hole strokes, and the
/// hole pointer.
///
/// `scorecard()[i]` belongs to `players()[i]`. A 0 entry means the hole has
/// not been played by that player.
#[derive(Debug, Clone)]
pub struct Round {
    players: Vec<Player>,
    hole_count: HoleCount,
    scorecard: Vec<Vec<u32>>,
    current_hole: usize,
    policy: CommitPolicy,
    history: Vec<HoleAward>,
}

impl Round {
    /// Start a round. Fails unless exactly three distinct players are given.
    /// Player totals are reset so they always match the empty scorecard.
    pub fn new(players: Vec<Player>, hole_count: HoleCount) -> Result<Self, RoundError> {
        if players.len() != PLAYERS_PER_ROUND {
            return Err(RoundError::InvalidPlayerCount {
                expected: PLAYERS_PER_ROUND,
                found: players.len(),
            });
        }
        let mut seen = HashSet::new();
        if let Some(dup) = players.iter().find(|p| !seen.insert(p.id)) {
            return Err(RoundError::DuplicatePlayer(dup.id));
        }

        let players: Vec<Player> = players
            .into_iter()
            .map(|p| Player {
                total_score: 0,
                total_strokes: 0,
                ..p
            })
            .collect();

        let holes = hole_count.get();
        let scorecard = vec![vec![0; holes]; players.len()];

        Ok(Self {
            players,
            hole_count,
            scorecard,
            current_hole: 1,
            policy: CommitPolicy::default(),
            history: Vec::new(),
        })
    }

    /// Convenience constructor from display names.
    pub fn from_names<I, S>(names: I, hole_count: HoleCount) -> Result<Self, RoundError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Player::roster(names)?, hole_count)
    }

    pub fn with_policy(mut self, policy: CommitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn hole_count(&self) -> HoleCount {
        self.hole_count
    }

    /// 1-indexed hole the next commit writes to. Reads `hole_count + 1`
    /// once the last hole has been committed.
    pub fn current_hole(&self) -> usize {
        self.current_hole
    }

    pub fn is_complete(&self) -> bool {
        self.current_hole > self.hole_count.get()
    }

    pub fn holes_played(&self) -> usize {
        (self.current_hole - 1).min(self.hole_count.get())
    }

    pub fn policy(&self) -> CommitPolicy {
        self.policy
    }

    pub fn scorecard(&self) -> &[Vec<u32>] {
        &self.scorecard
    }

    pub fn strokes_for(&self, id: PlayerId) -> Option<&[u32]> {
        self.index_of(id).map(|i| self.scorecard[i].as_slice())
    }

    /// Every award applied so far, oldest first.
    pub fn award_history(&self) -> &[HoleAward] {
        &self.history
    }

    /// Players ordered by descending points. Ties keep roster order.
    pub fn leaderboard(&self) -> Vec<&Player> {
        let mut board: Vec<&Player> = self.players.iter().collect();
        board.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        board
    }

    /// Pair stroke counts given in roster order with player ids.
    /// Extra values are ignored; missing ones leave the player out.
    pub fn strokes_by_position(&self, strokes: &[u32]) -> HoleStrokes {
        self.players
            .iter()
            .zip(strokes)
            .map(|(p, &s)| (p.id, s))
            .collect()
    }

    /// Write the supplied strokes into the current hole and advance.
    ///
    /// Under [`CommitPolicy::Lenient`] players missing from `strokes` keep
    /// their previous entry and the hole still advances. Under
    /// [`CommitPolicy::Strict`] a partial map is refused.
    pub fn record_hole(&mut self, strokes: &HoleStrokes) -> Result<(), RoundError> {
        self.check_hole_in_range()?;
        let resolved = self.resolve(strokes)?;

        if self.policy == CommitPolicy::Strict && resolved.len() != self.players.len() {
            return Err(RoundError::MissingScore {
                expected: PLAYERS_PER_ROUND,
                found: resolved.len(),
            });
        }

        self.check_stroke_totals(&resolved)?;
        self.write_hole(&resolved);
        Ok(())
    }

    /// Rank exactly three players' strokes and add the points to their totals.
    ///
    /// Independent of the hole pointer and scorecard. Calling it twice with
    /// the same strokes awards the points twice.
    pub fn compute_point_awards(&mut self, strokes: &HoleStrokes) -> Result<HoleAward, RoundError> {
        let entries = self.award_entries(strokes)?;
        let award = award_hole(entries);
        self.apply_award(award.clone());
        Ok(award)
    }

    /// Record the current hole and award its points as one step.
    ///
    /// Both preconditions are checked before anything is written, so on
    /// error neither the scorecard nor any total changes.
    pub fn submit_hole(&mut self, strokes: &HoleStrokes) -> Result<HoleAward, RoundError> {
        self.check_hole_in_range()?;
        let entries = self.award_entries(strokes)?;
        let resolved = self.resolve(strokes)?;
        self.check_stroke_totals(&resolved)?;

        let hole = self.current_hole;
        self.write_hole(&resolved);

        let mut award = award_hole(entries);
        award.hole = Some(hole);
        self.apply_award(award.clone());
        Ok(award)
    }

    /// Commit the current hole from whatever strokes the caller has.
    ///
    /// A full set goes through [`Round::submit_hole`] and returns the award.
    /// A partial set is only recorded (subject to the commit policy) and
    /// awards nothing, since points need all three players.
    pub fn commit_hole(&mut self, strokes: &HoleStrokes) -> Result<Option<HoleAward>, RoundError> {
        if strokes.len() == PLAYERS_PER_ROUND {
            self.submit_hole(strokes).map(Some)
        } else {
            self.record_hole(strokes).map(|_| None)
        }
    }

    fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    fn check_hole_in_range(&self) -> Result<(), RoundError> {
        let holes = self.hole_count.get();
        if self.players.is_empty() || self.current_hole < 1 || self.current_hole > holes {
            return Err(RoundError::State {
                current_hole: self.current_hole,
                hole_count: holes,
            });
        }
        Ok(())
    }

    /// Map every id to its roster index, rejecting non-members.
    fn resolve(&self, strokes: &HoleStrokes) -> Result<Vec<(usize, u32)>, RoundError> {
        let mut resolved = strokes
            .iter()
            .map(|(id, &s)| {
                self.index_of(*id)
                    .map(|i| (i, s))
                    .ok_or(RoundError::UnknownPlayer(*id))
            })
            .collect::<Result<Vec<_>, _>>()?;
        resolved.sort_by_key(|(i, _)| *i);
        Ok(resolved)
    }

    fn award_entries(&self, strokes: &HoleStrokes) -> Result<[(PlayerId, u32); 3], RoundError> {
        if strokes.len() < PLAYERS_PER_ROUND {
            return Err(RoundError::MissingScore {
                expected: PLAYERS_PER_ROUND,
                found: strokes.len(),
            });
        }
        if strokes.len() > PLAYERS_PER_ROUND {
            return Err(RoundError::InvalidPlayerCount {
                expected: PLAYERS_PER_ROUND,
                found: strokes.len(),
            });
        }

        let resolved = self.resolve(strokes)?;
        let entry = |k: usize| {
            let (i, s) = resolved[k];
            (self.players[i].id, s)
        };
        Ok([entry(0), entry(1), entry(2)])
    }

    /// Refuse a hole whose strokes would overflow any running total.
    fn check_stroke_totals(&self, resolved: &[(usize, u32)]) -> Result<(), RoundError> {
        for &(i, s) in resolved {
            let player = &self.players[i];
            if player.total_strokes.checked_add(s).is_none() {
                return Err(RoundError::StrokeOverflow(player.id));
            }
        }
        Ok(())
    }

    fn write_hole(&mut self, resolved: &[(usize, u32)]) {
        let slot = self.current_hole - 1;
        for &(i, s) in resolved {
            self.scorecard[i][slot] = s;
            self.players[i].total_strokes += s;
        }
        self.current_hole += 1;
    }

    fn apply_award(&mut self, award: HoleAward) {
        for line in &award.lines {
            if let Some(i) = self.index_of(line.player) {
                self.players[i].total_score += line.points;
            }
        }
        self.history.push(award);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_round(holes: HoleCount) -> Round {
        Round::from_names(["A", "B", "C"], holes).unwrap()
    }

    fn ids(round: &Round) -> (PlayerId, PlayerId, PlayerId) {
        let p = round.players();
        (p[0].id, p[1].id, p[2].id)
    }

    fn map(entries: &[(PlayerId, u32)]) -> HoleStrokes {
        entries.iter().copied().collect()
    }

    fn totals(round: &Round) -> Vec<u32> {
        round.players().iter().map(|p| p.total_score).collect()
    }

    #[test]
    fn test_create_requires_three_players() {
        let two = Round::from_names(["A", "B"], HoleCount::Nine);
        assert_eq!(
            two.unwrap_err(),
            RoundError::InvalidPlayerCount {
                expected: 3,
                found: 2
            }
        );

        let four = Round::from_names(["A", "B", "C", "D"], HoleCount::Nine);
        assert!(four.unwrap_err().is_invalid_player_count());

        assert!(Round::from_names(["A", "B", "C"], HoleCount::Nine).is_ok());
    }

    #[test]
    fn test_create_rejects_duplicate_player() {
        let a = Player::new("A").unwrap();
        let b = Player::new("B").unwrap();
        let result = Round::new(vec![a.clone(), b, a.clone()], HoleCount::Nine);
        let err = result.unwrap_err();
        assert_eq!(err, RoundError::DuplicatePlayer(a.id));
        assert!(err.is_invalid_player_count());
    }

    #[test]
    fn test_create_count_error_reports_roster_size() {
        let four = Round::from_names(["A", "B", "C", "D"], HoleCount::Nine);
        assert_eq!(
            four.unwrap_err(),
            RoundError::InvalidPlayerCount {
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn test_new_round_shape() {
        let round = sample_round(HoleCount::Eighteen);
        assert_eq!(round.current_hole(), 1);
        assert_eq!(round.scorecard().len(), 3);
        assert!(round.scorecard().iter().all(|row| row.len() == 18));
        assert!(round.scorecard().iter().flatten().all(|&s| s == 0));
        assert!(!round.is_complete());
    }

    #[test]
    fn test_new_round_resets_totals() {
        let mut players = Player::roster(["A", "B", "C"]).unwrap();
        players[0].total_score = 12;
        players[1].total_strokes = 40;
        let round = Round::new(players, HoleCount::Nine).unwrap();
        assert!(round
            .players()
            .iter()
            .all(|p| p.total_score == 0 && p.total_strokes == 0));
    }

    #[test]
    fn test_record_first_hole() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        round.record_hole(&map(&[(a, 4), (b, 5), (c, 6)])).unwrap();

        assert_eq!(round.strokes_for(a).unwrap()[0], 4);
        assert_eq!(round.player(a).unwrap().total_strokes, 4);
        assert_eq!(round.current_hole(), 2);
    }

    #[test]
    fn test_record_hole_does_not_award_points() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        round.record_hole(&map(&[(a, 4), (b, 5), (c, 6)])).unwrap();
        assert_eq!(totals(&round), vec![0, 0, 0]);
    }

    #[test]
    fn test_total_strokes_match_scorecard() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        for hole in 0..9u32 {
            round
                .record_hole(&map(&[(a, 3 + hole % 3), (b, 4), (c, 2 + hole)]))
                .unwrap();
            for (player, row) in round.players().iter().zip(round.scorecard()) {
                assert_eq!(player.total_strokes, row.iter().sum::<u32>());
            }
        }
        assert!(round.is_complete());
        assert_eq!(round.holes_played(), 9);
    }

    #[test]
    fn test_record_past_last_hole_fails_without_mutation() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        for _ in 0..9 {
            round.record_hole(&map(&[(a, 4), (b, 4), (c, 4)])).unwrap();
        }
        let before = round.scorecard().to_vec();

        let err = round.record_hole(&map(&[(a, 1), (b, 1), (c, 1)])).unwrap_err();
        assert_eq!(
            err,
            RoundError::State {
                current_hole: 10,
                hole_count: 9
            }
        );
        assert_eq!(round.scorecard(), before.as_slice());
        assert_eq!(round.current_hole(), 10);
    }

    #[test]
    fn test_lenient_partial_hole_still_advances() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, _, _) = ids(&round);
        round.record_hole(&map(&[(a, 5)])).unwrap();

        assert_eq!(round.current_hole(), 2);
        assert_eq!(round.scorecard()[0][0], 5);
        assert_eq!(round.scorecard()[1][0], 0);
        assert_eq!(round.scorecard()[2][0], 0);
    }

    #[test]
    fn test_strict_partial_hole_rejected() {
        let mut round = sample_round(HoleCount::Nine).with_policy(CommitPolicy::Strict);
        let (a, b, _) = ids(&round);
        let err = round.record_hole(&map(&[(a, 5), (b, 4)])).unwrap_err();

        assert_eq!(
            err,
            RoundError::MissingScore {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(round.current_hole(), 1);
        assert!(round.scorecard().iter().flatten().all(|&s| s == 0));
    }

    #[test]
    fn test_record_unknown_player_rejected() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, _) = ids(&round);
        let stranger = PlayerId::new();
        let err = round
            .record_hole(&map(&[(a, 4), (b, 4), (stranger, 4)]))
            .unwrap_err();

        assert_eq!(err, RoundError::UnknownPlayer(stranger));
        assert_eq!(round.current_hole(), 1);
        assert_eq!(round.player(a).unwrap().total_strokes, 0);
    }

    #[test]
    fn test_awards_all_tied() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        round.compute_point_awards(&map(&[(a, 3), (b, 3), (c, 3)])).unwrap();
        assert_eq!(totals(&round), vec![3, 3, 3]);
    }

    #[test]
    fn test_awards_low_tie() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        round.compute_point_awards(&map(&[(a, 2), (b, 2), (c, 5)])).unwrap();
        assert_eq!(totals(&round), vec![4, 4, 1]);
    }

    #[test]
    fn test_awards_high_tie() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        round.compute_point_awards(&map(&[(a, 2), (b, 5), (c, 5)])).unwrap();
        assert_eq!(totals(&round), vec![5, 2, 2]);
    }

    #[test]
    fn test_awards_no_ties() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        round.compute_point_awards(&map(&[(a, 2), (b, 3), (c, 5)])).unwrap();
        assert_eq!(totals(&round), vec![5, 3, 1]);
    }

    #[test]
    fn test_awards_are_not_idempotent() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        let strokes = map(&[(a, 2), (b, 3), (c, 5)]);
        round.compute_point_awards(&strokes).unwrap();
        round.compute_point_awards(&strokes).unwrap();
        assert_eq!(totals(&round), vec![10, 6, 2]);
        assert_eq!(round.award_history().len(), 2);
    }

    #[test]
    fn test_awards_leave_scorecard_alone() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        round.compute_point_awards(&map(&[(a, 2), (b, 3), (c, 5)])).unwrap();
        assert_eq!(round.current_hole(), 1);
        assert!(round.scorecard().iter().flatten().all(|&s| s == 0));
    }

    #[test]
    fn test_awards_with_two_players_fail_without_mutation() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, _) = ids(&round);
        let err = round.compute_point_awards(&map(&[(a, 2), (b, 3)])).unwrap_err();

        assert_eq!(
            err,
            RoundError::MissingScore {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(totals(&round), vec![0, 0, 0]);
        assert!(round.award_history().is_empty());
    }

    #[test]
    fn test_awards_with_four_entries_fail() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        let err = round
            .compute_point_awards(&map(&[(a, 2), (b, 3), (c, 4), (PlayerId::new(), 5)]))
            .unwrap_err();

        assert!(err.is_invalid_player_count());
        assert_eq!(totals(&round), vec![0, 0, 0]);
    }

    #[test]
    fn test_awards_with_stranger_fail() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, _) = ids(&round);
        let err = round
            .compute_point_awards(&map(&[(a, 2), (b, 3), (PlayerId::new(), 4)]))
            .unwrap_err();

        assert!(err.is_invalid_player_count());
        assert_eq!(totals(&round), vec![0, 0, 0]);
    }

    #[test]
    fn test_submit_hole_records_and_awards() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        let award = round.submit_hole(&map(&[(a, 4), (b, 5), (c, 6)])).unwrap();

        assert_eq!(award.hole, Some(1));
        assert_eq!(round.current_hole(), 2);
        assert_eq!(totals(&round), vec![5, 3, 1]);
        assert_eq!(round.scorecard()[1][0], 5);
    }

    #[test]
    fn test_record_stroke_overflow_changes_nothing() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        round
            .record_hole(&map(&[(a, u32::MAX), (b, 4), (c, 5)]))
            .unwrap();
        let before = round.clone();

        let err = round
            .record_hole(&map(&[(a, 1), (b, 4), (c, 5)]))
            .unwrap_err();

        assert_eq!(err, RoundError::StrokeOverflow(a));
        assert_eq!(round.current_hole(), before.current_hole());
        assert_eq!(round.scorecard(), before.scorecard());
        assert_eq!(round.players(), before.players());
    }

    #[test]
    fn test_submit_stroke_overflow_changes_nothing() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        round
            .submit_hole(&map(&[(a, 4), (b, u32::MAX), (c, 5)]))
            .unwrap();
        let before = round.clone();

        let err = round
            .submit_hole(&map(&[(a, 4), (b, 2), (c, 5)]))
            .unwrap_err();

        assert_eq!(err, RoundError::StrokeOverflow(b));
        assert_eq!(round.current_hole(), 2);
        assert_eq!(round.scorecard(), before.scorecard());
        assert_eq!(round.players(), before.players());
        assert_eq!(round.award_history().len(), 1);
    }

    #[test]
    fn test_submit_partial_hole_changes_nothing() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, _) = ids(&round);
        assert!(round.submit_hole(&map(&[(a, 4), (b, 5)])).is_err());

        assert_eq!(round.current_hole(), 1);
        assert_eq!(totals(&round), vec![0, 0, 0]);
        assert!(round.scorecard().iter().flatten().all(|&s| s == 0));
    }

    #[test]
    fn test_submit_after_last_hole_fails() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        for _ in 0..9 {
            round.submit_hole(&map(&[(a, 4), (b, 5), (c, 6)])).unwrap();
        }
        let err = round.submit_hole(&map(&[(a, 4), (b, 5), (c, 6)])).unwrap_err();
        assert!(matches!(err, RoundError::State { .. }));
        assert_eq!(totals(&round), vec![45, 27, 9]);
    }

    #[test]
    fn test_commit_full_hole_awards_points() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        let award = round.commit_hole(&map(&[(a, 4), (b, 4), (c, 4)])).unwrap();
        assert_eq!(award.map(|aw| aw.outcome), Some(crate::round::Outcome::AllTied));
        assert_eq!(totals(&round), vec![3, 3, 3]);
    }

    #[test]
    fn test_commit_partial_hole_lenient() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, _) = ids(&round);
        let award = round.commit_hole(&map(&[(a, 4), (b, 5)])).unwrap();
        assert!(award.is_none());
        assert_eq!(round.current_hole(), 2);
        assert_eq!(totals(&round), vec![0, 0, 0]);
        assert_eq!(round.player(b).unwrap().total_strokes, 5);
    }

    #[test]
    fn test_commit_partial_hole_strict() {
        let mut round = sample_round(HoleCount::Nine).with_policy(CommitPolicy::Strict);
        let (a, b, _) = ids(&round);
        let err = round.commit_hole(&map(&[(a, 4), (b, 5)])).unwrap_err();
        assert!(matches!(err, RoundError::MissingScore { .. }));
        assert_eq!(round.current_hole(), 1);
    }

    #[test]
    fn test_history_matches_totals() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        round.submit_hole(&map(&[(a, 4), (b, 4), (c, 6)])).unwrap();
        round.submit_hole(&map(&[(a, 3), (b, 5), (c, 5)])).unwrap();
        round.submit_hole(&map(&[(a, 7), (b, 7), (c, 7)])).unwrap();

        for player in round.players() {
            let from_history: u32 = round
                .award_history()
                .iter()
                .filter_map(|award| award.points_for(player.id))
                .sum();
            assert_eq!(from_history, player.total_score);
        }
        let grand_total: u32 = round.players().iter().map(|p| p.total_score).sum();
        assert_eq!(grand_total, 27);
    }

    #[test]
    fn test_leaderboard_sorted_by_points() {
        let mut round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        round.submit_hole(&map(&[(a, 6), (b, 4), (c, 5)])).unwrap();

        let names: Vec<&str> = round.leaderboard().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_leaderboard_ties_keep_roster_order() {
        let round = sample_round(HoleCount::Nine);
        let names: Vec<&str> = round.leaderboard().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_strokes_by_position() {
        let round = sample_round(HoleCount::Nine);
        let (a, b, c) = ids(&round);
        let strokes = round.strokes_by_position(&[4, 5, 6]);
        assert_eq!(strokes, map(&[(a, 4), (b, 5), (c, 6)]));

        let partial = round.strokes_by_position(&[4]);
        assert_eq!(partial.len(), 1);
    }

    #[test]
    fn test_hole_count_conversions() {
        assert_eq!(HoleCount::try_from(9u8), Ok(HoleCount::Nine));
        assert_eq!(HoleCount::try_from(18u8), Ok(HoleCount::Eighteen));
        assert!(HoleCount::try_from(12u8).is_err());
        assert_eq!(u8::from(HoleCount::Eighteen), 18);
        assert_eq!(HoleCount::Nine.toggled(), HoleCount::Eighteen);
    }
}
