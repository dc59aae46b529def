use serde::{Serialize, Deserialize};
use std::cmp::Ordering;

use crate::schedule::Round;

/// Accumulated results of one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub id: usize,
    pub name: String,
    #[serde(default)]
    pub total_points: u32,
    #[serde(default)]
    pub total_matches: u32,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub highest_score: u32,
    #[serde(default)]
    pub lowest_score: Option<u32>,
    #[serde(default)]
    pub points_against: u32,
    #[serde(default)]
    pub bonus_points: u32,
}

impl PlayerStats {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        PlayerStats {
            id,
            name: name.into(),
            total_points: 0,
            total_matches: 0,
            games_played: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            highest_score: 0,
            lowest_score: None,
            points_against: 0,
            bonus_points: 0,
        }
    }

    pub fn total_with_bonus(&self) -> u32 {
        self.total_points.saturating_add(self.bonus_points)
    }

    pub fn average_with_bonus(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_with_bonus() as f64 / self.games_played as f64
        }
    }

    /// Share of games won, in percent
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 * 100.0 / self.games_played as f64
        }
    }

    fn record_game(&mut self, score: u32, opponent_score: u32, matches: u32, bonus_per_match: Option<u32>) {
        self.games_played = self.games_played.saturating_add(1);
        self.total_points = self.total_points.saturating_add(score);
        self.points_against = self.points_against.saturating_add(opponent_score);
        self.total_matches = self.total_matches.saturating_add(matches);

        self.highest_score = self.highest_score.max(score);
        self.lowest_score = Some(self.lowest_score.map_or(score, |low| low.min(score)));

        match score.cmp(&opponent_score) {
            Ordering::Greater => self.wins += 1,
            Ordering::Less => self.losses += 1,
            Ordering::Equal => self.draws += 1,
        }

        if let Some(bonus) = bonus_per_match {
            self.bonus_points = self.bonus_points.saturating_add(bonus.saturating_mul(matches));
        }
    }
}

/// How the leaderboard is ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
    #[default]
    Total,
    Average,
}

/// Recomputes every player's stats from the results entered so far.
/// `bonus_per_match` is `Some` when bonus points are enabled.
pub fn calculate_standings(players: &[String], schedule: &[Round], bonus_per_match: Option<u32>) -> Vec<PlayerStats> {
    let mut stats: Vec<PlayerStats> = players
        .iter()
        .enumerate()
        .map(|(id, name)| PlayerStats::new(id, name.as_str()))
        .collect();

    for m in schedule.iter().flat_map(|round| &round.matches) {
        let Some(result) = m.result else { continue };

        for &p in &m.team1 {
            if let Some(player) = stats.get_mut(p) {
                player.record_game(result.team1_score, result.team2_score, result.team1_matches, bonus_per_match);
            }
        }
        for &p in &m.team2 {
            if let Some(player) = stats.get_mut(p) {
                player.record_game(result.team2_score, result.team1_score, result.team2_matches, bonus_per_match);
            }
        }
    }

    stats
}

/// Leaderboard order, best first. Equal players keep roster order.
pub fn rank(stats: &[PlayerStats], mode: RankingMode) -> Vec<PlayerStats> {
    let mut ranked = stats.to_vec();
    match mode {
        RankingMode::Total => ranked.sort_by(|a, b| b.total_with_bonus().cmp(&a.total_with_bonus())),
        RankingMode::Average => ranked.sort_by(|a, b| {
            b.average_with_bonus()
                .partial_cmp(&a.average_with_bonus())
                .unwrap_or(Ordering::Equal)
        }),
    }
    ranked
}
