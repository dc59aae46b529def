use std::collections::HashMap;

use super::history::{pair_key, PairKey};
use super::types::Round;

/// Fairness figures for a generated schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSummary {
    /// Times each player sat out
    pub break_counts: Vec<u32>,
    /// Games each player is seated for
    pub games: Vec<u32>,
    /// Partnerships that occur more than once
    pub repeated_partnerships: usize,
    /// Highest number of times any two players face each other
    pub max_opponent_meetings: u32,
    /// (round number, players) for rounds with players neither seated nor on break
    pub unseated: Vec<(usize, Vec<usize>)>,
}

impl ScheduleSummary {
    pub fn break_spread(&self) -> u32 {
        let max = self.break_counts.iter().max().copied().unwrap_or(0);
        let min = self.break_counts.iter().min().copied().unwrap_or(0);
        max - min
    }
}

pub fn summarize(schedule: &[Round], player_count: usize) -> ScheduleSummary {
    let mut break_counts = vec![0u32; player_count];
    let mut games = vec![0u32; player_count];
    let mut partnerships: HashMap<PairKey, u32> = HashMap::new();
    let mut opponents: HashMap<PairKey, u32> = HashMap::new();
    let mut unseated = Vec::new();

    for round in schedule {
        for &p in &round.sitting {
            if let Some(count) = break_counts.get_mut(p) {
                *count += 1;
            }
        }
        for m in &round.matches {
            for p in m.players() {
                if let Some(count) = games.get_mut(p) {
                    *count += 1;
                }
            }
            for team in [m.team1, m.team2] {
                *partnerships.entry(pair_key(team[0], team[1])).or_insert(0) += 1;
            }
            for &a in &m.team1 {
                for &b in &m.team2 {
                    *opponents.entry(pair_key(a, b)).or_insert(0) += 1;
                }
            }
        }
        let missing = round.unseated_players(player_count);
        if !missing.is_empty() {
            unseated.push((round.round_number, missing));
        }
    }

    ScheduleSummary {
        break_counts,
        games,
        repeated_partnerships: partnerships.values().filter(|&&c| c > 1).count(),
        max_opponent_meetings: opponents.values().max().copied().unwrap_or(0),
        unseated,
    }
}
