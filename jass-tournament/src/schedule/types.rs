use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};

use crate::serde_util::seq_or_map;

/// Final result of one table, entered after the game was played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub team1_score: u32,
    pub team2_score: u32,
    #[serde(default)]
    pub team1_matches: u32,
    #[serde(default)]
    pub team2_matches: u32,
}

/// One table's pairing for a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub table: usize,
    pub team1: [usize; 2],
    pub team2: [usize; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
}

impl Match {
    /// Builds a match with both teams sorted ascending
    pub fn new(round_index: usize, table_index: usize, team1: [usize; 2], team2: [usize; 2]) -> Self {
        Match {
            id: match_id(round_index, table_index),
            table: table_index + 1,
            team1: sorted_pair(team1),
            team2: sorted_pair(team2),
            result: None,
        }
    }

    pub fn players(&self) -> [usize; 4] {
        [self.team1[0], self.team1[1], self.team2[0], self.team2[1]]
    }

    pub fn contains(&self, player: usize) -> bool {
        self.players().contains(&player)
    }
}

/// One scheduling unit: the tables played plus who is on break
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub round_number: usize,
    #[serde(default, deserialize_with = "seq_or_map")]
    pub matches: Vec<Match>,
    #[serde(default, deserialize_with = "seq_or_map")]
    pub sitting: Vec<usize>,
}

impl Round {
    /// Every player seated at some table this round
    pub fn seated_players(&self) -> BTreeSet<usize> {
        self.matches.iter().flat_map(|m| m.players()).collect()
    }

    /// Players that are neither seated nor on break.
    /// Non-empty only when a table slot had to be skipped during generation.
    pub fn unseated_players(&self, player_count: usize) -> Vec<usize> {
        let seated = self.seated_players();
        (0..player_count)
            .filter(|p| !seated.contains(p) && !self.sitting.contains(p))
            .collect()
    }
}

/// Formats the stable id of a match, e.g. `r0-m1` for the second table of the first round
pub fn match_id(round_index: usize, table_index: usize) -> String {
    format!("r{}-m{}", round_index, table_index)
}

/// Parses a match id back into its (round index, table index)
pub fn parse_match_id(id: &str) -> Option<(usize, usize)> {
    let (round, table) = id.split_once('-')?;
    let round = round.strip_prefix('r')?.parse().ok()?;
    let table = table.strip_prefix('m')?.parse().ok()?;
    Some((round, table))
}

pub(crate) fn sorted_pair(pair: [usize; 2]) -> [usize; 2] {
    if pair[0] <= pair[1] { pair } else { [pair[1], pair[0]] }
}
