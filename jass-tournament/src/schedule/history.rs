use std::collections::{HashMap, HashSet};

/// Unordered pair of players, stored smaller index first
pub type PairKey = (usize, usize);

pub fn pair_key(a: usize, b: usize) -> PairKey {
    if a <= b { (a, b) } else { (b, a) }
}

/// Who has partnered and who has faced whom so far in the tournament
#[derive(Debug, Default, Clone)]
pub struct PairingHistory {
    partnerships: HashSet<PairKey>,
    opponents: HashMap<PairKey, u32>,
}

impl PairingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_partnered(&self, a: usize, b: usize) -> bool {
        self.partnerships.contains(&pair_key(a, b))
    }

    /// Number of times `a` and `b` sat on opposing teams
    pub fn times_opposed(&self, a: usize, b: usize) -> u32 {
        self.opponents.get(&pair_key(a, b)).copied().unwrap_or(0)
    }

    /// Records one accepted match
    pub fn record(&mut self, team1: [usize; 2], team2: [usize; 2]) {
        self.partnerships.insert(pair_key(team1[0], team1[1]));
        self.partnerships.insert(pair_key(team2[0], team2[1]));
        for &a in &team1 {
            for &b in &team2 {
                *self.opponents.entry(pair_key(a, b)).or_insert(0) += 1;
            }
        }
    }

    pub fn partnership_count(&self) -> usize {
        self.partnerships.len()
    }
}
