use std::cmp::Reverse;

/// Priority weight per break already taken
const BREAK_WEIGHT: i64 = 1000;
/// Penalty for sitting out two rounds in a row
const CONSECUTIVE_PENALTY: i64 = 10_000;

/// Tracks how often and when each player sat out
#[derive(Debug, Clone)]
pub struct BreakTracker {
    break_count: Vec<u32>,
    last_break: Vec<Option<usize>>,
}

impl BreakTracker {
    pub fn new(player_count: usize) -> Self {
        BreakTracker {
            break_count: vec![0; player_count],
            last_break: vec![None; player_count],
        }
    }

    /// Higher means a better candidate to sit out this round
    pub fn priority(&self, player: usize, round: usize) -> i64 {
        let consecutive = round > 0 && self.last_break[player] == Some(round - 1);
        -(self.break_count[player] as i64) * BREAK_WEIGHT
            - if consecutive { CONSECUTIVE_PENALTY } else { 0 }
    }

    /// Picks `breaks` players to sit out `round` and records their breaks.
    /// Ties keep roster order.
    pub fn select(&mut self, round: usize, breaks: usize) -> Vec<usize> {
        let mut ranked: Vec<usize> = (0..self.break_count.len()).collect();
        ranked.sort_by_key(|&p| Reverse(self.priority(p, round)));

        let sitting: Vec<usize> = ranked.into_iter().take(breaks).collect();
        for &p in &sitting {
            self.break_count[p] += 1;
            self.last_break[p] = Some(round);
        }
        sitting
    }

    pub fn break_counts(&self) -> &[u32] {
        &self.break_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_without_repeats() {
        let mut tracker = BreakTracker::new(5);
        let picks: Vec<Vec<usize>> = (0..4).map(|r| tracker.select(r, 1)).collect();
        assert_eq!(picks, vec![vec![0], vec![1], vec![2], vec![3]]);
        assert_eq!(tracker.break_counts(), &[1, 1, 1, 1, 0]);
    }

    #[test]
    fn test_avoids_back_to_back_breaks() {
        let mut tracker = BreakTracker::new(6);
        assert_eq!(tracker.select(0, 2), vec![0, 1]);
        assert_eq!(tracker.select(1, 2), vec![2, 3]);
        assert_eq!(tracker.select(2, 2), vec![4, 5]);
        // everyone has one break; 4 and 5 just sat out
        assert_eq!(tracker.select(3, 2), vec![0, 1]);
        assert_eq!(tracker.select(4, 2), vec![2, 3]);
    }

    #[test]
    fn test_forced_repeat_when_unavoidable() {
        // 7 of 11 sit every round, so some must sit twice in a row
        let mut tracker = BreakTracker::new(11);
        assert_eq!(tracker.select(0, 7), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(tracker.select(1, 7), vec![7, 8, 9, 10, 0, 1, 2]);
    }

    #[test]
    fn test_zero_breaks() {
        let mut tracker = BreakTracker::new(8);
        assert!(tracker.select(0, 0).is_empty());
        assert!(tracker.break_counts().iter().all(|&c| c == 0));
    }
}
