use super::history::PairingHistory;
use super::types::sorted_pair;

/// Score deduction for each team that has partnered before
pub const PARTNERSHIP_PENALTY: i64 = 50;

/// A possible table: two teams and how well they avoid repeats (higher is better)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub team1: [usize; 2],
    pub team2: [usize; 2],
    pub score: i64,
}

/// The three ways to split four players into two teams of two
pub fn splits(p: [usize; 4]) -> [([usize; 2], [usize; 2]); 3] {
    [
        ([p[0], p[1]], [p[2], p[3]]),
        ([p[0], p[2]], [p[1], p[3]]),
        ([p[0], p[3]], [p[1], p[2]]),
    ]
}

/// First half of the tournament, where two repeated partnerships at one table are not allowed
pub fn is_early_round(round: usize, total_rounds: usize) -> bool {
    2 * round < total_rounds
}

/// Scores one split. Returns `None` when both teams are repeat partnerships
/// during the early rounds.
pub fn evaluate(
    team1: [usize; 2],
    team2: [usize; 2],
    history: &PairingHistory,
    early: bool,
) -> Option<Candidate> {
    let team1 = sorted_pair(team1);
    let team2 = sorted_pair(team2);

    let team1_repeat = history.has_partnered(team1[0], team1[1]);
    let team2_repeat = history.has_partnered(team2[0], team2[1]);
    if team1_repeat && team2_repeat && early {
        return None;
    }

    let partnership_penalty = PARTNERSHIP_PENALTY * (team1_repeat as i64 + team2_repeat as i64);
    let opp_score: i64 = team1
        .iter()
        .flat_map(|&a| team2.iter().map(move |&b| (a, b)))
        .map(|(a, b)| history.times_opposed(a, b) as i64)
        .sum();

    Some(Candidate {
        team1,
        team2,
        score: -opp_score - partnership_penalty,
    })
}

/// Best of the three splits of `players`; the earliest split wins ties
pub fn best_split(players: [usize; 4], history: &PairingHistory, early: bool) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for (team1, team2) in splits(players) {
        if let Some(candidate) = evaluate(team1, team2, history, early) {
            if best.map_or(true, |b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
    }
    best
}
