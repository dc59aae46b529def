use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use super::history::PairingHistory;
use super::pairing::{best_split, is_early_round, Candidate};
use super::sit_out::BreakTracker;
use super::types::{Match, Round};

pub const PLAYERS_PER_TABLE: usize = 4;
/// Random samples tried per table before the slot is given up
pub const MAX_ATTEMPTS: usize = 200;

/// A tournament always runs one round fewer than it has players
pub fn round_count(player_count: usize) -> usize {
    player_count.saturating_sub(1)
}

/// Players left without a seat each round, given the table capacity
pub fn breaks_per_round(player_count: usize, table_count: usize) -> usize {
    let capacity = table_count.saturating_mul(PLAYERS_PER_TABLE);
    let seated = player_count.min(capacity) / PLAYERS_PER_TABLE * PLAYERS_PER_TABLE;
    player_count - seated
}

/// Generates the full schedule for `players` on `table_count` tables.
/// Only the number of players matters; names are referenced by index.
pub fn generate_schedule<P>(players: &[P], table_count: usize) -> Vec<Round> {
    generate_schedule_with_rng(players.len(), table_count, &mut rand::thread_rng())
}

/// Same as [`generate_schedule`] with an explicit random source
pub fn generate_schedule_with_rng<R>(player_count: usize, table_count: usize, rng: &mut R) -> Vec<Round>
where
    R: Rng + ?Sized,
{
    let rounds = round_count(player_count);
    let breaks = breaks_per_round(player_count, table_count);
    let mut tracker = BreakTracker::new(player_count);
    let mut history = PairingHistory::new();
    let mut schedule = Vec::with_capacity(rounds);

    for round in 0..rounds {
        let sitting = tracker.select(round, breaks);
        let mut available: Vec<usize> = (0..player_count)
            .filter(|p| !sitting.contains(p))
            .collect();
        available.shuffle(rng);

        let matches = fill_tables(round, rounds, available, table_count, &mut history, rng);
        debug!(
            "Round {}: {} table(s), {} on break",
            round + 1,
            matches.len(),
            sitting.len()
        );

        schedule.push(Round {
            round_number: round + 1,
            matches,
            sitting,
        });
    }

    schedule
}

/// Greedily seats the available players table by table
fn fill_tables<R>(
    round: usize,
    total_rounds: usize,
    mut remaining: Vec<usize>,
    table_count: usize,
    history: &mut PairingHistory,
    rng: &mut R,
) -> Vec<Match>
where
    R: Rng + ?Sized,
{
    let early = is_early_round(round, total_rounds);
    let slots = (remaining.len() / PLAYERS_PER_TABLE).min(table_count);
    let mut matches = Vec::with_capacity(slots);

    for table in 0..slots {
        let Some(best) = pick_table(&mut remaining, history, early, rng) else {
            // Left-over players are neither seated nor on break for this round
            remaining.sort_unstable();
            warn!(
                "Round {}: no valid pairing for table {}, players {:?} left unseated",
                round + 1,
                table + 1,
                remaining
            );
            break;
        };

        history.record(best.team1, best.team2);
        remaining.retain(|p| !best.team1.contains(p) && !best.team2.contains(p));
        matches.push(Match::new(round, table, best.team1, best.team2));
    }

    matches
}

/// Samples four players at a time and keeps the best scoring split seen
fn pick_table<R>(
    remaining: &mut [usize],
    history: &PairingHistory,
    early: bool,
    rng: &mut R,
) -> Option<Candidate>
where
    R: Rng + ?Sized,
{
    if remaining.len() < PLAYERS_PER_TABLE {
        return None;
    }

    let mut best: Option<Candidate> = None;
    for _ in 0..MAX_ATTEMPTS {
        let (sample, _) = remaining.partial_shuffle(rng, PLAYERS_PER_TABLE);
        let players = [sample[0], sample[1], sample[2], sample[3]];
        if let Some(candidate) = best_split(players, history, early) {
            if best.map_or(true, |b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
    }
    best
}
