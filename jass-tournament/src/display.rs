use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;

use crate::schedule::{Match, Round, ScheduleSummary};
use crate::standings::PlayerStats;

/// Resolves a player index to a name, falling back to the index itself
pub fn player_label(players: &[String], index: usize) -> String {
    players
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("#{}", index + 1))
}

/// Formats one table, e.g. `Table 1: Anna & Ben vs Carla & Dario`
pub fn format_match(m: &Match, players: &[String]) -> String {
    let mut line = format!(
        "Table {}: {} & {} vs {} & {}",
        m.table,
        player_label(players, m.team1[0]),
        player_label(players, m.team1[1]),
        player_label(players, m.team2[0]),
        player_label(players, m.team2[1]),
    );
    if let Some(result) = m.result {
        let _ = write!(line, "  ({}:{})", result.team1_score, result.team2_score);
    }
    line
}

/// Renders a round as a block of lines, with a break line when anyone sits out
pub fn format_round(round: &Round, players: &[String]) -> String {
    let mut out = format!("** Round {} **\n", round.round_number);
    for m in &round.matches {
        out.push_str(&format_match(m, players));
        out.push('\n');
    }
    if !round.sitting.is_empty() {
        let names: Vec<String> = round.sitting.iter().map(|&p| player_label(players, p)).collect();
        let _ = writeln!(out, "Break: {}", names.join(", "));
    }
    out
}

/// Writes the whole schedule to a text file
pub fn write_schedule_to_file(
    schedule: &[Round],
    players: &[String],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;
    for round in schedule {
        writeln!(file, "{}", format_round(round, players))?;
    }
    Ok(())
}

/// Fairness summary lines: breaks and games per player, repeats, unseated players
pub fn format_summary(players: &[String], summary: &ScheduleSummary) -> String {
    let mut out = String::from("Breaks per player:\n");
    for (index, count) in summary.break_counts.iter().enumerate() {
        let games = summary.games.get(index).copied().unwrap_or(0);
        let _ = writeln!(out, "  {} -> {} break(s), {} game(s)", player_label(players, index), count, games);
    }
    let _ = writeln!(out, "Repeated partnerships: {}", summary.repeated_partnerships);
    let _ = writeln!(out, "Most meetings between two opponents: {}", summary.max_opponent_meetings);

    if !summary.unseated.is_empty() {
        let _ = writeln!(out, "⚠️  Rounds with unseated players ({}):", summary.unseated.len());
        for (round_number, unseated) in &summary.unseated {
            let names: Vec<String> = unseated.iter().map(|&p| player_label(players, p)).collect();
            let _ = writeln!(out, "  - Round {}: {}", round_number, names.join(", "));
        }
    }
    out
}

/// Prints the schedule followed by its fairness summary
pub fn print_schedule(schedule: &[Round], players: &[String], summary: &ScheduleSummary) {
    println!("\n=== Schedule ({} rounds) ===", schedule.len());
    for round in schedule {
        println!("{}", format_round(round, players));
    }
    print!("{}", format_summary(players, summary));
}

/// Formats one leaderboard line; `rank` is 1-based
pub fn format_standing(rank: usize, stats: &PlayerStats) -> String {
    format!(
        "{:>3}. {:<20} {:>5} pts (+{} bonus)  {:>6.1} avg  {}W {}D {}L",
        rank,
        stats.name,
        stats.total_points,
        stats.bonus_points,
        stats.average_with_bonus(),
        stats.wins,
        stats.draws,
        stats.losses,
    )
}

/// Prints the leaderboard in the given order
pub fn print_standings(standings: &[PlayerStats]) {
    println!("\n=== Standings ===");
    for (index, stats) in standings.iter().enumerate() {
        println!("{}", format_standing(index + 1, stats));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::MatchResult;

    fn players() -> Vec<String> {
        ["Anna", "Ben", "Carla", "Dario", "Elena"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_match() {
        let mut m = Match::new(0, 0, [1, 0], [3, 2]);
        assert_eq!(format_match(&m, &players()), "Table 1: Anna & Ben vs Carla & Dario");
        m.result = Some(MatchResult { team1_score: 400, team2_score: 228, team1_matches: 0, team2_matches: 0 });
        assert_eq!(format_match(&m, &players()), "Table 1: Anna & Ben vs Carla & Dario  (400:228)");
    }

    #[test]
    fn test_format_round_with_break() {
        let round = Round {
            round_number: 2,
            matches: vec![Match::new(1, 0, [0, 1], [2, 3])],
            sitting: vec![4],
        };
        let text = format_round(&round, &players());
        assert_eq!(text, "** Round 2 **\nTable 1: Anna & Ben vs Carla & Dario\nBreak: Elena\n");
    }

    #[test]
    fn test_format_standing() {
        let mut stats = PlayerStats::new(0, "Anna");
        stats.total_points = 714;
        stats.bonus_points = 43;
        stats.games_played = 2;
        stats.wins = 1;
        stats.draws = 1;
        let line = format_standing(1, &stats);
        assert!(line.starts_with("  1. Anna"));
        assert!(line.contains("714 pts (+43 bonus)"));
        assert!(line.contains("378.5 avg"));
        assert!(line.ends_with("1W 1D 0L"));
    }

    #[test]
    fn test_format_summary_with_short_games_list() {
        let summary = ScheduleSummary {
            break_counts: vec![1, 1, 0],
            games: vec![2],
            repeated_partnerships: 0,
            max_opponent_meetings: 1,
            unseated: vec![(3, vec![1, 2])],
        };
        let text = format_summary(&players(), &summary);
        assert!(text.contains("  Anna -> 1 break(s), 2 game(s)\n"));
        assert!(text.contains("  Carla -> 0 break(s), 0 game(s)\n"));
        assert!(text.contains("  - Round 3: Ben, Carla\n"));
    }

    #[test]
    fn test_unknown_player_label() {
        assert_eq!(player_label(&players(), 7), "#8");
    }
}
