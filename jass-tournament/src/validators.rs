use crate::error::{Result, TournamentError};
use crate::schedule::generator::PLAYERS_PER_TABLE;
use crate::schedule::MatchResult;

/// Points distributed in one Jass game (157 per round, four rounds)
pub const GAME_POINTS: u32 = 628;
/// Most "matches" (sweeps) the two teams can score together in one game
pub const MAX_MATCHES_PER_GAME: u32 = 4;
/// Upper bound for the configurable bonus awarded per match
pub const MAX_BONUS_POINTS_PER_MATCH: u32 = GAME_POINTS;

pub fn validate_score(team1_score: u32, team2_score: u32) -> Result<()> {
    let total = team1_score.saturating_add(team2_score);
    if total != GAME_POINTS {
        return Err(TournamentError::InvalidScoreTotal {
            expected: GAME_POINTS,
            actual: total,
        });
    }
    Ok(())
}

pub fn validate_matches(team1_matches: u32, team2_matches: u32) -> Result<()> {
    let total = team1_matches.saturating_add(team2_matches);
    if total > MAX_MATCHES_PER_GAME {
        return Err(TournamentError::TooManyMatches {
            max: MAX_MATCHES_PER_GAME,
            actual: total,
        });
    }
    Ok(())
}

/// Every table needs four players
pub fn validate_player_count(player_count: usize, tables: usize) -> Result<()> {
    if tables == 0 {
        return Err(TournamentError::NoTables);
    }
    let required = tables.saturating_mul(PLAYERS_PER_TABLE);
    if player_count < required {
        return Err(TournamentError::NotEnoughPlayers {
            required,
            tables,
            actual: player_count,
        });
    }
    Ok(())
}

pub fn validate_bonus_points(bonus_per_match: u32) -> Result<()> {
    if bonus_per_match > MAX_BONUS_POINTS_PER_MATCH {
        return Err(TournamentError::InvalidBonusPoints {
            max: MAX_BONUS_POINTS_PER_MATCH,
            actual: bonus_per_match,
        });
    }
    Ok(())
}

pub fn validate_result(result: &MatchResult) -> Result<()> {
    validate_score(result.team1_score, result.team2_score)?;
    validate_matches(result.team1_matches, result.team2_matches)
}

/// Fills in the other team's score so the total comes to 628
pub fn complement_score(score: u32) -> Option<u32> {
    GAME_POINTS.checked_sub(score)
}
