use chrono::{DateTime, Duration, Utc};
use log::info;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{Result, TournamentError};
use crate::parser::clean_names;
use crate::schedule::{generate_schedule_with_rng, parse_match_id, Match, MatchResult, Round};
use crate::serde_util::seq_or_map;
use crate::standings::{calculate_standings, rank, PlayerStats, RankingMode};
use crate::validators::{validate_bonus_points, validate_player_count, validate_result};

pub const DEFAULT_BONUS_POINTS_PER_MATCH: u32 = 43;
const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ID_LENGTH: usize = 6;

fn default_bonus_points() -> u32 {
    DEFAULT_BONUS_POINTS_PER_MATCH
}

/// Options chosen when the tournament is set up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSettings {
    pub num_tables: usize,
    #[serde(default)]
    pub bonus_points_enabled: bool,
    #[serde(default = "default_bonus_points")]
    pub bonus_points_per_match: u32,
}

impl TournamentSettings {
    pub fn new(num_tables: usize) -> Self {
        TournamentSettings {
            num_tables,
            bonus_points_enabled: false,
            bonus_points_per_match: DEFAULT_BONUS_POINTS_PER_MATCH,
        }
    }
}

/// A running tournament: roster, fixed schedule and live standings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    #[serde(default, deserialize_with = "seq_or_map")]
    pub players: Vec<String>,
    #[serde(default, deserialize_with = "seq_or_map")]
    pub player_stats: Vec<PlayerStats>,
    #[serde(default, deserialize_with = "seq_or_map")]
    pub schedule: Vec<Round>,
    #[serde(flatten)]
    pub settings: TournamentSettings,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
}

/// Random six character code used to share a tournament
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

impl Tournament {
    /// Sets up a tournament from the entered names. Blank names are skipped.
    pub fn create<I, S>(names: I, settings: TournamentSettings, ttl: Duration) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::create_with_rng(names, settings, ttl, &mut rand::thread_rng())
    }

    pub fn create_with_rng<I, S, R>(names: I, settings: TournamentSettings, ttl: Duration, rng: &mut R) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let players = clean_names(names)?;
        validate_player_count(players.len(), settings.num_tables)?;
        validate_bonus_points(settings.bonus_points_per_match)?;

        let schedule = generate_schedule_with_rng(players.len(), settings.num_tables, rng);
        let player_stats = calculate_standings(&players, &[], None);
        let created_at = Utc::now();

        let tournament = Tournament {
            id: generate_id(rng),
            players,
            player_stats,
            schedule,
            settings,
            created_at,
            expires_at: created_at + ttl,
        };

        info!(
            "Created tournament {} with {} players on {} table(s), {} rounds",
            tournament.id,
            tournament.players.len(),
            tournament.settings.num_tables,
            tournament.schedule.len()
        );
        Ok(tournament)
    }

    /// Reads a stored tournament, accepting lists that were re-keyed into objects.
    /// Stored results and settings are checked the same way as entered ones.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut tournament: Tournament = serde_json::from_str(json)?;
        validate_bonus_points(tournament.settings.bonus_points_per_match)?;
        for result in tournament.schedule.iter().flat_map(|r| &r.matches).filter_map(|m| m.result.as_ref()) {
            validate_result(result)?;
        }
        if tournament.player_stats.len() != tournament.players.len() {
            tournament.refresh_standings();
        }
        Ok(tournament)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn player_name(&self, index: usize) -> Option<&str> {
        self.players.get(index).map(String::as_str)
    }

    pub fn bonus_per_match(&self) -> Option<u32> {
        self.settings
            .bonus_points_enabled
            .then_some(self.settings.bonus_points_per_match)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn match_at(&self, round_index: usize, match_index: usize) -> Option<&Match> {
        self.schedule.get(round_index)?.matches.get(match_index)
    }

    /// Looks up a match by its id, e.g. `r3-m1`
    pub fn find_match(&self, id: &str) -> Option<&Match> {
        let (round, index) = parse_match_id(id)?;
        self.match_at(round, index).filter(|m| m.id == id)
    }

    fn find_match_mut(&mut self, id: &str) -> Result<&mut Match> {
        let not_found = || TournamentError::MatchNotFound(id.to_string());
        let (round, index) = parse_match_id(id).ok_or_else(not_found)?;
        self.schedule
            .get_mut(round)
            .and_then(|r| r.matches.get_mut(index))
            .filter(|m| m.id == id)
            .ok_or_else(not_found)
    }

    /// Stores the final result of a match and updates the standings
    pub fn record_result(&mut self, match_id: &str, result: MatchResult) -> Result<()> {
        validate_result(&result)?;
        self.find_match_mut(match_id)?.result = Some(result);
        self.refresh_standings();
        info!(
            "Tournament {}: result {}:{} recorded for {}",
            self.id, result.team1_score, result.team2_score, match_id
        );
        Ok(())
    }

    /// Removes a match result, e.g. after it was entered for the wrong table
    pub fn clear_result(&mut self, match_id: &str) -> Result<()> {
        self.find_match_mut(match_id)?.result = None;
        self.refresh_standings();
        Ok(())
    }

    pub fn refresh_standings(&mut self) {
        self.player_stats = calculate_standings(&self.players, &self.schedule, self.bonus_per_match());
    }

    pub fn standings(&self, mode: RankingMode) -> Vec<PlayerStats> {
        rank(&self.player_stats, mode)
    }

    /// Rounds whose every match has a result
    pub fn completed_rounds(&self) -> usize {
        self.schedule
            .iter()
            .filter(|r| r.matches.iter().all(|m| m.result.is_some()))
            .count()
    }
}
