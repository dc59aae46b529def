pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod parser;
pub mod schedule;
pub mod serde_util;
pub mod standings;
pub mod tournament;
pub mod validators;
pub mod web;

pub use error::{Result, TournamentError};
pub use schedule::{generate_schedule, generate_schedule_with_rng, Match, MatchResult, Round};
pub use standings::{calculate_standings, PlayerStats, RankingMode};
pub use tournament::{Tournament, TournamentSettings};
