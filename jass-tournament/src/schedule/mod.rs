pub mod types;
pub mod history;
pub mod sit_out;
pub mod pairing;
pub mod generator;
pub mod summary;

pub use types::{Match, MatchResult, Round, match_id, parse_match_id};
pub use generator::{breaks_per_round, generate_schedule, generate_schedule_with_rng, round_count};
pub use summary::{summarize, ScheduleSummary};
