use csv::ReaderBuilder;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, TournamentError};

/// Trims names, drops blank entries and rejects duplicates (case-insensitive).
/// Order is kept: a player's position is their id for the whole tournament.
pub fn clean_names<I, S>(names: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut players = Vec::new();

    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(TournamentError::DuplicatePlayerName(name.to_string()));
        }
        players.push(name.to_string());
    }

    if players.is_empty() {
        return Err(TournamentError::EmptyRoster);
    }
    Ok(players)
}

/// Parses a plain roster with one player name per line
pub fn parse_roster_text(text: &str) -> Result<Vec<String>> {
    clean_names(text.lines())
}

/// Reads a roster from CSV. Uses the column whose header mentions "name";
/// without such a header the first column is read and every row counts.
pub fn read_roster_csv<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = reader.records();
    let mut names = Vec::new();

    let name_col = match rows.next() {
        Some(first) => {
            let first = first?;
            match first.iter().position(|h| h.to_lowercase().contains("name")) {
                Some(col) => col,
                None => {
                    names.push(first.get(0).unwrap_or("").to_string());
                    0
                }
            }
        }
        None => return Err(TournamentError::EmptyRoster),
    };

    for result in rows {
        let record = result?;
        names.push(record.get(name_col).unwrap_or("").to_string());
    }

    clean_names(names)
}

/// Loads a roster file: `.csv` files go through the CSV reader, anything else is one name per line
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        read_roster_csv(std::fs::File::open(path)?)
    } else {
        parse_roster_text(&std::fs::read_to_string(path)?)
    }
}
