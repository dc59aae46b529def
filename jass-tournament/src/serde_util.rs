use std::cmp::Ordering;
use std::collections::HashMap;
use serde::{Deserialize, Deserializer};

/// The realtime store may hand back an array as an object keyed by index
#[derive(Deserialize)]
#[serde(untagged)]
enum SeqOrMap<T> {
    Seq(Vec<Option<T>>),
    Map(HashMap<String, T>),
}

/// Deserializes a list that may arrive as a JSON array, as an object keyed by
/// index ("0", "1", ...), or as null. Object entries are ordered numerically
/// by key; null array holes are dropped.
pub fn seq_or_map<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<SeqOrMap<T>>::deserialize(deserializer)?;
    Ok(match value {
        None => Vec::new(),
        Some(SeqOrMap::Seq(items)) => items.into_iter().flatten().collect(),
        Some(SeqOrMap::Map(map)) => {
            let mut entries: Vec<(String, T)> = map.into_iter().collect();
            entries.sort_by(|a, b| compare_keys(&a.0, &b.0));
            entries.into_iter().map(|(_, v)| v).collect()
        }
    })
}

fn compare_keys(a: &str, b: &str) -> Ordering {
    match (a.parse::<usize>(), b.parse::<usize>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
