//! Read-only queries over a loaded record collection.
//!
//! Every query borrows the full collection and returns a derived value.
//! None of them mutate their input, and running one twice yields the same
//! result. All of them accept an empty collection; only the minimum-goals
//! lookups have no answer there and return [`QueryError::EmptyCollection`].

use crate::error::QueryError;
use crate::grouping::{Grouping, group_by};
use crate::{MatchRecord, Outcome};
use indexmap::IndexSet;

/// Number of records whose info field contains `tag`.
///
/// Case-sensitive substring match without trimming.
pub fn count_by_tag(records: &[MatchRecord], tag: &str) -> usize {
    records.iter().filter(|r| r.info().contains(tag)).count()
}

/// Stable two-way split of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a> {
    /// Records where the team played at home.
    pub home: Vec<&'a MatchRecord>,
    /// Every other record.
    pub away: Vec<&'a MatchRecord>,
}

/// Split records into the team's home games and everything else.
pub fn partition_by_home<'a>(records: &'a [MatchRecord], team: &str) -> Partition<'a> {
    let (home, away): (Vec<_>, Vec<_>) = records.iter().partition(|r| r.home_team() == team);
    Partition { home, away }
}

/// Bucket records by their outcome for `team`.
pub fn classify_outcome<'a>(
    records: &'a [MatchRecord],
    team: &str,
) -> Grouping<Outcome, &'a MatchRecord> {
    group_by(records, |r| Outcome::of(r, team))
}

/// Mean goals per game computed from the integer sum. `0.0` when empty.
pub fn average_goals_per_game(records: &[MatchRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: u64 = records.iter().map(MatchRecord::goal_count).sum();
    total as f64 / records.len() as f64
}

/// Mean goals per game computed over goal counts mapped to `f64` first.
///
/// Agrees exactly with [`average_goals_per_game`] while the goal sum stays
/// below 2^53, the range where `f64` holds every integer.
pub fn average_goals_per_game_as_f64(records: &[MatchRecord]) -> f64 {
    let (sum, n) = records
        .iter()
        .map(|r| r.goal_count() as f64)
        .fold((0.0_f64, 0_usize), |(sum, n), g| (sum + g, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

/// Number of home games `team` won.
pub fn count_home_wins(records: &[MatchRecord], team: &str) -> usize {
    records
        .iter()
        .filter(|r| r.home_team() == team)
        .filter(|r| r.home_goals() > r.away_goals())
        .count()
}

/// Game with the fewest goals, found by a stable sort on goal count.
///
/// Ties resolve to the earliest record.
pub fn min_goals_game_sorted(records: &[MatchRecord]) -> Result<&MatchRecord, QueryError> {
    let mut sorted: Vec<&MatchRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.goal_count());
    sorted.first().copied().ok_or(QueryError::EmptyCollection)
}

/// Game with the fewest goals, found by a single linear scan.
///
/// Only a strictly smaller count replaces the current pick, so ties resolve
/// to the earliest record, same as [`min_goals_game_sorted`].
pub fn min_goals_game_scan(records: &[MatchRecord]) -> Result<&MatchRecord, QueryError> {
    let mut iter = records.iter();
    let mut best = iter.next().ok_or(QueryError::EmptyCollection)?;
    for r in iter {
        if r.goal_count() < best.goal_count() {
            best = r;
        }
    }
    Ok(best)
}

/// Distinct kickoff times in first-occurrence order.
pub fn distinct_start_times(records: &[MatchRecord]) -> Vec<&str> {
    records
        .iter()
        .map(MatchRecord::time)
        .collect::<IndexSet<&str>>()
        .into_iter()
        .collect()
}

/// Join values with `", "` for reporting.
pub fn join_times(times: &[&str]) -> String {
    times.join(", ")
}

/// Whether `team` won any away game by at least `margin` goals.
pub fn any_away_win_by_margin(records: &[MatchRecord], team: &str, margin: i64) -> bool {
    records
        .iter()
        .filter(|r| r.away_team() == team)
        .any(|r| i64::from(r.away_goals()) - i64::from(r.home_goals()) >= margin)
}

/// Output of [`group_then_flatten`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedFlatten<'a> {
    /// Filtered records in their original order.
    pub filtered: Vec<&'a MatchRecord>,
    /// Filtered records grouped by home team.
    pub groups: Grouping<&'a str, &'a MatchRecord>,
    /// All groups concatenated in first-seen group order.
    pub flattened: Vec<&'a MatchRecord>,
}

/// Keep records whose date contains `year`, group them by home team, then
/// flatten the groups back into one list.
///
/// The flattened list holds the same records as `filtered`, but ordered
/// group by group. Interleaved home teams therefore come out reordered.
pub fn group_then_flatten<'a>(records: &'a [MatchRecord], year: &str) -> GroupedFlatten<'a> {
    let filtered: Vec<&MatchRecord> = records.iter().filter(|r| r.date().contains(year)).collect();
    let groups = group_by(filtered.iter().copied(), |&r| r.home_team());
    let flattened = groups.flatten();
    GroupedFlatten {
        filtered,
        groups,
        flattened,
    }
}
