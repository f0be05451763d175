//! Runs the full query battery and renders the results as text.
//!
//! Sections appear in a fixed order, one per query. A query that has no
//! answer (the minimum lookups on an empty collection) is rendered inline
//! and does not stop later sections.

use crate::config::ReportConfig;
use crate::error::QueryError;
use crate::query;
use crate::{MatchRecord, Outcome};

/// One labelled block of report output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Short name used in logs.
    pub name: &'static str,
    pub lines: Vec<String>,
}

impl Section {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            lines: Vec::new(),
        }
    }

    fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    fn records<'a>(mut self, records: impl IntoIterator<Item = &'a MatchRecord>) -> Self {
        self.lines.extend(records.into_iter().map(ToString::to_string));
        self
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn min_line(result: Result<&MatchRecord, QueryError>) -> String {
    match result {
        Ok(record) => format!("Game with least number of goals: {record}"),
        Err(e) => {
            log::warn!("min goals query failed: {e}");
            format!("Game with least number of goals: none ({e})")
        }
    }
}

/// Evaluate every query against `records`.
pub fn build_sections(records: &[MatchRecord], config: &ReportConfig) -> Vec<Section> {
    let team = config.team.as_str();
    let mut sections = Vec::new();

    let tagged = query::count_by_tag(records, &config.tag);
    sections.push(Section::new("count_by_tag").line(format!(
        "There were {tagged} {} games",
        config.tag
    )));

    let partition = query::partition_by_home(records, team);
    sections.push(
        Section::new("partition_by_home")
            .line("*** HOME ***")
            .records(partition.home.iter().copied())
            .line("*** AWAY ***")
            .records(partition.away.iter().copied()),
    );

    let outcomes = query::classify_outcome(records, team);
    let mut section = Section::new("classify_outcome");
    for outcome in Outcome::ALL {
        section = section
            .line(format!("*** {outcome} ***"))
            .records(outcomes.get(&outcome).iter().copied());
    }
    sections.push(section);

    sections.push(
        Section::new("average_goals")
            .line(format!(
                "Average goals per game: {:.2}",
                query::average_goals_per_game(records)
            ))
            .line(format!(
                "Average goals per game: {:.2}",
                query::average_goals_per_game_as_f64(records)
            )),
    );

    let home_wins = query::count_home_wins(records, team);
    sections.push(
        Section::new("count_home_wins").line(format!("{team} won {home_wins} games at home")),
    );

    sections.push(
        Section::new("min_goals_game")
            .line(min_line(query::min_goals_game_sorted(records)))
            .line(min_line(query::min_goals_game_scan(records))),
    );

    let times = query::distinct_start_times(records);
    sections.push(Section::new("distinct_start_times").line(format!(
        "Distinct starting times: {}",
        query::join_times(&times)
    )));

    let away_win = query::any_away_win_by_margin(records, team, config.away_margin);
    sections.push(Section::new("away_win_by_margin").line(format!(
        "{team} won away game with at least {} goals difference: {}",
        config.away_margin,
        yes_no(away_win)
    )));

    let regrouped = query::group_then_flatten(records, &config.year);
    sections.push(
        Section::new("group_then_flatten")
            .line(format!(
                "*** {} GAMES, GROUPED BY HOME TEAM AND FLATTENED ***",
                config.year
            ))
            .records(regrouped.flattened.iter().copied()),
    );

    for section in &sections {
        log::debug!("{}: {} lines", section.name, section.lines.len());
    }
    sections
}

/// Render sections separated by blank lines.
pub fn render(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| s.lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Run every query and return the rendered report.
pub fn run_report(records: &[MatchRecord], config: &ReportConfig) -> String {
    render(&build_sections(records, config))
}
