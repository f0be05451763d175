//! Match record type and the row parsing rule.
//!
//! A source row has seven columns in fixed order:
//!
//! ```text
//! date, time, home, away, home_goals, away_goals, info
//! ```
//!
//! `date`, `time` and `info` are kept verbatim. Team names and goal counts
//! are trimmed before validation.

use crate::error::RecordError;
use std::fmt;

/// Number of columns in a source row.
pub const FIELD_COUNT: usize = 7;

/// One played fixture. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchRecord {
    date: String,
    time: String,
    home_team: String,
    away_team: String,
    home_goals: u32,
    away_goals: u32,
    info: String,
}

impl MatchRecord {
    /// Build a record from already-validated values.
    ///
    /// Used by tests and callers that construct fixtures directly; source
    /// rows go through [`MatchRecord::from_fields`].
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_goals: u32,
        away_goals: u32,
        info: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_goals,
            away_goals,
            info: info.into(),
        }
    }

    /// Parse one row that has already been split into fields.
    ///
    /// `line` is only used for error messages.
    pub fn from_fields<S: AsRef<str>>(line: u64, fields: &[S]) -> Result<Self, RecordError> {
        if fields.len() != FIELD_COUNT {
            return Err(RecordError::FieldCount {
                line,
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }

        let home_team = team(line, "home team", fields[2].as_ref())?;
        let away_team = team(line, "away team", fields[3].as_ref())?;
        let home_goals = goals(line, "home goals", fields[4].as_ref())?;
        let away_goals = goals(line, "away goals", fields[5].as_ref())?;

        Ok(Self {
            date: fields[0].as_ref().to_string(),
            time: fields[1].as_ref().to_string(),
            home_team,
            away_team,
            home_goals,
            away_goals,
            info: fields[6].as_ref().to_string(),
        })
    }

    /// Split a delimited text line and parse it.
    pub fn parse_line(line: u64, text: &str, delimiter: char) -> Result<Self, RecordError> {
        let fields: Vec<&str> = text.split(delimiter).collect();
        Self::from_fields(line, &fields)
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn home_goals(&self) -> u32 {
        self.home_goals
    }

    pub fn away_goals(&self) -> u32 {
        self.away_goals
    }

    /// Competition labels, e.g. `BUNDESLIGA`.
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Total goals scored in the match.
    ///
    /// Widened to `u64` so two `u32::MAX` scores still add up.
    pub fn goal_count(&self) -> u64 {
        u64::from(self.home_goals) + u64::from(self.away_goals)
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} - {} {}:{}",
            self.date, self.time, self.home_team, self.away_team, self.home_goals, self.away_goals
        )?;
        if !self.info.is_empty() {
            write!(f, " ({})", self.info)?;
        }
        Ok(())
    }
}

fn team(line: u64, field: &'static str, raw: &str) -> Result<String, RecordError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(RecordError::EmptyTeam { line, field });
    }
    Ok(name.to_string())
}

fn goals(line: u64, field: &'static str, raw: &str) -> Result<u32, RecordError> {
    let value = raw.trim();
    // u32::from_str accepts a leading '+'; goal columns are plain digits.
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecordError::InvalidGoals {
            line,
            field,
            value: value.to_string(),
        });
    }
    value.parse().map_err(|_| RecordError::InvalidGoals {
        line,
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let r = MatchRecord::parse_line(
            2,
            "16.08.2019,20:30,FC Bayern Muenchen,Hertha BSC,2,2,BUNDESLIGA",
            ',',
        )
        .unwrap();
        assert_eq!(r.date(), "16.08.2019");
        assert_eq!(r.time(), "20:30");
        assert_eq!(r.home_team(), "FC Bayern Muenchen");
        assert_eq!(r.away_team(), "Hertha BSC");
        assert_eq!(r.home_goals(), 2);
        assert_eq!(r.away_goals(), 2);
        assert_eq!(r.info(), "BUNDESLIGA");
        assert_eq!(r.goal_count(), 4);
    }

    #[test]
    fn test_parse_line_other_delimiter() {
        let r = MatchRecord::parse_line(2, "01.09.2019;15:30;A;B;0;3;DFB_POKAL", ';').unwrap();
        assert_eq!(r.away_goals(), 3);
        assert_eq!(r.info(), "DFB_POKAL");
    }

    #[test]
    fn test_goals_and_teams_are_trimmed() {
        let r = MatchRecord::from_fields(5, &["d", "t", " A ", " B", " 1", "0 ", ""]).unwrap();
        assert_eq!(r.home_team(), "A");
        assert_eq!(r.away_team(), "B");
        assert_eq!(r.home_goals(), 1);
        assert_eq!(r.info(), "");
    }

    #[test]
    fn test_wrong_field_count() {
        let err = MatchRecord::parse_line(3, "d,t,A,B,1,0", ',').unwrap_err();
        assert_eq!(
            err,
            RecordError::FieldCount {
                line: 3,
                expected: 7,
                found: 6
            }
        );
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_negative_goals_rejected() {
        let err = MatchRecord::parse_line(4, "d,t,A,B,-1,0,X", ',').unwrap_err();
        assert!(matches!(
            err,
            RecordError::InvalidGoals { field: "home goals", .. }
        ));
    }

    #[test]
    fn test_plus_sign_and_text_rejected() {
        assert!(MatchRecord::parse_line(4, "d,t,A,B,+1,0,X", ',').is_err());
        assert!(MatchRecord::parse_line(4, "d,t,A,B,1,two,X", ',').is_err());
        assert!(MatchRecord::parse_line(4, "d,t,A,B,,0,X", ',').is_err());
    }

    #[test]
    fn test_empty_team_rejected() {
        let err = MatchRecord::parse_line(7, "d,t,  ,B,1,0,X", ',').unwrap_err();
        assert_eq!(
            err,
            RecordError::EmptyTeam {
                line: 7,
                field: "home team"
            }
        );
    }

    #[test]
    fn test_goal_count_at_u32_max() {
        let r = MatchRecord::parse_line(2, "d,t,A,B,4294967295,1,X", ',').unwrap();
        assert_eq!(r.home_goals(), u32::MAX);
        assert_eq!(r.goal_count(), u64::from(u32::MAX) + 1);

        let r = MatchRecord::new("d", "t", "A", "B", u32::MAX, u32::MAX, "");
        assert_eq!(r.goal_count(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_goals_beyond_u32_rejected() {
        let err = MatchRecord::parse_line(2, "d,t,A,B,4294967296,1,X", ',').unwrap_err();
        assert!(matches!(
            err,
            RecordError::InvalidGoals { field: "home goals", .. }
        ));
    }

    #[test]
    fn test_display() {
        let r = MatchRecord::new("16.08.2019", "20:30", "A", "B", 2, 1, "BUNDESLIGA");
        assert_eq!(r.to_string(), "16.08.2019 20:30 A - B 2:1 (BUNDESLIGA)");
        let r = MatchRecord::new("16.08.2019", "20:30", "A", "B", 0, 0, "");
        assert_eq!(r.to_string(), "16.08.2019 20:30 A - B 0:0");
    }
}
