//! Match outcome relative to a reference team.

use crate::MatchRecord;
use std::fmt;

/// Result of a match from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Won,
    Draw,
    Lost,
}

impl Outcome {
    /// All outcomes in report order.
    pub const ALL: [Outcome; 3] = [Outcome::Won, Outcome::Draw, Outcome::Lost];

    /// Classify `record` from `team`'s point of view.
    ///
    /// Records the team did not play in are a draw when level, lost otherwise.
    pub fn of(record: &MatchRecord, team: &str) -> Outcome {
        let home = record.home_goals();
        let away = record.away_goals();
        if home == away {
            Outcome::Draw
        } else if (record.home_team() == team && home > away)
            || (record.away_team() == team && away > home)
        {
            Outcome::Won
        } else {
            Outcome::Lost
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Won => "WON",
            Outcome::Draw => "DRAW",
            Outcome::Lost => "LOST",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(home: &str, away: &str, hg: u32, ag: u32) -> MatchRecord {
        MatchRecord::new("01.01.2019", "15:30", home, away, hg, ag, "")
    }

    #[test]
    fn test_home_and_away_wins() {
        assert_eq!(Outcome::of(&game("A", "B", 2, 0), "A"), Outcome::Won);
        assert_eq!(Outcome::of(&game("B", "A", 0, 2), "A"), Outcome::Won);
    }

    #[test]
    fn test_losses() {
        assert_eq!(Outcome::of(&game("A", "B", 0, 1), "A"), Outcome::Lost);
        assert_eq!(Outcome::of(&game("B", "A", 3, 1), "A"), Outcome::Lost);
    }

    #[test]
    fn test_draw_regardless_of_team() {
        assert_eq!(Outcome::of(&game("A", "B", 1, 1), "A"), Outcome::Draw);
        assert_eq!(Outcome::of(&game("C", "D", 0, 0), "A"), Outcome::Draw);
    }

    #[test]
    fn test_uninvolved_team_loses() {
        assert_eq!(Outcome::of(&game("C", "D", 2, 0), "A"), Outcome::Lost);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = Outcome::ALL.iter().map(|o| o.to_string()).collect();
        assert_eq!(labels, vec!["WON", "DRAW", "LOST"]);
    }
}
