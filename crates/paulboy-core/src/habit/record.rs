use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The five tracked habit categories, in selection-slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Habit {
    Body,
    Mind,
    Spiritual,
    Skill,
    Social,
}

impl Habit {
    pub const ALL: [Self; 5] = [
        Self::Body,
        Self::Mind,
        Self::Spiritual,
        Self::Skill,
        Self::Social,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Mind => "mind",
            Self::Spiritual => "spiritual",
            Self::Skill => "skill",
            Self::Social => "social",
        }
    }

    /// Habit at a selection slot (0..=4).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|h| h.label() == name)
    }
}

/// One habit's persisted counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitEntry {
    /// Lifetime completion count; only grows, except by external reset.
    pub count: u32,
    /// True once the habit was checked on the record's date.
    pub checked_today: bool,
}

/// The whole persisted record: one calendar date plus all five entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitRecord {
    pub date: NaiveDate,
    pub habits: BTreeMap<Habit, HabitEntry>,
}

impl HabitRecord {
    /// Zeroed record for a first run.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            habits: Habit::ALL
                .iter()
                .map(|&h| (h, HabitEntry::default()))
                .collect(),
        }
    }

    pub fn entry(&self, habit: Habit) -> HabitEntry {
        self.habits.get(&habit).copied().unwrap_or_default()
    }

    /// Clear every daily check flag, keeping counts.
    pub fn reset_daily_checks(&mut self) {
        for entry in self.habits.values_mut() {
            entry.checked_today = false;
        }
    }
}

/// Number of days in the given month; 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    use chrono::Datelike;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map_or(0, |d| d.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn serializes_with_date_and_lowercase_habit_keys() {
        let mut record = HabitRecord::empty(date(2026, 8, 7));
        record.habits.insert(
            Habit::Body,
            HabitEntry {
                count: 3,
                checked_today: true,
            },
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2026-08-07");
        assert_eq!(json["habits"]["body"]["count"], 3);
        assert_eq!(json["habits"]["body"]["checked_today"], true);
        assert_eq!(json["habits"]["spiritual"]["count"], 0);
    }

    #[test]
    fn reset_keeps_counts() {
        let mut record = HabitRecord::empty(date(2026, 8, 7));
        for entry in record.habits.values_mut() {
            entry.count = 9;
            entry.checked_today = true;
        }
        record.reset_daily_checks();
        for entry in record.habits.values() {
            assert_eq!(entry.count, 9);
            assert!(!entry.checked_today);
        }
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2028, 2), 29);
        assert_eq!(days_in_month(2026, 12), 31);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 13), 0);
    }

    #[test]
    fn from_index_covers_all_slots() {
        assert_eq!(Habit::from_index(0), Some(Habit::Body));
        assert_eq!(Habit::from_index(4), Some(Habit::Social));
        assert_eq!(Habit::from_index(5), None);
    }
}
