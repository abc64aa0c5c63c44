//! In-memory habit counters mirrored to the persisted record.

use chrono::{Datelike, NaiveDate, Utc};

use super::record::{days_in_month, Habit, HabitEntry, HabitRecord};
use super::store::HabitStore;
use crate::error::StoreError;
use crate::events::Event;

/// Daily habit tracking with write-through persistence.
///
/// Loading reconciles the stored date against today: on a date change every
/// `checked_today` flag resets (counts survive) and the reset record is
/// persisted immediately with today's date.
pub struct HabitLedger {
    record: HabitRecord,
    store: Box<dyn HabitStore>,
}

impl HabitLedger {
    /// Load the record, reconciling day rollover.
    ///
    /// # Errors
    /// A missing record is not an error (first run, zeroed defaults); an
    /// unreadable or corrupt one propagates rather than silently zeroing
    /// user progress.
    pub fn load(store: Box<dyn HabitStore>, today: NaiveDate) -> Result<Self, StoreError> {
        let record = match store.read()? {
            None => HabitRecord::empty(today),
            Some(mut record) => {
                if record.date != today {
                    record.reset_daily_checks();
                    record.date = today;
                    store.write(&record)?;
                }
                record
            }
        };
        Ok(Self { record, store })
    }

    pub fn record(&self) -> &HabitRecord {
        &self.record
    }

    pub fn entry(&self, habit: Habit) -> HabitEntry {
        self.record.entry(habit)
    }

    /// Check off a habit. At most one increment per habit per calendar
    /// date: when already checked this returns `Ok(None)` and writes
    /// nothing. Otherwise the bumped record is persisted synchronously.
    pub fn increment(&mut self, habit: Habit) -> Result<Option<Event>, StoreError> {
        let entry = self.record.habits.entry(habit).or_default();
        if entry.checked_today {
            return Ok(None);
        }
        entry.count += 1;
        entry.checked_today = true;
        let count = entry.count;
        self.store.write(&self.record)?;
        Ok(Some(Event::HabitChecked {
            habit,
            count,
            at: Utc::now(),
        }))
    }

    /// Display fraction for the habit tab: lifetime count over the day
    /// count of the given month. The numerator is the all-time total, not
    /// a per-month figure.
    pub fn monthly_progress(&self, habit: Habit, date: NaiveDate) -> (u32, u32) {
        (
            self.entry(habit).count,
            days_in_month(date.year(), date.month()),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use proptest::prelude::*;

    /// Store double that counts writes and can be pre-seeded.
    #[derive(Default)]
    struct MemStore {
        record: Rc<RefCell<Option<HabitRecord>>>,
        writes: Rc<RefCell<u32>>,
    }

    impl MemStore {
        fn seeded(record: HabitRecord) -> Self {
            let store = Self::default();
            *store.record.borrow_mut() = Some(record);
            store
        }

        fn handles(&self) -> (Rc<RefCell<Option<HabitRecord>>>, Rc<RefCell<u32>>) {
            (Rc::clone(&self.record), Rc::clone(&self.writes))
        }
    }

    impl HabitStore for MemStore {
        fn read(&self) -> Result<Option<HabitRecord>, StoreError> {
            Ok(self.record.borrow().clone())
        }

        fn write(&self, record: &HabitRecord) -> Result<(), StoreError> {
            *self.record.borrow_mut() = Some(record.clone());
            *self.writes.borrow_mut() += 1;
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_run_starts_zeroed_without_writing() {
        let store = MemStore::default();
        let (_, writes) = store.handles();
        let ledger = HabitLedger::load(Box::new(store), date(2026, 8, 7)).unwrap();
        assert_eq!(ledger.entry(Habit::Body), HabitEntry::default());
        assert_eq!(*writes.borrow(), 0);
    }

    #[test]
    fn increment_persists_and_checks() {
        let store = MemStore::default();
        let (record, writes) = store.handles();
        let mut ledger = HabitLedger::load(Box::new(store), date(2026, 8, 7)).unwrap();

        let event = ledger.increment(Habit::Mind).unwrap();
        assert!(matches!(event, Some(Event::HabitChecked { habit: Habit::Mind, count: 1, .. })));
        assert_eq!(*writes.borrow(), 1);
        assert_eq!(
            record.borrow().as_ref().unwrap().entry(Habit::Mind),
            HabitEntry { count: 1, checked_today: true }
        );
    }

    #[test]
    fn second_increment_same_day_is_a_noop() {
        let store = MemStore::default();
        let (_, writes) = store.handles();
        let mut ledger = HabitLedger::load(Box::new(store), date(2026, 8, 7)).unwrap();

        ledger.increment(Habit::Skill).unwrap();
        assert!(ledger.increment(Habit::Skill).unwrap().is_none());
        assert_eq!(ledger.entry(Habit::Skill).count, 1);
        assert_eq!(*writes.borrow(), 1);
    }

    #[test]
    fn rollover_resets_checks_keeps_counts_and_persists() {
        let mut stale = HabitRecord::empty(date(2026, 8, 6));
        for entry in stale.habits.values_mut() {
            entry.count = 4;
            entry.checked_today = true;
        }
        let store = MemStore::seeded(stale);
        let (record, writes) = store.handles();

        let ledger = HabitLedger::load(Box::new(store), date(2026, 8, 7)).unwrap();
        for &habit in &Habit::ALL {
            assert_eq!(ledger.entry(habit).count, 4);
            assert!(!ledger.entry(habit).checked_today);
        }
        assert_eq!(*writes.borrow(), 1);
        assert_eq!(record.borrow().as_ref().unwrap().date, date(2026, 8, 7));
    }

    #[test]
    fn same_day_reload_keeps_checks() {
        let mut saved = HabitRecord::empty(date(2026, 8, 7));
        saved.habits.get_mut(&Habit::Social).unwrap().checked_today = true;
        let store = MemStore::seeded(saved);
        let (_, writes) = store.handles();

        let ledger = HabitLedger::load(Box::new(store), date(2026, 8, 7)).unwrap();
        assert!(ledger.entry(Habit::Social).checked_today);
        assert_eq!(*writes.borrow(), 0);
    }

    #[test]
    fn monthly_progress_is_lifetime_count_over_month_days() {
        let mut saved = HabitRecord::empty(date(2026, 2, 10));
        saved.habits.get_mut(&Habit::Body).unwrap().count = 45;
        let ledger =
            HabitLedger::load(Box::new(MemStore::seeded(saved)), date(2026, 2, 10)).unwrap();
        // 45 lifetime completions shown over February's 28 days.
        assert_eq!(ledger.monthly_progress(Habit::Body, date(2026, 2, 10)), (45, 28));
    }

    proptest! {
        /// Any number of same-day increments bumps the count at most once.
        #[test]
        fn at_most_one_increment_per_day(calls in 1usize..40) {
            let mut ledger =
                HabitLedger::load(Box::new(MemStore::default()), date(2026, 8, 7)).unwrap();
            for _ in 0..calls {
                ledger.increment(Habit::Spiritual).unwrap();
            }
            prop_assert_eq!(ledger.entry(Habit::Spiritual).count, 1);
        }
    }
}
