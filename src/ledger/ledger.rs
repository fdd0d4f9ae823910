use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{
    category::{Category, CategoryFilter},
    expense::Expense,
};
use crate::{errors::LedgerError, storage::ExpenseStore};

/// Per-category aggregate over the full entries sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryStats {
    pub count: usize,
    pub total: Decimal,
}

/// Single source of truth for expense records and the active filter.
///
/// Owns its persistence adapter; every mutation writes the full unfiltered
/// sequence back through it. A failed write is downgraded to a warning and
/// the in-memory state stays authoritative for the rest of the session.
pub struct Ledger {
    entries: Vec<Expense>,
    filter: CategoryFilter,
    store: ExpenseStore,
}

impl Ledger {
    /// Builds a ready ledger from the given adapter. A never-written slot
    /// yields an empty ledger; an unreadable or corrupt slot does too, with
    /// a warning, so prior data loss never blocks the session.
    pub fn initialize(store: ExpenseStore) -> Self {
        let entries = match store.load() {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "failed to load stored expenses, starting empty");
                Vec::new()
            }
        };
        Self {
            entries,
            filter: CategoryFilter::All,
            store,
        }
    }

    /// Records a new expense and persists the updated sequence. Validation
    /// happens here regardless of any upstream pre-check; the ledger never
    /// trusts its callers.
    pub fn add_expense(
        &mut self,
        amount: Decimal,
        category: Category,
    ) -> Result<Expense, LedgerError> {
        let expense = Expense::new(amount, category)?;
        self.entries.push(expense.clone());
        debug!(id = %expense.id, %category, %amount, "expense recorded");
        self.persist();
        Ok(expense)
    }

    /// Removes the entry with the given id, if present. Idempotent; an
    /// unknown id is a no-op and skips the storage write. Returns whether an
    /// entry was removed.
    pub fn remove_expense(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        if removed {
            debug!(%id, "expense removed");
            self.persist();
        }
        removed
    }

    /// Replaces the active filter. A view concern: never persisted.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Entries passing the active filter, in insertion order.
    pub fn visible_expenses(&self) -> Vec<&Expense> {
        self.entries
            .iter()
            .filter(|entry| self.filter.matches(entry.category))
            .collect()
    }

    /// Sum of amounts over the visible entries. Zero for an empty view.
    pub fn total(&self) -> Decimal {
        self.entries
            .iter()
            .filter(|entry| self.filter.matches(entry.category))
            .map(|entry| entry.amount)
            .sum()
    }

    /// Count and total per category over **all** entries, ignoring the
    /// active filter. Categories with no entries are absent.
    pub fn category_stats(&self) -> BTreeMap<Category, CategoryStats> {
        let mut stats: BTreeMap<Category, CategoryStats> = BTreeMap::new();
        for entry in &self.entries {
            let bucket = stats.entry(entry.category).or_default();
            bucket.count += 1;
            bucket.total += entry.amount;
        }
        stats
    }

    /// Full unfiltered sequence, in insertion order.
    pub fn entries(&self) -> &[Expense] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.entries) {
            warn!(
                error = %err,
                "failed to persist expenses, in-memory state remains authoritative"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidInput;

    fn ledger() -> Ledger {
        Ledger::initialize(ExpenseStore::in_memory())
    }

    fn dec(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    #[test]
    fn starts_empty_with_all_filter() {
        let ledger = ledger();
        assert!(ledger.is_empty());
        assert_eq!(ledger.filter(), CategoryFilter::All);
        assert_eq!(ledger.total(), Decimal::ZERO);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut ledger = ledger();
        let first = ledger.add_expense(dec("10"), Category::Food).unwrap();
        let second = ledger.add_expense(dec("20"), Category::Bills).unwrap();
        let ids: Vec<_> = ledger.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn invalid_amount_leaves_entries_unchanged() {
        let mut ledger = ledger();
        ledger.add_expense(dec("10"), Category::Food).unwrap();
        let err = ledger.add_expense(dec("0"), Category::Food).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InvalidInput(InvalidInput::NonPositiveAmount(_))
        ));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn remove_is_idempotent_and_tolerates_unknown_ids() {
        let mut ledger = ledger();
        let kept = ledger.add_expense(dec("10"), Category::Food).unwrap();
        let gone = ledger.add_expense(dec("20"), Category::Food).unwrap();

        assert!(ledger.remove_expense(gone.id));
        assert!(!ledger.remove_expense(gone.id));
        assert!(!ledger.remove_expense(Uuid::new_v4()));

        let ids: Vec<_> = ledger.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![kept.id]);
    }

    #[test]
    fn total_respects_filter_and_avoids_float_drift() {
        let mut ledger = ledger();
        ledger.add_expense(dec("0.1"), Category::Food).unwrap();
        ledger.add_expense(dec("0.2"), Category::Food).unwrap();
        ledger.add_expense(dec("5"), Category::Travel).unwrap();

        ledger.set_filter(CategoryFilter::Only(Category::Food));
        assert_eq!(ledger.total(), dec("0.3"));

        ledger.set_filter(CategoryFilter::All);
        assert_eq!(ledger.total(), dec("5.3"));
    }

    #[test]
    fn category_stats_ignore_active_filter() {
        let mut ledger = ledger();
        ledger.add_expense(dec("10"), Category::Food).unwrap();
        ledger.add_expense(dec("20"), Category::Food).unwrap();
        ledger.add_expense(dec("5"), Category::Travel).unwrap();
        ledger.set_filter(CategoryFilter::Only(Category::Travel));

        let stats = ledger.category_stats();
        assert_eq!(stats.len(), 2);
        assert_eq!(
            stats[&Category::Food],
            CategoryStats {
                count: 2,
                total: dec("30")
            }
        );
        assert_eq!(
            stats[&Category::Travel],
            CategoryStats {
                count: 1,
                total: dec("5")
            }
        );
    }
}
