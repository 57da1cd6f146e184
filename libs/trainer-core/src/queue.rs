//! Next-item selection over the due set.
//!
//! Due items are drawn with weights biased toward sentences with a lapse
//! history and sentences never reviewed successfully; every due item keeps
//! weight >= 1 so none is unreachable. When nothing is due the
//! soonest-due item is returned so the session always makes progress.

use chrono::NaiveDate;
use rand::Rng;

use crate::store::ProgressStore;
use crate::types::{ScheduleEntry, SentenceItem};

/// Pick the next sentence to present.
///
/// The random source is injected so callers can seed it; selection over the
/// due set is a single weighted draw. Items without a store entry count as
/// due (never seen).
///
/// # Panics
///
/// Panics if `items` is empty; selecting from an empty set is a caller bug,
/// not a runtime condition.
pub fn select_next<'a, R: Rng + ?Sized>(
    items: &'a [SentenceItem],
    store: &ProgressStore,
    today: NaiveDate,
    rng: &mut R,
) -> &'a SentenceItem {
    assert!(!items.is_empty(), "select_next requires a non-empty item set");

    let due: Vec<&SentenceItem> = items
        .iter()
        .filter(|item| store.get(item.id).map_or(true, |e| e.is_due(today)))
        .collect();

    if due.is_empty() {
        // Nothing due: soonest-due wins, first in input order on ties.
        return items
            .iter()
            .min_by_key(|item| store.get(item.id).map_or(NaiveDate::MIN, |e| e.due))
            .expect("items is non-empty");
    }

    let weights: Vec<u64> = due
        .iter()
        .map(|item| weight(store.get(item.id)))
        .collect();
    let total: u64 = weights.iter().sum();

    let draw = rng.gen_range(0..total);
    let mut accumulated = 0;
    for (item, w) in due.iter().copied().zip(&weights) {
        accumulated += w;
        if draw < accumulated {
            return item;
        }
    }
    due[due.len() - 1]
}

/// Selection weight: 1 base, +3 per lapse, +2 if never successfully
/// reviewed (interval still 0).
fn weight(entry: Option<&ScheduleEntry>) -> u64 {
    let (lapses, interval) = entry.map_or((0, 0), |e| (e.lapses, e.interval_days));
    1 + 3 * u64::from(lapses) + if interval == 0 { 2 } else { 0 }
}
