//! Tests for garage/garage_state

use super::*;
use crate::garage::{MemoryStore, SavedItemKind};
use chrono::{Duration, Utc};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn vehicle(id: &str, title: &str, price: Option<u32>, minutes_ago: i64) -> SavedItem {
    let mut item = SavedItem::new(id, title, SavedItemKind::Vehicle);
    item.price = price;
    item.saved_at = Utc::now() - Duration::minutes(minutes_ago);
    item
}

fn garage_with(items: Vec<SavedItem>) -> Garage {
    Garage::new(Box::new(MemoryStore::new(items)))
}

fn ids(items: &[SavedItem]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn test_save_adds_item() {
    let mut garage = garage_with(Vec::new());
    assert!(garage.is_empty());

    let outcome = garage.save(vehicle("new-n2", "2025 Honda Civic Sport", Some(27345), 0)).unwrap();

    assert_eq!(outcome, SaveOutcome::Added);
    assert_eq!(garage.len(), 1);
    assert!(garage.contains("new-n2"));
}

#[test]
fn test_save_same_id_updates_in_place() {
    let original = vehicle("used-u1", "2021 Honda Accord", Some(26000), 60);
    let original_saved_at = original.saved_at;
    let mut garage = garage_with(vec![original, vehicle("used-u2", "2020 Toyota RAV4", None, 30)]);

    let outcome = garage
        .save(vehicle("used-u1", "2021 Honda Accord EX-L", Some(25500), 0))
        .unwrap();

    assert_eq!(outcome, SaveOutcome::Updated);
    let items = garage.items();
    assert_eq!(ids(&items), vec!["used-u1", "used-u2"]);
    assert_eq!(items[0].title, "2021 Honda Accord EX-L");
    assert_eq!(items[0].price, Some(25500));
    assert_eq!(items[0].saved_at, original_saved_at);
}

#[test]
fn test_remove() {
    let mut garage = garage_with(vec![
        vehicle("a", "Alpha", None, 0),
        vehicle("b", "Bravo", None, 0),
    ]);

    assert!(garage.remove("a").unwrap());
    assert!(!garage.remove("a").unwrap());
    assert_eq!(ids(&garage.items()), vec!["b"]);
}

#[test]
fn test_filter_blank_returns_all_in_order() {
    let garage = garage_with(vec![
        vehicle("a", "2025 Honda Civic", None, 0),
        vehicle("b", "2025 Kia Telluride", None, 0),
    ]);

    assert_eq!(ids(&garage.filter("   ")), vec!["a", "b"]);
}

#[test]
fn test_filter_requires_every_term() {
    let garage = garage_with(vec![
        vehicle("a", "2025 Honda Civic Sport", None, 0),
        vehicle("b", "2021 Honda Accord EX-L", None, 0),
        vehicle("c", "2025 Kia Telluride SX", None, 0),
    ]);

    assert_eq!(ids(&garage.filter("honda civic")), vec!["a"]);
    assert!(garage.filter("tesla").is_empty());
}

#[test]
fn test_filter_is_fuzzy() {
    let garage = garage_with(vec![vehicle("c", "2025 Kia Telluride SX", None, 0)]);
    assert_eq!(ids(&garage.filter("tlrd")), vec!["c"]);
}

#[test]
fn test_sorted_newest_first() {
    let garage = garage_with(vec![
        vehicle("old", "Old", None, 90),
        vehicle("new", "New", None, 1),
        vehicle("mid", "Mid", None, 30),
    ]);

    assert_eq!(ids(&garage.sorted(GarageSort::Newest)), vec!["new", "mid", "old"]);
}

#[test]
fn test_sorted_by_price_puts_unpriced_last() {
    let garage = garage_with(vec![
        vehicle("none", "Review", None, 0),
        vehicle("high", "Truck", Some(58000), 0),
        vehicle("low", "Hatch", Some(21000), 0),
    ]);

    assert_eq!(ids(&garage.sorted(GarageSort::Price)), vec!["low", "high", "none"]);
}

#[test]
fn test_sorted_by_name_ignores_case() {
    let garage = garage_with(vec![
        vehicle("b", "bronco", None, 0),
        vehicle("a", "Accord", None, 0),
        vehicle("c", "Camry", None, 0),
    ]);

    assert_eq!(ids(&garage.sorted(GarageSort::Name)), vec!["a", "b", "c"]);
}

#[test]
fn test_sort_cycles() {
    let sort = GarageSort::default();
    assert_eq!(sort, GarageSort::Newest);
    assert_eq!(sort.next().next().next(), GarageSort::Newest);
    assert_eq!(sort.next().label(), "price");
}

#[test]
fn test_compare_follows_request_order_and_caps() {
    let garage = garage_with(vec![
        vehicle("a", "A", None, 0),
        vehicle("b", "B", None, 0),
        vehicle("c", "C", None, 0),
        vehicle("d", "D", None, 0),
    ]);

    let picked = garage.compare(&["d", "missing", "a", "d", "b", "c"]);
    assert_eq!(ids(&picked), vec!["d", "a", "b"]);
}

#[test]
fn test_subscribers_notified_on_save_and_remove() {
    let calls = Rc::new(Cell::new(0));
    let mut garage = garage_with(Vec::new());

    let sink = Rc::clone(&calls);
    let id = garage.subscribe(Box::new(move |_| sink.set(sink.get() + 1)));

    garage.save(vehicle("a", "A", None, 0)).unwrap();
    garage.remove("a").unwrap();
    // Removing an unknown id does not touch the store
    garage.remove("a").unwrap();
    assert_eq!(calls.get(), 2);

    assert!(garage.unsubscribe(id));
    garage.save(vehicle("b", "B", None, 0)).unwrap();
    assert_eq!(calls.get(), 2);
}

proptest! {
    #[test]
    fn prop_save_never_duplicates_ids(keys in prop::collection::vec(0u8..6, 0..30)) {
        let mut garage = garage_with(Vec::new());
        for key in &keys {
            let id = format!("id-{key}");
            garage.save(vehicle(&id, "Car", None, 0)).unwrap();
        }

        let items = garage.items();
        let mut seen = std::collections::HashSet::new();
        for item in &items {
            prop_assert!(seen.insert(item.id.clone()));
        }
        let distinct: std::collections::HashSet<_> = keys.iter().collect();
        prop_assert_eq!(items.len(), distinct.len());
    }

    #[test]
    fn prop_compare_never_exceeds_max(ids in prop::collection::vec("[a-e]", 0..10)) {
        let garage = garage_with(
            ["a", "b", "c", "d", "e"].iter().map(|id| vehicle(id, id, None, 0)).collect(),
        );
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        prop_assert!(garage.compare(&refs).len() <= MAX_COMPARE);
    }
}
