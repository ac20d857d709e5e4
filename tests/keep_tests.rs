//! Deck composition integration tests.

use deck_keeper::backend::InMemoryBackend;
use deck_keeper::cards::{Card, Format};
use deck_keeper::core::Error;
use deck_keeper::deck::{DeckGroup, DeckMetadata, Keep, KeepEvent};
use futures::executor::block_on;
use proptest::prelude::*;

fn signi(key: &str) -> Card {
    Card::new(key, format!("WX-{key}"), key, "シグニ")
}

fn lb_signi(key: &str) -> Card {
    signi(key).with_life_burst("カードを1枚引く。")
}

// =============================================================================
// Classification and Caps
// =============================================================================

/// Cards land in the group their type and life burst select.
#[test]
fn test_classification() {
    let mut keep = Keep::new();
    assert_eq!(keep.append(&lb_signi("a")), DeckGroup::MainLb);
    assert_eq!(keep.append(&signi("b")), DeckGroup::MainNoLb);
    assert_eq!(keep.append(&Card::new("s", "WX-S", "s", "スペル")), DeckGroup::MainNoLb);
    assert_eq!(keep.append(&Card::new("k", "WX-K", "k", "キー")), DeckGroup::White);
    assert_eq!(keep.append(&Card::new("r", "WX-R", "r", "レゾナ")), DeckGroup::White);
    assert_eq!(keep.append(&Card::new("x", "WX-X", "x", "アーツ")), DeckGroup::Others);
}

/// Four copies fit in a main group, a fifth does not.
#[test]
fn test_main_cap() {
    let mut keep = Keep::new();
    let card = lb_signi("a");
    for _ in 0..4 {
        keep.append(&card);
    }
    assert_eq!(keep.amount("a", DeckGroup::MainLb), Some(4));

    keep.append(&card);
    assert_eq!(keep.amount("a", DeckGroup::MainLb), Some(4));
    assert_eq!(keep.group(DeckGroup::MainLb).len(), 1);
}

/// White cards cap at one copy.
#[test]
fn test_white_cap() {
    let mut keep = Keep::new();
    let lrig = Card::new("タマ", "WX-T", "タマ", "ルリグ");
    keep.append(&lrig);
    keep.append(&lrig);
    assert_eq!(keep.amount("タマ", DeckGroup::White), Some(1));
}

/// Increasing is capped the same way as appending.
#[test]
fn test_increase_cap() {
    let mut keep = Keep::new();
    keep.append(&signi("a"));
    assert!(keep.increase("a", DeckGroup::MainNoLb, 10));
    assert_eq!(keep.amount("a", DeckGroup::MainNoLb), Some(4));
}

// =============================================================================
// Trim
// =============================================================================

/// Decrementing to zero demotes to others on trim.
#[test]
fn test_trim_demotes() {
    let mut keep = Keep::new();
    keep.append(&signi("a"));
    keep.increase("a", DeckGroup::MainNoLb, -1);
    keep.trim();

    assert!(keep.group(DeckGroup::MainNoLb).is_empty());
    assert_eq!(keep.amount("a", DeckGroup::Others), Some(1));
}

/// Decrementing below zero discards on trim.
#[test]
fn test_trim_discards() {
    let mut keep = Keep::new();
    keep.append(&signi("a"));
    keep.increase("a", DeckGroup::MainNoLb, -1);
    keep.increase("a", DeckGroup::MainNoLb, -1);
    keep.trim();

    assert!(keep.is_empty());
}

/// A demoted card already present in others keeps a single copy.
#[test]
fn test_trim_merges_into_others() {
    let mut keep = Keep::new();
    keep.append(&signi("a"));
    keep.append_to_others(&signi("a"));
    keep.increase("a", DeckGroup::MainNoLb, -1);
    keep.trim();

    assert_eq!(keep.group(DeckGroup::Others).len(), 1);
    assert_eq!(keep.amount("a", DeckGroup::Others), Some(1));
}

/// Trimming a consistent deck changes nothing.
#[test]
fn test_trim_idempotent() {
    let mut keep = Keep::new();
    keep.append(&lb_signi("a"));
    keep.append(&lb_signi("a"));
    keep.append(&Card::new("タマ", "WX-T", "タマ", "ルリグ"));
    keep.trim();
    let before: Vec<_> = DeckGroup::ALL.iter().map(|&g| keep.group(g).to_vec()).collect();

    keep.trim();
    let after: Vec<_> = DeckGroup::ALL.iter().map(|&g| keep.group(g).to_vec()).collect();
    assert_eq!(before, after);
}

#[derive(Clone, Debug)]
enum Op {
    Append(usize),
    Increase(usize, i32),
    Remove(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..6).prop_map(Op::Append),
        (0usize..6, prop_oneof![Just(1), Just(-1)]).prop_map(|(i, d)| Op::Increase(i, d)),
        (0usize..6).prop_map(Op::Remove),
    ]
}

fn pool() -> Vec<Card> {
    vec![
        lb_signi("a"),
        signi("b"),
        Card::new("c", "WX-C", "c", "スペル"),
        Card::new("d", "WX-D", "d", "ルリグ"),
        Card::new("e", "WX-E", "e", "ピース"),
        Card::new("f", "WX-F", "f", "アーツ"),
    ]
}

proptest! {
    /// Amounts stay within `[-1, max]` and trim leaves `[1, max]` with no duplicates.
    #[test]
    fn prop_trim_normalizes(ops in prop::collection::vec(op(), 0..60)) {
        let cards = pool();
        let mut keep = Keep::new();

        for op in ops {
            match op {
                Op::Append(i) => { keep.append(&cards[i]); }
                Op::Increase(i, delta) => {
                    let group = DeckGroup::of(&cards[i]);
                    keep.increase(&cards[i].pronounce, group, delta);
                }
                Op::Remove(i) => {
                    let group = DeckGroup::of(&cards[i]);
                    keep.remove(&cards[i].pronounce, group);
                }
            }
            for group in DeckGroup::ALL {
                for kept in keep.group(group) {
                    prop_assert!((-1..=group.max_amount()).contains(&kept.amount));
                }
            }
        }

        keep.trim();
        for group in DeckGroup::ALL {
            let entries = keep.group(group);
            for kept in entries {
                prop_assert!((1..=group.max_amount()).contains(&kept.amount));
            }
            let mut keys: Vec<&str> = entries.iter().map(|k| k.pronounce()).collect();
            keys.sort_unstable();
            keys.dedup();
            prop_assert_eq!(keys.len(), entries.len());
        }
    }
}

// =============================================================================
// Save
// =============================================================================

/// Saving trims first and hands the deck to the backend.
#[test]
fn test_save_trims_and_persists() {
    let backend = InMemoryBackend::new(Vec::new());
    let mut keep = Keep::new();
    keep.set_name("赤単");
    keep.append(&signi("a"));
    keep.append(&signi("b"));
    keep.increase("b", DeckGroup::MainNoLb, -1);
    keep.increase("b", DeckGroup::MainNoLb, -1);

    let metadata = DeckMetadata {
        format: Format::KeySelection,
        ..DeckMetadata::default()
    };
    let deck = block_on(keep.save_deck(&backend, &metadata)).unwrap();

    assert_eq!(deck.name, "赤単");
    assert_eq!(deck.format, Format::KeySelection);
    assert_eq!(deck.cards.len(), 1);
    assert!(deck.cards.iter().all(|e| e.amount > 0));
    assert_eq!(backend.saved_decks(), vec![deck]);
}

/// A rejected save is reported and the groups keep their trimmed state.
#[test]
fn test_save_rejected_no_rollback() {
    let backend = InMemoryBackend::new(Vec::new());
    backend.set_reject_saves(true);

    let mut keep = Keep::new();
    keep.append(&signi("a"));
    keep.increase("a", DeckGroup::MainNoLb, -1);

    let err = block_on(keep.save_deck(&backend, &DeckMetadata::default())).unwrap_err();
    assert!(matches!(err, Error::SaveRejected));
    assert_eq!(keep.amount("a", DeckGroup::Others), Some(1));
    assert!(backend.saved_decks().is_empty());
}

/// Observers see the save after it succeeds.
#[test]
fn test_save_notifies() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let backend = InMemoryBackend::new(Vec::new());
    let saved = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&saved);

    let mut keep = Keep::new();
    keep.set_deck_id(42);
    keep.observers_mut().subscribe(move |e| {
        if let KeepEvent::Saved { deck_id } = e {
            sink.borrow_mut().push(*deck_id);
        }
    });

    block_on(keep.save_deck(&backend, &DeckMetadata::default())).unwrap();
    assert_eq!(*saved.borrow(), vec![42]);
}

/// A saved deck survives a JSON round trip.
#[test]
fn test_deck_json() {
    let mut keep = Keep::new();
    keep.append(&Card::new("タマ", "WX-T", "タマ", "ルリグ"));
    keep.append(&lb_signi("a"));

    let deck = keep.build_deck(&DeckMetadata::default());
    let json = serde_json::to_string(&deck).unwrap();
    let back: deck_keeper::deck::Deck = serde_json::from_str(&json).unwrap();
    assert_eq!(back, deck);
    assert_eq!(back.lrig, "タマ");
}
