use kururi_core::{shuffle, EntryList};

fn shuffled(labels: &[&str], seed: u64) -> Vec<String> {
    let mut items: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
    shuffle(&mut items, seed);
    items
}

#[test]
fn shuffle_preserves_the_multiset() {
    let labels = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
    for seed in 0..50u64 {
        let mut result = shuffled(&labels, seed);
        result.sort();
        let mut expected: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(result, expected, "seed {seed}");
    }
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let labels = ["one", "two", "three", "four", "five"];
    assert_eq!(shuffled(&labels, 42), shuffled(&labels, 42));
}

#[test]
fn shuffle_reaches_many_orderings() {
    let labels = ["a", "b", "c", "d", "e"];
    let mut orderings: Vec<Vec<String>> = (0..100u64).map(|seed| shuffled(&labels, seed)).collect();
    orderings.sort();
    orderings.dedup();
    assert!(orderings.len() > 10, "only {} distinct orderings", orderings.len());
}

#[test]
fn shuffle_handles_trivial_lengths() {
    let mut empty: Vec<u8> = Vec::new();
    shuffle(&mut empty, 9);
    assert!(empty.is_empty());

    let mut single = vec!["solo"];
    shuffle(&mut single, 9);
    assert_eq!(single, vec!["solo"]);
}

#[test]
fn every_item_visits_every_position_evenly() {
    let labels = ["a", "b", "c", "d"];
    let trials = 8000u64;
    let mut occupancy = [[0usize; 4]; 4];
    for seed in 0..trials {
        for (position, label) in shuffled(&labels, seed).iter().enumerate() {
            let item = labels.iter().position(|l| l == label).unwrap();
            occupancy[position][item] += 1;
        }
    }
    let expected = trials as usize / labels.len();
    let margin = expected / 10;
    for (position, row) in occupancy.iter().enumerate() {
        for (item, &hits) in row.iter().enumerate() {
            assert!(
                hits.abs_diff(expected) < margin,
                "item {item} at position {position}: {hits} hits, expected about {expected}"
            );
        }
    }
}

#[test]
fn entry_list_shuffle_keeps_labels() {
    let mut list = EntryList::from_labels(["red", "green", "blue", "cyan"]);
    list.shuffle(0x5EED);
    assert_eq!(list.len(), 4);
    for label in ["red", "green", "blue", "cyan"] {
        assert!(list.contains(label), "lost {label}");
    }
}
