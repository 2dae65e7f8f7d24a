use balanced_set::avl_tree::{AvlSet, Error};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeSet;

fn assert_matches(set: &AvlSet<u32>, expected: &BTreeSet<u32>) {
    assert_eq!(set.len(), expected.len());
    assert_eq!(set.is_empty(), expected.is_empty());
    assert!(set.check_balance().is_ok());
    match (expected.iter().next(), expected.iter().next_back()) {
        (Some(min), Some(max)) => {
            assert_eq!(set.first(), Ok(min));
            assert_eq!(set.last(), Ok(max));
        },
        _ => {
            assert_eq!(set.first(), Err(Error::Empty));
            assert_eq!(set.last(), Err(Error::Empty));
        },
    }
}

#[test]
fn int_test_avl_set() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..20000 {
        let value = rng.gen_range(0, 1000);

        match rng.gen_range(0, 3) {
            0 => assert_eq!(set.insert(value), expected.insert(value)),
            1 => assert_eq!(set.remove(&value), expected.remove(&value)),
            _ => assert_eq!(set.contains(&value), expected.contains(&value)),
        }

        assert_matches(&set, &expected);
    }

    for value in expected.iter() {
        assert!(set.contains(value));
    }
}

#[test]
fn int_test_avl_set_drain() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([2, 3, 5, 7]);
    let mut set = AvlSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..5000 {
        let value = rng.gen::<u32>();
        assert_eq!(set.insert(value), expected.insert(value));
    }
    assert_matches(&set, &expected);

    let mut values: Vec<u32> = expected.iter().cloned().collect();
    rng.shuffle(&mut values);
    for value in values {
        assert!(set.remove(&value));
        assert!(!set.remove(&value));
        expected.remove(&value);
        assert_matches(&set, &expected);
    }

    assert!(set.is_empty());
}

#[test]
fn int_test_avl_set_height_bound() {
    let mut set = AvlSet::new();
    for n in 1..2049u32 {
        set.insert(n);
        let height = set.check_balance().unwrap() as f64;
        assert!(height <= 1.45 * f64::from(n + 2).log2());
    }

    let mut rng: XorShiftRng = SeedableRng::from_seed([4, 4, 4, 4]);
    let mut set = AvlSet::new();
    for _ in 0..2048 {
        set.insert(rng.gen::<u32>());
        let height = set.check_balance().unwrap() as f64;
        assert!(height <= 1.45 * ((set.len() + 2) as f64).log2());
    }
}

#[test]
fn int_test_avl_set_clear() {
    let mut set = AvlSet::new();
    for value in 0..100u32 {
        set.insert(value);
    }
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.check_balance(), Ok(0));

    assert!(set.insert(7));
    assert_eq!(set.first(), Ok(&7));
}

#[test]
fn int_test_avl_set_reverse_comparator() {
    let mut set = AvlSet::with_comparator(|a: &i64, b: &i64| b.cmp(a));
    for value in -50..50 {
        assert!(set.insert(value));
    }
    assert_eq!(set.first(), Ok(&49));
    assert_eq!(set.last(), Ok(&-50));

    for value in (-50..50).filter(|value| value % 3 == 0) {
        assert!(set.remove(&value));
    }
    assert!(set.check_balance().is_ok());
    assert!(!set.contains(&0));
    assert!(set.contains(&1));
    assert_eq!(set.first(), Ok(&49));
    assert_eq!(set.last(), Ok(&-50));
}
