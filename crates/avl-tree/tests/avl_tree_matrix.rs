use avl_tree::{AvlTree, BuildError, TreeConfig};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

fn ascending<V: Clone, C: Fn(&V, &V) -> i32>(tree: &AvlTree<V, C>) -> Vec<V> {
    let mut out = Vec::new();
    let mut curr = tree.min();
    while let Some(n) = curr {
        out.push(n.value().clone());
        curr = n.successor();
    }
    out
}

#[test]
fn avl_tree_pi_digits_matrix() {
    let mut tree: AvlTree<i32> = AvlTree::new();
    for v in [3, 1, 4, 1, 5, 9, 2, 6] {
        tree.insert(v);
        tree.assert_valid().unwrap();
    }

    assert_eq!(tree.size(), 7);
    assert_eq!(tree.min().map(|n| *n.value()), Some(1));
    assert_eq!(tree.max().map(|n| *n.value()), Some(9));
    assert_eq!(ascending(&tree), vec![1, 2, 3, 4, 5, 6, 9]);
}

#[test]
fn avl_tree_delete_from_permutation_matrix() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let mut perm: Vec<i32> = (0..10).collect();
        perm.shuffle(&mut rng);

        let mut tree: AvlTree<i32> = AvlTree::new();
        tree.extend(perm.iter().copied());
        assert_eq!(tree.delete(&5), Some(5));
        tree.assert_valid().unwrap();

        assert_eq!(ascending(&tree), vec![0, 1, 2, 3, 4, 6, 7, 8, 9]);
        assert_eq!(tree.size(), 9);
    }
}

#[test]
fn avl_tree_single_value_round_trip_matrix() {
    let mut tree = AvlTree::new();
    tree.insert("only");
    assert_eq!(tree.size(), 1);
    assert_eq!(tree.min(), tree.max());
    assert_eq!(tree.min(), tree.root());

    assert_eq!(tree.delete(&"only"), Some("only"));
    assert!(tree.min().is_none());
    assert!(tree.max().is_none());
    assert!(tree.root().is_none());
    assert_eq!(tree.size(), 0);
    assert!(tree.is_empty());
    tree.assert_valid().unwrap();
}

#[test]
fn avl_tree_lookup_matrix() {
    let mut tree: AvlTree<i32> = AvlTree::new();
    assert_eq!(tree.lookup(&4), (0, false));

    tree.insert(4);
    assert_eq!(tree.lookup(&4), (4, true));
    assert_eq!(tree.get(&4), Some(&4));
    assert!(tree.contains(&4));

    tree.delete(&4);
    assert_eq!(tree.lookup(&4), (0, false));
    assert_eq!(tree.get(&4), None);
    assert!(!tree.contains(&4));
}

#[test]
fn avl_tree_delete_missing_is_no_op_matrix() {
    let mut tree: AvlTree<i32> = (0..50).step_by(2).collect();
    let before = tree.print();
    assert_eq!(tree.delete(&7), None);
    assert_eq!(tree.delete(&100), None);
    assert_eq!(tree.size(), 25);
    assert_eq!(tree.print(), before);

    let mut empty: AvlTree<i32> = AvlTree::new();
    assert_eq!(empty.delete(&1), None);
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Entry {
    key: u32,
    label: &'static str,
}

fn by_key(a: &Entry, b: &Entry) -> i32 {
    a.key.cmp(&b.key) as i32
}

fn entry(key: u32, label: &'static str) -> Entry {
    Entry { key, label }
}

#[test]
fn avl_tree_duplicate_replaces_in_place_matrix() {
    let mut tree = AvlTree::with_comparator(by_key);
    for (k, label) in [(5, "five"), (2, "two"), (8, "eight"), (1, "one"), (3, "three")] {
        tree.insert(entry(k, label));
    }
    let shape = tree.print();
    let size = tree.size();
    let height = tree.height();
    let slot = tree.find(&entry(2, "")).unwrap().index();

    let old = tree.insert(entry(2, "deux"));
    assert_eq!(old, Some(entry(2, "two")));
    assert_eq!(tree.size(), size);
    assert_eq!(tree.height(), height);
    assert_eq!(tree.print(), shape.replace("\"two\"", "\"deux\""));
    assert_eq!(tree.find(&entry(2, "")).unwrap().index(), slot);

    let (found, ok) = tree.lookup(&entry(2, ""));
    assert!(ok);
    assert_eq!(found.label, "deux");
}

#[test]
fn avl_tree_custom_comparator_matrix() {
    let mut tree = AvlTree::with_comparator(|a: &i32, b: &i32| b.cmp(a) as i32);
    tree.extend([1, 5, 3, 4, 2]);
    assert_eq!(ascending(&tree), vec![5, 4, 3, 2, 1]);
    assert_eq!(tree.min().map(|n| *n.value()), Some(5));

    // Comparator results are only read for their sign.
    let mut wide = AvlTree::with_comparator(|a: &i64, b: &i64| (a - b) as i32);
    wide.extend([30, -10, 20, 0]);
    assert_eq!(ascending(&wide), vec![-10, 0, 20, 30]);
    wide.assert_valid().unwrap();
}

#[test]
fn avl_tree_ladder_insert_delete_matrix() {
    let mut tree: AvlTree<i32> = AvlTree::new();

    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 300);
    assert!(tree.height() as f64 <= 1.4405 * (302f64).log2());

    for i in (0..300).step_by(3) {
        assert_eq!(tree.delete(&i), Some(i));
        tree.assert_valid().unwrap();
    }

    for i in 0..300 {
        if i % 3 == 0 {
            assert_eq!(tree.get(&i), None);
        } else {
            assert_eq!(tree.get(&i), Some(&i));
        }
    }
    assert_eq!(tree.size(), 200);
}

#[test]
fn avl_tree_delete_all_orders_matrix() {
    let keys: Vec<i32> = (0..64).collect();
    let orders: [Vec<i32>; 3] = [
        keys.clone(),
        keys.iter().rev().copied().collect(),
        keys.iter().map(|k| (k * 37) % 64).collect(),
    ];
    for order in orders {
        let mut tree: AvlTree<i32> = keys.iter().copied().collect();
        for (n, k) in order.iter().enumerate() {
            assert_eq!(tree.delete(k), Some(*k));
            tree.assert_valid().unwrap();
            assert_eq!(tree.size(), keys.len() - n - 1);
        }
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }
}

#[test]
fn avl_tree_clear_matrix() {
    let mut tree: AvlTree<i32> = (0..10).collect();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert!(tree.min().is_none());
    tree.assert_valid().unwrap();

    tree.insert(3);
    assert_eq!(ascending(&tree), vec![3]);
}

#[test]
fn avl_tree_reuses_freed_slots_matrix() {
    let mut tree: AvlTree<i32> = (0..100).collect();
    let first = tree.min().unwrap().index();
    for round in 0..10 {
        let values: Vec<i32> = tree.iter().copied().collect();
        for v in &values {
            tree.delete(v);
        }
        assert!(tree.is_empty());
        for i in 0..100 {
            tree.insert(i + round);
        }
        tree.assert_valid().unwrap();
    }
    // Every slot index handed out stays below the peak population.
    let max_index = tree.iter().filter_map(|v| tree.find(v)).map(|n| n.index()).max();
    assert!(max_index.unwrap() < 100);
    assert!(tree.node(first).is_some());
}

#[test]
fn avl_tree_builder_matrix() {
    let tree = AvlTree::<u64>::builder()
        .capacity(32)
        .check_invariants(true)
        .ordered()
        .build()
        .unwrap();
    assert_eq!(
        *tree.config(),
        TreeConfig {
            capacity: 32,
            check_invariants: true
        }
    );

    let missing = AvlTree::<u64>::builder().capacity(4).build();
    assert_eq!(missing.err(), Some(BuildError::MissingComparator));

    if usize::BITS > 32 {
        let too_big = AvlTree::<u64>::builder()
            .capacity(usize::MAX)
            .ordered()
            .build();
        assert!(matches!(
            too_big.err(),
            Some(BuildError::CapacityTooLarge { requested, .. }) if requested == usize::MAX
        ));
    }
}

#[test]
fn avl_tree_config_from_toml_matrix() {
    let config: TreeConfig = toml::from_str(
        r#"
        capacity = 256
        check_invariants = true
        "#,
    )
    .unwrap();
    assert_eq!(config.capacity, 256);
    assert!(config.check_invariants);

    let defaults: TreeConfig = toml::from_str("").unwrap();
    assert_eq!(defaults, TreeConfig::default());

    let mut tree = AvlTree::builder().config(config).ordered().build().unwrap();
    tree.extend(["pear", "apple", "fig"]);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), ["apple", "fig", "pear"]);
    assert_eq!(tree.config(), &config);
}

#[test]
fn avl_tree_checked_mode_runs_clean_matrix() {
    let mut tree = AvlTree::builder()
        .check_invariants(true)
        .ordered()
        .build()
        .unwrap();
    let mut rng = Xoshiro256StarStar::seed_from_u64(7);
    let mut keys: Vec<u16> = (0..500).collect();
    keys.shuffle(&mut rng);
    tree.extend(keys.iter().copied());
    keys.shuffle(&mut rng);
    for k in &keys[..250] {
        tree.delete(k);
    }
    assert_eq!(tree.size(), 250);
}
