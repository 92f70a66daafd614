use distree::matrix::random::DEFAULT_WEIGHTS;
use distree::{DistanceMatrix, Linkage, RandomTree, random_additive_matrix};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_matrix(seed: u64, n: usize) -> DistanceMatrix {
    let mut rng = SmallRng::seed_from_u64(seed);
    random_additive_matrix(n, &mut rng)
}

fn assert_distances_close(actual: &DistanceMatrix, expected: &DistanceMatrix) {
    assert_eq!(actual.size(), expected.size());
    for i in 0..expected.size() {
        for j in 0..expected.size() {
            let (a, e) = (actual[(i, j)], expected[(i, j)]);
            assert!((a - e).abs() <= 1e-9 * e.max(1.0), "d[{i}][{j}]: {a} != {e}");
        }
    }
}

#[test]
fn test_random_matrix_is_reproducible() {
    assert_eq!(random_matrix(11, 8), random_matrix(11, 8));
    assert_eq!(random_matrix(11, 0), DistanceMatrix::default());
}

#[test]
fn test_random_tree_distances() {
    let mut rng = SmallRng::seed_from_u64(5);
    let tree = RandomTree::generate(5, DEFAULT_WEIGHTS, &mut rng);
    let d = tree.distance_matrix();
    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(d[(i, j)], tree.distance(i, j));
        }
    }
}

// --- PROPERTIES ---
fn additive_invariants(seed: u64, n: usize) {
    init_log();
    let d = random_matrix(seed, n);
    assert_eq!(d.size(), n);
    assert_eq!(d.validate(), Ok(()));
    assert_eq!(d.additive(), Ok(()));

    let tree = d.additive_tree();
    assert!(tree.is_valid());
    assert!(tree.num_nodes() <= 2 * n - 2);
    // Integral weights keep all sums exact
    assert_eq!(tree.leaf_distances(), d);
}

fn fractional_additive_invariants(seed: u64, n: usize) {
    init_log();
    let mut rng = SmallRng::seed_from_u64(seed);
    let d = RandomTree::generate(n, 0.01..3.0, &mut rng).distance_matrix();
    assert_eq!(d.validate(), Ok(()));
    assert_eq!(d.additive(), Ok(()));

    let tree = d.additive_tree();
    assert!(tree.is_valid());
    assert!(tree.num_nodes() <= 2 * n - 2);
    assert_distances_close(&tree.leaf_distances(), &d);
}

fn neighbor_join_invariants(seed: u64, n: usize) {
    init_log();
    let d = random_matrix(seed, n);
    let tree = d.neighbor_join();

    assert!(tree.is_valid());
    assert_eq!(tree.num_nodes(), 2 * n - 2);
    assert_eq!(tree.num_edges(), 2 * n - 3);
    for leaf in 0..n {
        assert_eq!(tree.degree(leaf), 1);
    }
    for node in n..tree.num_nodes() {
        assert_eq!(tree.degree(node), 3);
    }
    // Neighbor joining is exact on additive matrices
    assert_distances_close(&tree.leaf_distances(), &d);
}

fn ultrametric_invariants(seed: u64, n: usize, linkage: Linkage) {
    init_log();
    let d = random_matrix(seed, n);
    let tree = distree::build_ultrametric(d, linkage);

    assert_eq!(tree.num_nodes(), 2 * n - 1);
    assert_eq!(tree.root().map(|root| root.num_leaves()), Some(n));
    assert!(tree.is_ultrametric());
    for (index, node) in tree.iter().enumerate() {
        if let Some(parent) = node.parent() {
            assert!(parent > index);
            assert!(tree[parent].age() >= node.age());
        }
    }
    for k in 1..=n {
        let clusters = tree.cut(k);
        assert_eq!(clusters.len(), k);
        let mut leaves: Vec<usize> = clusters.into_iter().flatten().collect();
        leaves.sort_unstable();
        assert_eq!(leaves, (0..n).collect::<Vec<_>>());
    }
}

proptest! {
    #[test]
    fn proptest_additive_tree(seed in 0u64..1000, n in 2usize..16) {
        additive_invariants(seed, n);
    }

    #[test]
    fn proptest_additive_tree_fractional(seed in 0u64..1000, n in 2usize..16) {
        fractional_additive_invariants(seed, n);
    }

    #[test]
    fn proptest_neighbor_join(seed in 0u64..1000, n in 3usize..16) {
        neighbor_join_invariants(seed, n);
    }

    #[test]
    fn proptest_average_linkage(seed in 0u64..1000, n in 1usize..16) {
        ultrametric_invariants(seed, n, Linkage::Average);
    }

    #[test]
    fn proptest_single_linkage(seed in 0u64..1000, n in 1usize..16) {
        ultrametric_invariants(seed, n, Linkage::Minimum);
    }
}
