use distree::{DistanceMatrix, HalfEdge, NeighborJoinBuilder};

fn example_matrix() -> DistanceMatrix {
    DistanceMatrix::new(vec![
        vec![0.0, 23.0, 27.0, 20.0],
        vec![23.0, 0.0, 30.0, 28.0],
        vec![27.0, 30.0, 0.0, 30.0],
        vec![20.0, 28.0, 30.0, 0.0],
    ])
}

#[test]
fn test_neighbor_join_example() {
    let tree = distree::build_neighbor_join(example_matrix());

    assert_eq!(tree.num_leaves(), 4);
    assert_eq!(tree.num_nodes(), 6);
    assert_eq!(tree.num_edges(), 5);
    assert_eq!(tree.edge_weights(), &[12.0, 8.0, 2.0, 13.5, 16.5]);

    assert_eq!(tree.neighbors(0), &[HalfEdge::new(5, 1)]);
    assert_eq!(tree.neighbors(1), &[HalfEdge::new(4, 3)]);
    assert_eq!(tree.neighbors(2), &[HalfEdge::new(4, 4)]);
    assert_eq!(tree.neighbors(3), &[HalfEdge::new(5, 0)]);
    assert_eq!(
        tree.neighbors(4),
        &[HalfEdge::new(5, 2), HalfEdge::new(1, 3), HalfEdge::new(2, 4)]
    );
    assert_eq!(
        tree.neighbors(5),
        &[HalfEdge::new(3, 0), HalfEdge::new(0, 1), HalfEdge::new(4, 2)]
    );
}

#[test]
fn test_neighbor_join_edges_and_paths() {
    let tree = example_matrix().neighbor_join();
    assert_eq!(
        tree.edges(),
        vec![(0, 5, 8.0), (1, 4, 13.5), (2, 4, 16.5), (3, 5, 12.0), (4, 5, 2.0)]
    );
    assert_eq!(tree.path_length(1, 2), Some(30.0));
    assert_eq!(tree.path_length(0, 3), Some(20.0));
    assert_eq!(tree.path_length(0, 1), Some(23.5));
    assert!(tree.is_valid());

    let (adjacency, weights) = tree.into_parts();
    assert_eq!(adjacency[3], vec![HalfEdge::new(5, 0)]);
    assert_eq!(weights, vec![12.0, 8.0, 2.0, 13.5, 16.5]);
}

#[test]
fn test_neighbor_join_is_binary() {
    let tree = NeighborJoinBuilder::new().build(example_matrix());
    for leaf in 0..4 {
        assert_eq!(tree.degree(leaf), 1);
    }
    assert_eq!(tree.degree(4), 3);
    assert_eq!(tree.degree(5), 3);
}

#[test]
fn test_neighbor_join_three_leaves() {
    let d = DistanceMatrix::new(vec![
        vec![0.0, 5.0, 9.0],
        vec![5.0, 0.0, 10.0],
        vec![9.0, 10.0, 0.0],
    ]);
    let tree = d.neighbor_join();
    assert_eq!(tree.num_nodes(), 4);
    assert_eq!(tree.num_edges(), 3);
    assert_eq!(tree.degree(3), 3);
    assert_eq!(tree.leaf_distances(), d);
}

#[test]
fn test_neighbor_join_degenerate_sizes() {
    let empty = DistanceMatrix::default().neighbor_join();
    assert_eq!(empty.num_nodes(), 0);
    assert_eq!(empty.num_edges(), 0);

    let single = DistanceMatrix::zeros(1).neighbor_join();
    assert_eq!(single.num_nodes(), 1);
    assert_eq!(single.num_edges(), 0);
    assert!(single.is_valid());
}
