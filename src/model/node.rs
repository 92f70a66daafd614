//! Node and edge types of the tree models.

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

/// Index of an edge weight in an [UnrootedTree](crate::model::UnrootedTree).
pub type EdgeIndex = usize;

// =#========================================================================#=
// ULTRAMETRIC NODE
// =#========================================================================#=
/// A node of an [UltrametricTree](crate::model::UltrametricTree).
///
/// # Invariants
/// - Leaves have `age` 0 and `num_leaves` 1
/// - `age` of a node is strictly less than the `age` of its parent
/// - `weight` is `parent.age - age`, and NaN for the root
/// - `num_leaves` is the sum of the children's `num_leaves`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UltrametricNode {
    parent: Option<NodeIndex>,
    num_leaves: usize,
    weight: f64,
    age: f64,
}

impl UltrametricNode {
    /// Creates a parentless node (NaN weight) spanning `num_leaves` leaves.
    pub fn new(num_leaves: usize, age: f64) -> Self {
        UltrametricNode {
            parent: None,
            num_leaves,
            weight: f64::NAN,
            age,
        }
    }

    /// Creates a parentless leaf of age 0.
    pub fn new_leaf() -> Self {
        Self::new(1, 0.0)
    }

    /// Attaches this node below `parent`, which has age `parent_age`.
    pub fn set_parent(&mut self, parent: NodeIndex, parent_age: f64) {
        self.parent = Some(parent);
        self.weight = parent_age - self.age;
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns the number of leaves in the subtree of this node.
    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// Returns the weight of the edge to the parent (NaN for the root).
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the height above the leaf level.
    pub fn age(&self) -> f64 {
        self.age
    }

    /// Returns `true` if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns `true` if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.num_leaves == 1
    }
}

// =#========================================================================#=
// HALF EDGE
// =#========================================================================#=
/// One end of an undirected edge, as stored at the other endpoint.
///
/// The reciprocal half at node `to` points back and has the same `edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfEdge {
    /// Node this half-edge leads to
    pub to: NodeIndex,
    /// Index into the edge weights of the tree
    pub edge: EdgeIndex,
}

impl HalfEdge {
    pub fn new(to: NodeIndex, edge: EdgeIndex) -> Self {
        HalfEdge { to, edge }
    }
}
