use std::collections::HashMap;
use std::hash::Hash;

/// A node of the disjoint-set forest.
struct Node<T> {
    /// The parent element; a root is its own parent.
    parent: T,
}

impl<T> Node<T> {
    /// Creates a node that is its own parent.
    fn new(key: T) -> Node<T> {
        Node { parent: key }
    }
}

/// Union-find over arbitrary copyable keys, with path compression.
///
/// No rank or size heuristic is applied: [`union`](Self::union) simply hangs
/// the first root under the second.
///
/// # Example
///
/// ```
/// use mst_algorithm::disjoint_set::DisjointSet;
///
/// let mut set = DisjointSet::new();
/// set.insert('a');
/// set.insert('b');
/// let (ra, rb) = (set.find('a'), set.find('b'));
/// set.union(ra, rb);
/// assert_eq!(set.find('a'), set.find('b'));
/// ```
pub struct DisjointSet<T> {
    nodes: HashMap<T, Node<T>>,
}

impl<T: Copy + Eq + Hash> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Eq + Hash> DisjointSet<T> {
    pub fn new() -> DisjointSet<T> {
        DisjointSet {
            nodes: HashMap::new(),
        }
    }

    /// Adds `key` as a singleton set. Re-inserting resets it to a root.
    pub fn insert(&mut self, key: T) {
        self.nodes.insert(key, Node::new(key));
    }

    pub fn contains(&self, key: T) -> bool {
        self.nodes.contains_key(&key)
    }

    /// Number of elements tracked.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the representative of `key`'s set.
    ///
    /// Every node on the path is re-pointed straight at the root before
    /// returning. A key never inserted is added as its own singleton set.
    pub fn find(&mut self, key: T) -> T {
        let parent = match self.nodes.get(&key) {
            Some(node) => node.parent,
            None => {
                self.insert(key);
                return key;
            }
        };
        if parent == key {
            return key;
        }
        let root = self.find(parent);
        if let Some(node) = self.nodes.get_mut(&key) {
            node.parent = root;
        }
        root
    }

    /// Merges two sets by making `root_a` point at `root_b`.
    ///
    /// Both arguments must already be roots, i.e. results of
    /// [`find`](Self::find). Passing a non-root links the wrong subtree.
    pub fn union(&mut self, root_a: T, root_b: T) {
        debug_assert!(self.is_root(root_a), "union called with a non-root");
        debug_assert!(self.is_root(root_b), "union called with a non-root");
        if root_a == root_b {
            return;
        }
        self.nodes
            .entry(root_a)
            .or_insert_with(|| Node::new(root_a))
            .parent = root_b;
    }

    /// Whether `a` and `b` currently share a representative.
    pub fn same_set(&mut self, a: T, b: T) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets.
    pub fn count_sets(&self) -> usize {
        self.nodes
            .iter()
            .filter(|(key, node)| **key == node.parent)
            .count()
    }

    fn is_root(&self, key: T) -> bool {
        self.nodes.get(&key).map_or(true, |node| node.parent == key)
    }

    #[cfg(test)]
    fn parent(&self, key: T) -> Option<T> {
        self.nodes.get(&key).map(|node| node.parent)
    }
}
