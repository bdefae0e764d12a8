/// Union-Find (Disjoint Sets) over dense node indices, scratch state for Kruskal's edge scan
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton sets (parent = self, rank 0)
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let rank = vec![0; n];
        UnionFind { parent, rank }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the root of element x with path compression.
    ///
    /// Iterative: one pass to locate the root, a second pass rewriting every
    /// visited parent link to point at it. Panics if `x >= len()`; callers
    /// resolve labels to indices first.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Union the sets containing x and y, returning the new root.
    ///
    /// The lower-rank root goes under the higher-rank one. On equal rank the
    /// root of `x` becomes the parent and its rank grows by one.
    pub fn union(&mut self, x: usize, y: usize) -> usize {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return root_x;
        }

        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
            root_y
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
            root_x
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
            root_x
        }
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    pub fn rank(&self, x: usize) -> usize {
        self.rank[x]
    }

    /// Parent link of x without compression (exposed for inspection in tests)
    pub fn parent(&self, x: usize) -> usize {
        self.parent[x]
    }

    /// Get all sets as groups of indices, ordered by smallest member
    pub fn get_sets(&mut self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        let mut root_to_group: indexmap::IndexMap<usize, Vec<usize>> = indexmap::IndexMap::new();

        for i in 0..n {
            let root = self.find(i);
            root_to_group.entry(root).or_default().push(i);
        }

        root_to_group.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.len(), 4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
            assert_eq!(uf.rank(i), 0);
        }
        assert_eq!(uf.get_sets(), vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_equal_rank_first_root_wins() {
        let mut uf = UnionFind::new(2);
        let root = uf.union(0, 1);
        assert_eq!(root, 0);
        assert_eq!(uf.parent(1), 0);
        assert_eq!(uf.rank(0), 1);
        assert_eq!(uf.rank(1), 0);

        let mut uf = UnionFind::new(2);
        assert_eq!(uf.union(1, 0), 1);
        assert_eq!(uf.parent(0), 1);
    }

    #[test]
    fn test_lower_rank_goes_under_higher() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1); // rank(0) = 1
        let root = uf.union(2, 0);
        assert_eq!(root, 0);
        assert_eq!(uf.parent(2), 0);
        assert_eq!(uf.rank(0), 1);
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut uf = UnionFind::new(2);
        uf.union(0, 1);
        assert_eq!(uf.union(1, 0), 0);
        assert_eq!(uf.rank(0), 1);
    }

    #[test]
    fn test_path_compression() {
        // Build chain 3 -> 2 -> 0 by hand-picked unions of equal rank
        let mut uf = UnionFind::new(4);
        uf.union(2, 3); // 3 under 2
        uf.union(0, 1); // 1 under 0
        uf.union(0, 2); // 2 under 0, so 3 -> 2 -> 0
        assert_eq!(uf.parent(3), 2);

        assert_eq!(uf.find(3), 0);
        assert_eq!(uf.parent(3), 0);
        assert!(uf.connected(1, 3));
    }

    #[test]
    fn test_get_sets() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 3);
        uf.union(4, 1);
        assert_eq!(uf.get_sets(), vec![vec![0, 3], vec![1, 4], vec![2]]);
    }
}
