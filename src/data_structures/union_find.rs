/// Disjoint-set forest over nodes `0..len`, with union by rank and path
/// compression. Used by Kruskal's algorithm to track which nodes already
/// belong to the same component.
///
/// The textbook tree-inversion union (no rank, unbounded chain depth)
/// produces the same accepted-edge set under an ascending edge scan; this
/// structure keeps that observable behavior while bounding chain depth.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    /// Creates a forest of `len` singleton sets, each node its own root.
    pub fn new(len: usize) -> Self {
        UnionFind {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the forest.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the root of the set containing `node`, compressing the
    /// walked chain onto the root.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: point everything on the chain at the root.
        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets containing `a` and `b`. Returns `false` when they
    /// already share a root, leaving the forest untouched; merging anyway
    /// would silently corrupt the parent structure.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else if self.rank[root_a] > self.rank[root_b] {
            self.parent[root_b] = root_a;
        } else {
            self.parent[root_b] = root_a;
            self.rank[root_a] += 1;
        }
        self.components -= 1;
        true
    }

    /// Returns true if `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
