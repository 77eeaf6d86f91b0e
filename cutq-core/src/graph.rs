//! Undirected problem graphs and cut counting
//!
//! The MaxCut problem is stated on an unweighted undirected graph. The
//! vertex set is implicit: every integer from 0 through the largest
//! label appearing in any edge is a vertex, and vertex labels double as
//! circuit-qubit indices.
//!
//! # Bitstring convention
//!
//! A bipartition can be written as a bitstring with one character per
//! vertex, read big-endian: position 0 is the *rightmost* character, so
//! vertex `i` is the character at index `len - 1 - i`. Bit 0 maps to
//! spin -1 and bit 1 to spin +1; an edge `(i, j)` contributes
//! `(1 - zᵢzⱼ)/2` to the cut. Every lookup is bounds-checked — a vertex
//! label the string cannot represent is an error, never a silent
//! wraparound.

use crate::error::QuantumError;
use crate::Result;

/// An undirected graph given as an edge list
///
/// Immutable once constructed. Invariants enforced at construction:
/// no self-loops, at least one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    edges: Vec<(usize, usize)>,
    num_vertices: usize,
}

impl Graph {
    /// Create a graph from a list of edges
    ///
    /// The vertex set is `0..=max_label`. Parallel edges are permitted
    /// (each counts separately toward a cut); self-loops are not.
    ///
    /// # Errors
    /// Returns [`QuantumError::SelfLoop`] for an edge `(v, v)` and
    /// [`QuantumError::ValidationError`] for an empty edge list.
    ///
    /// # Example
    /// ```
    /// use cutq_core::Graph;
    ///
    /// let square = Graph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// assert_eq!(square.num_vertices(), 4);
    /// assert_eq!(square.num_edges(), 4);
    /// ```
    pub fn from_edges(edges: &[(usize, usize)]) -> Result<Self> {
        if edges.is_empty() {
            return Err(QuantumError::ValidationError(
                "graph must have at least one edge".to_string(),
            ));
        }

        let mut max_vertex = 0;
        for &(a, b) in edges {
            if a == b {
                return Err(QuantumError::SelfLoop(a));
            }
            max_vertex = max_vertex.max(a).max(b);
        }

        Ok(Self {
            edges: edges.to_vec(),
            num_vertices: max_vertex + 1,
        })
    }

    /// Create a cycle graph with n vertices (n >= 3)
    pub fn cycle(num_vertices: usize) -> Result<Self> {
        if num_vertices < 3 {
            return Err(QuantumError::ValidationError(format!(
                "cycle graph needs at least 3 vertices, got {}",
                num_vertices
            )));
        }
        let edges: Vec<_> = (0..num_vertices)
            .map(|i| (i, (i + 1) % num_vertices))
            .collect();
        Self::from_edges(&edges)
    }

    /// Create a path graph with n vertices (n >= 2)
    pub fn path(num_vertices: usize) -> Result<Self> {
        if num_vertices < 2 {
            return Err(QuantumError::ValidationError(format!(
                "path graph needs at least 2 vertices, got {}",
                num_vertices
            )));
        }
        let edges: Vec<_> = (0..num_vertices - 1).map(|i| (i, i + 1)).collect();
        Self::from_edges(&edges)
    }

    /// Create a complete graph with n vertices (n >= 2)
    pub fn complete(num_vertices: usize) -> Result<Self> {
        let mut edges = Vec::new();
        for i in 0..num_vertices {
            for j in (i + 1)..num_vertices {
                edges.push((i, j));
            }
        }
        Self::from_edges(&edges)
    }

    /// Number of vertices (`max_label + 1`)
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of edges
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The edge list
    #[inline]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Count the edges crossing a bipartition given as two vertex sets
    ///
    /// `set_a` and `set_b` must be disjoint and together cover the
    /// vertex set exactly. Each crossing edge is counted once
    /// regardless of orientation, so the count is symmetric in the two
    /// sets.
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidPartition`] if a vertex appears
    /// in both sets, in neither set, or a set names a vertex the graph
    /// does not have.
    pub fn count_cuts(&self, set_a: &[usize], set_b: &[usize]) -> Result<usize> {
        // side[v] = Some(true) for A, Some(false) for B
        let mut side: Vec<Option<bool>> = vec![None; self.num_vertices];

        for (vertices, label) in [(set_a, true), (set_b, false)] {
            for &v in vertices {
                if v >= self.num_vertices {
                    return Err(QuantumError::InvalidPartition(format!(
                        "vertex {} is not in the graph (has {} vertices)",
                        v, self.num_vertices
                    )));
                }
                if side[v].is_some() {
                    return Err(QuantumError::InvalidPartition(format!(
                        "vertex {} assigned to both sides",
                        v
                    )));
                }
                side[v] = Some(label);
            }
        }

        if let Some(v) = side.iter().position(Option::is_none) {
            return Err(QuantumError::InvalidPartition(format!(
                "vertex {} assigned to neither side",
                v
            )));
        }

        Ok(self
            .edges
            .iter()
            .filter(|&&(a, b)| side[a] != side[b])
            .count())
    }

    /// Count the edges cut by a bipartition given as a bitstring
    ///
    /// See the module docs for the indexing convention. The string may
    /// be longer than the vertex count (leading characters are
    /// ignored), but every vertex must fit.
    ///
    /// # Errors
    /// Returns [`QuantumError::VertexOutOfRange`] if any vertex label
    /// is >= the string length, and
    /// [`QuantumError::InvalidPartition`] for characters other than
    /// '0'/'1'.
    ///
    /// # Example
    /// ```
    /// use cutq_core::Graph;
    ///
    /// let square = Graph::cycle(4).unwrap();
    /// assert_eq!(square.count_cuts_from_string("1010").unwrap(), 4);
    /// assert_eq!(square.count_cuts_from_string("1110").unwrap(), 2);
    /// ```
    pub fn count_cuts_from_string(&self, bits: &str) -> Result<usize> {
        let chars: Vec<char> = bits.chars().collect();
        let len = chars.len();

        let bit_of = |vertex: usize| -> Result<bool> {
            if vertex >= len {
                return Err(QuantumError::VertexOutOfRange { vertex, len });
            }
            match chars[len - 1 - vertex] {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(QuantumError::InvalidPartition(format!(
                    "bitstring character '{}' is not 0 or 1",
                    other
                ))),
            }
        };

        let mut cuts = 0;
        for &(i, j) in &self.edges {
            // Spins z = ±1; a crossing edge has zᵢzⱼ = -1 and
            // contributes (1 - zᵢzⱼ)/2 = 1.
            if bit_of(i)? != bit_of(j)? {
                cuts += 1;
            }
        }
        Ok(cuts)
    }

    /// Count the edges cut by the bipartition encoded in a basis index
    ///
    /// Basis index `k` stands for the bitstring that is its binary
    /// representation zero-padded to the vertex count, so vertex `i`
    /// reads bit `i` of `k`. This is the convention the cost
    /// Hamiltonian diagonal is indexed by.
    pub fn count_cuts_from_index(&self, k: usize) -> usize {
        self.edges
            .iter()
            .filter(|&&(i, j)| ((k >> i) ^ (k >> j)) & 1 == 1)
            .count()
    }

    /// The largest cut over all bipartitions, by exhaustive search
    ///
    /// Exponential in the vertex count; intended for the small graphs
    /// a dense simulation can handle anyway.
    pub fn max_cut(&self) -> usize {
        (0..1usize << self.num_vertices)
            .map(|k| self.count_cuts_from_index(k))
            .max()
            .unwrap_or(0)
    }
}
