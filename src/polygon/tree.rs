//! Nested contour/hole trees.
//!
//! A clip call may return its result as a tree instead of a flat list: each
//! top-level node is an outer contour, its children are holes, their children
//! are islands nested inside those holes, and so on without depth limit.
//! Nodes live in an arena owned by the [`PolyTree`] and refer to each other
//! by [`NodeId`].

use super::core::{Path, Paths};

/// Index of a node within its [`PolyTree`].
pub type NodeId = usize;

/// One contour in a [`PolyTree`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyNode {
    pub contour: Path,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl PolyNode {
    /// The enclosing node, or `None` for a top-level outer contour.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Directly nested nodes, in insertion order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// An outer contour together with its direct holes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExPolygon {
    pub outer: Path,
    pub holes: Paths,
}

/// Arena-backed tree of nested contours.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyTree {
    nodes: Vec<PolyNode>,
    roots: Vec<NodeId>,
}

impl PolyTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of nodes at every depth.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level outer contours.
    #[inline]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Adds a top-level outer contour.
    pub fn add_root(&mut self, contour: Path) -> NodeId {
        let id = self.push(contour, None);
        self.roots.push(id);
        id
    }

    /// Adds a contour nested directly inside `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this tree.
    pub fn add_child(&mut self, parent: NodeId, contour: Path) -> NodeId {
        assert!(parent < self.nodes.len(), "parent {parent} not in tree");
        let id = self.push(contour, Some(parent));
        self.nodes[parent].children.push(id);
        id
    }

    fn push(&mut self, contour: Path, parent: Option<NodeId>) -> NodeId {
        self.nodes.push(PolyNode {
            contour,
            parent,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Returns the node with the given id.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&PolyNode> {
        self.nodes.get(id)
    }

    /// Returns the node with the given id, mutably.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut PolyNode> {
        self.nodes.get_mut(id)
    }

    /// Nesting depth of a node; top-level contours have depth 0.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut cur = self.nodes.get(id).and_then(|n| n.parent);
        while let Some(p) = cur {
            depth += 1;
            cur = self.nodes[p].parent;
        }
        depth
    }

    /// True for nodes at odd depth.
    #[inline]
    pub fn is_hole(&self, id: NodeId) -> bool {
        self.depth(id) % 2 == 1
    }

    /// Visits every node depth-first, pre-order, with mutable access to its
    /// contour and its hole flag.
    ///
    /// Hole status alternates by level starting from "outer" at the roots.
    pub fn walk_mut<V>(&mut self, mut visit: V)
    where
        V: FnMut(NodeId, &mut Path, bool),
    {
        let mut stack: Vec<(NodeId, bool)> =
            self.roots.iter().rev().map(|&id| (id, false)).collect();

        while let Some((id, is_hole)) = stack.pop() {
            let node = &mut self.nodes[id];
            visit(id, &mut node.contour, is_hole);
            stack.extend(node.children.iter().rev().map(|&c| (c, !is_hole)));
        }
    }

    /// Flattens the tree into a list of contours in depth-first order.
    pub fn to_paths(&self) -> Paths {
        let mut paths = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            paths.push(node.contour.clone());
            stack.extend(node.children.iter().rev());
        }
        paths
    }

    /// Groups each outer contour with its direct holes.
    ///
    /// Islands nested inside a hole become separate entries, as do their
    /// own holes, at any depth.
    pub fn to_expolygons(&self) -> Vec<ExPolygon> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let outer = &self.nodes[id];
            let mut holes = Vec::with_capacity(outer.children.len());
            let mut islands = Vec::new();
            for &h in &outer.children {
                let hole = &self.nodes[h];
                holes.push(hole.contour.clone());
                islands.extend(hole.children.iter().copied());
            }
            out.push(ExPolygon {
                outer: outer.contour.clone(),
                holes,
            });
            stack.extend(islands.into_iter().rev());
        }
        out
    }
}
