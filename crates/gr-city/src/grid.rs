//! Grid city representation.
//!
//! # Data layout
//!
//! Per-node data is stored structure-of-arrays, indexed by
//! `NodeId = y * width + x`:
//!
//! ```text
//! rewards[ node_id ]   i32 reward observed on entering the node
//! kinds[ node_id ]     NodeKind (perimeter / interior / traffic / destination)
//! ```
//!
//! Edges are implicit: every node is connected to its in-bounds N/E/S/W
//! neighbors with unit cost, so the graph is simple, undirected and
//! connected by construction.  Neighbor iteration allocates nothing.

use gr_core::{Action, Coord, NodeId};

use crate::reward::{self, NodeKind};
use crate::{CityError, CityResult};

/// Smallest legal side length: leaves a 2×2 interior.
pub const MIN_SIDE: u32 = 4;

/// Rectangular lattice of intersections with per-node rewards.
///
/// Build with [`Grid::build`]; mutate only through the functions in
/// [`crate::shaping`].  Accessors taking a [`Coord`] panic if it is out of
/// bounds; check with [`contains`](Self::contains) first when the coordinate
/// comes from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width:       u32,
    height:      u32,
    rewards:     Vec<i32>,
    kinds:       Vec<NodeKind>,
    destination: Option<Coord>,
}

impl Grid {
    /// Create a `width × height` city.
    ///
    /// Perimeter nodes get [`reward::TERMINAL`], interior nodes
    /// [`reward::DEFAULT`].  Deterministic: the same dimensions always yield
    /// an identical grid.
    pub fn build(width: u32, height: u32) -> CityResult<Grid> {
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(CityError::InvalidDimension { width, height });
        }
        let n = width as usize * height as usize;
        let mut rewards = Vec::with_capacity(n);
        let mut kinds   = Vec::with_capacity(n);
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    rewards.push(reward::TERMINAL);
                    kinds.push(NodeKind::Perimeter);
                } else {
                    rewards.push(reward::DEFAULT);
                    kinds.push(NodeKind::Interior);
                }
            }
        }
        Ok(Grid { width, height, rewards, kinds, destination: None })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn node_count(&self) -> usize {
        self.rewards.len()
    }

    /// Number of non-perimeter nodes: `(W-2) * (H-2)`.
    pub fn interior_count(&self) -> usize {
        (self.width as usize - 2) * (self.height as usize - 2)
    }

    /// Undirected edge count: `W(H-1) + H(W-1)`.
    pub fn edge_count(&self) -> usize {
        let (w, h) = (self.width as usize, self.height as usize);
        w * (h - 1) + h * (w - 1)
    }

    // ── Indexing ──────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x < self.width && c.y < self.height
    }

    #[inline]
    pub fn node_id(&self, c: Coord) -> NodeId {
        debug_assert!(self.contains(c), "{c} outside {}x{}", self.width, self.height);
        NodeId(c.y * self.width + c.x)
    }

    #[inline]
    pub fn coord(&self, id: NodeId) -> Coord {
        Coord::new(id.0 % self.width, id.0 / self.width)
    }

    /// All coordinates in `NodeId` order.
    pub fn nodes(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.node_count() as u32).map(|i| self.coord(NodeId(i)))
    }

    // ── Classification ────────────────────────────────────────────────────

    #[inline]
    pub fn reward(&self, c: Coord) -> i32 {
        self.rewards[self.node_id(c).index()]
    }

    #[inline]
    pub fn kind(&self, c: Coord) -> NodeKind {
        self.kinds[self.node_id(c).index()]
    }

    /// Geometric test, independent of the stored kind.
    #[inline]
    pub fn is_perimeter(&self, c: Coord) -> bool {
        c.x == 0 || c.y == 0 || c.x == self.width - 1 || c.y == self.height - 1
    }

    /// `true` for perimeter nodes and the destination.
    ///
    /// Ends a training episode and a greedy walk.
    #[inline]
    pub fn is_terminal(&self, c: Coord) -> bool {
        self.kind(c).is_terminal()
    }

    #[inline]
    pub fn is_traffic(&self, c: Coord) -> bool {
        self.kind(c) == NodeKind::Traffic
    }

    pub fn destination(&self) -> Option<Coord> {
        self.destination
    }

    /// Fail with [`CityError::InvalidNode`] unless `c` is in bounds and off the
    /// perimeter.
    pub fn require_interior(&self, c: Coord) -> CityResult<()> {
        if !self.contains(c) {
            return Err(CityError::InvalidNode { node: c, reason: "out of bounds" });
        }
        if self.is_perimeter(c) {
            return Err(CityError::InvalidNode { node: c, reason: "on the perimeter" });
        }
        Ok(())
    }

    /// Fail with [`CityError::InvalidNode`] unless `c` is in bounds.
    pub fn require_contains(&self, c: Coord) -> CityResult<()> {
        if self.contains(c) {
            Ok(())
        } else {
            Err(CityError::InvalidNode { node: c, reason: "out of bounds" })
        }
    }

    pub fn traffic_nodes(&self) -> Vec<Coord> {
        self.nodes_of_kind(NodeKind::Traffic)
    }

    fn nodes_of_kind(&self, kind: NodeKind) -> Vec<Coord> {
        self.kinds
            .iter()
            .enumerate()
            .filter(|&(_, &k)| k == kind)
            .map(|(i, _)| self.coord(NodeId(i as u32)))
            .collect()
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// In-bounds 4-neighbors of `c`, in [`Action`] index order
    /// (up, right, down, left).
    #[inline]
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + use<> {
        let (w, h) = (self.width, self.height);
        Action::ALL
            .into_iter()
            .map(move |a| a.apply(c, w, h))
            .filter(move |&n| n != c)
    }

    /// Where `action` leads from `c`; out-of-bounds moves stay in place.
    #[inline]
    pub fn step(&self, c: Coord, action: Action) -> Coord {
        action.apply(c, self.width, self.height)
    }

    // ── Crate-internal mutation (used by `shaping`) ───────────────────────

    pub(crate) fn set(&mut self, c: Coord, reward: i32, kind: NodeKind) {
        let i = self.node_id(c).index();
        self.rewards[i] = reward;
        self.kinds[i]   = kind;
    }

    pub(crate) fn set_reward_only(&mut self, c: Coord, reward: i32) {
        let i = self.node_id(c).index();
        self.rewards[i] = reward;
    }

    pub(crate) fn set_destination_marker(&mut self, dest: Option<Coord>) {
        self.destination = dest;
    }
}
