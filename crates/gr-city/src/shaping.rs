//! Reward shaping: destination placement and traffic injection.
//!
//! # Traffic placement
//!
//! Candidates are interior nodes whose kind is `Interior` and whose reward is
//! exactly [`reward::DEFAULT`].  The destination and its near-goal neighbors
//! never qualify, and neither does anything already congested.  Each draw
//! samples uniformly from the *current* candidate set, which is the same
//! distribution as rejection-sampling random interior coordinates but always
//! terminates: once the set is empty the call fails with
//! [`CityError::NoEligibleNode`].  Draws completed before the failure stay
//! applied.

use std::str::FromStr;

use rand::Rng;

use gr_core::Coord;

use crate::reward::{self, NodeKind};
use crate::{CityError, CityResult, Grid};

/// Draw counts per kind are capped at `interior / TRAFFIC_SHARE_DIVISOR`, so
/// clusters (≤ 5 nodes) plus incidents cover at most half of the interior.
pub const TRAFFIC_SHARE_DIVISOR: usize = 12;

// ── Destination ───────────────────────────────────────────────────────────────

/// Make `dest` the goal of `grid`.
///
/// `dest` gets [`reward::GOAL`] and [`NodeKind::Destination`]; each neighbor
/// that is not a perimeter node gets [`reward::NEAR_GOAL`] (clearing any
/// traffic there).  A previously set, different destination is reverted to
/// plain interior first.  Calling this twice with the same node is a no-op.
pub fn set_destination(grid: &mut Grid, dest: Coord) -> CityResult<()> {
    grid.require_interior(dest)?;

    if let Some(old) = grid.destination() {
        if old != dest {
            log::debug!("moving destination {old} -> {dest}");
            clear_destination(grid, old);
        }
    }

    grid.set(dest, reward::GOAL, NodeKind::Destination);
    for n in grid.neighbors(dest) {
        if grid.kind(n) != NodeKind::Perimeter {
            grid.set(n, reward::NEAR_GOAL, NodeKind::Interior);
        }
    }
    grid.set_destination_marker(Some(dest));
    Ok(())
}

fn clear_destination(grid: &mut Grid, old: Coord) {
    grid.set(old, reward::DEFAULT, NodeKind::Interior);
    for n in grid.neighbors(old) {
        if grid.kind(n) == NodeKind::Interior && grid.reward(n) == reward::NEAR_GOAL {
            grid.set(n, reward::DEFAULT, NodeKind::Interior);
        }
    }
    grid.set_destination_marker(None);
}

/// Override the reward of a single non-perimeter node.
///
/// The node keeps its kind, so a custom value equal to [`reward::GOAL`] or
/// [`reward::TERMINAL`] does not make it terminal.
pub fn set_reward(grid: &mut Grid, node: Coord, value: i32) -> CityResult<()> {
    grid.require_interior(node)?;
    grid.set_reward_only(node, value);
    Ok(())
}

// ── Traffic ───────────────────────────────────────────────────────────────────

/// Place `count` congestion clusters.
///
/// Each draw picks one eligible node and turns it plus every `DEFAULT`-reward
/// interior neighbor into traffic.  Returns the number of nodes reclassified.
pub fn inject_traffic<R: Rng + ?Sized>(
    grid:  &mut Grid,
    count: usize,
    rng:   &mut R,
) -> CityResult<usize> {
    let mut changed = 0;
    for _ in 0..count {
        let center = sample_eligible(grid, rng)?;
        grid.set(center, reward::TRAFFIC, NodeKind::Traffic);
        changed += 1;
        for n in grid.neighbors(center) {
            if is_eligible(grid, n) {
                grid.set(n, reward::TRAFFIC, NodeKind::Traffic);
                changed += 1;
            }
        }
        log::debug!("traffic cluster centred on {center}");
    }
    Ok(changed)
}

/// Place `count` isolated traffic nodes (one node per draw).
pub fn inject_incidents<R: Rng + ?Sized>(
    grid:  &mut Grid,
    count: usize,
    rng:   &mut R,
) -> CityResult<usize> {
    for _ in 0..count {
        let node = sample_eligible(grid, rng)?;
        grid.set(node, reward::TRAFFIC, NodeKind::Traffic);
        log::debug!("traffic incident at {node}");
    }
    Ok(count)
}

/// Mark one interior node as traffic.
///
/// Unlike the random injectors this ignores eligibility, so it can also
/// congest a near-goal node.  The destination itself cannot be congested.
pub fn mark_traffic(grid: &mut Grid, node: Coord) -> CityResult<()> {
    grid.require_interior(node)?;
    if grid.kind(node) == NodeKind::Destination {
        return Err(CityError::InvalidNode { node, reason: "destination cannot carry traffic" });
    }
    grid.set(node, reward::TRAFFIC, NodeKind::Traffic);
    Ok(())
}

#[inline]
fn is_eligible(grid: &Grid, c: Coord) -> bool {
    grid.kind(c) == NodeKind::Interior && grid.reward(c) == reward::DEFAULT
}

fn sample_eligible<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> CityResult<Coord> {
    // Interior window [1, W-2] × [1, H-2]; perimeter kinds are never eligible.
    let candidates: Vec<Coord> = (1..grid.height() - 1)
        .flat_map(|y| (1..grid.width() - 1).map(move |x| Coord::new(x, y)))
        .filter(|&c| is_eligible(grid, c))
        .collect();
    if candidates.is_empty() {
        return Err(CityError::NoEligibleNode);
    }
    Ok(candidates[rng.gen_range(0..candidates.len())])
}

/// Congestion clusters for a city of this size.
///
/// Monotone step function of the perimeter `W + H`, capped so traffic never
/// covers a majority of the interior.
pub fn traffic_draws(grid: &Grid) -> usize {
    let step = match grid.width() + grid.height() {
        0..=14  => 1,
        15..=20 => 3,
        21..=30 => 6,
        31..=50 => 8,
        _       => 14,
    };
    capped(grid, step)
}

/// Single-node incidents for a city of this size.
///
/// Same steps as [`traffic_draws`] except that a perimeter of 15 still gets a
/// single incident.
pub fn incident_draws(grid: &Grid) -> usize {
    let step = match grid.width() + grid.height() {
        0..=15  => 1,
        16..=20 => 3,
        21..=30 => 6,
        31..=50 => 8,
        _       => 14,
    };
    capped(grid, step)
}

#[inline]
fn capped(grid: &Grid, step: usize) -> usize {
    step.min(grid.interior_count() / TRAFFIC_SHARE_DIVISOR)
}

/// Overall congestion preset.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrafficLevel {
    #[default]
    None,
    /// Isolated incidents.
    Light,
    /// Congestion clusters.
    Medium,
    /// Incidents and clusters.
    Heavy,
}

impl TrafficLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficLevel::None   => "none",
            TrafficLevel::Light  => "light",
            TrafficLevel::Medium => "medium",
            TrafficLevel::Heavy  => "heavy",
        }
    }
}

impl std::fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrafficLevel {
    type Err = String;

    /// Accepts the full names or their first letter, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "n"   => Ok(TrafficLevel::None),
            "light" | "l"  => Ok(TrafficLevel::Light),
            "medium" | "m" => Ok(TrafficLevel::Medium),
            "heavy" | "h"  => Ok(TrafficLevel::Heavy),
            other => Err(format!("unknown traffic level {other:?} (none|light|medium|heavy)")),
        }
    }
}

/// Apply a congestion preset sized by [`incident_draws`] and
/// [`traffic_draws`].
///
/// Call after [`set_destination`] so the goal area is protected.  Returns the
/// number of nodes reclassified.
pub fn apply_traffic<R: Rng + ?Sized>(
    grid:  &mut Grid,
    level: TrafficLevel,
    rng:   &mut R,
) -> CityResult<usize> {
    let (incidents, clusters) = match level {
        TrafficLevel::None   => (0, 0),
        TrafficLevel::Light  => (incident_draws(grid), 0),
        TrafficLevel::Medium => (0, traffic_draws(grid)),
        TrafficLevel::Heavy  => (incident_draws(grid), traffic_draws(grid)),
    };
    if level != TrafficLevel::None && incidents + clusters == 0 {
        log::warn!(
            "{level} traffic requested but a {}x{} city is too small for any draws",
            grid.width(),
            grid.height(),
        );
        return Ok(0);
    }

    let changed = inject_incidents(grid, incidents, rng)? + inject_traffic(grid, clusters, rng)?;
    log::info!(
        "{level} traffic on {}x{} city: {incidents} incident(s), {clusters} cluster(s), \
         {changed} node(s) congested",
        grid.width(),
        grid.height(),
    );
    Ok(changed)
}
