// File: crates/chart-core/src/interpolate.rs
// Summary: Blending between geometry snapshots, per-entity animated geometry, and keyed arenas.

use std::collections::HashMap;
use std::hash::Hash;

use crate::animation::{Timing, Transition};
use crate::geometry::{Path, Point};
use crate::line::{AreaGeometry, LineGeometry};

/// Geometry that can be blended with another snapshot of the same shape.
pub trait Interpolate: Clone {
    /// Whether a per-point blend between `self` and `other` is meaningful.
    fn topology_matches(&self, other: &Self) -> bool;

    /// Blend towards `target`; only called when topologies match.
    fn lerp(&self, target: &Self, t: f32) -> Self;
}

impl Interpolate for Point {
    fn topology_matches(&self, _other: &Self) -> bool {
        true
    }

    fn lerp(&self, target: &Self, t: f32) -> Self {
        Point::lerp(*self, *target, t)
    }
}

impl Interpolate for Path {
    fn topology_matches(&self, other: &Self) -> bool {
        self.same_topology(other)
    }

    fn lerp(&self, target: &Self, t: f32) -> Self {
        Path::lerp(self, target, t)
    }
}

impl<T: Interpolate> Interpolate for Vec<T> {
    fn topology_matches(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.topology_matches(b))
    }

    fn lerp(&self, target: &Self, t: f32) -> Self {
        self.iter().zip(target).map(|(a, b)| a.lerp(b, t)).collect()
    }
}

impl Interpolate for LineGeometry {
    fn topology_matches(&self, other: &Self) -> bool {
        self.points.len() == other.points.len() && self.path.same_topology(&other.path)
    }

    fn lerp(&self, target: &Self, t: f32) -> Self {
        LineGeometry { path: self.path.lerp(&target.path, t), points: self.points.lerp(&target.points, t) }
    }
}

impl Interpolate for AreaGeometry {
    fn topology_matches(&self, other: &Self) -> bool {
        self.points.len() == other.points.len() && self.path.same_topology(&other.path)
    }

    fn lerp(&self, target: &Self, t: f32) -> Self {
        AreaGeometry {
            path: self.path.lerp(&target.path, t),
            points: self.points.lerp(&target.points, t),
            baseline: self.baseline + (target.baseline - self.baseline) * t,
        }
    }
}

/// Geometry to show at `progress`: a blend when shapes match, otherwise the target.
pub fn interpolate<G: Interpolate>(previous: &G, target: &G, progress: f32) -> G {
    if !previous.topology_matches(target) {
        log::debug!("geometry topology changed; snapping to target");
        return target.clone();
    }
    if progress >= 1.0 {
        return target.clone();
    }
    previous.lerp(target, progress)
}

/// Previous/target snapshots plus the transition between them.
#[derive(Debug, Clone)]
pub struct AnimatedGeometry<G> {
    previous: G,
    target: G,
    transition: Transition,
}

impl<G: Interpolate> AnimatedGeometry<G> {
    /// First build: there is nothing to morph from, so previous is the target itself.
    pub fn new(target: G, now: f64, timing: Timing) -> Self {
        Self { previous: target.clone(), target, transition: Transition::new(now, timing) }
    }

    /// Morph from the old target to `target`. A shape change restarts from the new target.
    pub fn retarget(&mut self, target: G, now: f64, timing: Timing) {
        let old = std::mem::replace(&mut self.target, target);
        self.previous = if old.topology_matches(&self.target) {
            old
        } else {
            log::debug!("retarget with new topology; previous geometry reset");
            self.target.clone()
        };
        self.transition = Transition::new(now, timing);
    }

    pub fn progress(&self, now: f64) -> f32 {
        self.transition.progress(now)
    }

    pub fn displayed(&self, now: f64) -> G {
        interpolate(&self.previous, &self.target, self.progress(now))
    }

    pub fn previous(&self) -> &G {
        &self.previous
    }

    pub fn target(&self) -> &G {
        &self.target
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }
}

/// Animated geometry per entity id with explicit create/retarget/destroy.
#[derive(Debug, Clone)]
pub struct GeometryArena<K, G> {
    entries: HashMap<K, AnimatedGeometry<G>>,
}

impl<K, G> Default for GeometryArena<K, G> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<K: Hash + Eq, G: Interpolate> GeometryArena<K, G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the entry on first sight, otherwise retarget it.
    pub fn set(&mut self, key: K, target: G, now: f64, timing: Timing) {
        match self.entries.get_mut(&key) {
            Some(entry) => entry.retarget(target, now, timing),
            None => {
                self.entries.insert(key, AnimatedGeometry::new(target, now, timing));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&AnimatedGeometry<G>> {
        self.entries.get(key)
    }

    pub fn displayed(&self, key: &K, now: f64) -> Option<G> {
        self.entries.get(key).map(|e| e.displayed(now))
    }

    pub fn destroy(&mut self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
