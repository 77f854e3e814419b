//! Bounded position history for trail rendering.

use std::collections::VecDeque;

use bevy::math::DVec3;

/// The most recent positions of a body, oldest first.
///
/// Holds at most `capacity` points; pushing past that evicts the oldest.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<DVec3>,
    capacity: usize,
}

impl Trail {
    /// Create a trail holding only `start`.
    ///
    /// A zero capacity is raised to one so the current position is always
    /// available.
    pub fn new(start: DVec3, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut points = VecDeque::with_capacity(capacity);
        points.push_back(start);
        Self { points, capacity }
    }

    pub fn push(&mut self, point: DVec3) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a trail holds at least its start point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<DVec3> {
        self.points.back().copied()
    }

    /// Points in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &DVec3> {
        self.points.iter()
    }

    /// Points as `f32` for render meshes.
    pub fn to_render_points(&self) -> Vec<bevy::math::Vec3> {
        self.points.iter().map(|p| p.as_vec3()).collect()
    }
}
