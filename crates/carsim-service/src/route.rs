//! Demo route following.

use std::cmp::Ordering;
use std::collections::VecDeque;

use carsim_geodesy::{GeoPoint, Heading, destination_or_fallback, planar_bearing};
use tracing::debug;

/// Outcome of one [`RouteFollower::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStep {
    /// Heading aimed at the waypoint being driven to.
    pub heading: Heading,
    /// Position after moving.
    pub position: GeoPoint,
    /// The target waypoint was passed on this step.
    pub reached: bool,
    /// The route ran out and restarted from the start position.
    pub restarted: bool,
}

/// Drives a point through a fixed list of waypoints, looping forever.
#[derive(Debug, Clone)]
pub struct RouteFollower {
    waypoints: Vec<GeoPoint>,
    pending: VecDeque<GeoPoint>,
    start: GeoPoint,
    laps: u64,
}

impl RouteFollower {
    /// `None` when there are no waypoints.
    pub fn new(waypoints: Vec<GeoPoint>, start: GeoPoint) -> Option<Self> {
        if waypoints.is_empty() {
            return None;
        }
        let pending = waypoints.iter().copied().collect();
        Some(Self {
            waypoints,
            pending,
            start,
            laps: 0,
        })
    }

    /// Waypoint currently being driven to.
    pub fn target(&self) -> Option<GeoPoint> {
        self.pending.front().copied()
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Completed laps.
    pub fn laps(&self) -> u64 {
        self.laps
    }

    pub fn start(&self) -> GeoPoint {
        self.start
    }

    /// Aim at the next waypoint and move `distance` metres towards it.
    pub fn step(&mut self, position: GeoPoint, distance: f64) -> RouteStep {
        let Some(target) = self.target() else {
            return self.restart(Heading::default());
        };

        let heading = planar_bearing(position, target);
        let moved = if distance.abs() < f64::EPSILON {
            position
        } else {
            destination_or_fallback(position, heading, distance)
        };

        if !has_passed(position, target, moved) {
            return RouteStep {
                heading,
                position: moved,
                reached: false,
                restarted: false,
            };
        }

        self.pending.pop_front();
        debug!(lat = target.lat, lng = target.lng, remaining = self.pending.len(), "waypoint reached");
        if self.pending.is_empty() {
            let mut step = self.restart(heading);
            step.reached = true;
            return step;
        }
        RouteStep {
            heading,
            position: moved,
            reached: true,
            restarted: false,
        }
    }

    fn restart(&mut self, heading: Heading) -> RouteStep {
        self.pending = self.waypoints.iter().copied().collect();
        self.laps = self.laps.saturating_add(1);
        debug!(laps = self.laps, "route restarted");
        RouteStep {
            heading,
            position: self.start,
            reached: false,
            restarted: true,
        }
    }
}

/// True once `moved` is at or beyond `target` along every axis the
/// `origin -> target` direction actually travels.
///
/// Pure east/west or north/south legs only check the axis being travelled.
pub fn has_passed(origin: GeoPoint, target: GeoPoint, moved: GeoPoint) -> bool {
    let lng_dir = sign(target.lng - origin.lng);
    let lat_dir = sign(target.lat - origin.lat);

    let lng_ok = |dir: Ordering| match dir {
        Ordering::Greater => moved.lng >= target.lng,
        Ordering::Less => moved.lng <= target.lng,
        Ordering::Equal => true,
    };
    let lat_ok = |dir: Ordering| match dir {
        Ordering::Greater => moved.lat >= target.lat,
        Ordering::Less => moved.lat <= target.lat,
        Ordering::Equal => true,
    };

    match (lng_dir, lat_dir) {
        // Already on the waypoint: counts as eastbound.
        (Ordering::Equal, Ordering::Equal) => moved.lng >= target.lng,
        (lng, lat) => lng_ok(lng) && lat_ok(lat),
    }
}

fn sign(delta: f64) -> Ordering {
    delta.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}
