//! Dirty region tracking for incremental rendering.
//!
//! Collects axis-aligned rectangles that need repainting between frames.

use super::polygon::{Point, bounding_box_for_points};
use crate::util::Rect;

/// Tracks dirty rectangles accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds the area covered by a run of vertices, padded by `margin` so
    /// handles and stroke width are included. Empty runs add nothing.
    pub fn mark_points(&mut self, points: &[Point], margin: f64) {
        if let Some(rect) = bounding_box_for_points(points, margin) {
            self.mark_rect(rect);
        }
    }

    /// Returns true when nothing has been marked since the last drain.
    pub fn is_clean(&self) -> bool {
        !self.force_full && self.regions.is_empty()
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            Rect::new(0, 0, width, height).into_iter().collect()
        } else {
            self.regions.drain(..).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_points_records_padded_rectangle() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_points(&[Point::new(10.0, 10.0), Point::new(20.0, 30.0)], 5.0);

        let rects = tracker.take_regions(100, 100);
        assert_eq!(rects, vec![Rect::new(5, 5, 20, 30).unwrap()]);
        assert!(tracker.is_clean());
    }

    #[test]
    fn empty_points_are_ignored() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_points(&[], 5.0);
        assert!(tracker.is_clean());
    }

    #[test]
    fn mark_full_takes_precedence() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_points(&[Point::new(5.0, 5.0)], 2.0);
        tracker.mark_full();
        tracker.mark_points(&[Point::new(40.0, 40.0)], 2.0);

        let rects = tracker.take_regions(200, 100);
        assert_eq!(rects, vec![Rect::new(0, 0, 200, 100).unwrap()]);
    }

    #[test]
    fn full_damage_on_unsized_surface_yields_nothing() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_full();
        assert!(tracker.take_regions(0, 0).is_empty());
        assert!(tracker.is_clean());
    }
}
