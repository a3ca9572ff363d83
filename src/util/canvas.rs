// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Canvas coordinate utilities.
//!
//! Hyperlink geometry is stored in pixels of a fixed reference canvas. A
//! display collaborator showing the video at another size maps points with
//! a single uniform scale factor so shapes keep their proportions.

use crate::models::geometry::Point;
use serde::{Deserialize, Serialize};

/// Width and height of a drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// The canvas stored geometry is expressed in.
    pub const REFERENCE: CanvasSize = CanvasSize::new(352.0, 288.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check whether a point lies on the canvas, edges included.
    pub fn contains(&self, point: Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Uniform factor mapping `reference` onto `display` while fitting both axes.
pub fn scale_factor(reference: CanvasSize, display: CanvasSize) -> f64 {
    let sx = display.width / reference.width;
    let sy = display.height / reference.height;
    sx.min(sy)
}

/// Convert a reference-canvas point to display coordinates.
pub fn to_display(point: Point, reference: CanvasSize, display: CanvasSize) -> Point {
    let factor = scale_factor(reference, display);
    Point::new(point.x * factor, point.y * factor)
}

/// Convert a display point (e.g. a click) back to reference coordinates.
pub fn to_reference(point: Point, display: CanvasSize, reference: CanvasSize) -> Point {
    let factor = scale_factor(reference, display);
    Point::new(point.x / factor, point.y / factor)
}
