// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometry data structures.
//!
//! This module defines the points and polygons that describe a hyperlink's
//! clickable region, and the per-frame wrapper that carries the display
//! flags for one frame of one hyperlink.

use crate::error::GeometryError;
use crate::util::canvas::CanvasSize;
use serde::{Deserialize, Serialize};

/// A 2D point in reference-canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered list of vertices. Insertion order is the boundary walk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// The default link box, centred on the 352x288 reference canvas.
    pub fn default_box() -> Self {
        Self::new(vec![
            Point::new(126.0, 94.0),
            Point::new(226.0, 94.0),
            Point::new(226.0, 194.0),
            Point::new(126.0, 194.0),
        ])
    }

    /// Build a polygon from interleaved `[x0, y0, x1, y1, ...]` coordinates.
    pub fn from_flat(coords: &[f64]) -> Result<Self, GeometryError> {
        if coords.len() % 2 != 0 {
            return Err(GeometryError::MalformedCoordinates(coords.len()));
        }
        Ok(Self::new(
            coords
                .chunks_exact(2)
                .map(|pair| Point::new(pair[0], pair[1]))
                .collect(),
        ))
    }

    /// Interleaved `[x0, y0, x1, y1, ...]` coordinates.
    pub fn to_flat(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Fewer than three vertices never encloses anything.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    pub fn push(&mut self, point: Point) {
        self.vertices.push(point);
    }

    /// Replace the vertex at `index`.
    pub fn set_vertex(&mut self, index: usize, point: Point) -> Result<(), GeometryError> {
        let len = self.vertices.len();
        let slot = self
            .vertices
            .get_mut(index)
            .ok_or(GeometryError::IndexOutOfRange { index, len })?;
        *slot = point;
        Ok(())
    }

    /// Move the whole shape by an offset.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.vertices {
            *p = Point::new(p.x + dx, p.y + dy);
        }
    }

    /// Multiply every coordinate by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for p in &mut self.vertices {
            *p = Point::new(p.x * factor, p.y * factor);
        }
    }

    /// Check whether every vertex lies on the given canvas.
    pub fn fits_within(&self, canvas: CanvasSize) -> bool {
        self.vertices.iter().all(|p| canvas.contains(*p))
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

/// The geometry of one hyperlink at one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryFrame {
    pub polygon: Polygon,
    editable: bool,
    visible: bool,
}

impl GeometryFrame {
    pub fn new(polygon: Polygon) -> Self {
        Self {
            polygon,
            editable: false,
            visible: true,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
