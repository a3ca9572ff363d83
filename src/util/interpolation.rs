// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Keyframe linear interpolation.
//!
//! Every vertex moves in a straight line at constant speed from its position
//! in the start keyframe to its position in the end keyframe. Each frame is
//! computed directly from the start keyframe and its offset, never by
//! accumulating per-frame steps, so re-running produces identical values.

use crate::models::geometry::{GeometryFrame, Point, Polygon};
use std::collections::BTreeMap;

/// Position of one vertex `offset` frames into a `span`-frame move.
pub fn interpolate_point(start: Point, end: Point, span: i32, offset: i32) -> Point {
    if span == 0 {
        return start;
    }
    let dx = (end.x - start.x) / f64::from(span);
    let dy = (end.y - start.y) / f64::from(span);
    Point::new(
        start.x + dx * f64::from(offset),
        start.y + dy * f64::from(offset),
    )
}

/// Shape `offset` frames into a `span`-frame move, paired vertex by vertex.
pub fn interpolate_polygon(start: &Polygon, end: &Polygon, span: i32, offset: i32) -> Polygon {
    debug_assert_eq!(start.len(), end.len());
    start
        .vertices()
        .iter()
        .zip(end.vertices())
        .map(|(&a, &b)| interpolate_point(a, b, span, offset))
        .collect::<Vec<_>>()
        .into()
}

/// Overwrite every frame strictly between the keyframes.
///
/// The keyframe slots themselves are left untouched so their stored values
/// survive exactly. Flags on existing frames are preserved; missing slots
/// are created.
pub fn fill_intermediate(
    start: &Polygon,
    end: &Polygon,
    start_frame: i32,
    end_frame: i32,
    frames: &mut BTreeMap<i32, GeometryFrame>,
) {
    let span = end_frame - start_frame;
    for frame in (start_frame + 1)..end_frame {
        let polygon = interpolate_polygon(start, end, span, frame - start_frame);
        frames
            .entry(frame)
            .and_modify(|g| g.polygon = polygon.clone())
            .or_insert_with(|| GeometryFrame::new(polygon));
    }
}
