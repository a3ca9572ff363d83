// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hyperlink data structures.
//!
//! A hyperlink is a named clickable region attached to a span of frames of
//! one video and pointing at a frame of another. It owns one
//! [`GeometryFrame`] per frame in its range. Only the first and last frames
//! (the keyframes) are edited directly; every frame in between is derived by
//! linear interpolation and rewritten whenever a keyframe changes.

use super::geometry::{GeometryFrame, Point, Polygon};
use crate::error::GeometryError;
use crate::util::{hit_test, interpolation};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::Path;

/// Opaque reference to a video, usually its file path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoRef(String);

impl VideoRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for VideoRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for VideoRef {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<&Path> for VideoRef {
    fn from(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the two directly editable frames of a hyperlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyframe {
    Start,
    End,
}

impl Keyframe {
    pub fn other(self) -> Self {
        match self {
            Keyframe::Start => Keyframe::End,
            Keyframe::End => Keyframe::Start,
        }
    }
}

/// Initial shapes for the start and end keyframes.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    pub start: Polygon,
    pub end: Polygon,
}

impl Keyframes {
    /// The same shape at both ends, i.e. a region that does not move.
    pub fn still(polygon: Polygon) -> Self {
        Self {
            start: polygon.clone(),
            end: polygon,
        }
    }
}

/// A clickable region over a range of frames.
///
/// Equality covers what a saved document records: the name, frame range,
/// video references, target frame and every frame's polygon. Selection, the
/// current frame and the per-frame `editable`/`visible` flags are view state
/// and do not take part.
#[derive(Debug, Clone)]
pub struct Hyperlink {
    name: String,
    start_frame: i32,
    end_frame: i32,
    from_video: VideoRef,
    to_video: VideoRef,
    to_frame: i32,
    selected: bool,
    current_frame: i32,
    frames: BTreeMap<i32, GeometryFrame>,
}

impl PartialEq for Hyperlink {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.start_frame == other.start_frame
            && self.end_frame == other.end_frame
            && self.from_video == other.from_video
            && self.to_video == other.to_video
            && self.to_frame == other.to_frame
            && self.frames.len() == other.frames.len()
            && self
                .frames
                .iter()
                .zip(&other.frames)
                .all(|((fa, a), (fb, b))| fa == fb && a.polygon == b.polygon)
    }
}

impl Hyperlink {
    /// Create a hyperlink and interpolate its intermediate frames.
    pub fn new(
        name: impl Into<String>,
        start_frame: i32,
        end_frame: i32,
        from_video: VideoRef,
        to_video: VideoRef,
        to_frame: i32,
        keyframes: Keyframes,
    ) -> Result<Self, GeometryError> {
        check_range(start_frame, end_frame)?;
        check_vertex_count(&keyframes.start, &keyframes.end)?;

        let Keyframes { start, end } = keyframes;
        let mut frames: BTreeMap<i32, GeometryFrame> = (start_frame..=end_frame)
            .map(|f| (f, GeometryFrame::new(start.clone())))
            .collect();
        if end_frame != start_frame {
            frames.insert(end_frame, GeometryFrame::new(end));
        }

        let mut link = Self {
            name: name.into(),
            start_frame,
            end_frame,
            from_video,
            to_video,
            to_frame,
            selected: false,
            current_frame: start_frame,
            frames,
        };
        link.interpolate();
        Ok(link)
    }

    /// Create a still hyperlink using the default link box.
    pub fn with_default_box(
        name: impl Into<String>,
        start_frame: i32,
        end_frame: i32,
        from_video: VideoRef,
        to_video: VideoRef,
        to_frame: i32,
    ) -> Result<Self, GeometryError> {
        Self::new(
            name,
            start_frame,
            end_frame,
            from_video,
            to_video,
            to_frame,
            Keyframes::still(Polygon::default_box()),
        )
    }

    /// Rebuild a hyperlink from stored per-frame geometry.
    ///
    /// The stored shapes are kept as-is (no interpolation) so that loaded
    /// geometry matches what was saved exactly.
    pub fn from_frames(
        name: impl Into<String>,
        start_frame: i32,
        end_frame: i32,
        from_video: VideoRef,
        to_video: VideoRef,
        to_frame: i32,
        geometry: BTreeMap<i32, Polygon>,
    ) -> Result<Self, GeometryError> {
        check_range(start_frame, end_frame)?;
        if let Some(&frame) = geometry
            .keys()
            .find(|f| !(start_frame..=end_frame).contains(*f))
        {
            return Err(GeometryError::FrameOutOfRange {
                frame,
                start: start_frame,
                end: end_frame,
            });
        }
        if let Some(frame) = (start_frame..=end_frame).find(|f| !geometry.contains_key(f)) {
            return Err(GeometryError::MissingFrame(frame));
        }

        let expected = geometry[&start_frame].len();
        if let Some(polygon) = geometry.values().find(|p| p.len() != expected) {
            return Err(GeometryError::VertexCountMismatch {
                expected,
                found: polygon.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            start_frame,
            end_frame,
            from_video,
            to_video,
            to_frame,
            selected: false,
            current_frame: start_frame,
            frames: geometry
                .into_iter()
                .map(|(f, polygon)| (f, GeometryFrame::new(polygon)))
                .collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn start_frame(&self) -> i32 {
        self.start_frame
    }

    pub fn end_frame(&self) -> i32 {
        self.end_frame
    }

    pub fn frame_range(&self) -> RangeInclusive<i32> {
        self.start_frame..=self.end_frame
    }

    pub fn from_video(&self) -> &VideoRef {
        &self.from_video
    }

    pub fn set_from_video(&mut self, video: VideoRef) {
        self.from_video = video;
    }

    pub fn to_video(&self) -> &VideoRef {
        &self.to_video
    }

    pub fn to_frame(&self) -> i32 {
        self.to_frame
    }

    /// Point the link at a different video and frame.
    pub fn set_target(&mut self, video: VideoRef, frame: i32) {
        self.to_video = video;
        self.to_frame = frame;
    }

    /// Order by start frame, then name. Loaded sets come back in this order
    /// and overlapping links resolve clicks by it.
    pub fn cmp_priority(&self, other: &Self) -> Ordering {
        self.start_frame
            .cmp(&other.start_frame)
            .then_with(|| self.name.cmp(&other.name))
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn current_frame(&self) -> i32 {
        self.current_frame
    }

    /// Number of vertices shared by every frame's polygon.
    pub fn vertex_count(&self) -> usize {
        self.keyframe(Keyframe::Start).len()
    }

    /// Check whether the link is active on the given frame.
    pub fn contains_frame(&self, frame: i32) -> bool {
        self.start_frame <= frame && frame <= self.end_frame
    }

    /// Geometry shown on `frame`, or `None` when the link is not active there.
    pub fn geometry_at(&self, frame: i32) -> Option<&GeometryFrame> {
        self.frames.get(&frame)
    }

    /// Geometry at the frame the link was last told is displayed.
    pub fn current_geometry(&self) -> Option<&GeometryFrame> {
        self.geometry_at(self.current_frame)
    }

    /// Iterate over every frame's geometry in frame order.
    pub fn frames(&self) -> impl Iterator<Item = (i32, &GeometryFrame)> + '_ {
        self.frames.iter().map(|(f, g)| (*f, g))
    }

    pub fn keyframe_number(&self, which: Keyframe) -> i32 {
        match which {
            Keyframe::Start => self.start_frame,
            Keyframe::End => self.end_frame,
        }
    }

    pub fn keyframe(&self, which: Keyframe) -> &Polygon {
        &self.frames[&self.keyframe_number(which)].polygon
    }

    fn keyframe_mut(&mut self, which: Keyframe) -> &mut Polygon {
        let frame = self.keyframe_number(which);
        self.frames
            .get_mut(&frame)
            .map(|g| &mut g.polygon)
            .expect("keyframe slot exists for every hyperlink")
    }

    /// Replace a keyframe's shape and re-derive the frames in between.
    pub fn set_keyframe(&mut self, which: Keyframe, polygon: Polygon) -> Result<(), GeometryError> {
        if self.start_frame != self.end_frame {
            check_vertex_count(self.keyframe(which.other()), &polygon)?;
        }
        *self.keyframe_mut(which) = polygon;
        self.interpolate();
        Ok(())
    }

    /// Move one vertex of a keyframe.
    pub fn set_keyframe_vertex(
        &mut self,
        which: Keyframe,
        index: usize,
        point: Point,
    ) -> Result<(), GeometryError> {
        self.keyframe_mut(which).set_vertex(index, point)?;
        self.interpolate();
        Ok(())
    }

    /// Drag a whole keyframe shape by an offset.
    pub fn translate_keyframe(&mut self, which: Keyframe, dx: f64, dy: f64) {
        self.keyframe_mut(which).translate(dx, dy);
        self.interpolate();
    }

    /// Regenerate every intermediate frame from the two keyframes.
    pub fn interpolate(&mut self) {
        if self.start_frame == self.end_frame {
            return;
        }
        let start = self.keyframe(Keyframe::Start).clone();
        let end = self.keyframe(Keyframe::End).clone();
        interpolation::fill_intermediate(
            &start,
            &end,
            self.start_frame,
            self.end_frame,
            &mut self.frames,
        );
    }

    /// Change the frame range.
    ///
    /// Frames outside the new range are dropped. Each new keyframe takes the
    /// shape previously shown at the nearest frame of the old range, and the
    /// frames between them are interpolated again.
    pub fn resize_range(&mut self, new_start: i32, new_end: i32) -> Result<(), GeometryError> {
        check_range(new_start, new_end)?;

        let old = self.frame_range();
        let start_source = self.frames[&new_start.clamp(*old.start(), *old.end())].clone();
        let end_source = self.frames[&new_end.clamp(*old.start(), *old.end())].clone();

        self.frames.retain(|f, _| (new_start..=new_end).contains(f));
        for frame in new_start..=new_end {
            self.frames
                .entry(frame)
                .or_insert_with(|| start_source.clone());
        }
        self.frames.insert(new_end, end_source);
        self.frames.insert(new_start, start_source);

        self.start_frame = new_start;
        self.end_frame = new_end;
        self.interpolate();
        self.refresh_editable();
        Ok(())
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        self.refresh_editable();
    }

    pub fn set_current_frame(&mut self, frame: i32) {
        self.current_frame = frame;
        self.refresh_editable();
    }

    /// The keyframe the current frame would edit, if editing is allowed.
    pub fn editable_keyframe(&self) -> Option<Keyframe> {
        if !self.selected {
            None
        } else if self.current_frame == self.start_frame {
            Some(Keyframe::Start)
        } else if self.current_frame == self.end_frame {
            Some(Keyframe::End)
        } else {
            None
        }
    }

    // Only the current frame can be editable, and only when it is a keyframe
    // of a selected link.
    fn refresh_editable(&mut self) {
        let editable_frame = self
            .editable_keyframe()
            .map(|_| self.current_frame);
        for (frame, geometry) in &mut self.frames {
            geometry.set_editable(Some(*frame) == editable_frame);
        }
    }

    /// Show or hide the link on every frame.
    pub fn set_visible(&mut self, visible: bool) {
        for geometry in self.frames.values_mut() {
            geometry.set_visible(visible);
        }
    }

    /// Scale every frame's geometry, e.g. when moving to another canvas size.
    pub fn scale_vertices(&mut self, factor: f64) {
        for geometry in self.frames.values_mut() {
            geometry.polygon.scale(factor);
        }
    }

    /// Check whether a click at `point` on `frame` lands inside this link.
    pub fn hit_test(&self, frame: i32, point: Point) -> bool {
        self.geometry_at(frame)
            .is_some_and(|g| hit_test::contains(point, &g.polygon))
    }
}

fn check_range(start: i32, end: i32) -> Result<(), GeometryError> {
    if start > end {
        return Err(GeometryError::InvalidRange { start, end });
    }
    Ok(())
}

fn check_vertex_count(expected: &Polygon, found: &Polygon) -> Result<(), GeometryError> {
    if expected.len() != found.len() {
        return Err(GeometryError::VertexCountMismatch {
            expected: expected.len(),
            found: found.len(),
        });
    }
    Ok(())
}
