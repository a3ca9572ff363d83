// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The active set of hyperlinks.
//!
//! This module manages the hyperlinks authored for a video: name
//! uniqueness, selection, the displayed frame, and resolving a click to the
//! link it should navigate through.

use super::geometry::Point;
use super::hyperlink::{Hyperlink, VideoRef};
use crate::error::GeometryError;

/// Where a clicked hyperlink leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub link: String,
    pub video: VideoRef,
    pub frame: i32,
}

/// Hyperlinks kept in insertion order with unique names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HyperlinkSet {
    links: Vec<Hyperlink>,
}

impl HyperlinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from loaded links, rejecting duplicate names.
    pub fn from_links(links: Vec<Hyperlink>) -> Result<Self, GeometryError> {
        let mut set = Self::new();
        for link in links {
            set.insert(link)?;
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn as_slice(&self) -> &[Hyperlink] {
        &self.links
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hyperlink> {
        self.links.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Hyperlink> {
        self.links.iter().find(|l| l.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Hyperlink> {
        self.links.iter_mut().find(|l| l.name() == name)
    }

    /// Add a link. Names must be unique within the set.
    pub fn insert(&mut self, link: Hyperlink) -> Result<(), GeometryError> {
        if self.contains(link.name()) {
            return Err(GeometryError::DuplicateName(link.name().to_string()));
        }
        log::debug!(
            "Added hyperlink {:?} on frames {}..={}",
            link.name(),
            link.start_frame(),
            link.end_frame()
        );
        self.links.push(link);
        Ok(())
    }

    /// Remove and return a link. Nothing else keeps a handle to it.
    pub fn remove(&mut self, name: &str) -> Option<Hyperlink> {
        let index = self.links.iter().position(|l| l.name() == name)?;
        log::debug!("Removed hyperlink {:?}", name);
        Some(self.links.remove(index))
    }

    /// Rename a link, keeping names unique. Returns `Ok(false)` if no link
    /// has the old name.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<bool, GeometryError> {
        if old != new && self.contains(new) {
            return Err(GeometryError::DuplicateName(new.to_string()));
        }
        match self.get_mut(old) {
            Some(link) => {
                link.rename(new);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Select one link (or none) and deselect every other.
    pub fn select(&mut self, name: Option<&str>) {
        for link in &mut self.links {
            let selected = Some(link.name()) == name;
            link.set_selected(selected);
        }
    }

    pub fn selected(&self) -> Option<&Hyperlink> {
        self.links.iter().find(|l| l.is_selected())
    }

    /// Tell every link which frame is now displayed.
    pub fn set_current_frame(&mut self, frame: i32) {
        for link in &mut self.links {
            link.set_current_frame(frame);
        }
    }

    /// Links active on the given frame.
    pub fn active_at(&self, frame: i32) -> impl Iterator<Item = &Hyperlink> {
        self.links.iter().filter(move |l| l.contains_frame(frame))
    }

    /// The link whose shape on `frame` contains `point`. Where shapes
    /// overlap, the earliest-starting link wins, then the first by name, so
    /// the winner does not depend on insertion or file order.
    pub fn link_at(&self, frame: i32, point: Point) -> Option<&Hyperlink> {
        self.links
            .iter()
            .filter(|l| l.hit_test(frame, point))
            .min_by(|a, b| a.cmp_priority(b))
    }

    /// Resolve a click on `frame` to its navigation target.
    pub fn navigate(&self, frame: i32, point: Point) -> Option<Navigation> {
        let link = self.link_at(frame, point)?;
        log::info!(
            "Click at ({:.1}, {:.1}) on frame {} follows {:?} to {} frame {}",
            point.x,
            point.y,
            frame,
            link.name(),
            link.to_video(),
            link.to_frame()
        );
        Some(Navigation {
            link: link.name().to_string(),
            video: link.to_video().clone(),
            frame: link.to_frame(),
        })
    }

    /// Rescale every link, e.g. after changing the reference canvas.
    pub fn scale_vertices(&mut self, factor: f64) {
        for link in &mut self.links {
            link.scale_vertices(factor);
        }
    }
}

impl IntoIterator for HyperlinkSet {
    type Item = Hyperlink;
    type IntoIter = std::vec::IntoIter<Hyperlink>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}
