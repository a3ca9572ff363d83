// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shared hyperlink handles.
//!
//! A UI thread edits a hyperlink while a background task may be saving it.
//! Every mutation goes through [`SharedHyperlink::write`], which holds the
//! exclusive lock for the whole edit. Readers copy what they need out under
//! a short shared lock and work on the copy.

use super::geometry::{GeometryFrame, Point};
use super::hyperlink::Hyperlink;
use crate::util::hit_test;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SharedHyperlink {
    inner: Arc<RwLock<Hyperlink>>,
}

impl SharedHyperlink {
    pub fn new(link: Hyperlink) -> Self {
        Self {
            inner: Arc::new(RwLock::new(link)),
        }
    }

    /// Run a mutation with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut Hyperlink) -> R) -> R {
        f(&mut *self.inner.write())
    }

    /// Run a short read with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&Hyperlink) -> R) -> R {
        f(&*self.inner.read())
    }

    pub fn name(&self) -> String {
        self.read(|l| l.name().to_string())
    }

    /// Copy of the geometry shown on `frame`.
    pub fn geometry_snapshot(&self, frame: i32) -> Option<GeometryFrame> {
        self.read(|l| l.geometry_at(frame).cloned())
    }

    /// Hit test against a snapshot, so the lock is not held while testing.
    pub fn hit_test(&self, frame: i32, point: Point) -> bool {
        self.geometry_snapshot(frame)
            .is_some_and(|g| hit_test::contains(point, &g.polygon))
    }

    /// Full copy for persistence; serialize the copy after the lock is released.
    pub fn snapshot(&self) -> Hyperlink {
        self.read(Hyperlink::clone)
    }

    /// Unwrap the link if this is the last handle, otherwise clone it.
    pub fn into_inner(self) -> Hyperlink {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => lock.into_inner(),
            Err(inner) => Self { inner }.snapshot(),
        }
    }
}

impl From<Hyperlink> for SharedHyperlink {
    fn from(link: Hyperlink) -> Self {
        Self::new(link)
    }
}
