// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hyperlinker - video hyperlink geometry engine
//!
//! Clickable regions attached to a range of video frames. Each region is a
//! polygon keyed at its first and last frame and linearly interpolated in
//! between; clicks are hit-tested against the polygon shown on the current
//! frame, and whole link sets are saved to and loaded from JSON documents.

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod util;

pub use config::EngineConfig;
pub use error::{CodecError, GeometryError};
pub use models::geometry::{GeometryFrame, Point, Polygon};
pub use models::hyperlink::{Hyperlink, Keyframe, Keyframes, VideoRef};
pub use models::link_set::{HyperlinkSet, Navigation};
pub use models::shared::SharedHyperlink;
