// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hyperlink document encoding and decoding.
//!
//! A document is a JSON object keyed by hyperlink name:
//!
//! ```json
//! {
//!   "doorway": {
//!     "fromVideo": "hall.mp4", "toVideo": "room.mp4", "toFrame": 0,
//!     "startFrame": 1, "endFrame": 4,
//!     "boxInfo": { "1": [0.0, 0.0, 4.0, 0.0, 2.0, 4.0], "2": [...], ... }
//!   }
//! }
//! ```
//!
//! Every frame of every link is stored, so a loaded set shows exactly the
//! geometry that was saved. Loading is all-or-nothing.

use super::legacy;
use crate::error::{CodecError, GeometryError};
use crate::models::geometry::Polygon;
use crate::models::hyperlink::{Hyperlink, VideoRef};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LinkRecord {
    from_video: VideoRef,
    to_video: VideoRef,
    to_frame: i32,
    start_frame: i32,
    end_frame: i32,
    box_info: BTreeMap<String, Vec<f64>>,
}

/// Encode every hyperlink with all of its per-frame geometry.
pub fn save(links: &[Hyperlink]) -> Value {
    let mut doc = Map::new();
    for link in links {
        let box_info: Map<String, Value> = link
            .frames()
            .map(|(frame, geometry)| (frame.to_string(), json!(geometry.polygon.to_flat())))
            .collect();
        doc.insert(
            link.name().to_string(),
            json!({
                "fromVideo": link.from_video(),
                "toVideo": link.to_video(),
                "toFrame": link.to_frame(),
                "startFrame": link.start_frame(),
                "endFrame": link.end_frame(),
                "boxInfo": box_info,
            }),
        );
    }
    Value::Object(doc)
}

/// Decode a document written by [`save`].
///
/// Links come back ordered by start frame, then name.
pub fn load(doc: &Value) -> Result<Vec<Hyperlink>, CodecError> {
    let records = BTreeMap::<String, LinkRecord>::deserialize(doc)
        .map_err(|e| CodecError::malformed(e.to_string()))?;

    let mut links = records
        .into_iter()
        .map(|(name, record)| build_link(name, record))
        .collect::<Result<Vec<_>, _>>()?;
    sort_links(&mut links);
    Ok(links)
}

/// Decode either the current document layout or the older frame-keyed one.
pub fn load_any(doc: &Value) -> Result<Vec<Hyperlink>, CodecError> {
    if legacy::is_legacy(doc) {
        log::info!("Reading frame-keyed legacy hyperlink document");
        legacy::load(doc)
    } else {
        load(doc)
    }
}

fn build_link(name: String, record: LinkRecord) -> Result<Hyperlink, CodecError> {
    if record.start_frame > record.end_frame {
        return Err(CodecError::InvalidRange {
            name,
            start: record.start_frame,
            end: record.end_frame,
        });
    }

    let mut geometry = BTreeMap::new();
    for (key, coords) in &record.box_info {
        let frame: i32 = key.trim().parse().map_err(|_| {
            CodecError::malformed(format!("hyperlink {name:?}: frame key {key:?} is not an integer"))
        })?;
        let polygon = Polygon::from_flat(coords).map_err(|e| {
            CodecError::malformed(format!("hyperlink {name:?}, frame {frame}: {e}"))
        })?;
        if geometry.insert(frame, polygon).is_some() {
            return Err(CodecError::malformed(format!(
                "hyperlink {name:?}: frame {frame} is stored twice"
            )));
        }
    }

    from_frames(
        name,
        record.start_frame,
        record.end_frame,
        record.from_video,
        record.to_video,
        record.to_frame,
        geometry,
    )
}

/// Build a link from stored frames, translating model errors into codec errors.
pub(crate) fn from_frames(
    name: String,
    start_frame: i32,
    end_frame: i32,
    from_video: VideoRef,
    to_video: VideoRef,
    to_frame: i32,
    geometry: BTreeMap<i32, Polygon>,
) -> Result<Hyperlink, CodecError> {
    Hyperlink::from_frames(
        name.clone(),
        start_frame,
        end_frame,
        from_video,
        to_video,
        to_frame,
        geometry,
    )
    .map_err(|source| match source {
        GeometryError::InvalidRange { start, end } => CodecError::InvalidRange { name, start, end },
        GeometryError::MissingFrame(frame) => CodecError::IncompleteGeometry { name, frame },
        GeometryError::FrameOutOfRange { .. } => {
            CodecError::malformed(format!("hyperlink {name:?}: {source}"))
        }
        source => CodecError::Geometry { name, source },
    })
}

pub(crate) fn sort_links(links: &mut [Hyperlink]) {
    links.sort_by(Hyperlink::cmp_priority);
}
