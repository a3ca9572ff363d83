// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Reader for the older frame-keyed document layout.
//!
//! Early files grouped shapes by frame rather than by link:
//!
//! ```json
//! { "12": [ { "name": "door", "fromVideo": "a.mp4", "toVideo": "b.mp4",
//!             "points": [x0, y0, x1, y1, ...] } ] }
//! ```
//!
//! Those files carry no target frame, so links read from them point at
//! frame 0. They are only ever read; saving always writes the current layout.

use super::codec;
use crate::error::CodecError;
use crate::models::geometry::Polygon;
use crate::models::hyperlink::{Hyperlink, VideoRef};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyEntry {
    name: String,
    from_video: VideoRef,
    to_video: VideoRef,
    #[serde(default)]
    to_frame: i32,
    points: Vec<f64>,
}

struct PendingLink {
    from_video: VideoRef,
    to_video: VideoRef,
    to_frame: i32,
    geometry: BTreeMap<i32, Polygon>,
}

/// A non-empty object whose values are all arrays.
pub fn is_legacy(doc: &Value) -> bool {
    doc.as_object()
        .is_some_and(|map| !map.is_empty() && map.values().all(Value::is_array))
}

/// Decode a frame-keyed document. Each link's range spans the first to the
/// last frame it appears on, and every frame in between must be present.
pub fn load(doc: &Value) -> Result<Vec<Hyperlink>, CodecError> {
    let frames = BTreeMap::<String, Vec<LegacyEntry>>::deserialize(doc)
        .map_err(|e| CodecError::malformed(e.to_string()))?;

    let mut pending: BTreeMap<String, PendingLink> = BTreeMap::new();
    for (key, entries) in frames {
        let frame: i32 = key
            .trim()
            .parse()
            .map_err(|_| CodecError::malformed(format!("frame key {key:?} is not an integer")))?;

        for entry in entries {
            let polygon = Polygon::from_flat(&entry.points).map_err(|e| {
                CodecError::malformed(format!("hyperlink {:?}, frame {frame}: {e}", entry.name))
            })?;
            let link = pending
                .entry(entry.name.clone())
                .or_insert_with(|| PendingLink {
                    from_video: entry.from_video.clone(),
                    to_video: entry.to_video.clone(),
                    to_frame: entry.to_frame,
                    geometry: BTreeMap::new(),
                });
            if link.geometry.insert(frame, polygon).is_some() {
                return Err(CodecError::malformed(format!(
                    "hyperlink {:?} appears twice on frame {frame}",
                    entry.name
                )));
            }
        }
    }

    let mut links = Vec::with_capacity(pending.len());
    for (name, link) in pending {
        // Every pending link has at least one frame.
        let (Some((&start, _)), Some((&end, _))) =
            (link.geometry.first_key_value(), link.geometry.last_key_value())
        else {
            continue;
        };
        links.push(codec::from_frames(
            name,
            start,
            end,
            link.from_video,
            link.to_video,
            link.to_frame,
            link.geometry,
        )?);
    }
    codec::sort_links(&mut links);
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::geometry::Point;
    use serde_json::json;

    fn entry(name: &str, x: f64) -> Value {
        json!({
            "name": name,
            "fromVideo": "a.mp4",
            "toVideo": "b.mp4",
            "points": [x, 0.0, x + 10.0, 0.0, x + 10.0, 10.0]
        })
    }

    #[test]
    fn test_detects_layout() {
        assert!(is_legacy(&json!({ "3": [entry("door", 0.0)] })));
        assert!(!is_legacy(&json!({})));
        assert!(!is_legacy(&json!({ "door": { "startFrame": 0 } })));
    }

    #[test]
    fn test_groups_frames_by_name() {
        let doc = json!({
            "3": [entry("door", 0.0), entry("window", 50.0)],
            "4": [entry("door", 2.0)],
            "5": [entry("door", 4.0)]
        });
        let links = load(&doc).unwrap();
        assert_eq!(links.len(), 2);

        let door = &links[0];
        assert_eq!(door.name(), "door");
        assert_eq!(door.frame_range(), 3..=5);
        assert_eq!(door.to_frame(), 0);
        assert_eq!(
            door.geometry_at(4).unwrap().polygon.vertices()[0],
            Point::new(2.0, 0.0)
        );

        let window = &links[1];
        assert_eq!(window.frame_range(), 3..=3);
        assert_eq!(window.to_video().as_str(), "b.mp4");
    }

    #[test]
    fn test_gap_is_incomplete() {
        let doc = json!({
            "1": [entry("door", 0.0)],
            "3": [entry("door", 4.0)]
        });
        assert_eq!(
            load(&doc).unwrap_err(),
            CodecError::IncompleteGeometry {
                name: "door".to_string(),
                frame: 2
            }
        );
    }

    #[test]
    fn test_duplicate_entry_is_malformed() {
        let doc = json!({ "1": [entry("door", 0.0), entry("door", 1.0)] });
        assert!(matches!(load(&doc), Err(CodecError::MalformedDocument(_))));
    }

    #[test]
    fn test_load_any_reads_both_layouts() {
        let legacy = json!({ "0": [entry("door", 0.0)], "1": [entry("door", 0.0)] });
        let links = codec::load_any(&legacy).unwrap();
        assert_eq!(links.len(), 1);

        let current = codec::save(&links);
        assert!(!is_legacy(&current));
        assert_eq!(codec::load_any(&current).unwrap(), links);
    }
}
