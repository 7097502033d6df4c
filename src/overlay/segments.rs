// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use crate::geometry::{ScreenPoint, ZoomClustering};
use crate::model::{Edge, ObjectHandle};

/// A two-point line derived from an edge at render time. Never persisted;
/// recomputed on every redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: ScreenPoint,
    pub end: ScreenPoint,
}

impl Segment {
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }
}

/// Converts matched edges into the deduplicated segment list of one redraw
/// pass against one surface's clustering.
///
/// With a non-empty `highlight`, edges touching none of the highlighted
/// objects are skipped. Edges whose endpoints fail to resolve, or resolve
/// to the identical position (objects aggregated into the same cluster),
/// produce no segment. Deduplication compares ordered endpoint coordinates,
/// not object identity: structurally different edges rendering to the same
/// two points collapse into one visible line, first occurrence wins.
pub fn collect_segments(
    edges: &[Edge],
    highlight: &[Vec<ObjectHandle>],
    clustering: &ZoomClustering,
) -> Vec<Segment> {
    let highlighted: HashSet<ObjectHandle> = highlight.iter().flatten().copied().collect();

    let mut segments: Vec<Segment> = Vec::new();
    for edge in edges {
        if !highlighted.is_empty()
            && !highlighted.contains(&edge.start())
            && !highlighted.contains(&edge.end())
        {
            continue;
        }

        let Some(start) = clustering.locate(edge.start()) else {
            continue;
        };
        let Some(end) = clustering.locate(edge.end()) else {
            continue;
        };
        if start == end {
            continue;
        }

        let segment = Segment::new(start, end);
        // one visible line per ordered coordinate pair; the linear scan
        // beats drawing duplicate lines at these batch sizes
        if segments.iter().any(|existing| *existing == segment) {
            continue;
        }
        segments.push(segment);
    }
    segments
}
