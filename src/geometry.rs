// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Screen-position lookup against a map surface's zoom-level clustering.
//!
//! Every object is rendered at the origin of the cluster it currently
//! belongs to; sub-cluster precision is lost by design.

use crate::model::ObjectHandle;

/// A screen-space position in the attached map's pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A zoom-level spatial aggregation of data objects sharing one rendered
/// position.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    origin: ScreenPoint,
    members: Vec<ObjectHandle>,
}

impl Cluster {
    pub fn new(origin: ScreenPoint, members: Vec<ObjectHandle>) -> Self {
        Self { origin, members }
    }

    pub fn origin(&self) -> ScreenPoint {
        self.origin
    }

    pub fn members(&self) -> &[ObjectHandle] {
        &self.members
    }

    pub fn contains(&self, object: ObjectHandle) -> bool {
        self.members.contains(&object)
    }
}

/// The current clustering of one map surface: one cluster group per dataset
/// slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoomClustering {
    groups: Vec<Vec<Cluster>>,
}

impl ZoomClustering {
    pub fn new(groups: Vec<Vec<Cluster>>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Vec<Cluster>] {
        &self.groups
    }

    /// Screen position of `object`: the origin of the first cluster that
    /// contains it, scanning groups in order and short-circuiting.
    ///
    /// `None` means the object is currently not rendered (off-screen or
    /// filtered out at this zoom level) — a normal outcome, not an error.
    pub fn locate(&self, object: ObjectHandle) -> Option<ScreenPoint> {
        for group in &self.groups {
            for cluster in group {
                if cluster.contains(object) {
                    return Some(cluster.origin());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::model::ObjectHandle;

    use super::{Cluster, ScreenPoint, ZoomClustering};

    fn handle(dataset: usize, index: u32) -> ObjectHandle {
        ObjectHandle::new(dataset, index)
    }

    #[test]
    fn locate_returns_the_first_matching_cluster_origin() {
        let clustering = ZoomClustering::new(vec![vec![
            Cluster::new(ScreenPoint::new(1.0, 2.0), vec![handle(0, 0)]),
            // same object aggregated again further down; must not win
            Cluster::new(ScreenPoint::new(9.0, 9.0), vec![handle(0, 0)]),
        ]]);

        assert_eq!(
            clustering.locate(handle(0, 0)),
            Some(ScreenPoint::new(1.0, 2.0))
        );
    }

    #[test]
    fn locate_scans_across_groups() {
        let clustering = ZoomClustering::new(vec![
            vec![Cluster::new(ScreenPoint::new(1.0, 1.0), vec![handle(0, 0)])],
            vec![Cluster::new(ScreenPoint::new(5.0, 5.0), vec![handle(1, 3)])],
        ]);

        assert_eq!(
            clustering.locate(handle(1, 3)),
            Some(ScreenPoint::new(5.0, 5.0))
        );
    }

    #[test]
    fn locate_misses_with_none() {
        let clustering = ZoomClustering::new(vec![vec![Cluster::new(
            ScreenPoint::new(1.0, 1.0),
            vec![handle(0, 0)],
        )]]);

        assert_eq!(clustering.locate(handle(0, 7)), None);
    }
}
