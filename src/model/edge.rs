// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::record::ObjectHandle;

/// An undirected matched pair of records, produced by the matcher and
/// consumed by the line renderer.
///
/// When both handles come from the same dataset the matcher only creates
/// edges with `start.index > end.index`, which rules out self-pairs and
/// reflexive duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    start: ObjectHandle,
    end: ObjectHandle,
}

impl Edge {
    pub fn new(start: ObjectHandle, end: ObjectHandle) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> ObjectHandle {
        self.start
    }

    pub fn end(&self) -> ObjectHandle {
        self.end
    }
}
