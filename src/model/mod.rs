// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model shared by both widgets.
//!
//! Datasets stay owned by the host; everything here references records
//! through stable, ownership-free [`ObjectHandle`]s.

pub mod attr_path;
pub mod edge;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod record;

pub use attr_path::{AttrPath, AttrPathError, PathStep};
pub use edge::Edge;
pub use ids::{ControlId, Id, IdError, NodeId};
pub use record::{AttrValue, DataObject, Dataset, ObjectHandle, TABLE_CONTENT};
