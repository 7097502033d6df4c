// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::config::OverlayConfig;
use crate::geometry::ZoomClustering;

use super::segments::Segment;

/// Handle of a vector layer created on a map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

/// Handle of a drawn overlay feature, scoped to its layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureId(pub u64);

/// Stroke style of the composite line feature: solid, semi-transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: String,
    pub opacity: f32,
    pub width: f32,
}

impl LineStyle {
    pub fn from_config(config: &OverlayConfig) -> Self {
        Self {
            color: config.stroke_color.clone(),
            opacity: config.stroke_opacity,
            width: config.stroke_width,
        }
    }
}

/// One drawn overlay feature: a composite multi-segment line geometry
/// treated as a single unit for add and remove.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFeature {
    pub segments: Vec<Segment>,
    pub style: LineStyle,
}

/// Error reported by a map surface adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceError {
    message: String,
}

impl SurfaceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map surface error: {}", self.message)
    }
}

impl std::error::Error for SurfaceError {}

/// Drawing seam to the external mapping library.
///
/// The widget creates exactly one named line layer per attached surface and
/// afterwards only adds and removes features on that layer.
pub trait MapSurface {
    /// Current zoom-level clustering of this surface.
    fn clustering(&self) -> ZoomClustering;

    fn add_line_layer(&mut self, name: &str) -> Result<LayerId, SurfaceError>;

    fn add_feature(&mut self, layer: LayerId, feature: LineFeature)
        -> Result<FeatureId, SurfaceError>;

    fn remove_feature(&mut self, layer: LayerId, feature: FeatureId) -> Result<(), SurfaceError>;
}
