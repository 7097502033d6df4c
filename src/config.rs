// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Widget configuration with host-overridable defaults.
//!
//! Hosts hand in a JSON options document; any field left out keeps its
//! default.

use serde::{Deserialize, Serialize};

use crate::model::ControlId;

/// Host-level toggles deciding which bus events the widgets react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventFlags {
    pub highlight_events: bool,
    pub selection_events: bool,
}

impl Default for EventFlags {
    fn default() -> Self {
        Self {
            highlight_events: true,
            selection_events: true,
        }
    }
}

/// Options of the line overlay widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Name of the dedicated vector layer created on each attached map.
    pub layer_name: String,
    pub stroke_color: String,
    pub stroke_opacity: f32,
    pub stroke_width: f32,
    pub events: EventFlags,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            layer_name: "Line Layer".to_owned(),
            stroke_color: "#0000ff".to_owned(),
            stroke_opacity: 0.5,
            stroke_width: 5.0,
            events: EventFlags::default(),
        }
    }
}

impl OverlayConfig {
    pub fn from_json(options: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(options)
    }
}

/// Options of the storytelling widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// Control revealed once snapshot nodes have been imported.
    pub expert_control: ControlId,
    /// Control hidden once snapshot nodes have been imported.
    pub simple_control: ControlId,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            expert_control: static_control("storytelling-expert"),
            simple_control: static_control("storytelling-simple"),
        }
    }
}

impl StoryConfig {
    pub fn from_json(options: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(options)
    }
}

fn static_control(name: &'static str) -> ControlId {
    ControlId::new(name).expect("static control id is non-empty")
}
