// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::ControlId;

/// Zero-argument action fired when a mode becomes active.
pub type ModeAction = Box<dyn Fn()>;

/// A named UI configuration: which controls are visible, plus an optional
/// action to run on activation. Not persisted.
pub struct Mode {
    mode_name: String,
    buttons: BTreeMap<ControlId, bool>,
    execute: Option<ModeAction>,
}

impl Mode {
    pub fn new(mode_name: impl Into<String>) -> Self {
        Self {
            mode_name: mode_name.into(),
            buttons: BTreeMap::new(),
            execute: None,
        }
    }

    pub fn with_button(mut self, control: ControlId, visible: bool) -> Self {
        self.buttons.insert(control, visible);
        self
    }

    pub fn with_execute(mut self, action: ModeAction) -> Self {
        self.execute = Some(action);
        self
    }

    pub fn mode_name(&self) -> &str {
        &self.mode_name
    }

    pub fn buttons(&self) -> &BTreeMap<ControlId, bool> {
        &self.buttons
    }

    pub fn action(&self) -> Option<&dyn Fn()> {
        self.execute.as_deref()
    }
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mode")
            .field("mode_name", &self.mode_name)
            .field("buttons", &self.buttons)
            .field("execute", &self.execute.is_some())
            .finish()
    }
}

/// Show/hide seam to the host's control surface.
///
/// Callers check [`has_control`](Self::has_control) first and silently skip
/// controls the host does not expose.
pub trait ControlPanel {
    fn has_control(&self, control: &ControlId) -> bool;

    fn set_control_visible(&mut self, control: &ControlId, visible: bool);
}
