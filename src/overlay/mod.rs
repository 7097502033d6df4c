// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Line overlay widget: lines between matched records, drawn over every
//! attached map surface.

pub mod segments;
pub mod surface;


use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::config::OverlayConfig;
use crate::event::{merge_object_groups, EventBus, Selection, SubscriberId, WidgetListener};
use crate::matching;
use crate::model::{Dataset, Edge, ObjectHandle};

pub use segments::{collect_segments, Segment};
pub use surface::{FeatureId, LayerId, LineFeature, LineStyle, MapSurface, SurfaceError};

/// Association between an attached map surface and the dedicated line layer
/// created for it. The single overlay slot is replaced on each redraw.
struct AttachedMap {
    surface: Rc<RefCell<dyn MapSurface>>,
    layer: LayerId,
    feature: Option<FeatureId>,
}

/// The line overlay widget.
///
/// Holds the current edge list and selection, and redraws all attached maps
/// when the host emits highlight or selection changes. Synchronous and
/// non-reentrant: every operation runs to completion on the caller's
/// thread.
pub struct LineOverlayWidget {
    config: OverlayConfig,
    lines: Vec<Edge>,
    selected: Vec<Vec<ObjectHandle>>,
    attached: Vec<AttachedMap>,
    subscription: Option<SubscriberId>,
}

impl LineOverlayWidget {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            lines: Vec::new(),
            selected: Vec::new(),
            attached: Vec::new(),
            subscription: None,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn lines(&self) -> &[Edge] {
        &self.lines
    }

    pub fn selected(&self) -> &[Vec<ObjectHandle>] {
        &self.selected
    }

    pub fn attached_maps(&self) -> usize {
        self.attached.len()
    }

    /// Registers the widget on the host event bus and hands back the shared
    /// handle the host keeps. The registration is dropped again via
    /// [`disconnect`](Self::disconnect).
    pub fn connect(self, bus: &mut EventBus) -> Rc<RefCell<Self>> {
        let widget = Rc::new(RefCell::new(self));
        let trait_widget: Rc<RefCell<dyn WidgetListener>> = widget.clone();
        let weak: Weak<RefCell<dyn WidgetListener>> = Rc::downgrade(&trait_widget);
        let id = bus.subscribe(weak);
        widget.borrow_mut().subscription = Some(id);
        widget
    }

    /// Unregisters from the bus. Attached maps and the edge list survive.
    pub fn disconnect(&mut self, bus: &mut EventBus) {
        if let Some(id) = self.subscription.take() {
            bus.unsubscribe(id);
        }
    }

    /// Creates the dedicated line layer on `surface` and attaches the map;
    /// every later redraw includes it. The attachment lives for the
    /// widget's lifetime.
    pub fn attach_map(&mut self, surface: Rc<RefCell<dyn MapSurface>>) -> Result<(), SurfaceError> {
        let layer = surface
            .borrow_mut()
            .add_line_layer(&self.config.layer_name)?;
        self.attached.push(AttachedMap {
            surface,
            layer,
            feature: None,
        });
        Ok(())
    }

    /// Rebuilds the edge list by matching two dataset columns.
    pub fn match_columns(
        &mut self,
        datasets: &[Dataset],
        slot_a: usize,
        column_a: &str,
        slot_b: usize,
        column_b: &str,
    ) {
        self.lines = matching::match_columns(datasets, slot_a, column_a, slot_b, column_b);
    }

    pub fn set_lines(&mut self, lines: Vec<Edge>) {
        self.lines = lines;
    }

    /// Redraws every attached map: the previous overlay feature is removed,
    /// the edge list is filtered to `highlight` (when non-empty), resolved
    /// against that map's own clustering, deduplicated, and drawn as one
    /// composite feature.
    ///
    /// Maps are updated sequentially; a surface failure aborts the
    /// remaining maps without rollback or retry.
    pub fn draw_lines(&mut self, highlight: &[Vec<ObjectHandle>]) -> Result<(), SurfaceError> {
        let style = LineStyle::from_config(&self.config);
        for attached in &mut self.attached {
            let mut surface = attached.surface.borrow_mut();
            if let Some(feature) = attached.feature.take() {
                surface.remove_feature(attached.layer, feature)?;
            }

            let clustering = surface.clustering();
            let segments = collect_segments(&self.lines, highlight, &clustering);
            debug!(segments = segments.len(), "overlay redraw");

            let feature = surface.add_feature(
                attached.layer,
                LineFeature {
                    segments,
                    style: style.clone(),
                },
            )?;
            attached.feature = Some(feature);
        }
        Ok(())
    }

    fn redraw_logged(&mut self, highlight: &[Vec<ObjectHandle>]) {
        if let Err(err) = self.draw_lines(highlight) {
            warn!(%err, "overlay redraw failed");
        }
    }
}

impl WidgetListener for LineOverlayWidget {
    fn highlight_changed(&mut self, objects: &[Vec<ObjectHandle>]) {
        if !self.config.events.highlight_events {
            return;
        }
        let merged = merge_object_groups(objects, &self.selected);
        self.redraw_logged(&merged);
    }

    fn selection_changed(&mut self, selection: &Selection) {
        if !self.config.events.selection_events {
            return;
        }
        self.selected = if selection.valid() {
            selection.objects().to_vec()
        } else {
            Vec::new()
        };
        let selected = self.selected.clone();
        self.redraw_logged(&selected);
    }
}
