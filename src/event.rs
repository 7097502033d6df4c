// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Typed host-event subscription.
//!
//! Widgets register on the [`EventBus`] when they are attached to the host
//! and unregister at teardown. Delivery is synchronous on the caller's
//! thread; registrations are weak, so a dropped widget is pruned on the
//! next emit.

use std::cell::RefCell;
use std::fmt;
use std::rc::Weak;

use crate::model::ObjectHandle;

/// Result of a host selection change: per-dataset groups of selected
/// objects.
///
/// An invalid selection carries no groups at all, which is distinct from a
/// valid selection that happens to be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    objects: Option<Vec<Vec<ObjectHandle>>>,
}

impl Selection {
    pub fn new(objects: Vec<Vec<ObjectHandle>>) -> Self {
        Self {
            objects: Some(objects),
        }
    }

    pub fn invalid() -> Self {
        Self { objects: None }
    }

    pub fn valid(&self) -> bool {
        self.objects.is_some()
    }

    pub fn objects(&self) -> &[Vec<ObjectHandle>] {
        self.objects.as_deref().unwrap_or(&[])
    }
}

/// Per-event-kind handlers a widget registers on the bus.
///
/// All bodies default to no-ops; widgets override the events they react to.
pub trait WidgetListener {
    fn highlight_changed(&mut self, _objects: &[Vec<ObjectHandle>]) {}

    fn selection_changed(&mut self, _selection: &Selection) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Single-threaded fan-out of host events to registered widgets.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(SubscriberId, Weak<RefCell<dyn WidgetListener>>)>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Weak<RefCell<dyn WidgetListener>>) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn emit_highlight_changed(&mut self, objects: &[Vec<ObjectHandle>]) {
        self.dispatch(|listener| listener.highlight_changed(objects));
    }

    pub fn emit_selection_changed(&mut self, selection: &Selection) {
        self.dispatch(|listener| listener.selection_changed(selection));
    }

    fn dispatch(&mut self, mut deliver: impl FnMut(&mut dyn WidgetListener)) {
        self.listeners.retain(|(_, listener)| {
            let Some(listener) = listener.upgrade() else {
                return false;
            };
            deliver(&mut *listener.borrow_mut());
            true
        });
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// Elementwise union of two per-dataset object groups, preserving
/// first-seen order within each group.
pub fn merge_object_groups(
    a: &[Vec<ObjectHandle>],
    b: &[Vec<ObjectHandle>],
) -> Vec<Vec<ObjectHandle>> {
    let len = a.len().max(b.len());
    let mut merged = Vec::with_capacity(len);
    for slot in 0..len {
        let mut group: Vec<ObjectHandle> = Vec::new();
        let handles = a
            .get(slot)
            .into_iter()
            .flatten()
            .chain(b.get(slot).into_iter().flatten());
        for handle in handles {
            if !group.contains(handle) {
                group.push(*handle);
            }
        }
        merged.push(group);
    }
    merged
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::model::ObjectHandle;

    use super::{merge_object_groups, EventBus, Selection, WidgetListener};

    #[derive(Debug, Default)]
    struct CountingListener {
        highlights: usize,
        selections: usize,
    }

    impl WidgetListener for CountingListener {
        fn highlight_changed(&mut self, _objects: &[Vec<ObjectHandle>]) {
            self.highlights += 1;
        }

        fn selection_changed(&mut self, _selection: &Selection) {
            self.selections += 1;
        }
    }

    fn handle(dataset: usize, index: u32) -> ObjectHandle {
        ObjectHandle::new(dataset, index)
    }

    #[test]
    fn events_reach_subscribed_listeners() {
        let listener = Rc::new(RefCell::new(CountingListener::default()));
        let mut bus = EventBus::new();
        let listener_dyn: Rc<RefCell<dyn WidgetListener>> = listener.clone();
            let weak: std::rc::Weak<RefCell<dyn WidgetListener>> = Rc::downgrade(&listener_dyn);
        bus.subscribe(weak);

        bus.emit_highlight_changed(&[vec![handle(0, 0)]]);
        bus.emit_selection_changed(&Selection::invalid());

        assert_eq!(listener.borrow().highlights, 1);
        assert_eq!(listener.borrow().selections, 1);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let listener = Rc::new(RefCell::new(CountingListener::default()));
        let mut bus = EventBus::new();
        let listener_dyn: Rc<RefCell<dyn WidgetListener>> = listener.clone();
            let weak: std::rc::Weak<RefCell<dyn WidgetListener>> = Rc::downgrade(&listener_dyn);
        let id = bus.subscribe(weak);
        bus.unsubscribe(id);

        bus.emit_highlight_changed(&[]);

        assert_eq!(listener.borrow().highlights, 0);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn dropped_listeners_are_pruned_on_emit() {
        let mut bus = EventBus::new();
        {
            let listener = Rc::new(RefCell::new(CountingListener::default()));
            let listener_dyn: Rc<RefCell<dyn WidgetListener>> = listener.clone();
            let weak: std::rc::Weak<RefCell<dyn WidgetListener>> = Rc::downgrade(&listener_dyn);
            bus.subscribe(weak);
        }
        assert_eq!(bus.subscriber_count(), 1);

        bus.emit_selection_changed(&Selection::invalid());

        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn invalid_selection_exposes_no_groups() {
        let selection = Selection::invalid();
        assert!(!selection.valid());
        assert!(selection.objects().is_empty());

        let selection = Selection::new(vec![Vec::new()]);
        assert!(selection.valid());
        assert_eq!(selection.objects().len(), 1);
    }

    #[test]
    fn merge_unions_groups_elementwise() {
        let a = vec![vec![handle(0, 0), handle(0, 1)]];
        let b = vec![vec![handle(0, 1)], vec![handle(1, 2)]];

        let merged = merge_object_groups(&a, &b);

        assert_eq!(
            merged,
            vec![vec![handle(0, 0), handle(0, 1)], vec![handle(1, 2)]]
        );
    }
}
