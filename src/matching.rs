// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Nested-loop record matching across dataset columns.

use tracing::{debug, warn};

use crate::model::{AttrPath, Dataset, Edge, ObjectHandle};

/// Finds all pairs of records whose extracted column values are equal.
///
/// Every object of slot `slot_a` is compared against every object of slot
/// `slot_b` — O(|A|×|B|), no index, acceptable because the datasets involved
/// are small. Equality is exact value equality, and an edge is only emitted
/// when both keys are present. When both slots name the same dataset,
/// candidate pairs with `a.index <= b.index` are skipped, which prevents
/// self-pairing and considers each unordered pair once.
///
/// A malformed column path or an out-of-range slot is logged and degrades
/// to "no value" — the scan still completes and yields what it can.
pub fn match_columns(
    datasets: &[Dataset],
    slot_a: usize,
    column_a: &str,
    slot_b: usize,
    column_b: &str,
) -> Vec<Edge> {
    let Some(dataset_a) = datasets.get(slot_a) else {
        warn!(slot = slot_a, "match skipped: no dataset in slot");
        return Vec::new();
    };
    let Some(dataset_b) = datasets.get(slot_b) else {
        warn!(slot = slot_b, "match skipped: no dataset in slot");
        return Vec::new();
    };

    // compiled once per call; a discarded path means no record on that side
    // has a value, so the scan yields nothing
    let (Some(path_a), Some(path_b)) = (compile_column(column_a), compile_column(column_b)) else {
        return Vec::new();
    };

    let same_dataset = slot_a == slot_b;
    let mut edges = Vec::new();
    for object_a in dataset_a.objects() {
        let Some(key_a) = path_a.resolve(object_a) else {
            continue;
        };
        for object_b in dataset_b.objects() {
            // avoid reflexive and double entries
            if same_dataset && object_a.index() <= object_b.index() {
                continue;
            }
            let Some(key_b) = path_b.resolve(object_b) else {
                continue;
            };
            if key_a == key_b {
                edges.push(Edge::new(
                    ObjectHandle::new(slot_a, object_a.index()),
                    ObjectHandle::new(slot_b, object_b.index()),
                ));
            }
        }
    }

    debug!(edges = edges.len(), "matched columns");
    edges
}

fn compile_column(column: &str) -> Option<AttrPath> {
    match AttrPath::parse(column) {
        Ok(path) => Some(path),
        Err(err) => {
            warn!(column, %err, "column path discarded");
            None
        }
    }
}
