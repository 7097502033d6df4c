// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Storytelling widget: a tree of saved analysis states behind an external
//! tree-view component, with JSON import/export and UI mode switching.

pub mod memory_tree;
pub mod mode;
pub mod tree;


use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::config::StoryConfig;
use crate::event::WidgetListener;
use crate::model::{ControlId, IdError, NodeId};

pub use memory_tree::MemoryTree;
pub use mode::{ControlPanel, Mode, ModeAction};
pub use tree::{
    root_node, NodeAttrs, NodeDescriptor, NodeType, TreeNode, TreeView, TreeViewError,
    ROOT_NODE_ID,
};

const DEFAULT_SESSION_TEXT: &str = "Default Session";

/// Counts of a completed import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    /// Nodes that arrived as `dataset` or `snapshot` and now carry the
    /// `snapshot` type.
    pub snapshots: usize,
}

#[derive(Debug)]
pub enum ImportError {
    Parse(serde_json::Error),
    InvalidDescriptor { index: usize, source: IdError },
    Tree(TreeViewError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(source) => write!(f, "import file is not a descriptor array: {source}"),
            Self::InvalidDescriptor { index, source } => {
                write!(f, "descriptor {index} carries an invalid id: {source}")
            }
            Self::Tree(source) => write!(f, "tree rejected a descriptor: {source}"),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(source) => Some(source),
            Self::InvalidDescriptor { source, .. } => Some(source),
            Self::Tree(source) => Some(source),
        }
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<TreeViewError> for ImportError {
    fn from(value: TreeViewError) -> Self {
        Self::Tree(value)
    }
}

/// The storytelling widget.
///
/// The tree-view and control-panel handles are injected at construction;
/// the widget never reaches for host globals.
pub struct StorytellingWidget {
    config: StoryConfig,
    tree: Box<dyn TreeView>,
    panel: Box<dyn ControlPanel>,
    view_mode: Rc<Mode>,
    active_mode: Option<String>,
}

impl StorytellingWidget {
    pub fn new(
        config: StoryConfig,
        tree: Box<dyn TreeView>,
        panel: Box<dyn ControlPanel>,
        view_mode: Rc<Mode>,
    ) -> Self {
        Self {
            config,
            tree,
            panel,
            view_mode,
            active_mode: None,
        }
    }

    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    pub fn tree(&self) -> &dyn TreeView {
        self.tree.as_ref()
    }

    pub fn active_mode(&self) -> Option<&str> {
        self.active_mode.as_deref()
    }

    /// Removes all top-level nodes and their descendants.
    pub fn clear_tree(&mut self) -> Result<(), TreeViewError> {
        let root = root_node();
        for child in self.tree.children_of(&root) {
            self.tree.delete_node(&child)?;
        }
        Ok(())
    }

    /// Rebuilds the tree from an import file: an ordered JSON array of node
    /// descriptors.
    ///
    /// The tree is cleared first. Descriptors declared `dataset` or
    /// `snapshot` are created and then forcibly retyped to `snapshot` (both
    /// categories collapse on import); all others are created verbatim under
    /// their declared parent. When at least one snapshot node was imported,
    /// the expert control is shown and the simple control hidden. A
    /// successful import ends by switching to the configured view mode.
    ///
    /// A parse failure rejects the import before any tree mutation; a
    /// descriptor naming an unknown parent rejects the whole import and
    /// leaves the tree empty.
    pub fn import_tree(&mut self, json: &str) -> Result<ImportSummary, ImportError> {
        let descriptors = tree::parse_descriptors(json)?;
        self.clear_tree()?;

        let mut summary = ImportSummary::default();
        if let Err(err) = self.create_imported_nodes(&descriptors, &mut summary) {
            // a failed import leaves no partial tree behind
            if let Err(clear_err) = self.clear_tree() {
                warn!(error = %clear_err, "clearing the tree after a failed import");
            }
            return Err(err);
        }

        if summary.snapshots > 0 {
            let expert = self.config.expert_control.clone();
            let simple = self.config.simple_control.clone();
            self.set_control_checked(&expert, true);
            self.set_control_checked(&simple, false);
        }

        debug!(
            created = summary.created,
            snapshots = summary.snapshots,
            "tree imported"
        );
        self.change_to_view_mode();
        Ok(summary)
    }

    fn create_imported_nodes(
        &mut self,
        descriptors: &[NodeDescriptor],
        summary: &mut ImportSummary,
    ) -> Result<(), ImportError> {
        for descriptor in descriptors {
            match descriptor.node_type {
                NodeType::Dataset | NodeType::Snapshot => {
                    let id = self.tree.create_node(&descriptor.parent, descriptor)?;
                    self.tree.set_type(&id, NodeType::Snapshot)?;
                    summary.snapshots += 1;
                }
                _ => {
                    self.tree.create_node(&descriptor.parent, descriptor)?;
                }
            }
            summary.created += 1;
        }
        Ok(())
    }

    /// Completion callback of the host's asynchronous file read. Runs the
    /// parse/rebuild/mode-switch sequence once; failures are logged.
    pub fn on_file_loaded(&mut self, contents: &str) {
        if let Err(err) = self.import_tree(contents) {
            warn!(%err, "story import failed");
        }
    }

    /// Creates the default session root when the tree has no nodes yet.
    /// Idempotent once the root has any child.
    pub fn ensure_default_session(&mut self) -> Result<(), TreeViewError> {
        self.ensure_default_session_at(Utc::now().timestamp_millis())
    }

    pub fn ensure_default_session_at(&mut self, timestamp_ms: i64) -> Result<(), TreeViewError> {
        let root = root_node();
        if !self.tree.is_leaf(&root) {
            return Ok(());
        }
        let descriptor = NodeDescriptor {
            id: None,
            parent: root.clone(),
            node_type: NodeType::Session,
            text: DEFAULT_SESSION_TEXT.to_owned(),
            attrs: NodeAttrs {
                timestamp: Some(timestamp_ms),
                description: Some(DEFAULT_SESSION_TEXT.to_owned()),
            },
        };
        self.tree.create_node(&root, &descriptor)?;
        Ok(())
    }

    /// Activates `mode`: records its name, applies its button visibilities
    /// (silently skipping controls the panel does not expose), then runs
    /// the optional action.
    pub fn set_mode(&mut self, mode: &Mode) {
        self.active_mode = Some(mode.mode_name().to_owned());
        for (control, visible) in mode.buttons() {
            self.set_control_checked(control, *visible);
        }
        if let Some(action) = mode.action() {
            action();
        }
    }

    pub fn change_to_view_mode(&mut self) {
        let view_mode = Rc::clone(&self.view_mode);
        self.set_mode(&view_mode);
    }

    /// Collects the anchor node (`parent`, or the root when absent) and all
    /// of its descendants whose type equals `node_type`.
    pub fn find_nodes_by_type(
        &self,
        node_type: &NodeType,
        parent: Option<&NodeId>,
    ) -> Vec<TreeNode> {
        let anchor = parent.cloned().unwrap_or_else(root_node);
        let mut found = Vec::new();
        if let Some(node) = self.tree.get_node(&anchor) {
            if node.node_type == *node_type {
                found.push(node);
            }
        }

        let mut queue: VecDeque<NodeId> = self.tree.children_of(&anchor).into();
        while let Some(id) = queue.pop_front() {
            queue.extend(self.tree.children_of(&id));
            if let Some(node) = self.tree.get_node(&id) {
                if node.node_type == *node_type {
                    found.push(node);
                }
            }
        }
        found
    }

    /// Serializes the current tree to the import file format, parents
    /// before children, so the output imports cleanly again.
    pub fn export_tree(&self) -> Result<String, serde_json::Error> {
        let root = root_node();
        let mut descriptors = Vec::new();
        let mut queue: VecDeque<NodeId> = self.tree.children_of(&root).into();
        while let Some(id) = queue.pop_front() {
            queue.extend(self.tree.children_of(&id));
            if let Some(node) = self.tree.get_node(&id) {
                descriptors.push(NodeDescriptor {
                    id: Some(node.id),
                    parent: node.parent,
                    node_type: node.node_type,
                    text: node.text,
                    attrs: node.attrs,
                });
            }
        }
        tree::descriptors_to_json(&descriptors)
    }

    fn set_control_checked(&mut self, control: &ControlId, visible: bool) {
        if self.panel.has_control(control) {
            self.panel.set_control_visible(control, visible);
        }
    }
}

impl WidgetListener for StorytellingWidget {}
