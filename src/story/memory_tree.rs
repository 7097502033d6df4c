// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reference in-memory implementation of [`TreeView`].
//!
//! Hosts embedding a native tree-view component adapt it behind the trait;
//! hosts without one (and the crate's own tests) use this implementation.

use std::collections::BTreeMap;

use crate::model::NodeId;

use super::tree::{NodeDescriptor, NodeType, TreeNode, TreeView, TreeViewError, ROOT_NODE_ID};

#[derive(Debug, Clone)]
struct MemoryNode {
    node: TreeNode,
    children: Vec<NodeId>,
}

/// In-memory node store keeping per-parent insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    nodes: BTreeMap<NodeId, MemoryNode>,
    root_children: Vec<NodeId>,
    next_generated: u64,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn is_root(id: &NodeId) -> bool {
        id.as_str() == ROOT_NODE_ID
    }

    fn generated_id(&mut self) -> NodeId {
        loop {
            self.next_generated += 1;
            let candidate = NodeId::new(format!("n{}", self.next_generated))
                .expect("generated node id is non-empty");
            if !self.nodes.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    fn detach_from_parent(&mut self, id: &NodeId, parent: &NodeId) {
        if Self::is_root(parent) {
            self.root_children.retain(|child| child != id);
        } else if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.retain(|child| child != id);
        }
    }

    fn remove_subtree(&mut self, id: &NodeId) {
        if let Some(removed) = self.nodes.remove(id) {
            for child in removed.children {
                self.remove_subtree(&child);
            }
        }
    }
}

impl TreeView for MemoryTree {
    fn create_node(
        &mut self,
        parent: &NodeId,
        descriptor: &NodeDescriptor,
    ) -> Result<NodeId, TreeViewError> {
        if !Self::is_root(parent) && !self.nodes.contains_key(parent) {
            return Err(TreeViewError::ParentNotFound {
                parent: parent.clone(),
            });
        }

        let id = match &descriptor.id {
            Some(id) => {
                if Self::is_root(id) || self.nodes.contains_key(id) {
                    return Err(TreeViewError::DuplicateNodeId { id: id.clone() });
                }
                id.clone()
            }
            None => self.generated_id(),
        };

        let node = TreeNode {
            id: id.clone(),
            parent: parent.clone(),
            node_type: descriptor.node_type.clone(),
            text: descriptor.text.clone(),
            attrs: descriptor.attrs.clone(),
        };
        self.nodes.insert(
            id.clone(),
            MemoryNode {
                node,
                children: Vec::new(),
            },
        );

        if Self::is_root(parent) {
            self.root_children.push(id.clone());
        } else if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(id.clone());
        }
        Ok(id)
    }

    fn delete_node(&mut self, id: &NodeId) -> Result<(), TreeViewError> {
        if Self::is_root(id) {
            return Err(TreeViewError::RootImmutable);
        }
        let Some(existing) = self.nodes.get(id) else {
            return Err(TreeViewError::NodeNotFound { id: id.clone() });
        };
        let parent = existing.node.parent.clone();
        self.detach_from_parent(id, &parent);
        self.remove_subtree(id);
        Ok(())
    }

    fn get_node(&self, id: &NodeId) -> Option<TreeNode> {
        self.nodes.get(id).map(|entry| entry.node.clone())
    }

    fn children_of(&self, id: &NodeId) -> Vec<NodeId> {
        if Self::is_root(id) {
            return self.root_children.clone();
        }
        self.nodes
            .get(id)
            .map(|entry| entry.children.clone())
            .unwrap_or_default()
    }

    fn is_leaf(&self, id: &NodeId) -> bool {
        self.children_of(id).is_empty()
    }

    fn set_type(&mut self, id: &NodeId, node_type: NodeType) -> Result<(), TreeViewError> {
        if Self::is_root(id) {
            return Err(TreeViewError::RootImmutable);
        }
        let Some(entry) = self.nodes.get_mut(id) else {
            return Err(TreeViewError::NodeNotFound { id: id.clone() });
        };
        entry.node.node_type = node_type;
        Ok(())
    }
}
