// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::NodeId;

use super::ImportError;

/// Id of the implicit root node of the tree-view component.
pub const ROOT_NODE_ID: &str = "#";

pub fn root_node() -> NodeId {
    NodeId::new(ROOT_NODE_ID).expect("root node id is non-empty")
}

/// Category of a storytelling tree node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeType {
    Session,
    Dataset,
    Snapshot,
    Other(String),
}

impl NodeType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Session => "session",
            Self::Dataset => "dataset",
            Self::Snapshot => "snapshot",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for NodeType {
    fn from(value: &str) -> Self {
        match value {
            "session" => Self::Session,
            "dataset" => Self::Dataset,
            "snapshot" => Self::Snapshot,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Attributes carried on a node's list item: creation timestamp in
/// milliseconds since the epoch, plus a free-text description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One entry of the import/export file; also the shape handed to
/// [`TreeView::create_node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescriptor {
    /// Explicit node id; the tree view generates one when absent.
    pub id: Option<NodeId>,
    pub parent: NodeId,
    pub node_type: NodeType,
    pub text: String,
    pub attrs: NodeAttrs,
}

/// A snapshot of one tree node as reported by the tree view. The implicit
/// root itself is never reported, so `parent` is always set (`#` for
/// top-level nodes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: NodeId,
    pub parent: NodeId,
    pub node_type: NodeType,
    pub text: String,
    pub attrs: NodeAttrs,
}

/// Node CRUD seam to the external tree-view component. Ids are the
/// component's node ids; `#` denotes the implicit root.
pub trait TreeView {
    /// Creates a node under `parent` and returns its id (the descriptor's
    /// own id when present, a generated one otherwise).
    fn create_node(
        &mut self,
        parent: &NodeId,
        descriptor: &NodeDescriptor,
    ) -> Result<NodeId, TreeViewError>;

    /// Deletes a node and all of its descendants.
    fn delete_node(&mut self, id: &NodeId) -> Result<(), TreeViewError>;

    fn get_node(&self, id: &NodeId) -> Option<TreeNode>;

    /// Direct children of `id`, in insertion order.
    fn children_of(&self, id: &NodeId) -> Vec<NodeId>;

    fn is_leaf(&self, id: &NodeId) -> bool;

    fn set_type(&mut self, id: &NodeId, node_type: NodeType) -> Result<(), TreeViewError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeViewError {
    NodeNotFound { id: NodeId },
    ParentNotFound { parent: NodeId },
    DuplicateNodeId { id: NodeId },
    RootImmutable,
}

impl fmt::Display for TreeViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeNotFound { id } => write!(f, "node '{id}' does not exist"),
            Self::ParentNotFound { parent } => write!(f, "parent node '{parent}' does not exist"),
            Self::DuplicateNodeId { id } => write!(f, "node id '{id}' already exists"),
            Self::RootImmutable => f.write_str("the root node cannot be modified"),
        }
    }
}

impl std::error::Error for TreeViewError {}

/// Serde-facing shape of one import/export entry. Unknown fields from
/// other tree-view consumers are ignored.
#[derive(Debug, Serialize, Deserialize)]
struct NodeDescriptorJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    parent: String,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    text: String,
    #[serde(default, rename = "li_attr")]
    attrs: NodeAttrs,
}

pub(crate) fn parse_descriptors(json: &str) -> Result<Vec<NodeDescriptor>, ImportError> {
    let raw: Vec<NodeDescriptorJson> = serde_json::from_str(json)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, json)| descriptor_from_json(index, json))
        .collect()
}

fn descriptor_from_json(index: usize, json: NodeDescriptorJson) -> Result<NodeDescriptor, ImportError> {
    let id = json
        .id
        .map(|raw| NodeId::new(raw).map_err(|source| ImportError::InvalidDescriptor { index, source }))
        .transpose()?;
    let parent = NodeId::new(json.parent)
        .map_err(|source| ImportError::InvalidDescriptor { index, source })?;
    Ok(NodeDescriptor {
        id,
        parent,
        node_type: NodeType::from(json.node_type.as_str()),
        text: json.text,
        attrs: json.attrs,
    })
}

pub(crate) fn descriptors_to_json(
    descriptors: &[NodeDescriptor],
) -> Result<String, serde_json::Error> {
    let raw: Vec<NodeDescriptorJson> = descriptors
        .iter()
        .map(|descriptor| NodeDescriptorJson {
            id: descriptor.id.as_ref().map(|id| id.as_str().to_owned()),
            parent: descriptor.parent.as_str().to_owned(),
            node_type: descriptor.node_type.as_str().to_owned(),
            text: descriptor.text.clone(),
            attrs: descriptor.attrs.clone(),
        })
        .collect();
    serde_json::to_string_pretty(&raw)
}

#[cfg(test)]
mod tests {
    use super::{parse_descriptors, NodeType};

    #[test]
    fn node_types_round_trip_through_strings() {
        for name in ["session", "dataset", "snapshot", "chapter"] {
            let node_type = NodeType::from(name);
            assert_eq!(node_type.as_str(), name);
        }
        assert_eq!(NodeType::from("chapter"), NodeType::Other("chapter".to_owned()));
    }

    #[test]
    fn descriptors_parse_with_unknown_fields_ignored() {
        let descriptors = parse_descriptors(
            r##"[{"id": "s1", "parent": "#", "type": "session", "text": "Trip",
                 "li_attr": {"timestamp": 5, "description": "d"}, "a_attr": {}}]"##,
        )
        .unwrap();

        assert_eq!(descriptors.len(), 1);
        let descriptor = &descriptors[0];
        assert_eq!(descriptor.id.as_ref().unwrap().as_str(), "s1");
        assert_eq!(descriptor.node_type, NodeType::Session);
        assert_eq!(descriptor.attrs.timestamp, Some(5));
    }

    #[test]
    fn descriptor_with_empty_parent_is_rejected() {
        let result = parse_descriptors(r#"[{"parent": "", "type": "session"}]"#);
        assert!(result.is_err());
    }
}
