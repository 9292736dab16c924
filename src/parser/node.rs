use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Doc comment attached (or not) to a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Empty when the comment does not document a target
    #[serde(default)]
    pub target: String,
    pub value: String,
}

impl Comment {
    pub fn new(target: impl Into<String>, value: impl Into<String>) -> Self {
        Comment {
            target: target.into(),
            value: value.into(),
        }
    }
}

/// Structural element of a build file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Comment(Comment),
    Target { name: String },
    Include { path: PathBuf },
}

impl Node {
    /// The comment carried by this node, if it is one
    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Node::Comment(comment) => Some(comment),
            _ => None,
        }
    }

    pub fn into_comment(self) -> Option<Comment> {
        match self {
            Node::Comment(comment) => Some(comment),
            _ => None,
        }
    }
}
