use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Graph category of an indexed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Symbol,
    Type,
    BuiltinType,
    Module,
    Namespace,
    Package,
    Struct,
    Class,
    Interface,
    Annotation,
    GlobalVariable,
    Field,
    Function,
    Method,
    Enum,
    EnumConstant,
    Typedef,
    TypeParameter,
    File,
    Macro,
    Union,
}

impl NodeKind {
    pub const ALL: [NodeKind; 21] = [
        NodeKind::Symbol,
        NodeKind::Type,
        NodeKind::BuiltinType,
        NodeKind::Module,
        NodeKind::Namespace,
        NodeKind::Package,
        NodeKind::Struct,
        NodeKind::Class,
        NodeKind::Interface,
        NodeKind::Annotation,
        NodeKind::GlobalVariable,
        NodeKind::Field,
        NodeKind::Function,
        NodeKind::Method,
        NodeKind::Enum,
        NodeKind::EnumConstant,
        NodeKind::Typedef,
        NodeKind::TypeParameter,
        NodeKind::File,
        NodeKind::Macro,
        NodeKind::Union,
    ];

    const fn bit(self) -> u32 {
        1 << (self as u32)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Symbol => "symbol",
            NodeKind::Type => "type",
            NodeKind::BuiltinType => "builtin_type",
            NodeKind::Module => "module",
            NodeKind::Namespace => "namespace",
            NodeKind::Package => "package",
            NodeKind::Struct => "struct",
            NodeKind::Class => "class",
            NodeKind::Interface => "interface",
            NodeKind::Annotation => "annotation",
            NodeKind::GlobalVariable => "global_variable",
            NodeKind::Field => "field",
            NodeKind::Function => "function",
            NodeKind::Method => "method",
            NodeKind::Enum => "enum",
            NodeKind::EnumConstant => "enum_constant",
            NodeKind::Typedef => "typedef",
            NodeKind::TypeParameter => "type_parameter",
            NodeKind::File => "file",
            NodeKind::Macro => "macro",
            NodeKind::Union => "union",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownNodeKind(s.to_string()))
    }
}

/// Bitset of [`NodeKind`]s.
///
/// Trie nodes keep the union of every entry at or below them, so only
/// `intersects_with` matters for pruning.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<NodeKind>", into = "Vec<NodeKind>")]
pub struct NodeTypeSet(u32);

impl NodeTypeSet {
    pub const fn none() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        NodeKind::ALL.into_iter().collect()
    }

    pub const fn of(kind: NodeKind) -> Self {
        Self(kind.bit())
    }

    pub fn add(&mut self, other: NodeTypeSet) {
        self.0 |= other.0;
    }

    pub fn add_kind(&mut self, kind: NodeKind) {
        self.0 |= kind.bit();
    }

    pub const fn union(self, other: NodeTypeSet) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, kind: NodeKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub const fn intersects_with(self, other: NodeTypeSet) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn kinds(self) -> impl Iterator<Item = NodeKind> {
        NodeKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl From<NodeKind> for NodeTypeSet {
    fn from(kind: NodeKind) -> Self {
        Self::of(kind)
    }
}

impl FromIterator<NodeKind> for NodeTypeSet {
    fn from_iter<I: IntoIterator<Item = NodeKind>>(iter: I) -> Self {
        let mut set = Self::none();
        for kind in iter {
            set.add_kind(kind);
        }
        set
    }
}

impl From<Vec<NodeKind>> for NodeTypeSet {
    fn from(kinds: Vec<NodeKind>) -> Self {
        kinds.into_iter().collect()
    }
}

impl From<NodeTypeSet> for Vec<NodeKind> {
    fn from(set: NodeTypeSet) -> Self {
        set.kinds().collect()
    }
}

impl fmt::Debug for NodeTypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}

#[cfg(test)]
mod tests;
