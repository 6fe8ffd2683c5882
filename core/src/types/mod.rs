pub mod config;

pub(crate) mod id;
pub use id::{ElementId, ElementIdError};

pub(crate) mod node_type;
pub use node_type::{NodeKind, NodeTypeSet};

pub(crate) mod indexed_name;
pub use indexed_name::IndexedName;
