use crate::error::ValidationError;
use crate::types::{ElementId, NodeTypeSet};

/// One `(id, name, types)` triple handed to the search index by the indexing pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedName {
    pub id: ElementId,
    pub name: String,
    pub types: NodeTypeSet,
}

impl IndexedName {
    /// Validates a raw producer record. Id `0` and empty names are rejected.
    pub fn new(raw_id: u64, name: impl Into<String>, types: NodeTypeSet) -> crate::Result<Self> {
        let id = ElementId::try_new(raw_id).map_err(ValidationError::from)?;
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        Ok(Self { id, name, types })
    }
}

#[cfg(test)]
mod tests;
