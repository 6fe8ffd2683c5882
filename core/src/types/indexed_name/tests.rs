use super::*;
use crate::Error;
use crate::types::NodeKind;

#[test]
fn indexed_name_normal_usage() {
    let entry = IndexedName::new(5, "Widget", NodeKind::Class.into()).unwrap();

    assert_eq!(entry.id, ElementId::try_new(5).unwrap());
    assert_eq!(entry.name, "Widget");
    assert!(entry.types.contains(NodeKind::Class));
}

#[test]
fn indexed_name_rejects_zero_id() {
    let err = IndexedName::new(0, "Widget", NodeTypeSet::all()).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidElementId(_))
    ));
}

#[test]
fn indexed_name_rejects_empty_name() {
    let err = IndexedName::new(1, "", NodeTypeSet::all()).unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::EmptyName)));
}
