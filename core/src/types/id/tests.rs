use super::*;

#[test]
fn element_id_normal_usage() {
    let id = ElementId::try_new(42).unwrap();
    assert_eq!(id.into_inner(), 42);
    assert_eq!(id.to_string(), "42");
}

#[test]
fn element_id_rejects_zero() {
    let result = ElementId::try_new(0);
    result.unwrap_err();
}

#[test]
fn element_id_try_from() {
    let id = ElementId::try_from(7u64).unwrap();
    assert_eq!(*id, 7);
    ElementId::try_from(0u64).unwrap_err();
}

#[test]
fn element_id_ordering() {
    const IDS: [u64; 4] = [1, 3, 2, 100];

    for l in IDS.iter() {
        for r in IDS.iter() {
            let id_l = ElementId::try_new(*l).unwrap();
            let id_r = ElementId::try_new(*r).unwrap();
            assert_eq!(id_l.cmp(&id_r), l.cmp(r), "Comparing {} and {}", l, r);
        }
    }
}
