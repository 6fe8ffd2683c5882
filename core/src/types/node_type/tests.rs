use super::*;

#[test]
fn empty_set_intersects_nothing() {
    let none = NodeTypeSet::none();
    assert!(none.is_empty());
    assert!(!none.intersects_with(NodeTypeSet::all()));
    assert!(!NodeTypeSet::all().intersects_with(none));
}

#[test]
fn add_and_contains() {
    let mut set = NodeTypeSet::none();
    set.add_kind(NodeKind::Class);
    set.add(NodeTypeSet::of(NodeKind::Function));

    assert!(set.contains(NodeKind::Class));
    assert!(set.contains(NodeKind::Function));
    assert!(!set.contains(NodeKind::File));
    assert_eq!(set.kinds().count(), 2);
}

#[test]
fn union_and_intersection() {
    let classes = NodeTypeSet::of(NodeKind::Class);
    let files = NodeTypeSet::of(NodeKind::File);
    let both = classes.union(files);

    assert!(both.intersects_with(classes));
    assert!(both.intersects_with(files));
    assert!(!classes.intersects_with(files));
}

#[test]
fn all_contains_every_kind() {
    let all = NodeTypeSet::all();
    for kind in NodeKind::ALL {
        assert!(all.contains(kind), "{kind} missing");
    }
}

#[test]
fn kind_parses_from_its_name() {
    for kind in NodeKind::ALL {
        assert_eq!(kind.as_str().parse::<NodeKind>().unwrap(), kind);
    }
    "widget".parse::<NodeKind>().unwrap_err();
}

#[test]
fn set_serializes_as_kind_names() {
    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        kinds: NodeTypeSet,
    }

    let wrapper = Wrapper {
        kinds: [NodeKind::Method, NodeKind::File].into_iter().collect(),
    };
    let text = toml::to_string(&wrapper).unwrap();
    assert!(text.contains("\"method\""));
    assert!(text.contains("\"file\""));

    let parsed: Wrapper = toml::from_str(&text).unwrap();
    assert_eq!(parsed.kinds, wrapper.kinds);
}
