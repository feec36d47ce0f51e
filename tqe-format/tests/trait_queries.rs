//! Trait indexes: lazy build, union order, and missing-partition
//! tolerance.

use tqe_format::records::assoc::{
    AttributeTrait, DeprecationTrait, FriendshipTrait, SpecializationTrait,
};
use tqe_format::testkit::ArtifactBuilder;
use tqe_format::{
    AttrIndex, AttrSort, DeclIndex, DeclSort, File, Sequence, TextOffset,
};

fn decl(index: u32) -> DeclIndex {
    DeclIndex::new(DeclSort::Scope, index)
}

fn attr(index: u32) -> AttrIndex {
    AttrIndex::new(AttrSort::Basic, index)
}

#[test]
fn test_attribute_union_order() {
    // Entries for decl 7 in both attribute partitions: the query must
    // return `trait.attribute` entries first, then the vendor partition's.
    let mut builder = ArtifactBuilder::new();
    builder
        .add_partition::<AttributeTrait>(
            "trait.attribute",
            &[
                AttributeTrait { decl: decl(7), attribute: attr(0) },
                AttributeTrait { decl: decl(3), attribute: attr(9) },
                AttributeTrait { decl: decl(7), attribute: attr(1) },
            ],
        )
        .add_partition::<AttributeTrait>(
            ".msvc.trait.decl-attrs",
            &[AttributeTrait { decl: decl(7), attribute: attr(2) }],
        );
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    assert_eq!(
        file.trait_declaration_attributes(decl(7)),
        &[attr(0), attr(1), attr(2)]
    );
    assert_eq!(file.trait_declaration_attributes(decl(3)), &[attr(9)]);
}

#[test]
fn test_attribute_query_idempotence() {
    let mut builder = ArtifactBuilder::new();
    builder.add_partition::<AttributeTrait>(
        "trait.attribute",
        &[AttributeTrait { decl: decl(1), attribute: attr(4) }],
    );
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    let first = file.trait_declaration_attributes(decl(1));
    let second = file.trait_declaration_attributes(decl(1));
    assert_eq!(first, second);
    assert_eq!(first.as_ptr(), second.as_ptr());
}

#[test]
fn test_vendor_partition_alone_still_answers() {
    let mut builder = ArtifactBuilder::new();
    builder.add_partition::<AttributeTrait>(
        ".msvc.trait.decl-attrs",
        &[AttributeTrait { decl: decl(2), attribute: attr(5) }],
    );
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    assert_eq!(file.trait_declaration_attributes(decl(2)), &[attr(5)]);
}

#[test]
fn test_missing_trait_partitions_yield_defaults() {
    let blob = ArtifactBuilder::new().build();
    let file = File::open(&blob).unwrap();

    assert_eq!(file.trait_declaration_attributes(decl(0)), &[]);
    assert_eq!(file.trait_deprecation_texts(decl(0)), TextOffset::null());
    assert_eq!(file.trait_friendship_of_class(decl(0)), Sequence::default());
    assert_eq!(
        file.trait_template_specializations(decl(0)),
        Sequence::default()
    );
}

#[test]
fn test_deprecation_last_write_wins() {
    let mut builder = ArtifactBuilder::new();
    let first = builder.add_string("use the new one");
    let second = builder.add_string("really, use the new one");
    builder.add_partition::<DeprecationTrait>(
        "trait.deprecated",
        &[
            DeprecationTrait { decl: decl(4), text: first },
            DeprecationTrait { decl: decl(4), text: second },
        ],
    );
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    let text = file.trait_deprecation_texts(decl(4));
    assert_eq!(file.get_string(text), "really, use the new one");
    // Unlisted declarations answer with the null offset.
    assert_eq!(file.trait_deprecation_texts(decl(5)), TextOffset::null());
}

#[test]
fn test_friendship_last_write_wins() {
    let mut builder = ArtifactBuilder::new();
    builder.add_partition::<FriendshipTrait>(
        "trait.friend",
        &[
            FriendshipTrait { decl: decl(6), friends: Sequence::new(0, 1) },
            FriendshipTrait { decl: decl(6), friends: Sequence::new(2, 3) },
        ],
    );
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    assert_eq!(file.trait_friendship_of_class(decl(6)), Sequence::new(2, 3));
}

#[test]
fn test_template_specializations_map() {
    let mut builder = ArtifactBuilder::new();
    builder.add_partition::<SpecializationTrait>(
        "trait.specialization",
        &[SpecializationTrait {
            decl: decl(8),
            specializations: Sequence::new(1, 2),
        }],
    );
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    assert_eq!(
        file.trait_template_specializations(decl(8)),
        Sequence::new(1, 2)
    );
}
