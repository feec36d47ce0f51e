//! Partition resolution: typed access, memoization, sequences, strings,
//! and sort-tag routing.

use tqe_format::records::decl::ScopeDeclaration;
use tqe_format::records::expr::TupleExpression;
use tqe_format::records::name::{Operator, OperatorFunctionName};
use tqe_format::records::ty::{FundamentalType, PointerType};
use tqe_format::testkit::ArtifactBuilder;
use tqe_format::{
    ExprIndex, ExprSort, File, NameIndex, NameSort, ScopeIndex, Sequence, SourceLocation,
    TypeIndex, TypeSort,
};

fn seq_blob() -> ArtifactBuilder {
    let mut builder = ArtifactBuilder::new();
    builder.add_partition::<Sequence>("scope.desc", &[Sequence::new(0, 0)]);
    builder
}

#[test]
fn test_global_scope_resolves_descriptor() {
    let mut builder = ArtifactBuilder::new();
    builder
        .add_partition::<Sequence>("scope.desc", &[Sequence::new(0, 0), Sequence::new(3, 4)])
        .global_scope(ScopeIndex(1));
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    assert_eq!(file.global_scope(), Sequence::new(3, 4));
}

#[test]
fn test_cache_idempotence() {
    let blob = seq_blob().build();
    let file = File::open(&blob).unwrap();

    let first = file.scope_descriptors();
    let second = file.scope_descriptors();
    assert_eq!(first.as_slice().as_ptr(), second.as_slice().as_ptr());
    assert_eq!(first.len(), second.len());
}

#[test]
fn test_generic_and_cached_access_agree() {
    let mut builder = seq_blob();
    builder.add_partition::<PointerType>(
        "type.pointer",
        &[PointerType {
            pointee: TypeIndex::new(TypeSort::Fundamental, 0),
        }],
    );
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    let cached = file.pointer_types();
    let generic = file.partition::<PointerType>();
    assert_eq!(cached.as_slice().as_ptr(), generic.as_slice().as_ptr());
    assert_eq!(cached.len(), 1);
}

#[test]
fn test_try_partition_absent_is_none() {
    let blob = seq_blob().build();
    let file = File::open(&blob).unwrap();

    assert!(file.try_partition::<ScopeDeclaration>().is_none());
    assert!(file
        .try_partition_named::<Sequence, ScopeIndex>("scope.desc")
        .is_some());
}

#[test]
#[should_panic(expected = "missing required partition `decl.scope`")]
fn test_missing_required_partition_panics() {
    let blob = seq_blob().build();
    let file = File::open(&blob).unwrap();
    file.scope_declarations();
}

#[test]
#[should_panic(expected = "advertised entry size disagrees")]
fn test_entry_size_mismatch_panics() {
    // The TOC advertises 4-byte entries for a partition read as
    // ScopeDeclaration records.
    let mut builder = ArtifactBuilder::new();
    builder.add_partition::<u32>("decl.scope", &[0, 0, 0]);
    let blob = builder.build();
    let file = File::open(&blob).unwrap();
    file.scope_declarations();
}

fn heap_blob() -> ArtifactBuilder {
    let mut builder = ArtifactBuilder::new();
    let heap = [
        ExprIndex::new(ExprSort::Literal, 0),
        ExprIndex::new(ExprSort::Literal, 1),
        ExprIndex::new(ExprSort::Literal, 2),
    ];
    let tuple = TupleExpression {
        locus: SourceLocation { line: 1, column: 1 },
        ty: TypeIndex::null(),
        seq: Sequence::new(1, 2),
    };
    builder
        .add_partition::<ExprIndex>("heap.expr", &heap)
        .add_partition::<TupleExpression>("expr.tuple", &[tuple]);
    builder
}

#[test]
fn test_sequence_slices_heap() {
    let blob = heap_blob().build();
    let file = File::open(&blob).unwrap();

    let tuple = file.tuple_expressions().at(ExprIndex::new(ExprSort::Tuple, 0));
    let elements = file.tuple_expression_elements(tuple);
    assert_eq!(
        elements,
        &[
            ExprIndex::new(ExprSort::Literal, 1),
            ExprIndex::new(ExprSort::Literal, 2),
        ]
    );

    // A sequence covering the whole heap stays in bounds.
    assert_eq!(file.expr_heap().slice(Sequence::new(0, 3)).len(), 3);
}

#[test]
#[should_panic(expected = "out of range for partition")]
fn test_sequence_past_heap_panics() {
    let blob = heap_blob().build();
    let file = File::open(&blob).unwrap();
    file.expr_heap().slice(Sequence::new(2, 2));
}

#[test]
fn test_string_table_round_trip() {
    let mut builder = seq_blob();
    let vector = builder.add_string("vector");
    let empty = builder.add_string("");
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    assert_eq!(file.get_string(vector), "vector");
    assert_eq!(file.get_string(empty), "");
}

#[test]
#[should_panic(expected = "does not reference a terminated string")]
fn test_string_offset_past_table_panics() {
    let blob = seq_blob().build();
    let file = File::open(&blob).unwrap();
    file.get_string(tqe_format::TextOffset(0x1000));
}

#[test]
fn test_name_sort_routes_to_operator_partition() {
    let mut builder = seq_blob();
    let spelling = builder.add_string("operator+");
    builder.add_partition::<OperatorFunctionName>(
        "name.operator",
        &[OperatorFunctionName {
            encoded: spelling,
            operator: Operator::Plus as u32,
        }],
    );
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    let name = NameIndex::new(NameSort::Operator, 0);
    assert_eq!(name.sort(), NameSort::Operator);
    let record = file.operator_names().at(name);
    assert_eq!(file.get_string(record.encoded), "operator+");
    assert_eq!(record.operator(), Operator::Plus);
}

#[test]
fn test_identifier_sort_routes_to_string_table() {
    let mut builder = seq_blob();
    let text = builder.add_string("size_type");
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    let name = NameIndex::new(NameSort::Identifier, text.0);
    assert_eq!(file.get_string(name.identifier()), "size_type");
}

#[test]
fn test_concurrent_readers_share_one_file() {
    use tqe_format::records::assoc::AttributeTrait;
    use tqe_format::{AttrIndex, AttrSort, DeclIndex, DeclSort};

    let mut builder = seq_blob();
    builder.add_partition::<AttributeTrait>(
        "trait.attribute",
        &[AttributeTrait {
            decl: DeclIndex::new(DeclSort::Scope, 0),
            attribute: AttrIndex::new(AttrSort::Basic, 0),
        }],
    );
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    // Lazy caches publish through OnceLock, so readers may race on the
    // first touch of a partition slot or trait index.
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(file.scope_descriptors().len(), 1);
                let attrs =
                    file.trait_declaration_attributes(DeclIndex::new(DeclSort::Scope, 0));
                assert_eq!(attrs.len(), 1);
            });
        }
    });
}

#[test]
fn test_fundamental_basis_decodes() {
    let mut builder = seq_blob();
    builder.add_partition::<FundamentalType>(
        "type.fundamental",
        &[
            FundamentalType { basis: 14, precision: 0, sign: 0 },
            FundamentalType { basis: 9, precision: 0, sign: 0 },
        ],
    );
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    use tqe_format::records::ty::TypeBasis;
    let types = file.fundamental_types();
    assert_eq!(types.at(TypeIndex::new(TypeSort::Fundamental, 0)).basis(), TypeBasis::Namespace);
    assert_eq!(types.at(TypeIndex::new(TypeSort::Fundamental, 1)).basis(), TypeBasis::Class);
    assert!(TypeBasis::Class.is_class_like());
    assert!(!TypeBasis::Namespace.is_class_like());
}
