//! End-to-end reflection walks over assembled artifacts: namespaces,
//! classes, templates, specializations, and unit metadata.

use tqe_format::records::assoc::SpecializationTrait;
use tqe_format::records::chart::UnilevelChart;
use tqe_format::records::decl::{
    Declaration as MemberRecord, ParameterDeclaration, ScopeDeclaration as ScopeRecord,
    TemplateDeclaration as TemplateRecord,
};
use tqe_format::records::module_ref::ModuleReference;
use tqe_format::records::ty::{FundamentalType, TypeBasis};
use tqe_format::records::{Access, BasicSpecifiers};
use tqe_format::testkit::{ArtifactBuilder, ArtifactBytes};
use tqe_format::{
    ChartIndex, ChartSort, DeclIndex, DeclSort, ExprIndex, File, NameIndex, NameSort, ScopeIndex,
    Sequence, SourceLocation, TextOffset, TypeIndex, TypeSort, UnitIndex, UnitSort,
};
use tqe_reflect::{Module, Name};

fn identifier(builder: &mut ArtifactBuilder, text: &str) -> NameIndex {
    let offset = builder.add_string(text);
    NameIndex::new(NameSort::Identifier, offset.0)
}

fn locus(line: u32) -> SourceLocation {
    SourceLocation { line, column: 1 }
}

fn scope_record(
    name: NameIndex,
    line: u32,
    ty: TypeIndex,
    members: ScopeIndex,
    home_scope: DeclIndex,
) -> ScopeRecord {
    ScopeRecord {
        name,
        locus: locus(line),
        ty,
        base: TypeIndex::null(),
        initializer: members,
        home_scope,
        alignment: 0,
        specifiers: BasicSpecifiers::default(),
        access: Access::default(),
    }
}

/// One module `m.core` whose global namespace holds `namespace std`,
/// which holds `template<typename T> class vector` with one recorded
/// specialization.
fn build_module() -> ArtifactBytes {
    let mut builder = ArtifactBuilder::new();

    let namespace_ty = TypeIndex::new(TypeSort::Fundamental, 0);
    let class_ty = TypeIndex::new(TypeSort::Fundamental, 1);

    let std_name = identifier(&mut builder, "std");
    let vector_name = identifier(&mut builder, "vector");
    let spec_name = identifier(&mut builder, "vector<int>");
    let param_name = identifier(&mut builder, "T");

    builder.add_partition::<FundamentalType>(
        "type.fundamental",
        &[
            FundamentalType { basis: TypeBasis::Namespace as u32, precision: 0, sign: 0 },
            FundamentalType { basis: TypeBasis::Class as u32, precision: 0, sign: 0 },
        ],
    );

    builder.add_partition::<ScopeRecord>(
        "decl.scope",
        &[
            // [0] namespace std, members described by scope.desc[1].
            scope_record(std_name, 3, namespace_ty, ScopeIndex(1), DeclIndex::null()),
            // [1] class vector, the templated entity.
            scope_record(
                vector_name,
                5,
                class_ty,
                ScopeIndex(2),
                DeclIndex::new(DeclSort::Scope, 0),
            ),
            // [2] class vector<int>, the recorded specialization.
            scope_record(
                spec_name,
                9,
                class_ty,
                ScopeIndex(2),
                DeclIndex::new(DeclSort::Scope, 0),
            ),
        ],
    );

    builder.add_partition::<TemplateRecord>(
        "decl.template",
        &[TemplateRecord {
            name: vector_name,
            locus: locus(5),
            home_scope: DeclIndex::new(DeclSort::Scope, 0),
            chart: ChartIndex::new(ChartSort::Unilevel, 0),
            entity: DeclIndex::new(DeclSort::Scope, 1),
            ty: TypeIndex::null(),
            specifiers: BasicSpecifiers::default(),
            access: Access::default(),
        }],
    );

    builder.add_partition::<ParameterDeclaration>(
        "decl.parameter",
        &[ParameterDeclaration {
            name: param_name,
            locus: locus(5),
            ty: TypeIndex::null(),
            default_value: ExprIndex::null(),
            position: 1,
            kind: 0,
            properties: 0,
        }],
    );

    builder.add_partition::<UnilevelChart>(
        "chart.unilevel",
        &[UnilevelChart {
            parameters: Sequence::new(0, 1),
            requires_clause: ExprIndex::null(),
        }],
    );

    builder.add_partition::<MemberRecord>(
        "scope.member",
        &[
            MemberRecord { index: DeclIndex::new(DeclSort::Scope, 0) },
            MemberRecord { index: DeclIndex::new(DeclSort::Template, 0) },
            MemberRecord { index: DeclIndex::new(DeclSort::Scope, 2) },
        ],
    );

    builder.add_partition::<Sequence>(
        "scope.desc",
        &[
            // [0] global namespace: the std declaration.
            Sequence::new(0, 1),
            // [1] members of std: the vector template.
            Sequence::new(1, 1),
            // [2] members of vector: none.
            Sequence::new(0, 0),
        ],
    );

    builder.add_partition::<SpecializationTrait>(
        "trait.specialization",
        &[SpecializationTrait {
            decl: DeclIndex::new(DeclSort::Template, 0),
            specializations: Sequence::new(2, 1),
        }],
    );

    let import_owner = builder.add_string("std.compat");
    builder.add_partition::<ModuleReference>(
        "module.imported",
        &[ModuleReference { owner: import_owner, partition: TextOffset::null() }],
    );

    let unit_name = builder.add_string("m.core");
    builder.unit(UnitIndex::new(UnitSort::Primary, unit_name.0));
    builder.global_scope(ScopeIndex(0));
    builder.build()
}

#[test]
fn test_unit_description() {
    let blob = build_module();
    let file = File::open(&blob).unwrap();
    let module = Module::new(&file);

    let unit = module.unit();
    assert!(unit.is_primary());
    assert!(!unit.is_partition());
    assert_eq!(unit.name(), "m.core");
}

#[test]
fn test_global_namespace_walk() {
    let blob = build_module();
    let file = File::open(&blob).unwrap();
    let module = Module::new(&file);

    let globals: Vec<_> = module.global_namespace().declarations().collect();
    assert_eq!(globals.len(), 1);

    let std_ns = globals[0].as_scope().expect("std is a scope declaration");
    assert!(std_ns.is_namespace());
    assert!(!std_ns.is_class_or_struct());
    assert_eq!(std_ns.name().as_identifier(), Some("std"));

    let members: Vec<_> = std_ns.members().declarations().collect();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].sort(), DeclSort::Template);
}

#[test]
fn test_template_declaration_surface() {
    let blob = build_module();
    let file = File::open(&blob).unwrap();
    let module = Module::new(&file);

    let std_ns = module
        .global_namespace()
        .declarations()
        .next()
        .and_then(|decl| decl.as_scope())
        .unwrap();
    let template = std_ns
        .members()
        .declarations()
        .next()
        .and_then(|decl| decl.as_template())
        .unwrap();

    assert_eq!(template.name().as_identifier(), Some("vector"));
    assert_eq!(template.home_scope().sort(), DeclSort::Scope);

    let entity = template.entity().as_scope().expect("entity is a class");
    assert!(entity.is_class_or_struct());
    assert_eq!(entity.kind(), TypeBasis::Class);
    assert_eq!(entity.name().as_identifier(), Some("vector"));

    let chart = template.chart().as_unilevel().expect("unilevel chart");
    let parameters = chart.parameters();
    assert_eq!(parameters.len(), 1);
    assert_eq!(
        Name::new(&file, parameters[0].name).as_identifier(),
        Some("T")
    );
    assert!(chart.requires_clause().is_none());
}

#[test]
fn test_template_specializations_via_trait() {
    let blob = build_module();
    let file = File::open(&blob).unwrap();
    let module = Module::new(&file);

    let template = module
        .global_namespace()
        .declarations()
        .next()
        .and_then(|decl| decl.as_scope())
        .map(|ns| ns.members())
        .and_then(|scope| scope.declarations().next())
        .and_then(|decl| decl.as_template())
        .unwrap();

    let specializations: Vec<_> = template.specializations().collect();
    assert_eq!(specializations.len(), 1);
    let spec = specializations[0].as_scope().expect("specialization is a scope");
    assert_eq!(spec.name().as_identifier(), Some("vector<int>"));
    assert!(spec.is_class_or_struct());
}

#[test]
fn test_scope_declarations_iterates_whole_partition() {
    let blob = build_module();
    let file = File::open(&blob).unwrap();
    let module = Module::new(&file);

    let names: Vec<_> = module
        .scope_declarations()
        .map(|scope| scope.name().as_identifier().unwrap().to_string())
        .collect();
    assert_eq!(names, ["std", "vector", "vector<int>"]);
}

#[test]
fn test_module_reference_views() {
    let blob = build_module();
    let file = File::open(&blob).unwrap();
    let module = Module::new(&file);

    let imports: Vec<_> = module.imported_modules().collect();
    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].owner(), Some("std.compat"));
    assert_eq!(imports[0].partition(), None);

    assert_eq!(module.exported_modules().count(), 0);
}

#[test]
fn test_name_equality_is_per_file() {
    let blob = build_module();
    let file = File::open(&blob).unwrap();

    let record = file.scope_declarations().at(DeclIndex::new(DeclSort::Scope, 0));
    let a = Name::new(&file, record.name);
    let b = Name::new(&file, record.name);
    assert_eq!(a, b);
    assert!(tqe_reflect::name::is_identifier(a, "std"));
}
