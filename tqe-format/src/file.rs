//! The artifact file: open-time validation, the partition resolver and
//! its memoization table, the accessor catalogue, and the trait indexes.
//!
//! Opening validates the signature and the size invariant eagerly and
//! builds the table-of-contents name map; everything else is lazy.
//! Partition resolutions are memoized in a fixed slot table and trait
//! indexes are built on first query, both through `OnceLock`, so a warmed
//! file can be shared across threads freely.
//!
//! After a successful open the reader operates under a closed-world
//! assumption: indices drawn from records are in range, required
//! partitions exist, and advertised entry sizes match the record layouts.
//! Violations panic with a descriptive message instead of threading
//! `Result` through every accessor.

use crate::blob::BlobView;
use crate::env::Environment;
use crate::error::{FileError, Result};
use crate::header::{
    FileHeader, PartitionSummary, SIGNATURE, SIGNATURE_LEN, STRUCTURE_LEN, SUMMARY_LEN,
};
use crate::index::{
    AttrIndex, ByteOffset, ChartIndex, DeclIndex, ExprIndex, ExprSort, Index, LitIndex, NameIndex,
    ScopeIndex, Sequence, StringIndex, SyntaxIndex, TextOffset, TypeIndex, UnitIndex,
};
use crate::partition::{Partition, PartitionEntry};
use crate::records::assoc::{
    AttributeTrait, DeprecationTrait, FriendshipTrait, SpecializationTrait, ATTRIBUTE_TRAITS,
    DEPRECATION_TRAITS, FRIENDSHIP_TRAITS, MSVC_DECL_ATTRS, SPECIALIZATION_TRAITS,
};
use crate::records::attr::{
    AttrBasic, AttrCalled, AttrElaborated, AttrExpanded, AttrFactored, AttrLabeled, AttrScoped,
    AttrTuple,
};
use crate::records::chart::{MultilevelChart, UnilevelChart};
use crate::records::decl::{
    AliasDeclaration, Concept, Constructor, Declaration, DeclReference, DeductionGuide,
    Destructor, Enumeration, Enumerator, FieldDeclaration, FriendDeclaration, FunctionDeclaration,
    IntrinsicDeclaration, MethodDeclaration, ParameterDeclaration, PartialSpecialization,
    ScopeDeclaration, Specialization, TemplateDeclaration, UsingDeclaration, VariableDeclaration,
};
use crate::records::expr::{
    AlignofExpression, CallExpression, DeclExpression, DyadExpression, ExpressionList,
    LiteralExpression, MonadExpression, PackedTemplateArguments, PathExpression,
    ProductValueTypeExpression, QualifiedNameExpression, ReadExpression, RequiresExpression,
    SizeofExpression, StringLiteral, SubobjectValue, SyntaxTreeExpression, TemplateId,
    TemplateRef, TupleExpression, TypeExpression, UnqualifiedId,
};
use crate::records::lit::{FloatingPointLiteral, IntegerLiteral};
use crate::records::module_ref::ModuleReference;
use crate::records::name::{
    ConversionFunctionName, LiteralOperatorName, OperatorFunctionName, SourceFileName,
    SpecializationName, TemplateName,
};
use crate::records::syntax::{
    CompoundRequirementSyntax, DeclSpecifierSeq, DeclaratorSyntax, DecltypeSpecifier,
    ExpressionSyntax, FunctionDeclaratorSyntax, NestedRequirementSyntax,
    ParameterDeclaratorSyntax, PointerDeclaratorSyntax, RequirementBodySyntax,
    RequiresClauseSyntax, SimpleRequirementSyntax, SimpleTypeSpecifier,
    TemplateArgumentListSyntax, TemplateIdSyntax, TupleSyntax, TypeIdSyntax,
    TypeRequirementSyntax, TypeSpecifierSeq, TypeTemplateArgumentSyntax, TypeTraitIntrinsicSyntax,
};
use crate::records::ty::{
    ArrayType, BaseType, DecltypeType, DesignatedType, ExpansionType, ForallType,
    FundamentalType, FunctionType, LvalueReference, MethodType, PlaceholderType, PointerType,
    QualifiedType, RvalueReference, SyntacticType, SyntaxType, TorType, TupleType, TypenameType,
};
use bytemuck::AnyBitPattern;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Memoized resolution of one catalogue partition.
#[derive(Copy, Clone)]
struct RawPartition {
    offset: ByteOffset,
    cardinality: u32,
}

/// Random, zero-copy view over one module interface artifact.
///
/// Borrows the blob; every partition handle, record reference, sequence
/// slice, and string obtained from the file borrows it transitively.
pub struct File<'a> {
    blob: BlobView<'a>,
    header: &'a FileHeader,
    string_table: &'a [u8],
    toc_entries: &'a [PartitionSummary],
    toc: FxHashMap<&'a str, &'a PartitionSummary>,
    slots: [OnceLock<RawPartition>; SLOT_COUNT],
    decl_attributes: OnceLock<FxHashMap<DeclIndex, Vec<AttrIndex>>>,
    deprecation_texts: OnceLock<FxHashMap<DeclIndex, TextOffset>>,
    friendships: OnceLock<FxHashMap<DeclIndex, Sequence>>,
    template_specializations: OnceLock<FxHashMap<DeclIndex, Sequence>>,
}

impl std::fmt::Debug for File<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("File").field("header", &self.header).finish_non_exhaustive()
    }
}

/// Resolve a NUL-terminated string inside the table.
fn read_string(table: &[u8], offset: TextOffset) -> Option<&str> {
    let bytes = table.get(offset.value()..)?;
    let end = bytes.iter().position(|&b| b == 0)?;
    std::str::from_utf8(&bytes[..end]).ok()
}

impl<'a> File<'a> {
    /// Validate and open an artifact blob.
    ///
    /// Eager work is limited to the signature gate, the size invariant,
    /// and the table-of-contents name map; partitions and trait indexes
    /// resolve lazily afterwards.
    ///
    /// The blob base must be 8-byte aligned (the widest record alignment
    /// in the format); passing a misaligned span is an embedder bug and
    /// panics.
    pub fn open(blob: &'a [u8]) -> Result<Self> {
        // 1. Signature gate. Touches nothing past the first four bytes.
        if blob.len() < SIGNATURE_LEN || blob[..SIGNATURE_LEN] != SIGNATURE {
            return Err(FileError::BadSignature);
        }
        if blob.len() < STRUCTURE_LEN {
            return Err(FileError::SizeMismatch {
                computed: STRUCTURE_LEN as u64,
                actual: blob.len() as u64,
            });
        }

        let view = BlobView::new(blob);
        let header: &FileHeader = view.record_at(ByteOffset(SIGNATURE_LEN as u32));

        // 2. Table-of-contents region. An overrun already implies the
        //    size invariant cannot hold.
        let toc_offset = header.toc.value();
        let toc_bytes = header.partition_count.value() as u64 * SUMMARY_LEN as u64;
        let toc_end = toc_offset as u64 + toc_bytes;
        if toc_end > blob.len() as u64 {
            return Err(FileError::SizeMismatch {
                computed: toc_end,
                actual: blob.len() as u64,
            });
        }
        if toc_offset % std::mem::align_of::<PartitionSummary>() != 0 {
            return Err(FileError::Misaligned {
                region: "table of contents",
                offset: toc_offset,
                align: std::mem::align_of::<PartitionSummary>(),
            });
        }
        let toc_entries: &[PartitionSummary] =
            view.slice_of(header.toc, header.partition_count.value());

        // 3. Size invariant: prefix + string table + TOC + partition
        //    payloads account for every byte.
        let mut computed = STRUCTURE_LEN as u64 + header.string_table_size.0 as u64 + toc_bytes;
        for summary in toc_entries {
            computed += summary.size_bytes();
        }
        if computed != blob.len() as u64 {
            return Err(FileError::SizeMismatch {
                computed,
                actual: blob.len() as u64,
            });
        }

        // 4. String table region.
        let table_offset = header.string_table_bytes.value();
        let table_end = table_offset as u64 + header.string_table_size.0 as u64;
        if table_end > blob.len() as u64 {
            return Err(FileError::Truncated {
                region: "string table",
                needed: table_end,
                actual: blob.len() as u64,
            });
        }
        let string_table = &blob[table_offset..table_end as usize];

        // 5. Name map. Names must be unique within a file.
        let mut toc = FxHashMap::with_capacity_and_hasher(toc_entries.len(), Default::default());
        for summary in toc_entries {
            let name = read_string(string_table, summary.name)
                .ok_or(FileError::MalformedName { offset: summary.name.0 })?;
            if toc.insert(name, summary).is_some() {
                return Err(FileError::DuplicatePartition(name.to_string()));
            }
        }

        tracing::debug!(
            partitions = toc_entries.len(),
            blob_len = blob.len(),
            "opened module interface artifact"
        );

        Ok(Self {
            blob: view,
            header,
            string_table,
            toc_entries,
            toc,
            slots: std::array::from_fn(|_| OnceLock::new()),
            decl_attributes: OnceLock::new(),
            deprecation_texts: OnceLock::new(),
            friendships: OnceLock::new(),
            template_specializations: OnceLock::new(),
        })
    }

    #[inline]
    pub fn header(&self) -> &'a FileHeader {
        self.header
    }

    /// The raw table-of-contents descriptors, in file order.
    #[inline]
    pub fn table_of_contents(&self) -> &'a [PartitionSummary] {
        self.toc_entries
    }

    /// The unit this artifact represents.
    #[inline]
    pub fn unit(&self) -> UnitIndex {
        self.header.unit
    }

    /// Resolve a string-table offset to its NUL-terminated string.
    ///
    /// Panics when the offset does not reference a terminated UTF-8
    /// region inside the table; offsets drawn from a well-formed artifact
    /// always do.
    pub fn get_string(&self, offset: TextOffset) -> &'a str {
        match read_string(self.string_table, offset) {
            Some(text) => text,
            None => panic!(
                "text offset {} does not reference a terminated string (table of {} bytes)",
                offset.0,
                self.string_table.len()
            ),
        }
    }

    /// The scope descriptor of the global namespace.
    pub fn global_scope(&self) -> Sequence {
        *self.scope_descriptors().at(self.header.global_scope)
    }

    // -----------------------------------------------------------------------
    // Partition resolution
    // -----------------------------------------------------------------------

    /// Look up a partition by its canonical name. `None` when the TOC
    /// does not list it.
    pub fn try_partition<T: PartitionEntry>(&self) -> Option<Partition<'a, T, T::Index>> {
        self.try_partition_named(T::NAME)
    }

    /// Look up a required partition by its canonical name.
    ///
    /// Panics with *missing partition* when absent.
    pub fn partition<T: PartitionEntry>(&self) -> Partition<'a, T, T::Index> {
        self.partition_named(T::NAME)
    }

    /// Look up a partition by explicit name. `None` when the TOC does not
    /// list it.
    pub fn try_partition_named<T: AnyBitPattern, I>(
        &self,
        name: &str,
    ) -> Option<Partition<'a, T, I>> {
        let summary = *self.toc.get(name)?;
        Some(self.resolve(name, summary))
    }

    /// Look up a required partition by explicit name.
    ///
    /// Panics with *missing partition* when absent.
    pub fn partition_named<T: AnyBitPattern, I>(&self, name: &str) -> Partition<'a, T, I> {
        match self.try_partition_named(name) {
            Some(partition) => partition,
            None => panic!("missing required partition `{name}`"),
        }
    }

    fn resolve<T: AnyBitPattern, I>(
        &self,
        name: &str,
        summary: &PartitionSummary,
    ) -> Partition<'a, T, I> {
        assert_eq!(
            summary.entry_size.value(),
            std::mem::size_of::<T>(),
            "partition `{name}`: advertised entry size disagrees with {}",
            std::any::type_name::<T>(),
        );
        Partition::new(
            self.blob
                .slice_of(summary.offset, summary.cardinality.value()),
        )
    }

    /// Memoizing resolution for the accessor catalogue. The first call
    /// consults the TOC map and publishes `(offset, cardinality)` into
    /// the slot; later calls re-type the stored location without hashing.
    fn cached<T: AnyBitPattern, I>(&self, slot: Slot, name: &'static str) -> Partition<'a, T, I> {
        let raw = self.slots[slot as usize].get_or_init(|| {
            let summary = match self.toc.get(name) {
                Some(summary) => *summary,
                None => panic!("missing required partition `{name}`"),
            };
            assert_eq!(
                summary.entry_size.value(),
                std::mem::size_of::<T>(),
                "partition `{name}`: advertised entry size disagrees with {}",
                std::any::type_name::<T>(),
            );
            RawPartition {
                offset: summary.offset,
                cardinality: summary.cardinality.0,
            }
        });
        Partition::new(self.blob.slice_of(raw.offset, raw.cardinality as usize))
    }

    // -----------------------------------------------------------------------
    // Trait indexes
    // -----------------------------------------------------------------------

    fn decl_attribute_index(&self) -> &FxHashMap<DeclIndex, Vec<AttrIndex>> {
        self.decl_attributes.get_or_init(|| {
            let mut map: FxHashMap<DeclIndex, Vec<AttrIndex>> = FxHashMap::default();
            // Fixed scan order; the union is not deduplicated.
            for name in [ATTRIBUTE_TRAITS, MSVC_DECL_ATTRS] {
                if let Some(pairs) = self.try_partition_named::<AttributeTrait, Index>(name) {
                    for pair in pairs.iter() {
                        map.entry(pair.decl).or_default().push(pair.attribute);
                    }
                }
            }
            tracing::trace!(decls = map.len(), "built declaration attribute index");
            map
        })
    }

    fn deprecation_index(&self) -> &FxHashMap<DeclIndex, TextOffset> {
        self.deprecation_texts.get_or_init(|| {
            let mut map = FxHashMap::default();
            if let Some(pairs) = self.try_partition_named::<DeprecationTrait, Index>(DEPRECATION_TRAITS)
            {
                for pair in pairs.iter() {
                    map.insert(pair.decl, pair.text);
                }
            }
            tracing::trace!(decls = map.len(), "built deprecation text index");
            map
        })
    }

    fn friendship_index(&self) -> &FxHashMap<DeclIndex, Sequence> {
        self.friendships.get_or_init(|| {
            let mut map = FxHashMap::default();
            if let Some(pairs) = self.try_partition_named::<FriendshipTrait, Index>(FRIENDSHIP_TRAITS)
            {
                for pair in pairs.iter() {
                    map.insert(pair.decl, pair.friends);
                }
            }
            tracing::trace!(decls = map.len(), "built friendship index");
            map
        })
    }

    fn specialization_index(&self) -> &FxHashMap<DeclIndex, Sequence> {
        self.template_specializations.get_or_init(|| {
            let mut map = FxHashMap::default();
            if let Some(pairs) =
                self.try_partition_named::<SpecializationTrait, Index>(SPECIALIZATION_TRAITS)
            {
                for pair in pairs.iter() {
                    map.insert(pair.decl, pair.specializations);
                }
            }
            tracing::trace!(decls = map.len(), "built template specialization index");
            map
        })
    }

    /// Attributes attached to `decl`: `trait.attribute` entries first (in
    /// partition order), then `.msvc.trait.decl-attrs` entries. Empty when
    /// the declaration has none.
    pub fn trait_declaration_attributes(&self, decl: DeclIndex) -> &[AttrIndex] {
        self.decl_attribute_index()
            .get(&decl)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Deprecation message of `decl`; the null text offset when absent.
    pub fn trait_deprecation_texts(&self, decl: DeclIndex) -> TextOffset {
        self.deprecation_index()
            .get(&decl)
            .copied()
            .unwrap_or(TextOffset::null())
    }

    /// Friends of the class declared by `decl`, as a `scope.member` run;
    /// empty when absent.
    pub fn trait_friendship_of_class(&self, decl: DeclIndex) -> Sequence {
        self.friendship_index().get(&decl).copied().unwrap_or_default()
    }

    /// Specializations of the template declared by `decl`, as a
    /// `scope.member` run; empty when absent.
    pub fn trait_template_specializations(&self, decl: DeclIndex) -> Sequence {
        self.specialization_index()
            .get(&decl)
            .copied()
            .unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Record navigation helpers
    // -----------------------------------------------------------------------

    /// The scope declaration behind `decl`.
    pub fn get_scope(&self, decl: DeclIndex) -> &'a ScopeDeclaration {
        self.scope_declarations().at(decl)
    }

    /// Members of a scope: the descriptor's run of the master
    /// `scope.member` list.
    pub fn get_declarations(&self, scope: Sequence) -> &'a [Declaration] {
        self.declarations().slice(scope)
    }

    /// Elements of a tuple expression, from `heap.expr`.
    pub fn tuple_expression_elements(&self, tuple: &TupleExpression) -> &'a [ExprIndex] {
        self.expr_heap().slice(tuple.seq)
    }

    /// Parts of a qualified name. The record's `elements` expression
    /// always has sort `Tuple`.
    pub fn qualified_name_parts(&self, expr: &QualifiedNameExpression) -> &'a [ExprIndex] {
        assert_eq!(
            expr.elements.sort(),
            ExprSort::Tuple,
            "qualified-name elements must be a tuple expression",
        );
        self.tuple_expression_elements(self.tuple_expressions().at(expr.elements))
    }

    // -----------------------------------------------------------------------
    // Imported modules
    // -----------------------------------------------------------------------

    /// Resolve a module reference through the environment.
    ///
    /// A null owner is a global-module import looked up by the partition
    /// name alone; otherwise the key is `owner` or `owner:partition`.
    pub fn get_imported_module<'s>(
        &'s self,
        module: ModuleReference,
        env: &'s dyn Environment,
    ) -> Option<&'s File<'s>> {
        if module.owner.is_null() {
            env.module_by_name(self.get_string(module.partition))
        } else {
            let mut name = self.get_string(module.owner).to_string();
            if !module.partition.is_null() {
                name.push(':');
                name.push_str(self.get_string(module.partition));
            }
            env.module_by_name(&name)
        }
    }
}

// ---------------------------------------------------------------------------
// Accessor catalogue
// ---------------------------------------------------------------------------

/// Declares the memoized accessor surface: one slot, one method, one
/// partition each. Canonical-name entries take their name from
/// [`PartitionEntry`]; explicit-name entries carry a literal.
macro_rules! partition_accessors {
    ($( $slot:ident / $accessor:ident : ($ty:ty, $idx:ty) $(= $name:literal)? ; )*) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(usize)]
        enum Slot { $($slot,)* }

        const SLOT_COUNT: usize = [$(stringify!($slot)),*].len();

        impl<'a> File<'a> {
            $(
                pub fn $accessor(&self) -> Partition<'a, $ty, $idx> {
                    self.cached::<$ty, $idx>(
                        Slot::$slot,
                        partition_accessors!(@name $ty $(, $name)?),
                    )
                }
            )*
        }
    };
    (@name $ty:ty) => { <$ty as PartitionEntry>::NAME };
    (@name $ty:ty, $name:literal) => { $name };
}

partition_accessors! {
    // Declarations.
    ScopeDecls / scope_declarations: (ScopeDeclaration, DeclIndex);
    TemplateDecls / template_declarations: (TemplateDeclaration, DeclIndex);
    PartialSpecializationDecls / partial_specializations: (PartialSpecialization, DeclIndex);
    SpecializationDecls / specializations: (Specialization, DeclIndex);
    UsingDecls / using_declarations: (UsingDeclaration, DeclIndex);
    EnumerationDecls / enumerations: (Enumeration, DeclIndex);
    EnumeratorDecls / enumerators: (Enumerator, DeclIndex);
    AliasDecls / alias_declarations: (AliasDeclaration, DeclIndex);
    ReferenceDecls / decl_references: (DeclReference, DeclIndex);
    FunctionDecls / functions: (FunctionDeclaration, DeclIndex);
    MethodDecls / methods: (MethodDeclaration, DeclIndex);
    ConstructorDecls / constructors: (Constructor, DeclIndex);
    DestructorDecls / destructors: (Destructor, DeclIndex);
    VariableDecls / variables: (VariableDeclaration, DeclIndex);
    ParameterDecls / parameters: (ParameterDeclaration, DeclIndex);
    FieldDecls / fields: (FieldDeclaration, DeclIndex);
    FriendDecls / friends: (FriendDeclaration, DeclIndex);
    ConceptDecls / concepts: (Concept, DeclIndex);
    IntrinsicDecls / intrinsic_declarations: (IntrinsicDeclaration, DeclIndex);
    DeductionGuideDecls / deduction_guides: (DeductionGuide, DeclIndex);

    // Types.
    FundamentalTypes / fundamental_types: (FundamentalType, TypeIndex);
    DesignatedTypes / designated_types: (DesignatedType, TypeIndex);
    TorTypes / tor_types: (TorType, TypeIndex);
    SyntacticTypes / syntactic_types: (SyntacticType, TypeIndex);
    ExpansionTypes / expansion_types: (ExpansionType, TypeIndex);
    PointerTypes / pointer_types: (PointerType, TypeIndex);
    FunctionTypes / function_types: (FunctionType, TypeIndex);
    MethodTypes / method_types: (MethodType, TypeIndex);
    ArrayTypes / array_types: (ArrayType, TypeIndex);
    BaseTypes / base_types: (BaseType, TypeIndex);
    TupleTypes / tuple_types: (TupleType, TypeIndex);
    LvalueReferences / lvalue_references: (LvalueReference, TypeIndex);
    RvalueReferences / rvalue_references: (RvalueReference, TypeIndex);
    QualifiedTypes / qualified_types: (QualifiedType, TypeIndex);
    ForallTypes / forall_types: (ForallType, TypeIndex);
    SyntaxTypes / syntax_types: (SyntaxType, TypeIndex);
    PlaceholderTypes / placeholder_types: (PlaceholderType, TypeIndex);
    TypenameTypes / typename_types: (TypenameType, TypeIndex);
    DecltypeTypes / decltype_types: (DecltypeType, TypeIndex);

    // Attributes.
    BasicAttrs / basic_attributes: (AttrBasic, AttrIndex);
    ScopedAttrs / scoped_attributes: (AttrScoped, AttrIndex);
    LabeledAttrs / labeled_attributes: (AttrLabeled, AttrIndex);
    CalledAttrs / called_attributes: (AttrCalled, AttrIndex);
    ExpandedAttrs / expanded_attributes: (AttrExpanded, AttrIndex);
    FactoredAttrs / factored_attributes: (AttrFactored, AttrIndex);
    ElaboratedAttrs / elaborated_attributes: (AttrElaborated, AttrIndex);
    TupleAttrs / tuple_attributes: (AttrTuple, AttrIndex);

    // Expressions.
    LiteralExprs / literal_expressions: (LiteralExpression, ExprIndex);
    TypeExprs / type_expressions: (TypeExpression, ExprIndex);
    DeclExprs / decl_expressions: (DeclExpression, ExprIndex);
    UnqualifiedIdExprs / unqualified_id_expressions: (UnqualifiedId, ExprIndex);
    TemplateIdExprs / template_id_expressions: (TemplateId, ExprIndex);
    TemplateRefExprs / template_ref_expressions: (TemplateRef, ExprIndex);
    MonadExprs / monad_expressions: (MonadExpression, ExprIndex);
    DyadExprs / dyad_expressions: (DyadExpression, ExprIndex);
    StringLiteralExprs / string_literal_expressions: (StringLiteral, StringIndex);
    CallExprs / call_expressions: (CallExpression, ExprIndex);
    SizeofExprs / sizeof_expressions: (SizeofExpression, ExprIndex);
    AlignofExprs / alignof_expressions: (AlignofExpression, ExprIndex);
    RequiresExprs / requires_expressions: (RequiresExpression, ExprIndex);
    TupleExprs / tuple_expressions: (TupleExpression, ExprIndex);
    PathExprs / path_expressions: (PathExpression, ExprIndex);
    ReadExprs / read_expressions: (ReadExpression, ExprIndex);
    SyntaxTreeExprs / syntax_tree_expressions: (SyntaxTreeExpression, ExprIndex);
    ExpressionLists / expression_lists: (ExpressionList, ExprIndex);
    QualifiedNameExprs / qualified_name_expressions: (QualifiedNameExpression, ExprIndex);
    PackedTemplateArgs / packed_template_arguments: (PackedTemplateArguments, ExprIndex);
    ProductValueTypeExprs / product_value_type_expressions: (ProductValueTypeExpression, ExprIndex);
    SubobjectValues / subobject_value_expressions: (SubobjectValue, ExprIndex);

    // Charts and literals.
    UnilevelCharts / unilevel_charts: (UnilevelChart, ChartIndex);
    MultilevelCharts / multilevel_charts: (MultilevelChart, ChartIndex);
    IntegerLits / integer_literals: (IntegerLiteral, LitIndex);
    FloatingPointLits / fp_literals: (FloatingPointLiteral, LitIndex);

    // Syntax trees.
    SimpleTypeSpecifiers / simple_type_specifiers: (SimpleTypeSpecifier, SyntaxIndex);
    DecltypeSpecifiers / decltype_specifiers: (DecltypeSpecifier, SyntaxIndex);
    TypeSpecifierSeqs / type_specifier_seq_syntax_trees: (TypeSpecifierSeq, SyntaxIndex);
    DeclSpecifierSeqs / decl_specifier_seq_syntax_trees: (DeclSpecifierSeq, SyntaxIndex);
    TypeIds / type_id_syntax_trees: (TypeIdSyntax, SyntaxIndex);
    Declarators / declarator_syntax_trees: (DeclaratorSyntax, SyntaxIndex);
    PointerDeclarators / pointer_declarator_syntax_trees: (PointerDeclaratorSyntax, SyntaxIndex);
    FunctionDeclarators / function_declarator_syntax_trees: (FunctionDeclaratorSyntax, SyntaxIndex);
    ParameterDeclarators / parameter_declarator_syntax_trees: (ParameterDeclaratorSyntax, SyntaxIndex);
    ExpressionSyntaxes / expression_syntax_trees: (ExpressionSyntax, SyntaxIndex);
    RequiresClauses / requires_clause_syntax_trees: (RequiresClauseSyntax, SyntaxIndex);
    SimpleRequirements / simple_requirement_syntax_trees: (SimpleRequirementSyntax, SyntaxIndex);
    TypeRequirements / type_requirement_syntax_trees: (TypeRequirementSyntax, SyntaxIndex);
    NestedRequirements / nested_requirement_syntax_trees: (NestedRequirementSyntax, SyntaxIndex);
    CompoundRequirements / compound_requirement_syntax_trees: (CompoundRequirementSyntax, SyntaxIndex);
    RequirementBodies / requirement_body_syntax_trees: (RequirementBodySyntax, SyntaxIndex);
    TypeTemplateArguments / type_template_argument_syntax_trees: (TypeTemplateArgumentSyntax, SyntaxIndex);
    TemplateArgumentLists / template_argument_list_syntax_trees: (TemplateArgumentListSyntax, SyntaxIndex);
    TemplateIdSyntaxes / template_id_syntax_trees: (TemplateIdSyntax, SyntaxIndex);
    TypeTraitIntrinsics / type_trait_intrinsic_syntax_trees: (TypeTraitIntrinsicSyntax, SyntaxIndex);
    TupleSyntaxes / tuple_syntax_trees: (TupleSyntax, SyntaxIndex);

    // Names.
    OperatorNames / operator_names: (OperatorFunctionName, NameIndex);
    ConversionNames / conversion_names: (ConversionFunctionName, NameIndex);
    LiteralNames / literal_names: (LiteralOperatorName, NameIndex);
    TemplateNames / template_names: (TemplateName, NameIndex);
    SpecializationNames / specialization_names: (SpecializationName, NameIndex);
    SourceFileNames / source_file_names: (SourceFileName, NameIndex);

    // Heaps.
    TypeHeap / type_heap: (TypeIndex, Index) = "heap.type";
    ExprHeap / expr_heap: (ExprIndex, Index) = "heap.expr";
    AttrHeap / attr_heap: (AttrIndex, Index) = "heap.attr";
    SyntaxHeap / syntax_heap: (SyntaxIndex, Index) = "heap.syn";

    // Module references and remaining explicit-name partitions.
    ImportedModules / imported_modules: (ModuleReference, Index) = "module.imported";
    ExportedModules / exported_modules: (ModuleReference, Index) = "module.exported";
    DeductionGuideNames / deduction_guide_names: (DeclIndex, Index) = "name.guide";
    ScopeDescriptors / scope_descriptors: (Sequence, ScopeIndex) = "scope.desc";
    Declarations / declarations: (Declaration, Index) = "scope.member";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_string() {
        let table = b"\0std\0vector\0";
        assert_eq!(read_string(table, TextOffset(0)), Some(""));
        assert_eq!(read_string(table, TextOffset(1)), Some("std"));
        assert_eq!(read_string(table, TextOffset(5)), Some("vector"));
        // Past the end, or unterminated.
        assert_eq!(read_string(table, TextOffset(12)), None);
        assert_eq!(read_string(b"abc", TextOffset(0)), None);
    }

    #[test]
    fn test_slot_count_matches_catalogue() {
        assert_eq!(SLOT_COUNT, 109);
        assert_eq!(Slot::ScopeDecls as usize, 0);
        assert_eq!(Slot::Declarations as usize, SLOT_COUNT - 1);
    }

    #[test]
    fn test_file_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<File<'static>>();
    }
}
