//! The module behind an artifact: unit description, global namespace,
//! scope declarations, and inter-module references.

use crate::decl::ScopeDeclaration;
use crate::scope::Scope;
use tqe_format::records::module_ref as module_records;
use tqe_format::{Environment, File, Index, UnitIndex, UnitSort};

/// The module a file represents.
#[derive(Clone, Copy)]
pub struct Module<'a> {
    file: &'a File<'a>,
}

impl<'a> Module<'a> {
    pub fn new(file: &'a File<'a>) -> Self {
        Self { file }
    }

    pub fn file(&self) -> &'a File<'a> {
        self.file
    }

    pub fn unit(&self) -> UnitDescription<'a> {
        UnitDescription {
            file: self.file,
            unit: self.file.unit(),
        }
    }

    /// The global namespace scope.
    pub fn global_namespace(&self) -> Scope<'a> {
        Scope::new(self.file, self.file.header().global_scope)
    }

    /// Iterate every scope declaration in the file, in partition order.
    pub fn scope_declarations(&self) -> impl Iterator<Item = ScopeDeclaration<'a>> + 'a {
        let file = self.file;
        file.scope_declarations()
            .iter()
            .map(move |record| ScopeDeclaration::new(file, record))
    }

    /// Iterate the modules this unit imports. A unit that imports nothing
    /// simply lacks the partition.
    pub fn imported_modules(&self) -> impl Iterator<Item = ModuleReference<'a>> + 'a {
        Self::module_references(self.file, "module.imported")
    }

    /// Iterate the modules this unit re-exports.
    pub fn exported_modules(&self) -> impl Iterator<Item = ModuleReference<'a>> + 'a {
        Self::module_references(self.file, "module.exported")
    }

    fn module_references(
        file: &'a File<'a>,
        partition: &str,
    ) -> impl Iterator<Item = ModuleReference<'a>> + 'a {
        file.try_partition_named::<module_records::ModuleReference, Index>(partition)
            .map(|references| references.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |reference| ModuleReference { file, reference })
    }
}

/// The unit an artifact represents.
#[derive(Clone, Copy)]
pub struct UnitDescription<'a> {
    file: &'a File<'a>,
    unit: UnitIndex,
}

impl<'a> UnitDescription<'a> {
    pub fn sort(&self) -> UnitSort {
        self.unit.sort()
    }

    pub fn is_primary(&self) -> bool {
        self.sort() == UnitSort::Primary
    }

    pub fn is_partition(&self) -> bool {
        self.sort() == UnitSort::Partition
    }

    /// The unit name carried in the index payload.
    pub fn name(&self) -> &'a str {
        self.file.get_string(self.unit.name())
    }
}

/// A reference to another module unit.
#[derive(Clone, Copy)]
pub struct ModuleReference<'a> {
    file: &'a File<'a>,
    reference: &'a module_records::ModuleReference,
}

impl<'a> ModuleReference<'a> {
    /// The owning module, absent for global-module imports.
    pub fn owner(&self) -> Option<&'a str> {
        let owner = self.reference.owner;
        (!owner.is_null()).then(|| self.file.get_string(owner))
    }

    /// The partition name, when present.
    pub fn partition(&self) -> Option<&'a str> {
        let partition = self.reference.partition;
        (!partition.is_null()).then(|| self.file.get_string(partition))
    }

    /// Resolve this reference to its loaded file through the environment.
    pub fn resolve<'e>(&self, env: &'e dyn Environment) -> Option<&'e File<'e>>
    where
        'a: 'e,
    {
        self.file.get_imported_module(*self.reference, env)
    }
}
