//! Imported-module resolution through the environment seam.

use std::cell::RefCell;

use tqe_format::records::module_ref::ModuleReference;
use tqe_format::testkit::{ArtifactBuilder, ArtifactBytes};
use tqe_format::{Environment, File, Index, TextOffset};

/// Records every lookup key it is asked for; resolves nothing.
#[derive(Default)]
struct RecordingEnvironment {
    seen: RefCell<Vec<String>>,
}

impl Environment for RecordingEnvironment {
    fn module_by_name(&self, name: &str) -> Option<&File<'_>> {
        self.seen.borrow_mut().push(name.to_string());
        None
    }
}

fn import_blob(owner: &str, partition: &str) -> ArtifactBytes {
    let mut builder = ArtifactBuilder::new();
    let owner = builder.add_string(owner);
    let partition = builder.add_string(partition);
    builder.add_partition::<ModuleReference>("module.imported", &[ModuleReference { owner, partition }]);
    builder.build()
}

#[test]
fn test_global_module_import_uses_partition_name_alone() {
    let blob = import_blob("", "std");
    let file = File::open(&blob).unwrap();
    let env = RecordingEnvironment::default();

    let reference = *file.imported_modules().at(Index(0));
    assert!(reference.owner.is_null());
    assert!(file.get_imported_module(reference, &env).is_none());
    assert_eq!(*env.seen.borrow(), ["std"]);
}

#[test]
fn test_owner_and_partition_join_with_colon() {
    let blob = import_blob("app.core", "impl");
    let file = File::open(&blob).unwrap();
    let env = RecordingEnvironment::default();

    let reference = *file.imported_modules().at(Index(0));
    file.get_imported_module(reference, &env);
    assert_eq!(*env.seen.borrow(), ["app.core:impl"]);
}

#[test]
fn test_owner_alone_when_partition_is_null() {
    let blob = import_blob("app.core", "");
    let file = File::open(&blob).unwrap();
    let env = RecordingEnvironment::default();

    let reference = *file.imported_modules().at(Index(0));
    file.get_imported_module(reference, &env);
    assert_eq!(*env.seen.borrow(), ["app.core"]);
}

#[test]
fn test_resolution_returns_the_environment_file() {
    // An environment holding a single loaded module named "std".
    struct Env<'a> {
        file: File<'a>,
    }
    impl Environment for Env<'_> {
        fn module_by_name(&self, name: &str) -> Option<&File<'_>> {
            (name == "std").then_some(&self.file)
        }
    }

    let target = ArtifactBuilder::new().build();
    let env = Env {
        file: File::open(&target).unwrap(),
    };

    let blob = import_blob("", "std");
    let file = File::open(&blob).unwrap();
    let reference = *file.imported_modules().at(Index(0));
    let resolved = file
        .get_imported_module(reference, &env)
        .expect("std resolves");
    assert_eq!(resolved.table_of_contents().len(), 0);
}

#[test]
fn test_exported_modules_partition() {
    let mut builder = ArtifactBuilder::new();
    let owner = builder.add_string("app.core");
    builder.add_partition::<ModuleReference>(
        "module.exported",
        &[ModuleReference { owner, partition: TextOffset::null() }],
    );
    let blob = builder.build();
    let file = File::open(&blob).unwrap();

    let exported = file.exported_modules();
    assert_eq!(exported.len(), 1);
    assert_eq!(file.get_string(exported.at(Index(0)).owner), "app.core");
}
