//! Import Planner Tests
//!
//! Planning many files in parallel against one shared configuration.

use idl_generator::ast::{Thrift, Type};
use idl_generator::golang::libs::DEFAULT_THRIFT_LIB;
use idl_generator::golang::{ImportManager, ImportPlanner, StdLibrary};
use idl_generator::GeneratorConfig;
use std::sync::Arc;

const DOCS: &str = r#"[
    { "filename": "color.thrift", "enums": [ { "name": "Color" } ] },
    {
        "filename": "user.thrift",
        "structs": [
            { "name": "User", "fields": [
                { "id": 1, "name": "name", "type": "string" },
                { "id": 2, "name": "avatar", "type": "binary" }
            ] }
        ]
    },
    {
        "filename": "api.thrift",
        "services": [ { "name": "Api", "functions": [ { "name": "ping" } ] } ]
    }
]"#;

fn docs() -> Vec<Thrift> {
    serde_json::from_str(DOCS).unwrap()
}

fn render_deep_equal(ast: &Thrift, im: &mut ImportManager) {
    for field in ast.struct_likes().flat_map(|st| st.fields.iter()) {
        match field.field_type {
            Type::String => im.use_std_library(StdLibrary::Strings),
            Type::Binary => im.use_std_library(StdLibrary::Bytes),
            _ => {}
        }
    }
}

fn planner(options: &[&str]) -> ImportPlanner {
    let config = GeneratorConfig::from_options(options.iter().copied()).unwrap();
    ImportPlanner::new(Arc::new(config))
}

#[test]
fn should_plan_single_file() {
    let docs = docs();
    let table = planner(&["gen_deep_equal"])
        .plan(&docs[1], render_deep_equal)
        .unwrap();
    assert!(table.contains("strings"));
    assert!(table.contains("bytes"));
    assert!(table.contains(DEFAULT_THRIFT_LIB));
}

#[test]
fn should_plan_files_in_parallel_keeping_order() {
    let docs = docs();
    let tables: Vec<_> = planner(&["gen_deep_equal"])
        .plan_all(&docs, render_deep_equal)
        .into_iter()
        .map(Result::unwrap)
        .collect();

    assert_eq!(tables.len(), 3);
    assert_eq!(tables[0].len(), 1);
    assert!(tables[0].contains("fmt"));
    assert!(tables[1].contains("bytes"));
    assert!(!tables[2].contains("strings"));
    assert!(tables[2].contains("context"));
}

#[test]
fn should_not_leak_state_between_files() {
    let docs = docs();
    let planner = planner(&["gen_deep_equal"]);
    let results = planner.plan_all(&docs, render_deep_equal);
    let again = planner.plan_all(&docs, |_, _| {});

    assert!(results[1].as_ref().unwrap().contains("strings"));
    assert!(!again[1].as_ref().unwrap().contains("strings"));
}

#[test]
fn should_share_replacement_across_files() {
    let docs = docs();
    let planner = planner(&["thrift_import_path=example.com/fork/thrift"]);
    for table in planner.plan_all(&docs, |_, _| {}) {
        let table = table.unwrap();
        assert!(!table.contains(DEFAULT_THRIFT_LIB));
    }
    assert_eq!(
        planner.plan(&docs[2], |_, _| {}).unwrap().get("example.com/fork/thrift"),
        Some("")
    );
}

#[test]
fn should_hand_out_uninitialized_managers() {
    let manager = planner(&[]).manager();
    assert!(manager.resolve_imports().is_err());
}
