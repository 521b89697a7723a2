//! Tests for `LuaWriter`: assignment order, duplicates, clearing and file output.

use cfx_luacheck::{LintError, LuaTable, LuaValue, LuaWriter};

#[test]
fn serializes_assignments_separated_by_blank_line() {
    let mut writer = LuaWriter::new("unused.lua");
    writer.add_variable("a", 1).add_variable("b", 2);
    assert_eq!(writer.serialize(), "a = 1\n\nb = 2");
}

#[test]
fn empty_writer_serializes_to_empty_string() {
    let writer = LuaWriter::new("unused.lua");
    assert!(writer.is_empty());
    assert_eq!(writer.serialize(), "");
}

#[test]
fn duplicate_names_are_all_emitted() {
    let mut writer = LuaWriter::new("unused.lua");
    writer
        .add_variable("std", "max")
        .add_variable("std", "lua51");
    assert_eq!(writer.len(), 2);
    assert_eq!(writer.serialize(), "std = \"max\"\n\nstd = \"lua51\"");
}

#[test]
fn add_variables_preserves_relative_order() {
    let mut writer = LuaWriter::new("unused.lua");
    writer
        .add_variable("first", true)
        .add_variables(vec![("second", 2), ("third", 3)])
        .add_variable("fourth", LuaValue::Nil);
    assert_eq!(
        writer.serialize(),
        "first = true\n\nsecond = 2\n\nthird = 3\n\nfourth = nil"
    );
}

#[test]
fn clear_discards_everything() {
    let mut writer = LuaWriter::new("unused.lua");
    writer.add_variable("a", 1).add_variable("b", 2);
    writer.clear().add_variable("c", 3);
    assert_eq!(writer.serialize(), "c = 3");
}

#[test]
fn nested_values_start_at_depth_zero() {
    let mut writer = LuaWriter::new("unused.lua");
    writer.add_variable(
        "stds.cfx",
        LuaTable::new().with("read_globals", vec!["Wait"]),
    );
    writer.add_variable("exclude_files", Vec::<String>::new());
    assert_eq!(
        writer.serialize(),
        "stds.cfx = {\n  read_globals = {\n    \"Wait\"\n  }\n}\n\nexclude_files = {\n\n}"
    );
}

#[test]
fn write_to_file_writes_serialized_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".luacheckrc");

    let mut writer = LuaWriter::new(&path);
    writer.add_variable("a", 1).add_variable("b", "two");
    writer.write_to_file().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "a = 1\n\nb = \"two\"");
    assert_eq!(writer.path(), path.as_path());
}

#[test]
fn write_to_file_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".luacheckrc");
    std::fs::write(&path, "stale content that is longer than the new one").unwrap();

    let mut writer = LuaWriter::new(&path);
    writer.add_variable("a", 1);
    writer.write_to_file().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a = 1");
}

#[test]
fn write_to_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join(".luacheckrc");

    let mut writer = LuaWriter::new(&path);
    writer.add_variable("a", 1);
    let err = writer.write_to_file().unwrap_err();

    match err {
        LintError::Io { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
