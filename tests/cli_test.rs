use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use simanfor_report::{
    context::{ModelMetadata, ReportContext},
    layout::CellValue,
};

fn create_test_context(dir: &TempDir) -> PathBuf {
    let mut ctx = ReportContext {
        inventory_id: "IFN-7".to_string(),
        plot_id: "P-31-0214".to_string(),
        scenario_name: "two-thinnings".to_string(),
        model: ModelMetadata {
            model_name: "Pinaster Atlantic".to_string(),
            model_type: "tree_independent".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    ctx.populated_vars.insert("AGE".to_string());
    ctx.area
        .insert("FOREST".to_string(), "Monte Cabalar".to_string());
    ctx.summary_rows = vec![vec![CellValue::Number(20.0), CellValue::Number(14.2)]];

    let path = dir.path().join("context.json");
    std::fs::write(&path, serde_json::to_vec_pretty(&ctx).unwrap()).unwrap();
    path
}

#[test]
fn test_render_xlsx() {
    let dir = TempDir::new().unwrap();
    let context = create_test_context(&dir);
    let output = dir.path().join("report.xlsx");

    Command::cargo_bin("simanfor-report")
        .unwrap()
        .args(["render", "--context"])
        .arg(&context)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("P-31-0214"));

    assert!(output.exists());
}

#[test]
fn test_render_json_pretty() {
    let dir = TempDir::new().unwrap();
    let context = create_test_context(&dir);
    let output = dir.path().join("report.json");

    Command::cargo_bin("simanfor-report")
        .unwrap()
        .args(["render", "--pretty", "--context"])
        .arg(&context)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let report: simanfor_report::RenderedReport =
        serde_json::from_slice(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!(report.sheets().len(), 5);
}

#[test]
fn test_render_csv_directory() {
    let dir = TempDir::new().unwrap();
    let context = create_test_context(&dir);
    let output = dir.path().join("grids");

    Command::cargo_bin("simanfor-report")
        .unwrap()
        .args(["render", "--context"])
        .arg(&context)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(std::fs::read_dir(&output).unwrap().count(), 5);
}

#[test]
fn test_render_galician_locale() {
    let dir = TempDir::new().unwrap();
    let context = create_test_context(&dir);
    let output = dir.path().join("report.json");

    Command::cargo_bin("simanfor-report")
        .unwrap()
        .args(["render", "--locale", "gl", "--context"])
        .arg(&context)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let data = std::fs::read_to_string(&output).unwrap();
    assert!(data.contains("Monte"));
}

#[test]
fn test_render_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let context = create_test_context(&dir);
    let output = dir.path().join("report.pdf");

    Command::cargo_bin("simanfor-report")
        .unwrap()
        .args(["render", "--context"])
        .arg(&context)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported output"));
}

#[test]
fn test_render_rejects_unknown_locale() {
    let dir = TempDir::new().unwrap();
    let context = create_test_context(&dir);
    let output = dir.path().join("report.xlsx");

    Command::cargo_bin("simanfor-report")
        .unwrap()
        .args(["render", "--locale", "fr", "--context"])
        .arg(&context)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown locale"));
}

#[test]
fn test_preview_shows_sheet_names() {
    let dir = TempDir::new().unwrap();
    let context = create_test_context(&dir);

    Command::cargo_bin("simanfor-report")
        .unwrap()
        .args(["preview", "--context"])
        .arg(&context)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary"))
        .stdout(predicate::str::contains("Metadata"));
}

#[test]
fn test_labels_dump_namespace() {
    Command::cargo_bin("simanfor-report")
        .unwrap()
        .args(["labels", "--locale", "en", "--namespace", "area"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FOREST = Forest"));
}

#[test]
fn test_labels_template_is_blank_toml() {
    let output = Command::cargo_bin("simanfor-report")
        .unwrap()
        .args(["labels", "--template"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let raw: toml::Value = toml::from_str(std::str::from_utf8(&output).unwrap()).unwrap();
    assert!(raw.get("general").is_some());
}

#[test]
fn test_catalog_cardinalities() {
    Command::cargo_bin("simanfor-report")
        .unwrap()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Area:       36"))
        .stdout(predicate::str::contains("Model:      8"));
}

#[test]
fn test_missing_context_file_fails() {
    Command::cargo_bin("simanfor-report")
        .unwrap()
        .args([
            "render",
            "--context",
            "no_such_context.json",
            "--output",
            "out.xlsx",
        ])
        .assert()
        .failure();
}
