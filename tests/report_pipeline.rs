use std::fs;
use std::io::Write;

use tempfile::tempdir;

use popbin::export::export_labeled_path;
use popbin::{BinningError, CsvCatalogSource, QuantileThresholds, ThresholdScheme};

fn write_catalog(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
fn load_bin_export_keeps_original_columns_and_drops_quartiles() {
    let dir = tempdir().unwrap();
    let input = write_catalog(
        &dir,
        "catalog.csv",
        "title,members,score\nAlpha,120,7.1\nBeta,800,6.4\nGamma,12000,8.0\nDelta,45000,8.9\n",
    );

    let dataset = CsvCatalogSource::new().load_path(&input).unwrap();
    let thresholds = QuantileThresholds::from_values(dataset.members()).unwrap();
    let quartiles = thresholds.label_all(dataset.members());
    assert_eq!(quartiles.len(), dataset.len());

    let scheme = ThresholdScheme::marketing_default();
    let fixed = scheme.assign_all(dataset.members());

    let output = dir.path().join("labeled.csv");
    export_labeled_path(&output, &dataset, &scheme, &fixed).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "title,members,score,new_popularity_group");
    assert_eq!(lines[1], "Alpha,120,7.1,0-500");
    assert_eq!(lines[3], "Gamma,12000,8.0,5000-30000");
    assert_eq!(lines[4], "Delta,45000,8.9,>30000");
    assert!(!text.contains("quartile"));
}

#[test]
fn exported_file_reloads_with_the_same_members() {
    let dir = tempdir().unwrap();
    let input = write_catalog(&dir, "catalog.csv", "members\n100\n900\n31000\n");
    let dataset = CsvCatalogSource::new().load_path(&input).unwrap();
    let scheme = ThresholdScheme::marketing_default();
    let fixed = scheme.assign_all(dataset.members());

    let output = dir.path().join("labeled.csv");
    export_labeled_path(&output, &dataset, &scheme, &fixed).unwrap();

    let reloaded = CsvCatalogSource::new().load_path(&output).unwrap();
    assert_eq!(reloaded.members(), dataset.members());
    assert_eq!(
        reloaded.headers().last().map(String::as_str),
        Some("new_popularity_group")
    );
}

#[test]
fn missing_input_file_fails_at_load() {
    let dir = tempdir().unwrap();
    let err = CsvCatalogSource::new()
        .load_path(dir.path().join("absent.csv"))
        .unwrap_err();
    assert!(matches!(err, BinningError::Io(_)));
}

#[test]
fn report_runner_loads_prints_and_exports() {
    let dir = tempdir().unwrap();
    let input = write_catalog(
        &dir,
        "catalog.csv",
        "title,members\nAlpha,100\nBeta,600\nGamma,7000\nDelta,50000\n",
    );
    let export = dir.path().join("labeled.csv");
    let args = vec![
        input.display().to_string(),
        "--export".to_string(),
        export.display().to_string(),
        "--preview".to_string(),
        "2".to_string(),
    ];
    popbin::example_apps::run_binning_report(args.into_iter()).unwrap();
    assert!(export.exists());
}

#[test]
fn report_runner_surfaces_missing_column() {
    let dir = tempdir().unwrap();
    let input = write_catalog(&dir, "catalog.csv", "title,score\nAlpha,7.1\n");
    let err = popbin::example_apps::run_binning_report(
        vec![input.display().to_string()].into_iter(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("members"));
}
