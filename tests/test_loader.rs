mod common;

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use car_offers::{Catalog, CatalogError, DataLoader, DataSource, LoadError};
use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;

fn write_sample(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, common::sample_json()).unwrap();
    path
}

#[test]
fn loads_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_sample(&tmp, "offers.json");

    let repo = DataLoader::new(Duration::from_secs(5))
        .load(&DataSource::File(path))
        .unwrap();

    assert_eq!(repo.len(), 7);
}

#[test]
fn loads_gzipped_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("offers.json.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(common::sample_json().as_bytes()).unwrap();
    fs::write(&path, enc.finish().unwrap()).unwrap();

    let catalog = Catalog::builder()
        .location(path.to_str().unwrap())
        .build()
        .unwrap();

    assert_eq!(catalog.repository().len(), 7);
    assert_eq!(catalog.last_updated(), "15 ianuarie 2025");
}

#[test]
fn missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nope.json");

    let err = DataLoader::new(Duration::from_secs(5))
        .load(&DataSource::File(path))
        .unwrap_err();

    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn builder_wraps_load_errors() {
    let err = Catalog::builder().inline("not json").build().unwrap_err();
    assert!(matches!(err, CatalogError::Load(LoadError::Json(_))));
}

#[test]
fn inline_catalog_exposes_queries() {
    let catalog = Catalog::builder().inline(common::sample_json()).build().unwrap();

    assert_eq!(catalog.offers().all().len(), 7);
    assert_eq!(catalog.pending().count(), 2);
    assert_eq!(catalog.pending().summaries()[0].title, "Renault Clio");
    assert_eq!(
        catalog.offers().makers(),
        vec!["BMW", "Dacia", "Kia", "Suzuki", "Toyota", "Volkswagen"]
    );
    assert!(catalog.to_string().starts_with("Catalog(offers=7, pending=2"));
}

#[test]
fn source_display() {
    assert_eq!(DataSource::Inline("{}".into()).to_string(), "<inline>");
    assert_eq!(
        DataSource::parse("https://example.com/offers.json").to_string(),
        "https://example.com/offers.json"
    );
}
