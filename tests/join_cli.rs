//! End-to-end tests for the polyjoin binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const REGIONS: &str = r#"{
    "type": "FeatureCollection",
    "table-name": "counties",
    "features": [
        {
            "type": "Feature",
            "properties": { "iso2cc": "us", "id": "usa.plains" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[-110.0, 30.0], [-90.0, 30.0], [-90.0, 50.0], [-110.0, 50.0], [-110.0, 30.0]]]
            }
        },
        {
            "type": "Feature",
            "properties": { "iso2cc": "??", "id": "unknown" },
            "geometry": null
        }
    ]
}"#;

const LOCATIONS: &str = "\
locid,edge-latitude,edge-longitude,edge-continent-code,edge-two-letter-country,edge-region,edge-country-conf,edge-region-conf
100,40.0,-100.0,na,us,kansas,95,90
200,0.0,0.0,**,**,?,0,0
";

fn write_temp(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_join_normal_and_withheld_rows() {
    let regions = write_temp(REGIONS, ".geojson");
    let locations = write_temp(LOCATIONS, ".csv");

    let output = Command::cargo_bin("polyjoin")
        .unwrap()
        .args(["join", "-l"])
        .arg(locations.path())
        .arg("-g")
        .arg(regions.path())
        .args(["-c", "country"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "header plus two data rows");
    assert_eq!(lines[0], "locid,counties-id");
    assert_eq!(lines[1], "100,usa.plains");
    assert_eq!(lines[2], "200,unknown");
}

#[test]
fn test_join_count_mismatch_is_fatal() {
    let regions = write_temp(REGIONS, ".geojson");
    let locations = write_temp(LOCATIONS, ".csv");

    Command::cargo_bin("polyjoin")
        .unwrap()
        .args(["join", "-l"])
        .arg(locations.path())
        .arg("-g")
        .arg(regions.path())
        .args(["-c", "country,region"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("same number"));
}

#[test]
fn test_join_unknown_level_is_fatal() {
    let regions = write_temp(REGIONS, ".geojson");
    let locations = write_temp(LOCATIONS, ".csv");

    Command::cargo_bin("polyjoin")
        .unwrap()
        .args(["join", "-l"])
        .arg(locations.path())
        .arg("-g")
        .arg(regions.path())
        .args(["-c", "planet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognised confidence level"));
}

#[test]
fn test_join_threshold_out_of_range_is_fatal() {
    let regions = write_temp(REGIONS, ".geojson");
    let locations = write_temp(LOCATIONS, ".csv");

    Command::cargo_bin("polyjoin")
        .unwrap()
        .args(["join", "-l"])
        .arg(locations.path())
        .arg("-g")
        .arg(regions.path())
        .args(["-c", "country", "-t", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 100"));
}

#[test]
fn test_join_withheld_without_global_placeholder_is_fatal() {
    let regions = write_temp(
        r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "iso2cc": "us", "id": "usa.plains" },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[-110.0, 30.0], [-90.0, 30.0], [-90.0, 50.0], [-110.0, 50.0], [-110.0, 30.0]]]
                    }
                }
            ]
        }"#,
        ".geojson",
    );
    let locations = write_temp(LOCATIONS, ".csv");

    Command::cargo_bin("polyjoin")
        .unwrap()
        .args(["join", "-l"])
        .arg(locations.path())
        .arg("-g")
        .arg(regions.path())
        .args(["-c", "country"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("\"??\" expected"));
}

#[test]
fn test_polygon_table_projection() {
    let regions = write_temp(
        r#"{
            "type": "FeatureCollection",
            "table-name": "counties",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "iso2cc": "us", "id": "usa.plains", "fqid": "na.usa.plains", "name": "Plains", "usercode": 7 },
                    "geometry": null
                },
                {
                    "type": "Feature",
                    "properties": { "iso2cc": "??", "id": "unknown" },
                    "geometry": null
                }
            ]
        }"#,
        ".geojson",
    );

    let output = Command::cargo_bin("polyjoin")
        .unwrap()
        .arg("polygon-table")
        .arg("-i")
        .arg(regions.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "counties-id,fqid,name,usercode");
    assert_eq!(lines[1], "usa.plains,na.usa.plains,Plains,7");
    assert_eq!(lines[2], "unknown,,,");
}
