//! End-to-end tests of the biobox-taxid binary
//!
//! Each test writes its inputs to a temporary directory, runs the binary, and
//! checks the written binning file or the reported error.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str =
    "#CAMI Format for Binning\n@Version:0.9.0\n@SampleID:_SAMPLEID_\n@@SEQUENCEID\tBINID\tTAXID\n";

const BIOBOX: &str = "#CAMI Format for Binning\n@Version:0.9.0\n@SampleID:_SAMPLEID_\n@@SEQUENCEID\tBINID\ns1\tb1\ns2\tb2\ns3\tb1\n";

fn biobox_cmd() -> Command {
    Command::cargo_bin("biobox-taxid").unwrap()
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_version() {
    biobox_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("biobox-taxid"));
}

#[test]
fn test_direct_by_bin() {
    let dir = TempDir::new().unwrap();
    let biobox = write(dir.path(), "bins.binning", BIOBOX);
    let table = write(dir.path(), "binid2taxid.tsv", "# bin\ttaxid\nb1\t100\nb2\t200\n");

    biobox_cmd()
        .arg(&biobox)
        .args(["--tool", "direct", "--key-col", "1", "--taxid-col", "2"])
        .arg("-b")
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 records"));

    let output = fs::read_to_string(dir.path().join("bins_binid2taxid.tsv")).unwrap();
    assert_eq!(
        output,
        format!("{HEADER}s1\tb1\t100\ns2\tb2\t200\ns3\tb1\t100\n")
    );
}

#[test]
fn test_direct_by_contig_with_input_dir() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "bins.binning", BIOBOX);
    write(
        dir.path(),
        "kraken.out",
        "C\ts1\t562\t1500\nC\ts2\t1280\t900\nC\ts3\t1423\t700\n",
    );
    let output = dir.path().join("custom.tsv");

    biobox_cmd()
        .args(["bins.binning", "--tool", "direct", "-c", "kraken.out"])
        .args(["--key-col", "2", "--taxid-col", "3"])
        .arg("--input-dir")
        .arg(dir.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(
        text,
        format!("{HEADER}s1\tb1\t562\ns2\tb2\t1280\ns3\tb1\t1423\n")
    );
}

#[test]
fn test_bat_directory() {
    let dir = TempDir::new().unwrap();
    let biobox = write(dir.path(), "bins.binning", BIOBOX);
    let bat_dir = dir.path().join("bat");
    fs::create_dir(&bat_dir).unwrap();
    write(
        &bat_dir,
        "part1.bin2classification.txt",
        "# bin\tclassification\treason\tlineage\tlineage scores\nb1.fa\ttaxid assigned\tx\t1;131567;2;1224*\t1.0;1.0;1.0;0.4\n",
    );
    write(
        &bat_dir,
        "part2.bin2classification.txt",
        "# bin\tclassification\treason\tlineage\tlineage scores\nb2.fa\ttaxid assigned\tx\t1;2;1239\t1.0;1.0;0.9\n",
    );

    biobox_cmd()
        .arg(&biobox)
        .args(["--tool", "bat", "--tool-output"])
        .arg(&bat_dir)
        .args(["--sample-id", "marine"])
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("bins_bat_taxid.tsv")).unwrap();
    assert!(text.contains("@SampleID:marine\n"));
    assert!(text.ends_with("s1\tb1\t1224\ns2\tb2\t1239\ns3\tb1\t1224\n"));
}

#[test]
fn test_gtdb_with_fallback_json_summary() {
    let dir = TempDir::new().unwrap();
    let biobox = write(dir.path(), "bins.binning", "s1\tb1\ns2\tb2\n");
    let summary = write(
        dir.path(),
        "gtdbtk.bac120.summary.tsv",
        "user_genome\tclassification\nb1\td__Bacteria;g__X;s__Y\nb2\td__Bacteria;g__Foo\n",
    );
    let taxdump = write(
        dir.path(),
        "ncbi-gtdb_map.tsv",
        "ncbi_taxonomy\tgtdb_taxonomy\ns__Y\tNCBI_Y\ng__Foo\tg__Foo\n",
    );
    let taxonkit = write(dir.path(), "name2taxid.tsv", "NCBI_Y\t55\nFoo\t77\n");

    biobox_cmd()
        .arg(&biobox)
        .args(["--tool", "gtdb", "--tool-output"])
        .arg(&summary)
        .arg("-g")
        .arg(&taxdump)
        .arg("-t")
        .arg(&taxonkit)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"records_written\": 2"))
        .stdout(predicate::str::contains("\"fallbacks_used\": 1"))
        .stdout(predicate::str::contains("\"mode\": \"gtdb\""));

    let text = fs::read_to_string(dir.path().join("bins_gtdb_taxid.tsv")).unwrap();
    assert_eq!(text, format!("{HEADER}s1\tb1\t55\ns2\tb2\t77\n"));
}

#[test]
fn test_missing_bin_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let biobox = write(dir.path(), "bins.binning", "s1\tbin1\n");
    let table = write(dir.path(), "binid2taxid.tsv", "bin2\t7\n");

    biobox_cmd()
        .arg(&biobox)
        .args(["--tool", "direct", "--key-col", "1", "--taxid-col", "2"])
        .arg("-b")
        .arg(&table)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'bin1'"))
        .stderr(predicate::str::contains("binid2taxid"));

    assert!(!dir.path().join("bins_binid2taxid.tsv").exists());
}

#[test]
fn test_malformed_biobox_row() {
    let dir = TempDir::new().unwrap();
    let biobox = write(dir.path(), "bins.binning", "s1\tb1\ns2\tb2\textra\n");
    let bat = write(dir.path(), "bat.txt", "b1.fa\tassigned\tx\t1;2\n");

    biobox_cmd()
        .arg(&biobox)
        .args(["--tool", "bat", "--tool-output"])
        .arg(&bat)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("exactly 2"));
}

#[test]
fn test_gtdb_without_crosswalks() {
    let dir = TempDir::new().unwrap();
    let summary = write(dir.path(), "summary.tsv", "user_genome\tclassification\n");

    biobox_cmd()
        .arg(dir.path().join("missing.binning"))
        .args(["--tool", "gtdb", "--tool-output"])
        .arg(&summary)
        .assert()
        .failure()
        .stderr(predicate::str::contains("GTDB mode requires --gtdb-to-taxdump"));
}

#[test]
fn test_direct_without_table() {
    biobox_cmd()
        .args(["bins.binning", "--tool", "direct", "--key-col", "1", "--taxid-col", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "direct mode requires --contig2taxid or --binid2taxid",
        ));
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let biobox = write(dir.path(), "bins.binning", BIOBOX);

    biobox_cmd()
        .arg(&biobox)
        .args(["--tool", "bat", "--tool-output"])
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_gtdb_unresolved_taxonkit_name_fails() {
    let dir = TempDir::new().unwrap();
    let biobox = write(dir.path(), "bins.binning", "s1\tb1\n");
    let summary = write(
        dir.path(),
        "summary.tsv",
        "user_genome\tclassification\nb1\td__Bacteria;s__Foo_bar\n",
    );
    let taxdump = write(dir.path(), "map.tsv", "s__Foo_bar\tFoo_bar\n");
    let taxonkit = write(dir.path(), "name2taxid.tsv", "Foo_bar\t\nbar\t999\n");

    biobox_cmd()
        .arg(&biobox)
        .args(["--tool", "gtdb", "--tool-output"])
        .arg(&summary)
        .arg("-g")
        .arg(&taxdump)
        .arg("-t")
        .arg(&taxonkit)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Foo_bar' not found in taxonkit"));

    assert!(!dir.path().join("bins_gtdb_taxid.tsv").exists());
}
