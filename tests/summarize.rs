use std::fs;
use std::path::Path;

use annostat::config::{CompletenessConfig, OutputFormat, SummarizeConfig, DEFAULT_LINEAGE};
use annostat::pipeline::run_summarize;
use annostat::AnnostatError;
use tempfile::TempDir;

fn stats_report(reference_mrnas: usize, base: (&str, &str), exon: (&str, &str), transcript: (&str, &str)) -> String {
    format!(
        "# Cuffcompare v2.2.1 | Command line was:\n\
         #cuffcompare -r ref.gtf pred.gtf\n\
         #\n\
         \n\
         #= Summary for dataset: pred.gtf :\n\
         #     Query mRNAs :      10 in      10 loci  (8 multi-exon transcripts)\n\
         # Reference mRNAs :   {:5} in   {:5} loci  (4 multi-exon)\n\
         #--------------------|   Sn |  Sp |  fSn |  fSp  \n\
         \x20       Base level: \t {}\t {}\t  -  \t  - \n\
         \x20       Exon level: \t {}\t {}\t 70.0\t 80.0\n\
         \x20 Transcript level: \t {}\t {}\t 40.0\t 50.0\n",
        reference_mrnas, reference_mrnas, base.0, base.1, exon.0, exon.1, transcript.0, transcript.1
    )
}

fn busco_summary(single: usize, duplicated: usize) -> String {
    format!(
        "# BUSCO version is: 5.4.3\n\
         \t***** Results: *****\n\n\
         \t{}\tComplete BUSCOs (C)\n\
         \t{}\tComplete and single-copy BUSCOs (S)\n\
         \t{}\tComplete and duplicated BUSCOs (D)\n\
         \t3\tFragmented BUSCOs (F)\n",
        single + duplicated,
        single,
        duplicated
    )
}

fn write_run(dir: &Path, base: &str, identities: &[(&str, &str, &str)], tracking_lines: usize) {
    fs::write(
        dir.join(format!("{}.stats", base)),
        stats_report(5, ("78.3", "91.2"), ("70.1", "80.4"), ("44.8", "56.0")),
    )
    .unwrap();

    let identity: String = identities
        .iter()
        .map(|(r, q, v)| format!("{}\t{}\t{}\n", r, q, v))
        .collect();
    fs::write(dir.join(format!("{}.identity", base)), identity).unwrap();

    let tracking: String = (0..tracking_lines)
        .map(|i| format!("TCONS_{:08}\tXLOC_{:06}\tG|R{}\t=\tq1:G|Q{}|1\n", i, i, i, i))
        .collect();
    fs::write(dir.join(format!("{}.tracking", base)), tracking).unwrap();
}

fn write_busco(busco_dir: &Path, base: &str, single: usize, duplicated: usize) {
    let run_dir = busco_dir.join(base).join(format!("run_{}", DEFAULT_LINEAGE));
    fs::create_dir_all(&run_dir).unwrap();
    fs::write(run_dir.join("short_summary.txt"), busco_summary(single, duplicated)).unwrap();
}

#[test]
fn test_basic_summary() {
    let dir = TempDir::new().unwrap();
    write_run(
        dir.path(),
        "sim_500_ont_1000",
        &[("A", "a1", "100.0"), ("A", "a2", "100.0"), ("B", "b1", "50.0")],
        10,
    );

    let outcome = run_summarize(&SummarizeConfig::basic(dir.path())).unwrap();
    assert_eq!(outcome.output, dir.path().join("summary.tsv"));
    assert_eq!(outcome.rows, 1);

    let contents = fs::read_to_string(&outcome.output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "N_genes\tnt_sn\tnt_sp\texon_sn\texon_sp\tgene_sn\tgene_sp\tmean_identity\tmedian_identity\tPH"
    );
    let fields: Vec<&str> = lines[1].split('\t').collect();
    assert_eq!(&fields[..7], ["500", "78.3", "91.2", "70.1", "80.4", "44.8", "56.0"]);
    assert!((fields[7].parse::<f64>().unwrap() - 83.333_333_333_333_33).abs() < 1e-9);
    assert_eq!(fields[8], "100.0");
    assert_eq!(fields[9], "2");
}

#[test]
fn test_extended_summary() {
    let dir = TempDir::new().unwrap();
    let busco_dir = dir.path().join("busco");
    let reference_summary = dir.path().join("reference_short_summary.txt");
    fs::write(&reference_summary, busco_summary(100, 10)).unwrap();

    write_run(
        dir.path(),
        "sim_100_ont_1000",
        &[("A", "a1", "100.0"), ("A", "a2", "100.0"), ("B", "b1", "50.0"),
          ("C", "c1", "90.0"), ("C", "c2", "80.0"), ("C", "c3", "70.0"), ("C", "c4", "60.0")],
        10,
    );
    write_busco(&busco_dir, "sim_100_ont_1000", 90, 5);

    let config = SummarizeConfig {
        work_dir: dir.path().to_path_buf(),
        completeness: Some(CompletenessConfig {
            busco_dir,
            reference_summary,
            lineage: DEFAULT_LINEAGE.to_string(),
        }),
        run_id: None,
        format: OutputFormat::Tsv,
    };

    let outcome = run_summarize(&config).unwrap();
    assert_eq!(outcome.output, dir.path().join("1000_ont.tsv"));

    let contents = fs::read_to_string(&outcome.output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert!(lines[0].ends_with("\tPH\tFP\tFN\tSC\tDU"));

    let fields: Vec<&str> = lines[1].split('\t').collect();
    assert_eq!(fields.len(), 14);
    assert_eq!(fields[0], "100");
    // 10 tracking lines, 7 identity lines
    assert_eq!(fields[10], "3");
    // 5 reference mRNAs, 3 distinct references hit
    assert_eq!(fields[11], "2");
    assert_eq!(fields[12], "0.9");
    assert_eq!(fields[13], "0.5");
}

#[test]
fn test_empty_identity_file_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    write_run(dir.path(), "sim_100_ont_1000", &[("A", "a1", "99.0")], 4);
    write_run(dir.path(), "sim_200_ont_1000", &[], 4);

    match run_summarize(&SummarizeConfig::basic(dir.path())) {
        Err(AnnostatError::EmptyInput { path }) => {
            assert_eq!(path, dir.path().join("sim_200_ont_1000.identity"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!dir.path().join("summary.tsv").exists());
}

#[test]
fn test_zero_reference_busco_count() {
    let dir = TempDir::new().unwrap();
    let busco_dir = dir.path().join("busco");
    let reference_summary = dir.path().join("reference_short_summary.txt");
    fs::write(&reference_summary, busco_summary(100, 0)).unwrap();

    write_run(dir.path(), "sim_100_ont_1000", &[("A", "a1", "99.0")], 4);
    write_busco(&busco_dir, "sim_100_ont_1000", 90, 5);

    let mut config = SummarizeConfig::basic(dir.path());
    config.run_id = Some("run".to_string());
    config.completeness = Some(CompletenessConfig {
        busco_dir,
        reference_summary: reference_summary.clone(),
        lineage: DEFAULT_LINEAGE.to_string(),
    });

    match run_summarize(&config) {
        Err(AnnostatError::ZeroReference { path, category }) => {
            assert_eq!(path, reference_summary);
            assert_eq!(category, "duplicated");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!dir.path().join("run.tsv").exists());
}

#[test]
fn test_missing_busco_run_summary_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let busco_dir = dir.path().join("busco");
    let reference_summary = dir.path().join("reference_short_summary.txt");
    fs::write(&reference_summary, busco_summary(100, 10)).unwrap();

    write_run(dir.path(), "sim_100_ont_1000", &[("A", "a1", "99.0")], 4);
    write_run(dir.path(), "sim_200_ont_1000", &[("B", "b1", "98.0")], 4);
    write_busco(&busco_dir, "sim_100_ont_1000", 90, 5);

    let config = SummarizeConfig {
        work_dir: dir.path().to_path_buf(),
        completeness: Some(CompletenessConfig {
            busco_dir: busco_dir.clone(),
            reference_summary,
            lineage: DEFAULT_LINEAGE.to_string(),
        }),
        run_id: None,
        format: OutputFormat::Tsv,
    };

    match run_summarize(&config) {
        Err(AnnostatError::Io { path, .. }) => {
            let expected = busco_dir
                .join("sim_200_ont_1000")
                .join(format!("run_{}", DEFAULT_LINEAGE))
                .join("short_summary.txt");
            assert_eq!(path, expected);
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!dir.path().join("1000_ont.tsv").exists());
}
