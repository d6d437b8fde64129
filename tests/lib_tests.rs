use clap::Parser;
use imagesize::engine::{Cli, build_opts, render_line, sort_records, summary_line, write_report};
use imagesize::utils::parse_imagesize_toml;
use imagesize::{CompareOp, Comparison, MatchRecord, SortDirection, SortKey, SortSpec};
use std::path::PathBuf;
use std::time::Duration;

const OPS: [CompareOp; 4] = [
    CompareOp::Wider,
    CompareOp::Narrower,
    CompareOp::Taller,
    CompareOp::Shorter,
];

fn rec(path: &str, width: u32, height: u32) -> MatchRecord {
    MatchRecord {
        path: PathBuf::from(path),
        width,
        height,
    }
}

fn names(records: &[MatchRecord]) -> Vec<&str> {
    records
        .iter()
        .map(|r| r.path.to_str().unwrap())
        .collect()
}

// --- Comparison::matches ---

#[test]
fn test_matches_strict_operators() {
    assert!(Comparison::new(CompareOp::Wider, 100, false).matches(101, 0));
    assert!(!Comparison::new(CompareOp::Wider, 100, false).matches(100, 500));
    assert!(Comparison::new(CompareOp::Narrower, 100, false).matches(99, 500));
    assert!(!Comparison::new(CompareOp::Narrower, 100, false).matches(100, 0));
    assert!(Comparison::new(CompareOp::Taller, 100, false).matches(0, 101));
    assert!(!Comparison::new(CompareOp::Taller, 100, false).matches(500, 100));
    assert!(Comparison::new(CompareOp::Shorter, 100, false).matches(500, 99));
    assert!(!Comparison::new(CompareOp::Shorter, 100, false).matches(0, 100));
}

#[test]
fn test_matches_inclusive_accepts_equal() {
    for op in OPS {
        assert!(Comparison::new(op, 64, true).matches(64, 64), "{op}");
        assert!(!Comparison::new(op, 64, false).matches(64, 64), "{op}");
    }
}

#[test]
fn test_inclusive_is_superset_of_exclusive() {
    for op in OPS {
        for threshold in [0, 1, 50, 100] {
            let strict = Comparison::new(op, threshold, false);
            let loose = Comparison::new(op, threshold, true);
            for w in [0, 1, 49, 50, 51, 100, 200] {
                for h in [0, 1, 49, 50, 51, 100, 200] {
                    if strict.matches(w, h) {
                        assert!(loose.matches(w, h), "{op} {threshold} {w}x{h}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_comparison_parse() {
    let c = Comparison::parse(CompareOp::Taller, "512", false).unwrap();
    assert_eq!(c, Comparison::new(CompareOp::Taller, 512, false));
    assert!(
        Comparison::parse(CompareOp::Taller, "abc", false)
            .unwrap_err()
            .to_string()
            .contains("invalid threshold")
    );
    assert!(Comparison::parse(CompareOp::Wider, "-5", false).is_err());
    assert!(Comparison::parse(CompareOp::Wider, "", false).is_err());
}

// --- sort_records ---

#[test]
fn test_sort_by_name_uses_raw_bytes() {
    let records = vec![rec("a/b.png", 1, 1), rec("a.png", 1, 1), rec("B.png", 1, 1)];
    let sorted = sort_records(records, Some(SortSpec::default()));
    assert_eq!(names(&sorted), vec!["B.png", "a.png", "a/b.png"]);
}

#[test]
fn test_sort_is_stable_in_both_directions() {
    let records = vec![
        rec("first", 10, 5),
        rec("second", 20, 5),
        rec("third", 10, 5),
        rec("fourth", 20, 5),
    ];
    let asc = sort_records(
        records.clone(),
        Some(SortSpec::new(SortKey::Width, SortDirection::Ascending)),
    );
    assert_eq!(names(&asc), vec!["first", "third", "second", "fourth"]);

    let desc = sort_records(
        records.clone(),
        Some(SortSpec::new(SortKey::Width, SortDirection::Descending)),
    );
    assert_eq!(names(&desc), vec!["second", "fourth", "first", "third"]);

    let by_height = sort_records(
        records,
        Some(SortSpec::new(SortKey::Height, SortDirection::Descending)),
    );
    assert_eq!(names(&by_height), vec!["first", "second", "third", "fourth"]);
}

#[test]
fn test_sort_is_idempotent() {
    let records = vec![rec("c", 3, 9), rec("a", 1, 9), rec("b", 3, 1)];
    for key in [SortKey::Name, SortKey::Width, SortKey::Height] {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let spec = Some(SortSpec::new(key, direction));
            let once = sort_records(records.clone(), spec);
            let twice = sort_records(once.clone(), spec);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn test_unsorted_keeps_arrival_order() {
    let records = vec![rec("z", 1, 1), rec("a", 2, 2)];
    assert_eq!(sort_records(records.clone(), None), records);
}

#[test]
fn test_sort_spec_parse() {
    assert_eq!(
        SortSpec::parse("height", "desc").unwrap(),
        SortSpec::new(SortKey::Height, SortDirection::Descending)
    );
    assert_eq!(
        SortSpec::parse("width", "asc").unwrap(),
        SortSpec::new(SortKey::Width, SortDirection::Ascending)
    );
    assert!(SortSpec::parse("size", "ascending").is_err());
    assert!(SortSpec::parse("name", "sideways").is_err());
}

// --- output ---

#[test]
fn test_render_line() {
    let r = rec("pics/cat.png", 640, 480);
    assert_eq!(render_line(&r, false), "pics/cat.png");
    assert_eq!(render_line(&r, true), "pics/cat.png (640x480)");
}

#[test]
fn test_write_report_verbose_and_quiet() {
    let records = vec![rec("a.png", 1, 2), rec("b.png", 3, 4)];
    let elapsed = Duration::from_millis(5);

    let mut quiet = Vec::new();
    write_report(&mut quiet, &records, false, elapsed).unwrap();
    assert_eq!(String::from_utf8(quiet).unwrap(), "a.png\nb.png\n");

    let mut verbose = Vec::new();
    write_report(&mut verbose, &records, true, elapsed).unwrap();
    assert_eq!(
        String::from_utf8(verbose).unwrap(),
        format!("a.png (1x2)\nb.png (3x4)\n\n{}\n", summary_line(2, elapsed))
    );

    let mut none = Vec::new();
    write_report(&mut none, &[], true, elapsed).unwrap();
    assert!(
        String::from_utf8(none)
            .unwrap()
            .starts_with("0 file(s) matched in ")
    );
}

// --- CLI + settings file ---

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["imagesize"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_cli_subcommands_select_operator() {
    assert_eq!(cli(&["width", "over", "1"]).compare_op(), CompareOp::Wider);
    assert_eq!(cli(&["width", "under", "1"]).compare_op(), CompareOp::Narrower);
    assert_eq!(cli(&["height", "over", "1"]).compare_op(), CompareOp::Taller);
    assert_eq!(cli(&["height", "under", "1"]).compare_op(), CompareOp::Shorter);
}

#[test]
fn test_build_opts_defaults() {
    let opts = build_opts(&cli(&["height", "over", "512"]), None).unwrap();
    assert_eq!(opts.comparison, Comparison::new(CompareOp::Taller, 512, false));
    assert_eq!(opts.roots, vec![PathBuf::from(".")]);
    assert_eq!(opts.max_concurrency, 4096);
    assert_eq!(opts.sort, Some(SortSpec::default()));
    assert!(!opts.recursive);
    assert!(!opts.verbose);
}

#[test]
fn test_build_opts_flags_anywhere() {
    let c = cli(&[
        "-r", "height", "under", "100", "a", "b", "-e", "-c", "8", "-k", "width", "-o", "desc",
        "--verbose=false",
    ]);
    let opts = build_opts(&c, None).unwrap();
    assert_eq!(opts.comparison, Comparison::new(CompareOp::Shorter, 100, true));
    assert_eq!(opts.roots, vec![PathBuf::from("a"), PathBuf::from("b")]);
    assert_eq!(opts.max_concurrency, 8);
    assert_eq!(
        opts.sort,
        Some(SortSpec::new(SortKey::Width, SortDirection::Descending))
    );
    assert!(opts.recursive);
    assert!(!opts.verbose);
}

#[test]
fn test_bool_flag_value_must_be_attached() {
    let attached = cli(&["height", "over", "1", "-r=false", "--verbose=true"]);
    assert_eq!(attached.recursive, Some(false));
    assert_eq!(attached.verbose, Some(true));

    // A detached word is a path, not the flag's value.
    let detached = build_opts(&cli(&["height", "over", "1", "-r", "false"]), None).unwrap();
    assert!(detached.recursive);
    assert_eq!(detached.roots, vec![PathBuf::from("false")]);
}

#[test]
fn test_build_opts_rejects_bad_config_before_scanning() {
    let bad_threshold = build_opts(&cli(&["width", "over", "wide"]), None).unwrap_err();
    assert!(bad_threshold.to_string().contains("invalid threshold"));
    let negative = build_opts(&cli(&["width", "over", "-5"]), None).unwrap_err();
    assert!(negative.to_string().contains("invalid threshold"));
    assert!(build_opts(&cli(&["width", "over", "1", "-k", "size"]), None).is_err());
    assert!(build_opts(&cli(&["width", "over", "1", "-o", "up"]), None).is_err());
    assert!(build_opts(&cli(&["width", "over", "1", "-c", "0"]), None).is_err());
}

#[test]
fn test_unsorted_flag_disables_sort() {
    let opts = build_opts(&cli(&["width", "over", "1", "-u"]), None).unwrap();
    assert_eq!(opts.sort, None);
}

#[test]
fn test_settings_file_applies_under_cli() {
    let file = parse_imagesize_toml(
        r#"
        [settings]
        max_concurrency = 16
        recursive = true
        sort_key = "height"
        verbose = true
        "#,
    )
    .unwrap();

    let opts = build_opts(&cli(&["height", "over", "10"]), Some(&file)).unwrap();
    assert_eq!(opts.max_concurrency, 16);
    assert!(opts.recursive);
    assert!(opts.verbose);
    assert_eq!(opts.sort.unwrap().key, SortKey::Height);

    let overridden = build_opts(
        &cli(&["height", "over", "10", "-c", "2", "--recursive=false"]),
        Some(&file),
    )
    .unwrap();
    assert_eq!(overridden.max_concurrency, 2);
    assert!(!overridden.recursive);
}

#[test]
fn test_settings_file_empty_and_malformed() {
    let empty = parse_imagesize_toml("").unwrap();
    assert!(empty.settings.max_concurrency.is_none());
    assert!(parse_imagesize_toml("[settings]\nrecursive = \"yes\"").is_err());
}
