use super::*;

fn base_args() -> Vec<&'static str> {
    vec![
        "kira-tmb",
        "--maf_file",
        "sample.maf",
        "--targets_bed_file",
        "targets.bed",
        "--targets_length",
        "1000",
    ]
}

#[test]
fn test_parse_required_args() {
    let args = Args::try_parse_from(base_args()).unwrap();
    let config = RunConfig::from(args);
    assert_eq!(config.maf_file, PathBuf::from("sample.maf"));
    assert_eq!(config.targets_bed_file, PathBuf::from("targets.bed"));
    assert_eq!(config.targets_length, 1000);
    assert!(config.output_filename.is_none());
    assert!(config.summary_json.is_none());
}

#[test]
fn test_parse_optional_outputs() {
    let mut argv = base_args();
    argv.extend(["--output_filename", "tmb.txt", "--summary_json", "summary.json"]);
    let config = RunConfig::from(Args::try_parse_from(argv).unwrap());
    assert_eq!(config.output_filename, Some(PathBuf::from("tmb.txt")));
    assert_eq!(config.summary_json, Some(PathBuf::from("summary.json")));
}

#[test]
fn test_non_integer_targets_length_rejected() {
    let mut argv = base_args();
    argv[6] = "1.5e6";
    assert!(Args::try_parse_from(argv).is_err());

    let mut argv = base_args();
    argv[6] = "-10";
    assert!(Args::try_parse_from(argv).is_err());
}

#[test]
fn test_missing_required_arg_rejected() {
    let argv = vec!["kira-tmb", "--maf_file", "sample.maf", "--targets_length", "10"];
    assert!(Args::try_parse_from(argv).is_err());
}

#[test]
fn test_zero_targets_length_parses() {
    let mut argv = base_args();
    argv[6] = "0";
    let config = RunConfig::from(Args::try_parse_from(argv).unwrap());
    assert_eq!(config.targets_length, 0);
}
