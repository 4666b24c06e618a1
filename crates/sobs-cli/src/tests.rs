use super::*;

#[test]
fn parses_generate_with_defaults() {
    let cli = Cli::try_parse_from(["sobs", "generate"]).expect("expected valid cli args");

    let Commands::Generate(args) = cli.command else {
        panic!("expected generate command");
    };
    assert!(args.from.is_none());
    assert!(args.to.is_none());
    assert_eq!(args.granularity, Granularity::Monthly);
    assert_eq!(args.format, OutputFormat::Table);
    assert!(args.location.is_none());
    assert!(args.network.is_none());
    assert!(args.output.is_none());
}

#[test]
fn parses_generate_with_all_options() {
    let cli = Cli::try_parse_from([
        "sobs",
        "generate",
        "--brands",
        "brands.yaml",
        "--from",
        "2024-02",
        "--to",
        "2024-05-31",
        "--granularity",
        "Quarterly",
        "--location",
        "Czech Republic",
        "--network",
        "search-and-partners",
        "--format",
        "csv",
        "--output",
        "out.csv",
    ])
    .expect("expected valid cli args");

    let Commands::Generate(args) = cli.command else {
        panic!("expected generate command");
    };
    assert_eq!(args.brands, Some(PathBuf::from("brands.yaml")));
    assert_eq!(args.from, Some(YearMonth::new(2024, 2).unwrap()));
    assert_eq!(args.to, Some(YearMonth::new(2024, 5).unwrap()));
    assert_eq!(args.granularity, Granularity::Quarterly);
    assert_eq!(
        args.location,
        Some(Location::Named("Czech Republic".to_string()))
    );
    assert_eq!(args.network, Some(Network::GoogleSearchAndPartners));
    assert_eq!(args.format, OutputFormat::Csv);
    assert_eq!(args.output, Some(PathBuf::from("out.csv")));
}

#[test]
fn all_location_is_sentinel() {
    let cli = Cli::try_parse_from(["sobs", "generate", "--location", "all"]).unwrap();
    let Commands::Generate(args) = cli.command else {
        panic!("expected generate command");
    };
    assert_eq!(args.location, Some(Location::All));
}

#[test]
fn short_flags() {
    let cli = Cli::try_parse_from(["sobs", "generate", "-g", "yearly", "-f", "json", "-o", "."])
        .unwrap();
    let Commands::Generate(args) = cli.command else {
        panic!("expected generate command");
    };
    assert_eq!(args.granularity, Granularity::Yearly);
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.output, Some(PathBuf::from(".")));
}

#[test]
fn rejects_malformed_month() {
    assert!(Cli::try_parse_from(["sobs", "generate", "--from", "2024-13"]).is_err());
    assert!(Cli::try_parse_from(["sobs", "generate", "--to", "May 2024"]).is_err());
}

#[test]
fn rejects_unknown_granularity_and_format() {
    assert!(Cli::try_parse_from(["sobs", "generate", "--granularity", "weekly"]).is_err());
    assert!(Cli::try_parse_from(["sobs", "generate", "--format", "xlsx"]).is_err());
    assert!(Cli::try_parse_from(["sobs", "generate", "--network", "display"]).is_err());
}

#[test]
fn parses_brands_command() {
    let cli = Cli::try_parse_from(["sobs", "brands", "--brands", "other.yaml"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Brands { brands: Some(ref p) } if p == &PathBuf::from("other.yaml")
    ));
}

#[test]
fn parses_locations_search() {
    let cli = Cli::try_parse_from(["sobs", "locations", "--search", "king"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Locations { search: Some(ref s) } if s == "king"
    ));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["sobs"]).is_err());
}

fn broken_config() -> Result<AppConfig, ConfigError> {
    Err(ConfigError::MissingEnvVar("GOOGLE_ADS_DEVELOPER_TOKEN".to_string()))
}

#[tokio::test]
async fn locations_runs_without_config() {
    let cli = Cli::try_parse_from(["sobs", "locations", "--search", "czech"]).unwrap();
    run(cli, broken_config).await.expect("locations must not load config");
}

#[tokio::test]
async fn brands_with_explicit_path_runs_without_config() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/brands.yaml");
    let path = path.to_str().unwrap();
    let cli = Cli::try_parse_from(["sobs", "brands", "--brands", path]).unwrap();
    run(cli, broken_config).await.expect("explicit --brands must not load config");
}

#[tokio::test]
async fn brands_without_path_reports_config_error() {
    let cli = Cli::try_parse_from(["sobs", "brands"]).unwrap();
    let err = run(cli, broken_config).await.unwrap_err();
    assert!(err.to_string().contains("GOOGLE_ADS_DEVELOPER_TOKEN"));
}

#[tokio::test]
async fn generate_reports_config_error() {
    let cli = Cli::try_parse_from(["sobs", "generate"]).unwrap();
    let err = run(cli, broken_config).await.unwrap_err();
    assert!(err.to_string().contains("missing required environment variable"));
}
