use std::path::Path;

use super::*;

fn brand(name: &str, keywords: &[&str]) -> Brand {
    Brand::new(name, keywords, false, "#cccccc")
}

#[test]
fn active_keywords_trims_and_drops_blanks() {
    let b = brand("Acme", &[" acme ", "", "   ", "acme shoes"]);
    assert_eq!(b.active_keywords(), vec!["acme", "acme shoes"]);
}

#[test]
fn eligible_requires_name_and_keyword() {
    assert!(brand("Acme", &["acme"]).is_eligible());
    assert!(!brand("", &["acme"]).is_eligible());
    assert!(!brand("  ", &["acme"]).is_eligible());
    assert!(!brand("Acme", &[""]).is_eligible());
    assert!(!brand("Acme", &[]).is_eligible());
}

#[test]
fn matches_keyword_is_case_insensitive() {
    let b = brand("Acme", &["Acme Shoes", "acme"]);
    assert!(b.matches_keyword("acme shoes"));
    assert!(b.matches_keyword("ACME"));
    assert!(!b.matches_keyword("acme boots"));
}

#[test]
fn matches_keyword_ignores_blank_entries() {
    let b = brand("Acme", &["", "acme"]);
    assert!(!b.matches_keyword(""));
}

#[test]
fn parse_assigns_palette_colors_by_position() {
    let yaml = r##"
brands:
  - name: Acme
    keywords: [acme]
    own_brand: true
  - name: Globex
    keywords: [globex]
  - name: Initech
    keywords: [initech]
    color: "#000000"
"##;
    let file = parse_brands(yaml).expect("valid brands");
    assert_eq!(file.brands[0].color, "#1f77b4");
    assert_eq!(file.brands[1].color, "#ff7f0e");
    assert_eq!(file.brands[2].color, "#000000");
    assert!(file.brands[0].is_own_brand);
    assert!(!file.brands[1].is_own_brand);
}

#[test]
fn parse_generates_distinct_ids() {
    let yaml = r"
brands:
  - name: Acme
    keywords: [acme]
  - name: Globex
    keywords: [globex]
";
    let file = parse_brands(yaml).unwrap();
    assert_ne!(file.brands[0].id, file.brands[1].id);
}

#[test]
fn parse_accepts_is_own_brand_alias() {
    let yaml = r"
brands:
  - name: Acme
    keywords: [acme]
    is_own_brand: true
";
    let file = parse_brands(yaml).unwrap();
    assert!(file.brands[0].is_own_brand);
}

#[test]
fn parse_keeps_ineligible_entries() {
    let yaml = r"
brands:
  - name: ''
    keywords: [acme]
  - name: Globex
    keywords: ['']
  - name: Initech
    keywords: [initech]
";
    let file = parse_brands(yaml).unwrap();
    assert_eq!(file.brands.len(), 3);
    let eligible: Vec<&str> = file.eligible().map(|b| b.name.as_str()).collect();
    assert_eq!(eligible, vec!["Initech"]);
}

#[test]
fn validate_rejects_duplicate_name_case_insensitive() {
    let yaml = r"
brands:
  - name: Acme
    keywords: [acme]
  - name: ACME
    keywords: [acme inc]
";
    let err = parse_brands(yaml).unwrap_err();
    assert!(err.to_string().contains("duplicate brand name"));
}

#[test]
fn validate_allows_multiple_blank_names() {
    let yaml = r"
brands:
  - name: ''
    keywords: ['']
  - name: ''
    keywords: ['']
";
    assert!(parse_brands(yaml).is_ok());
}

#[test]
fn validate_rejects_bad_color() {
    let yaml = r"
brands:
  - name: Acme
    keywords: [acme]
    color: blue
";
    let err = parse_brands(yaml).unwrap_err();
    assert!(err.to_string().contains("invalid color"));
}

#[test]
fn validate_rejects_duplicate_ids() {
    let yaml = r"
brands:
  - id: 5f3c7a8e-9d0b-4c1e-8f2a-3b4c5d6e7f80
    name: Acme
    keywords: [acme]
  - id: 5f3c7a8e-9d0b-4c1e-8f2a-3b4c5d6e7f80
    name: Globex
    keywords: [globex]
";
    let err = parse_brands(yaml).unwrap_err();
    assert!(err.to_string().contains("duplicate brand id"));
}

#[test]
fn own_and_competitor_groups() {
    let yaml = r"
brands:
  - name: Acme
    keywords: [acme]
    own_brand: true
  - name: Globex
    keywords: [globex]
  - name: Initech
    keywords: [initech]
";
    let file = parse_brands(yaml).unwrap();
    assert_eq!(file.own_brands().count(), 1);
    assert_eq!(file.competitors().count(), 2);
}

#[test]
fn load_brands_missing_file_is_io_error() {
    let err = load_brands(Path::new("/definitely/not/here/brands.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::BrandsFileIo { .. }));
}

#[test]
fn load_brands_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("brands.yaml");
    assert!(
        path.exists(),
        "brands.yaml missing at {path:?}; required for this test"
    );
    let result = load_brands(&path);
    assert!(result.is_ok(), "failed to load brands.yaml: {result:?}");
    let brands_file = result.unwrap();
    assert!(brands_file.eligible().count() >= 2);
}
