use std::io::Write;
use std::time::Duration;

use image_carousel::config::{CarouselOptions, Configuration, Slide};

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
slides:
  - url: "https://img/a.jpg"
    alt: "Ocean sunset"
    caption: "Vibrant sunset over the ocean"
  - url: "https://img/b.jpg"
carousel:
  auto-play: false
  interval: 2500
  show-controls: false
  show-indicators: true
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.slides.len(), 2);
    assert_eq!(
        cfg.slides[0],
        Slide::new("https://img/a.jpg")
            .with_alt("Ocean sunset")
            .with_caption("Vibrant sunset over the ocean")
    );
    assert_eq!(cfg.slides[1].alt, None);
    assert!(!cfg.carousel.auto_play);
    assert_eq!(cfg.carousel.interval, Duration::from_millis(2500));
    assert!(!cfg.carousel.show_controls);
    assert!(cfg.carousel.show_indicators);
}

#[test]
fn defaults_match_host_surface() {
    let cfg: Configuration = serde_yaml::from_str("slides: []").unwrap();
    assert!(cfg.slides.is_empty());
    assert_eq!(cfg.carousel, CarouselOptions::default());
    assert!(cfg.carousel.auto_play);
    assert_eq!(cfg.carousel.interval_ms(), 5000);
    assert!(cfg.carousel.show_controls);
    assert!(cfg.carousel.show_indicators);
}

#[test]
fn interval_accepts_humantime_strings() {
    let yaml = r#"
carousel:
  interval: "7s 500ms"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.carousel.interval, Duration::from_millis(7500));
}

#[test]
fn interval_rejects_garbage_and_negative_values() {
    assert!(serde_yaml::from_str::<Configuration>("carousel:\n  interval: soon\n").is_err());
    assert!(serde_yaml::from_str::<Configuration>("carousel:\n  interval: -5\n").is_err());
}

#[test]
fn zero_interval_fails_validation() {
    let cfg: Configuration = serde_yaml::from_str("carousel:\n  interval: 0\n").unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(format!("{err:#}").contains("greater than zero"));
}

#[test]
fn out_of_range_interval_is_accepted() {
    let cfg: Configuration = serde_yaml::from_str("carousel:\n  interval: 250\n").unwrap();
    let cfg = cfg.validated().unwrap();
    assert_eq!(cfg.carousel.interval_ms(), 250);
}

#[test]
fn slide_without_url_is_not_rejected() {
    let yaml = r#"
slides:
  - alt: "orphan"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.slides[0].url, "");
    assert!(cfg.validated().is_ok());
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "slides:\n  - url: a.jpg\ncarousel:\n  interval: 1000\n  show-indicators: false"
    )
    .unwrap();
    let cfg = Configuration::from_yaml_file(file.path())
        .unwrap()
        .validated()
        .unwrap();
    assert_eq!(cfg.slides, vec![Slide::new("a.jpg")]);
    assert_eq!(cfg.carousel.interval_ms(), 1000);
    assert!(!cfg.carousel.show_indicators);
}

#[test]
fn missing_file_reports_path() {
    let err = Configuration::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.yaml"));
}

#[test]
fn shipped_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.yaml");
    let cfg = Configuration::from_yaml_file(path)
        .unwrap()
        .validated()
        .unwrap();
    assert_eq!(cfg.slides.len(), 5);
    assert!(cfg.slides.iter().all(|s| s.caption.is_some()));
}

#[test]
fn huge_interval_saturates_milliseconds() {
    let yaml = "carousel:\n  interval: 1000000000years\n";
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.carousel.interval.as_millis() > u128::from(u64::MAX));
    assert_eq!(cfg.carousel.interval_ms(), u64::MAX);
    assert!(cfg.validated().is_ok(), "long intervals only warn");
}
