use away_prompt::config::{self, Config};
use away_prompt::presenter::{clock_text, fit_within, load_background, BlinkState};
use chrono::TimeZone;
use tempfile::tempdir;

#[test]
fn contain_scaling_uses_the_smaller_ratio() {
    // 1920/800 = 2.4, 1080/600 = 1.8, so the image scales by 1.8.
    assert_eq!(fit_within(800, 600, 1920, 1080), (1440, 1080));
}

#[test]
fn contain_scaling_downscales_oversized_images() {
    assert_eq!(fit_within(3840, 1080, 1920, 1080), (1920, 540));
    assert_eq!(fit_within(3840, 2160, 1920, 1080), (1920, 1080));
}

#[test]
fn contain_scaling_never_collapses_a_dimension() {
    assert_eq!(fit_within(10000, 10, 100, 100), (100, 1));
}

#[test]
fn disabled_blink_never_changes_the_color() {
    let config = Config::default();
    let mut blink = BlinkState::new();
    let initial = blink.message_color(&config).to_string();
    for _ in 0..10 {
        blink.tick(false);
        assert_eq!(blink.message_color(&config), initial);
    }
}

#[test]
fn enabled_blink_alternates_between_the_two_colors() {
    let config = Config::default();
    let mut blink = BlinkState::new();
    assert_eq!(blink.message_color(&config), config.message_color);

    blink.tick(true);
    assert_eq!(blink.message_color(&config), config.message_color_alt);
    blink.tick(true);
    assert_eq!(blink.message_color(&config), config.message_color);
}

#[test]
fn invalid_blink_colors_fall_back_to_their_own_defaults() {
    let config = Config {
        message_color: "not a color".into(),
        message_color_alt: "also not a color".into(),
        ..Config::default()
    };
    let mut blink = BlinkState::new();
    assert_eq!(
        blink.fill(&config),
        eframe::egui::Color32::from_rgb(0xf9, 0xf9, 0xf9)
    );

    blink.tick(true);
    assert_eq!(
        blink.fill(&config),
        eframe::egui::Color32::from_rgb(0xd9, 0xd9, 0xd9)
    );
}

#[test]
fn missing_background_writes_a_diagnostic_sidecar() {
    let dir = tempdir().unwrap();
    let attempted = dir.path().join("no_such_image.png");

    assert!(load_background(dir.path(), attempted.to_str().unwrap()).is_none());

    let sidecar = std::fs::read_to_string(config::sidecar_path(dir.path())).unwrap();
    assert!(sidecar.contains(attempted.to_str().unwrap()));
}

#[test]
fn undecodable_background_writes_a_diagnostic_sidecar() {
    let dir = tempdir().unwrap();
    let fake = dir.path().join("fake.png");
    std::fs::write(&fake, "this is not an image").unwrap();

    assert!(load_background(dir.path(), fake.to_str().unwrap()).is_none());

    let sidecar = std::fs::read_to_string(config::sidecar_path(dir.path())).unwrap();
    assert!(sidecar.contains(fake.to_str().unwrap()));
}

#[test]
fn empty_background_path_is_not_an_error() {
    let dir = tempdir().unwrap();
    assert!(load_background(dir.path(), "").is_none());
    assert!(load_background(dir.path(), "   ").is_none());
    assert!(!config::sidecar_path(dir.path()).exists());
}

#[test]
fn clock_text_has_date_weekday_and_time() {
    // 2025-01-01 was a Wednesday.
    let now = chrono::Local.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(clock_text(now), "2025-01-01 星期三 12:00:00");
}
