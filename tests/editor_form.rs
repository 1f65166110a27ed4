use away_prompt::config::{Config, FALLBACK_COLOR};
use away_prompt::editor::{launch_status, EditorForm, Status};

#[test]
fn unparseable_integers_fall_back_to_field_defaults() {
    let mut form = EditorForm::from_config(&Config::default());
    form.message_font_size = "huge".into();
    form.time_font_size = String::new();
    form.blink_interval_ms = "1.5".into();

    let collected = form.collect();
    let defaults = Config::default();
    assert_eq!(collected.message_font_size, defaults.message_font_size);
    assert_eq!(collected.time_font_size, defaults.time_font_size);
    assert_eq!(collected.blink_interval_ms, defaults.blink_interval_ms);
}

#[test]
fn emptied_color_fields_fall_back_to_the_fixed_color() {
    let mut form = EditorForm::from_config(&Config::default());
    form.background_color = String::new();
    form.message_color = "   ".into();
    form.message_color_alt = String::new();
    form.time_color = "\t".into();

    let collected = form.collect();
    assert_eq!(collected.background_color, FALLBACK_COLOR);
    assert_eq!(collected.message_color, FALLBACK_COLOR);
    assert_eq!(collected.message_color_alt, FALLBACK_COLOR);
    assert_eq!(collected.time_color, FALLBACK_COLOR);
}

#[test]
fn collect_round_trips_an_unedited_form() {
    let config = Config {
        message_text: "tea break".into(),
        background_color: "#112233".into(),
        background_image_path: "/pictures/bg.jpg".into(),
        message_color: "#aabbcc".into(),
        message_color_alt: "#ddeeff".into(),
        time_color: "#ffaa00".into(),
        message_font_size: 72,
        time_font_size: 36,
        message_blink_enabled: false,
        blink_interval_ms: 500,
    };
    assert_eq!(EditorForm::from_config(&config).collect(), config);
}

#[test]
fn collect_trims_text_fields() {
    let mut form = EditorForm::from_config(&Config::default());
    form.message_text = "  drink water  ".into();
    form.background_image_path = " /tmp/bg.png ".into();
    form.message_font_size = " 60 ".into();

    let collected = form.collect();
    assert_eq!(collected.message_text, "drink water");
    assert_eq!(collected.background_image_path, "/tmp/bg.png");
    assert_eq!(collected.message_font_size, 60);
}

#[test]
fn spawn_failure_surfaces_as_an_error_status() {
    let status = launch_status(Err(anyhow::anyhow!("No such file or directory")));
    assert!(matches!(
        status,
        Status::Error(ref msg) if msg.contains("No such file or directory")
    ));
}

#[test]
fn successful_spawn_reports_the_exit_key() {
    let status = launch_status(Ok(()));
    assert!(matches!(status, Status::Info(ref msg) if msg.contains("Escape")));
}
