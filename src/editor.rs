use crate::config::{self, Config, FALLBACK_COLOR};
use crate::launch;

use eframe::egui;
use rfd::FileDialog;
use std::path::PathBuf;

/// Control-backing values for the settings form. Numeric fields are kept as
/// strings so that unparseable input can fall back to the field default at
/// collect time instead of being rejected while typing.
#[derive(Debug, Clone, Default)]
pub struct EditorForm {
    pub message_text: String,
    pub background_color: String,
    pub background_image_path: String,
    pub message_color: String,
    pub message_color_alt: String,
    pub time_color: String,
    pub message_font_size: String,
    pub time_font_size: String,
    pub message_blink_enabled: bool,
    pub blink_interval_ms: String,
}

impl EditorForm {
    pub fn from_config(config: &Config) -> Self {
        Self {
            message_text: config.message_text.clone(),
            background_color: config.background_color.clone(),
            background_image_path: config.background_image_path.clone(),
            message_color: config.message_color.clone(),
            message_color_alt: config.message_color_alt.clone(),
            time_color: config.time_color.clone(),
            message_font_size: config.message_font_size.to_string(),
            time_font_size: config.time_font_size.to_string(),
            message_blink_enabled: config.message_blink_enabled,
            blink_interval_ms: config.blink_interval_ms.to_string(),
        }
    }

    /// Build a complete record from the current control values. Integers that
    /// fail to parse fall back to that field's default; emptied color fields
    /// fall back to the fixed fallback color.
    pub fn collect(&self) -> Config {
        let defaults = Config::default();
        Config {
            message_text: self.message_text.trim().to_string(),
            background_color: collect_color(&self.background_color),
            background_image_path: self.background_image_path.trim().to_string(),
            message_color: collect_color(&self.message_color),
            message_color_alt: collect_color(&self.message_color_alt),
            time_color: collect_color(&self.time_color),
            message_font_size: self
                .message_font_size
                .trim()
                .parse()
                .unwrap_or(defaults.message_font_size),
            time_font_size: self
                .time_font_size
                .trim()
                .parse()
                .unwrap_or(defaults.time_font_size),
            message_blink_enabled: self.message_blink_enabled,
            blink_interval_ms: self
                .blink_interval_ms
                .trim()
                .parse()
                .unwrap_or(defaults.blink_interval_ms),
        }
    }
}

fn collect_color(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        FALLBACK_COLOR.to_string()
    } else {
        value.to_string()
    }
}

/// Outcome line shown under the action buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Status line entry for a launch attempt. A spawn failure is surfaced to
/// the user; the editor itself keeps running.
pub fn launch_status(result: anyhow::Result<()>) -> Status {
    match result {
        Ok(()) => Status::Info(
            "Fullscreen reminder started. Press Escape in that window to exit.".into(),
        ),
        Err(e) => {
            tracing::error!("failed to launch fullscreen reminder: {e:#}");
            Status::Error(format!("Failed to launch: {e}"))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmResult {
    None,
    Confirmed,
    Cancelled,
}

/// Small centered confirm/cancel window for the reset-to-defaults action.
#[derive(Debug, Default)]
struct ResetConfirm {
    open: bool,
}

impl ResetConfirm {
    fn ui(&mut self, ctx: &egui::Context) -> ConfirmResult {
        if !self.open {
            return ConfirmResult::None;
        }
        let mut result = ConfirmResult::None;
        let mut open = true;
        egui::Window::new("Restore defaults")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Restore all settings to their default values?");
                ui.horizontal(|ui| {
                    if ui.button("Restore").clicked() {
                        result = ConfirmResult::Confirmed;
                    }
                    if ui.button("Cancel").clicked() {
                        result = ConfirmResult::Cancelled;
                    }
                });
            });
        if result != ConfirmResult::None {
            self.open = false;
        }
        if !open {
            self.open = false;
            if result == ConfirmResult::None {
                result = ConfirmResult::Cancelled;
            }
        }
        result
    }
}

/// The settings window: one control per field, plus Save, Run fullscreen and
/// Restore defaults.
pub struct EditorApp {
    config_path: PathBuf,
    form: EditorForm,
    status: Option<Status>,
    reset_confirm: ResetConfirm,
}

impl EditorApp {
    pub fn new(config: &Config, config_path: PathBuf) -> Self {
        Self {
            config_path,
            form: EditorForm::from_config(config),
            status: None,
            reset_confirm: ResetConfirm::default(),
        }
    }

    /// Collect the form and overwrite the settings document. Failure lands in
    /// the status line; the collected record is returned on success.
    fn persist(&mut self) -> Option<Config> {
        let config = self.form.collect();
        match config.save(&self.config_path) {
            Ok(()) => Some(config),
            Err(e) => {
                self.status = Some(Status::Error(format!("Failed to save settings: {e}")));
                None
            }
        }
    }

    fn save_clicked(&mut self) {
        if self.persist().is_some() {
            self.status = Some(Status::Info(format!(
                "Settings saved to {}",
                config::CONFIG_FILE
            )));
        }
    }

    fn run_clicked(&mut self) {
        if self.persist().is_none() {
            return;
        }
        self.status = Some(launch_status(launch::spawn_presenter()));
    }

    fn reset_confirmed(&mut self) {
        let defaults = Config::default();
        self.form = EditorForm::from_config(&defaults);
        match defaults.save(&self.config_path) {
            Ok(()) => self.status = Some(Status::Info("Default settings restored".into())),
            Err(e) => {
                self.status = Some(Status::Error(format!("Failed to save settings: {e}")));
            }
        }
    }

    fn form_ui(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("settings_form")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Message text");
                ui.add(egui::TextEdit::singleline(&mut self.form.message_text).desired_width(280.0));
                ui.end_row();

                ui.label("Background color");
                ui.horizontal(|ui| {
                    color_field(ui, &mut self.form.background_color);
                    hint(ui, "used when no image is set");
                });
                ui.end_row();

                ui.label("Background image");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.background_image_path)
                            .desired_width(220.0),
                    );
                    if ui.button("Browse").clicked() {
                        if let Some(file) = FileDialog::new()
                            .add_filter("Images (JPG/PNG/GIF)", &["jpg", "jpeg", "png", "gif"])
                            .pick_file()
                        {
                            self.form.background_image_path = file.display().to_string();
                        }
                    }
                    hint(ui, "leave empty for a solid background");
                });
                ui.end_row();

                ui.label("Message color");
                color_field(ui, &mut self.form.message_color);
                ui.end_row();

                ui.label("Blink alternate color");
                color_field(ui, &mut self.form.message_color_alt);
                ui.end_row();

                ui.label("Clock color");
                color_field(ui, &mut self.form.time_color);
                ui.end_row();

                ui.label("Message font size");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.message_font_size)
                            .desired_width(60.0),
                    );
                    hint(ui, "points");
                });
                ui.end_row();

                ui.label("Clock font size");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.time_font_size)
                            .desired_width(60.0),
                    );
                    hint(ui, "points");
                });
                ui.end_row();

                ui.label("Blink message");
                ui.checkbox(&mut self.form.message_blink_enabled, "Enabled");
                ui.end_row();

                ui.label("Blink interval");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.blink_interval_ms)
                            .desired_width(60.0),
                    );
                    hint(ui, "milliseconds");
                });
                ui.end_row();
            });
    }
}

fn hint(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(format!("({text})")).small().weak());
}

/// Hex entry with a color picker swatch beside it. Picker edits are written
/// back as `#rrggbb`; cancelling the picker leaves the field unchanged.
fn color_field(ui: &mut egui::Ui, value: &mut String) {
    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(value).desired_width(80.0));
        let mut color = config::parse_hex_color(value)
            .map(|(r, g, b)| egui::Color32::from_rgb(r, g, b))
            .unwrap_or(egui::Color32::BLACK);
        if ui.color_edit_button_srgba(&mut color).changed() {
            *value = config::format_hex_color((color.r(), color.g(), color.b()));
        }
    });
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.reset_confirm.ui(ctx) {
            ConfirmResult::Confirmed => self.reset_confirmed(),
            ConfirmResult::Cancelled | ConfirmResult::None => {}
        }

        egui::TopBottomPanel::bottom("editor_actions")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new("After launching, press Escape to leave the fullscreen reminder.")
                        .weak(),
                );
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        self.save_clicked();
                    }
                    if ui.button("Run fullscreen").clicked() {
                        self.run_clicked();
                    }
                    if ui.button("Restore defaults").clicked() {
                        self.reset_confirm.open = true;
                    }
                });
                match &self.status {
                    Some(Status::Info(msg)) => {
                        ui.label(msg);
                    }
                    Some(Status::Error(msg)) => {
                        ui.colored_label(egui::Color32::RED, msg);
                    }
                    None => {}
                }
                ui.add_space(6.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Away Prompt");
            ui.label(egui::RichText::new("Fullscreen reminder settings").weak());
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.form_ui(ui);
            });
        });
    }
}
