use crate::config::{self, Config};

use chrono::{DateTime, Datelike, Local};
use eframe::egui;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const CLOCK_INTERVAL: Duration = Duration::from_millis(1000);
/// The background image is drawn once, shortly after the window is realized.
const BACKGROUND_DELAY: Duration = Duration::from_millis(100);

/// Size of an image scaled to fit inside `bounds_w` x `bounds_h` while
/// preserving aspect ratio: the smaller of the width and height ratios is
/// used as the uniform scale factor. Each result dimension is at least 1.
pub fn fit_within(img_w: u32, img_h: u32, bounds_w: u32, bounds_h: u32) -> (u32, u32) {
    let scale_w = bounds_w as f64 / img_w as f64;
    let scale_h = bounds_h as f64 / img_h as f64;
    let scale = scale_w.min(scale_h);
    let w = ((img_w as f64 * scale) as u32).max(1);
    let h = ((img_h as f64 * scale) as u32).max(1);
    (w, h)
}

/// Clock line in the form `2025-01-01 星期一 12:00:00`.
pub fn clock_text(now: DateTime<Local>) -> String {
    const WEEKDAYS: [&str; 7] = [
        "星期一",
        "星期二",
        "星期三",
        "星期四",
        "星期五",
        "星期六",
        "星期日",
    ];
    let weekday = WEEKDAYS[now.weekday().num_days_from_monday() as usize];
    format!(
        "{} {} {}",
        now.format("%Y-%m-%d"),
        weekday,
        now.format("%H:%M:%S")
    )
}

/// Alternation state for the blinking message.
#[derive(Debug)]
pub struct BlinkState {
    primary: bool,
}

impl Default for BlinkState {
    fn default() -> Self {
        Self { primary: true }
    }
}

impl BlinkState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One blink tick. The color toggles only while blinking is enabled; the
    /// tick itself keeps firing either way, so a changed setting takes effect
    /// at the next restart without restructuring the timer chain.
    pub fn tick(&mut self, enabled: bool) {
        if enabled {
            self.primary = !self.primary;
        }
    }

    pub fn message_color<'a>(&self, config: &'a Config) -> &'a str {
        if self.primary {
            &config.message_color
        } else {
            &config.message_color_alt
        }
    }

    /// Paint color for the current phase. Invalid hex falls back to that
    /// phase's own default, so a broken alternate color still blinks visibly.
    pub fn fill(&self, config: &Config) -> egui::Color32 {
        if self.primary {
            color_or(&config.message_color, egui::Color32::from_rgb(0xf9, 0xf9, 0xf9))
        } else {
            color_or(
                &config.message_color_alt,
                egui::Color32::from_rgb(0xd9, 0xd9, 0xd9),
            )
        }
    }
}

/// Decode the configured background image. On failure the reason is written
/// to `bg_load_error.txt` in `dir` (best effort) and `None` is returned; the
/// caller falls back to the solid background color. Never retried.
pub fn load_background(dir: &Path, configured_path: &str) -> Option<image::RgbaImage> {
    let configured_path = configured_path.trim();
    if configured_path.is_empty() {
        return None;
    }
    let path = Path::new(configured_path);
    if !path.is_file() {
        report_background_failure(dir, &format!("file does not exist: {}", path.display()));
        return None;
    }
    match image::open(path) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            report_background_failure(dir, &format!("failed to decode {}: {e}", path.display()));
            None
        }
    }
}

fn report_background_failure(dir: &Path, reason: &str) {
    tracing::warn!("background image unavailable: {reason}");
    if let Err(e) = std::fs::write(config::sidecar_path(dir), reason) {
        tracing::debug!("could not write diagnostic file: {e}");
    }
}

fn color_or(hex: &str, fallback: egui::Color32) -> egui::Color32 {
    config::parse_hex_color(hex)
        .map(|(r, g, b)| egui::Color32::from_rgb(r, g, b))
        .unwrap_or(fallback)
}

/// The full-screen reminder window: message at 40% of screen height, clock
/// at 60%, optional contain-scaled background image underneath. Escape exits.
pub struct PresenterApp {
    config: Config,
    config_dir: PathBuf,
    background: Option<egui::TextureHandle>,
    background_pending: bool,
    started: Instant,
    clock: String,
    last_clock_tick: Instant,
    blink: BlinkState,
    last_blink_tick: Instant,
}

impl PresenterApp {
    pub fn new(config: Config, config_dir: PathBuf) -> Self {
        let now = Instant::now();
        Self {
            background_pending: !config.background_image_path.trim().is_empty(),
            config,
            config_dir,
            background: None,
            started: now,
            clock: clock_text(Local::now()),
            last_clock_tick: now,
            blink: BlinkState::new(),
            last_blink_tick: now,
        }
    }

    fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.config.blink_interval_ms.max(1))
    }

    fn maybe_load_background(&mut self, ctx: &egui::Context) {
        if !self.background_pending || self.started.elapsed() < BACKGROUND_DELAY {
            return;
        }
        self.background_pending = false;
        if let Some(img) = load_background(&self.config_dir, &self.config.background_image_path) {
            let size = [img.width() as usize, img.height() as usize];
            let tex = ctx.load_texture(
                "background",
                egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw()),
                egui::TextureOptions::LINEAR,
            );
            self.background = Some(tex);
        }
    }

    fn run_timers(&mut self) {
        if self.last_clock_tick.elapsed() >= CLOCK_INTERVAL {
            self.last_clock_tick = Instant::now();
            self.clock = clock_text(Local::now());
        }
        if self.last_blink_tick.elapsed() >= self.blink_interval() {
            self.last_blink_tick = Instant::now();
            self.blink.tick(self.config.message_blink_enabled);
        }
    }

    /// Time until the next clock or blink tick (or the pending background
    /// draw), so the event loop can sleep in between.
    fn next_wakeup(&self) -> Duration {
        let until_clock = CLOCK_INTERVAL.saturating_sub(self.last_clock_tick.elapsed());
        let until_blink = self.blink_interval().saturating_sub(self.last_blink_tick.elapsed());
        let mut wait = until_clock.min(until_blink);
        if self.background_pending {
            wait = wait.min(BACKGROUND_DELAY.saturating_sub(self.started.elapsed()));
        }
        wait
    }
}

impl eframe::App for PresenterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.maybe_load_background(ctx);
        self.run_timers();

        let background_color = color_or(
            &self.config.background_color,
            egui::Color32::from_rgb(0x1a, 0x1a, 0x1a),
        );
        let message_color = self.blink.fill(&self.config);
        let time_color = color_or(
            &self.config.time_color,
            egui::Color32::from_rgb(0xff, 0xd7, 0x00),
        );

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(background_color))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();

                if let Some(tex) = &self.background {
                    let [img_w, img_h] = tex.size();
                    let (w, h) = fit_within(
                        img_w as u32,
                        img_h as u32,
                        rect.width().max(1.0) as u32,
                        rect.height().max(1.0) as u32,
                    );
                    let image_rect =
                        egui::Rect::from_center_size(rect.center(), egui::vec2(w as f32, h as f32));
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(tex.id(), image_rect, uv, egui::Color32::WHITE);
                }

                // Text is painted after the image, so it stays on top.
                painter.text(
                    egui::pos2(rect.center().x, rect.top() + rect.height() * 0.40),
                    egui::Align2::CENTER_CENTER,
                    &self.config.message_text,
                    egui::FontId::proportional(self.config.message_font_size.max(1) as f32),
                    message_color,
                );
                painter.text(
                    egui::pos2(rect.center().x, rect.top() + rect.height() * 0.60),
                    egui::Align2::CENTER_CENTER,
                    &self.clock,
                    egui::FontId::proportional(self.config.time_font_size.max(1) as f32),
                    time_color,
                );
            });

        ctx.request_repaint_after(self.next_wakeup());
    }
}
