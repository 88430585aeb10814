//! Top-level application hosting the scratch pad behind a launcher button.

use std::path::PathBuf;

use eframe::egui;

use scratch_pad_config::AppConfig;
use scratch_pad_history::HistoryConfig;

use crate::clipboard::{ClipboardCapability, SystemClipboard};
use crate::pad::ScratchPad;

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// Show the pad immediately.
    pub open: bool,
    /// If set, pre-fill the pad with this text.
    pub text: Option<String>,
    /// Config file to use instead of the default location.
    pub config_path: Option<PathBuf>,
}

/// Which color theme to use.
///
/// Wraps a string name. Special values: `"System"`, `"Dark"`, `"Light"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeMode(pub String);

impl Default for ThemeMode {
    fn default() -> Self {
        Self::system()
    }
}

impl ThemeMode {
    pub fn system() -> Self {
        Self("System".to_string())
    }

    pub fn dark() -> Self {
        Self("Dark".to_string())
    }

    pub fn light() -> Self {
        Self("Light".to_string())
    }

    /// Returns true if this is the "System" mode.
    pub fn is_system(&self) -> bool {
        self.0 == "System"
    }

    /// Resolves "System" to a concrete theme name using the OS preference.
    /// Non-system modes return their own name.
    pub fn resolve(&self) -> &str {
        if self.is_system() {
            match dark_light::detect() {
                Ok(dark_light::Mode::Light) => "Light",
                _ => "Dark",
            }
        } else {
            &self.0
        }
    }
}

/// The main application state.
pub struct ScratchPadApp {
    pub pad: ScratchPad,
    pub show_pad: bool,
}

impl ScratchPadApp {
    /// Creates the application, loading config from disk and opening the
    /// system clipboard.
    pub fn new(cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        let config_path = args
            .config_path
            .clone()
            .unwrap_or_else(AppConfig::config_path);
        let config = AppConfig::load_or_create(&config_path);
        tracing::debug!("Loaded config from {}", config_path.display());

        Self::with_parts(cc, config, Box::new(SystemClipboard::open()), args)
    }

    /// Creates the application from an already loaded config and an
    /// explicit clipboard.
    pub fn with_parts(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        clipboard: Box<dyn ClipboardCapability>,
        args: StartupArgs,
    ) -> Self {
        Self::apply_theme_visuals(&cc.egui_ctx, &ThemeMode(config.theme.clone()));

        let history_config = match config.history_max_depth {
            Some(depth) => HistoryConfig::with_max_depth(depth),
            None => HistoryConfig::unbounded(),
        };
        let mut pad = ScratchPad::new(history_config, clipboard)
            .with_rows(config.rows)
            .with_font_size(config.font_size);

        if let Some(text) = args.text {
            pad.edit(text);
        }

        Self {
            pad,
            show_pad: args.open || config.start_visible,
        }
    }

    fn apply_theme_visuals(ctx: &egui::Context, mode: &ThemeMode) {
        let visuals = match mode.resolve() {
            "Light" => egui::Visuals::light(),
            _ => egui::Visuals::dark(),
        };
        ctx.set_visuals(visuals);
    }
}

impl eframe::App for ScratchPadApp {
    // Required by eframe 0.34; all rendering still happens in `update`.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if ui.button("Scratch Pad").clicked() {
                self.show_pad = true;
            }
            ui.add_space(8.0);

            let visible = self.show_pad;
            let show_pad = &mut self.show_pad;
            self.pad.show(ui, visible, || *show_pad = false);
        });
    }
}
