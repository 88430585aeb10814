use egui_kittest::Harness;
use scratch_pad_config::AppConfig;
use scratch_pad_ui::{MemoryClipboard, ScratchPadApp, StartupArgs};

/// Config with a fixed theme so tests don't query the OS preference.
pub fn test_config() -> AppConfig {
    AppConfig {
        theme: "Dark".to_string(),
        ..Default::default()
    }
}

/// Creates a test harness at 800x600 with the pad already open.
pub fn create_harness(clipboard: &MemoryClipboard) -> Harness<'static, ScratchPadApp> {
    create_harness_with(
        clipboard,
        StartupArgs {
            open: true,
            ..Default::default()
        },
    )
}

pub fn create_harness_with(
    clipboard: &MemoryClipboard,
    args: StartupArgs,
) -> Harness<'static, ScratchPadApp> {
    let clipboard = clipboard.clone();
    Harness::builder()
        .with_size(egui::Vec2::new(800.0, 600.0))
        .build_eframe(move |cc| {
            ScratchPadApp::with_parts(
                cc,
                test_config(),
                Box::new(clipboard.clone()),
                args.clone(),
            )
        })
}
