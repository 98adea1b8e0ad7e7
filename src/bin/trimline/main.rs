use clap::Parser;
use trimline::config::Config;
use trimline::video::{DurationProbe, FixedProbe};

mod app;
use app::TrimApp;

/// Demo player screen around the trim slider.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
  /// Video source identifier shown in the UI.
  #[arg(default_value = "demo.mp4")]
  source: String,
  /// Duration reported by the demo metadata probe, in seconds.
  #[arg(long, default_value_t = 90.0)]
  duration: f64,
}

fn main() -> eframe::Result {
  env_logger::init();

  let args = Args::parse();
  let config = Config::new();

  let rt = tokio::runtime::Runtime::new().expect("tokio runtime");

  // The probe runs once per source; the slider starts with duration 0 if it
  // fails and keeps working.
  let probe = FixedProbe::new(args.duration);
  let duration = rt.block_on(probe.duration(&args.source)).unwrap_or_else(|e| {
    log::warn!("metadata probe failed: {e}");
    0.0
  });

  // Keep the runtime entered so the thumbnail worker can be spawned.
  let _enter = rt.enter();

  let options = eframe::NativeOptions {
    viewport: egui::ViewportBuilder {
      inner_size: Some(egui::vec2(900.0, 260.0)),
      ..Default::default()
    },
    ..Default::default()
  };

  eframe::run_native(
    "trimline",
    options,
    Box::new(move |_cc| Ok(Box::new(TrimApp::new(&config, args.source, duration)))),
  )
}
