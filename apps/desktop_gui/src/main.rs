mod ui;

use clap::Parser;
use eframe::egui;

use crate::ui::{RosterGuiApp, StartupConfig};

#[derive(Parser, Debug)]
struct Args {
    /// Prefill the email field on the sign-in card.
    #[arg(long, default_value = "")]
    email: String,
    /// Start with a few sample accounts already registered.
    #[arg(long)]
    seed_demo: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let startup = StartupConfig {
        email: args.email,
        seed_demo: args.seed_demo,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Proto Roster")
            .with_inner_size([760.0, 640.0])
            .with_min_inner_size([560.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Proto Roster",
        options,
        Box::new(move |_cc| Ok(Box::new(RosterGuiApp::bootstrap(startup)))),
    )
}
