//! Headless demo binary: runs the guard detection loop until the demo
//! walker is spotted.
use std::path::PathBuf;
use std::time::Duration;

use anyhow::anyhow;
use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use clap::Parser;
use skulk::{
    drive_walkers_system, init_logging, spawn_world_system, Guard, GuardConfig, GuardPlugin,
};

/// Guard detection demo for a 2D top-down stealth prototype
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to a JSON guard configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Stops the demo once any guard has latched.
fn exit_once_detected(guards: Query<&Guard, Changed<Guard>>, mut exit: EventWriter<AppExit>) {
    if guards.iter().any(Guard::is_detected) {
        log::info!("player detected; demo over");
        exit.send(AppExit::Success);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / 60.0,
        ))),
    )
    .add_plugins(TransformPlugin)
    .add_plugins(GuardPlugin)
    .add_systems(Startup, spawn_world_system)
    .add_systems(Update, (drive_walkers_system, exit_once_detected));

    if let Some(path) = args.config.as_deref() {
        app.insert_resource(GuardConfig::load(path)?);
    }

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow!("demo exited with error code {code}")),
    }
}
