//! Motionboard main entry point.
//!
//! An animated schematic viewer for quantitative-reasoning word problems
//! (meeting, pursuit, and crossing motion problems, plus static geometry
//! panels), written in Rust using:
//! - **raylib** for windowing, graphics, and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (agents, drawables, labels, ordering)
//! - [`events`] – Event types (problem switches, transport commands)
//! - [`resources`] – ECS resources (playback clock, catalog, config, timing)
//! - [`systems`] – ECS systems (input, layout, placement, rendering)
//! - [`kinematics`] / [`projection`] / [`classify`] – the pure scene math
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, and resources
//! 2. Load the problem catalog (plus any `--import`ed document)
//! 3. Register observers and systems
//! 4. Run the frame loop: input → clock tick → layout → placement → render
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run --release -- --list
//! cargo run --release -- --problem 2022-sydw-meet-basic
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod classify;
mod components;
mod events;
mod game;
mod generate;
mod kinematics;
mod problem;
mod projection;
mod resources;
mod systems;

use crate::components::persistent::Persistent;
use crate::events::problemchange::{ProblemChangedEvent, observe_problem_change};
use crate::events::transport::observe_transport;
use crate::resources::activeproblem::ActiveProblem;
use crate::resources::appconfig::AppConfig;
use crate::resources::catalog::ProblemCatalog;
use crate::resources::playback::Playback;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::input::update_input_state;
use crate::systems::layout::scene_layout_system;
use crate::systems::placement::scene_placement_system;
use crate::systems::playback::playback_tick_system;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Motionboard – animated word-problem schematics
#[derive(Parser)]
#[command(version, about = "Animated schematics for motion word problems")]
struct Cli {
    /// Path to the problem catalog JSON.
    #[arg(long, value_name = "PATH", default_value = "assets/problems.json")]
    catalog: PathBuf,

    /// Id of the problem to show first.
    #[arg(long, value_name = "ID")]
    problem: Option<String>,

    /// Decode a generated-problem JSON document and add it to the catalog.
    #[arg(long, value_name = "PATH")]
    import: Option<PathBuf>,

    /// Print the catalog and exit (no window needed).
    #[arg(long)]
    list: bool,

    /// Filter the --list output by a search term.
    #[arg(long, value_name = "TERM")]
    search: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::new();
    config.load_from_file().ok(); // ignore errors, use defaults

    let mut catalog = match ProblemCatalog::load_from_file(&cli.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // An imported document that fails validation is reported but does not
    // take the catalog down with it.
    if let Some(path) = cli.import.as_deref() {
        match generate::problem_from_file(path) {
            Ok(problem) => catalog.prepend(problem),
            Err(e) => eprintln!("generation failed: {e}"),
        }
    }

    // Early-exit: print the catalog and quit (no window needed)
    if cli.list {
        game::print_catalog(&catalog, cli.search.as_deref());
        return;
    }

    let Some((initial_problem, initial_index)) =
        game::pick_initial(&catalog, cli.problem.as_deref())
    else {
        eprintln!("Error: catalog is empty");
        std::process::exit(1);
    };

    log::info!("Motionboard starting with problem '{}'", initial_problem.id);

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Motionboard")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(Playback::new().with_base_cycle_secs(config.base_cycle_secs));
    world.insert_resource(ActiveProblem::new(initial_problem, initial_index));
    world.insert_resource(catalog);
    world.insert_resource(config);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // Observers survive scene rebuilds, so they carry the Persistent marker.
    world.spawn((Observer::new(observe_problem_change), Persistent));
    world.spawn((Observer::new(observe_transport), Persistent));
    // Ensure the observers are registered before any system can trigger events.
    world.flush();

    world.trigger(ProblemChangedEvent {});

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(playback_tick_system.after(update_input_state));
    update.add_systems(scene_layout_system.after(update_input_state));
    update.add_systems(scene_placement_system.after(scene_layout_system).after(playback_tick_system));
    update.add_systems(render_system.after(scene_placement_system));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Track window resizes.
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut screen = world.resource_mut::<ScreenSize>();
            screen.w = new_w;
            screen.h = new_h;
        }
    }
}
