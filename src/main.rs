use anyhow::Result;
use clap::Parser;
use log::{debug, error, info};
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use crate::core::{Dice, RandomDice};
use crate::engine::game_loop::GameLoop;
use crate::engine::input::InputManager;
use crate::engine::physics::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::engine::renderer::Renderer;
use crate::game::scene::draw_frame;
use crate::game::session::{Session, SessionEvent};
use crate::game::variant::{ClientVariant, VariantConfig};

#[derive(Parser, Debug)]
#[command(name = "paper-saga")]
#[command(about = "Paper-craft platformer RPG with timed turn-based battles")]
struct Args {
    /// Which client to run
    #[arg(long, value_enum, default_value_t = ClientVariant::Enhanced)]
    variant: ClientVariant,

    /// Seed the dice for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Paper Saga...");

    let dice: Box<dyn Dice> = match args.seed {
        Some(seed) => {
            info!("Using seed {seed}");
            Box::new(RandomDice::seeded(seed))
        }
        None => Box::new(RandomDice::from_entropy()),
    };
    let mut session = Some(Session::new(VariantConfig::new(args.variant), dice)?);

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Paper Saga")
            .with_inner_size(winit::dpi::LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => renderer.resize(physical_size),
                WindowEvent::Focused(false) => input.focus_lost(),
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                }
                WindowEvent::RedrawRequested => {
                    let Some(current) = session.as_mut() else {
                        return;
                    };

                    for _ in 0..game_loop.begin_frame() {
                        current.tick(input.player());
                        input.update();
                        if current.restart_requested() {
                            break;
                        }
                    }

                    if current.restart_requested() {
                        session = match session.take().map(Session::reset) {
                            Some(Ok(fresh)) => Some(fresh),
                            Some(Err(err)) => {
                                error!("Could not restart: {err}");
                                elwt.exit();
                                return;
                            }
                            None => None,
                        };
                    }

                    let Some(current) = session.as_mut() else {
                        return;
                    };
                    for event in current.drain_events() {
                        match event {
                            SessionEvent::Music { track, content } => {
                                info!("Now playing: {track} ({content:?})");
                            }
                        }
                    }

                    if game_loop.frame_count() % 600 == 0 {
                        debug!(
                            "{:.0} fps, {} ticks",
                            game_loop.fps(),
                            game_loop.tick_count()
                        );
                    }

                    let view = current.view();
                    let batch = draw_frame(&view);
                    if let Err(err) = renderer.render(view.background, &batch) {
                        error!("Render failed: {err}");
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
