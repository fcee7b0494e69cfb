//! Brick Break entry point
//!
//! Runs a headless session against the built-in physics pass: the paddle
//! tracks the ball and a new ball is launched whenever none is in play.
//!
//! Usage: `brick-break [tuning.json] [seed]`

use std::path::Path;

use brick_break::Tuning;
use brick_break::renderer::render;
use brick_break::renderer::shapes::frame_vertices;
use brick_break::sim::{ButtonEdge, GameEvent, GameState, TickInput, tick};

/// Three minutes at 60 fps
const SESSION_FRAMES: u64 = 60 * 60 * 3;

fn main() {
    env_logger::init();
    log::info!("Brick Break (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = args
        .next()
        .map(|path| Tuning::load_or_default(Path::new(&path)))
        .unwrap_or_default();
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);

    let mut state = GameState::with_tuning(seed, tuning);
    let mut button = ButtonEdge::default();
    let mut balls_launched = 0u32;

    for frame in 0..SESSION_FRAMES {
        // Tap the button (down one frame, up the next) while no ball is in play
        let held = state.ball.is_none() && frame % 2 == 0;
        let input = TickInput {
            pointer_x: autopilot_x(&state, frame),
            press_edge: button.update(held),
        };
        tick(&mut state, &input);

        for event in state.drain_events() {
            match event {
                GameEvent::BallSpawned { .. } => balls_launched += 1,
                GameEvent::Explosion(burst) => {
                    log::trace!("Explosion at {:?} ({} particles)", burst.pos, burst.particle_count())
                }
                GameEvent::Sound(req) => log::trace!("Sound {:?} pitch {:.3}", req.effect, req.pitch),
                _ => {}
            }
        }

        if state.bricks_remaining() == 0 {
            log::info!("Level cleared at frame {}", frame);
            break;
        }
    }

    let frame = render(&state);
    log::info!(
        "Final frame: {} draw commands, {} vertices",
        frame.commands.len(),
        frame_vertices(&frame).len()
    );
    println!(
        "Score {} after {} frames ({} balls, {} bricks left)",
        state.score.read(),
        state.frame,
        balls_launched,
        state.bricks_remaining()
    );
}

/// Follow the ball with a slow sweep so hits land off-center and steer it
fn autopilot_x(state: &GameState, frame: u64) -> Option<f32> {
    let ball = state.registry.get(state.ball?)?;
    let t = frame as f32 * 0.01;
    let offset = t.sin() * 1.5 + (t * 0.7).sin() * 0.75;
    Some(ball.pos.x + offset)
}
