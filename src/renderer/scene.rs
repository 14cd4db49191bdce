//! Frame description built from game state
//!
//! Pure read of the simulation: produces the vertex list and clear color
//! for one frame. While playing this is the HUD line, the ball and both
//! bars; once the run has ended it is nothing but the banner over the
//! changed background.

use glam::Vec3;

use crate::consts::SCENE_DEPTH;
use crate::sim::{GamePhase, GameState, Outcome};

use super::shapes;
use super::text;
use super::vertex::{Vertex, colors};

/// Sphere tessellation for the ball
const BALL_SLICES: u32 = 20;
const BALL_STACKS: u32 = 20;

/// Raster position of the HUD line (top-left of the playfield)
const HUD_ORIGIN: Vec3 = Vec3::new(-15.0, 10.75, SCENE_DEPTH);
/// Raster position of the end-of-game banner
const BANNER_ORIGIN: Vec3 = Vec3::new(-7.0, 0.0, SCENE_DEPTH);

/// Build the vertex list and clear color for the current frame
pub fn build_frame(state: &GameState) -> (Vec<Vertex>, wgpu::Color) {
    match state.phase {
        GamePhase::Playing => (playing_frame(state), colors::BACKGROUND),
        GamePhase::Ended(Outcome::Won) => (
            text::text_line(&state.final_message, BANNER_ORIGIN, colors::WIN_TEXT),
            colors::WIN_BACKGROUND,
        ),
        GamePhase::Ended(Outcome::Lost) => (
            text::text_line(&state.final_message, BANNER_ORIGIN, colors::LOSS_TEXT),
            colors::LOSS_BACKGROUND,
        ),
    }
}

fn playing_frame(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    let hud = format!(
        "Level {} - Score {} - Lives {}",
        state.level, state.score, state.lives
    );
    vertices.extend(text::text_line(&hud, HUD_ORIGIN, colors::HUD_TEXT));

    vertices.extend(shapes::sphere(
        Vec3::new(state.ball.pos.x, state.ball.pos.y, SCENE_DEPTH),
        state.ball.radius,
        colors::BALL,
        BALL_SLICES,
        BALL_STACKS,
    ));

    for bar in [&state.bar, &state.top_bar] {
        vertices.extend(shapes::quad(
            bar.x,
            bar.y,
            SCENE_DEPTH,
            bar.w,
            bar.h,
            colors::BAR_CORNERS,
        ));
    }

    vertices
}
