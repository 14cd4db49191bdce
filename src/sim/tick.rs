//! Per-frame update step
//!
//! `tick` advances the whole simulation by one fixed step: bottom-boundary
//! scoring, bounce hysteresis, position integration. Input arrives as
//! discrete messages applied before the tick.

use super::state::{GamePhase, GameState, Outcome};
use crate::consts::*;

/// Banner shown when the last ball is lost
pub const LOSS_MESSAGE: &str = "Game Over! You lost all three balls";
/// Banner shown when the top score is reached
pub const WIN_MESSAGE: &str = "Congratulation! Top score recorded";

/// A single input message, delivered before the update step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    /// Handled by the application loop; a no-op for the simulation
    Quit,
}

/// Apply one input message to the state.
///
/// Paddle moves are clamped by the bar itself; `Quit` is consumed by the
/// app loop and ignored here.
pub fn apply_input(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::MoveLeft => state.bar.move_left(),
        InputEvent::MoveRight => state.bar.move_right(),
        InputEvent::Quit => {}
    }
}

/// Advance the game by one update step.
///
/// Once a run has ended this is a permanent no-op. On the frame the
/// terminal state is entered the bounce and integration steps still run;
/// the guard only stops subsequent frames.
pub fn tick(state: &mut GameState) {
    if state.is_ended() {
        return;
    }

    // Bottom boundary: the same frame either scores or costs a life,
    // never both.
    if state.ball.pos.y <= BALL_MAX_DOWN {
        if state.bar.covers(state.ball.pos.x) {
            state.score += 1;
            state.ball.velocity += VELOCITY_INCREMENT;

            // Level checks are equality-only: a skipped threshold value
            // would silently skip the level-up.
            if state.score == LEVEL_TWO_SCORE {
                state.level += 1;
            } else if state.score == LEVEL_THREE_SCORE {
                state.level += 1;
            } else if state.score == TOP_SCORE {
                state.phase = GamePhase::Ended(Outcome::Won);
                state.final_message = WIN_MESSAGE.to_string();
            }
        } else {
            state.lives -= 1;
            // Restart the ball from the bar, for the player's ease; the
            // ball range is wider than the bar's, so clamp back in.
            state.bar.x = state.ball.pos.x.clamp(BAR_MAX_LEFT, BAR_MAX_RIGHT);
            state.bar.y = BAR_SPAWN_Y;

            if state.lives == 0 {
                state.phase = GamePhase::Ended(Outcome::Lost);
                state.final_message = LOSS_MESSAGE.to_string();
            }
        }
    }

    // Bounce hysteresis: flags flip at the outer limits and persist
    // across frames.
    if state.ball.pos.x > BALL_MAX_RIGHT {
        state.x_descending = true;
    } else if state.ball.pos.x < BALL_MAX_LEFT {
        state.x_descending = false;
    }
    if state.ball.pos.y > BALL_MAX_UP {
        state.y_descending = true;
    } else if state.ball.pos.y < BALL_MAX_DOWN {
        state.y_descending = false;
    }

    // Integrate: shared velocity scales both axis steps.
    let dx = state.ball.step.x * state.ball.velocity;
    state.ball.pos.x += if state.x_descending { -dx } else { dx };
    let dy = state.ball.step.y * state.ball.velocity;
    state.ball.pos.y += if state.y_descending { -dy } else { dy };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// State with the ball on the paddle line at the given x positions.
    fn state_at_bottom(ball_x: f32, bar_x: f32) -> GameState {
        let mut state = GameState::new();
        state.ball.pos.x = ball_x;
        state.ball.pos.y = BALL_MAX_DOWN - 0.05;
        state.bar.x = bar_x;
        state
    }

    #[test]
    fn test_hit_scores_and_speeds_up() {
        let mut state = state_at_bottom(1.0, 0.0);
        tick(&mut state);
        assert_eq!(state.score, 1);
        assert!((state.ball.velocity - 1.1).abs() < 1e-6);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_miss_costs_a_life() {
        let mut state = state_at_bottom(10.0, 0.0);
        tick(&mut state);
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 0);
        assert!((state.ball.velocity - 1.0).abs() < 1e-6);
        // Bar repositioned under the ball, height reset
        assert_eq!(state.bar.x, 10.0);
        assert_eq!(state.bar.y, BAR_SPAWN_Y);
    }

    #[test]
    fn test_edge_touch_is_a_miss() {
        // Ball exactly on the paddle edge: span is (-3, 3) around 0
        let mut state = state_at_bottom(3.0, 0.0);
        tick(&mut state);
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 0);

        let mut state = state_at_bottom(-3.0, 0.0);
        tick(&mut state);
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_miss_reposition_clamps_to_bar_range() {
        // Ball can reach x = 15, the bar cannot
        let mut state = state_at_bottom(14.5, 0.0);
        tick(&mut state);
        assert_eq!(state.bar.x, BAR_MAX_RIGHT);
    }

    #[test]
    fn test_level_up_at_thresholds() {
        let mut state = state_at_bottom(0.0, 0.0);
        state.score = 2;
        tick(&mut state);
        assert_eq!(state.score, 3);
        assert_eq!(state.level, 2);

        let mut state = state_at_bottom(0.0, 0.0);
        state.score = 5;
        state.level = 2;
        tick(&mut state);
        assert_eq!(state.score, 6);
        assert_eq!(state.level, 3);
    }

    #[test]
    fn test_level_checks_are_equality_only() {
        // A hit taking the score past a threshold without landing on it
        // does not bump the level.
        let mut state = state_at_bottom(0.0, 0.0);
        state.score = 3;
        state.level = 2;
        tick(&mut state);
        assert_eq!(state.score, 4);
        assert_eq!(state.level, 2);
    }

    #[test]
    fn test_win_at_top_score() {
        let mut state = state_at_bottom(0.0, 0.0);
        state.score = 8;
        let pos_before = state.ball.pos;
        tick(&mut state);
        assert_eq!(state.score, 9);
        assert_eq!(state.phase, GamePhase::Ended(Outcome::Won));
        assert_eq!(state.final_message, WIN_MESSAGE);
        // The ending frame still integrates the ball
        assert_ne!(state.ball.pos, pos_before);

        // Score and velocity are frozen from the next frame on
        let velocity = state.ball.velocity;
        tick(&mut state);
        assert_eq!(state.score, 9);
        assert_eq!(state.ball.velocity, velocity);
    }

    #[test]
    fn test_loss_on_last_life() {
        let mut state = state_at_bottom(10.0, 0.0);
        state.lives = 1;
        tick(&mut state);
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Ended(Outcome::Lost));
        assert_eq!(state.final_message, LOSS_MESSAGE);
    }

    #[test]
    fn test_ended_state_is_frozen() {
        let mut state = state_at_bottom(10.0, 0.0);
        state.lives = 1;
        tick(&mut state);
        assert!(state.is_ended());

        let snapshot = state.clone();
        for _ in 0..50 {
            tick(&mut state);
        }
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_integration_moves_both_axes() {
        let mut state = GameState::new();
        tick(&mut state);
        assert!((state.ball.pos.x - 0.1).abs() < 1e-6);
        assert!((state.ball.pos.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_hysteresis_has_no_interior_oscillation() {
        let mut state = GameState::new();
        state.ball.pos.x = BALL_MAX_RIGHT + 0.05;
        state.ball.pos.y = 0.0;

        // First frame past the limit flips the direction flag
        tick(&mut state);
        assert!(state.x_descending);

        // Direction stays decreasing on every subsequent frame while the
        // ball remains above the negative limit.
        for _ in 0..40 {
            let x_before = state.ball.pos.x;
            tick(&mut state);
            assert!(state.x_descending);
            assert!(state.ball.pos.x < x_before);
            assert!(state.ball.pos.x > BALL_MAX_LEFT);
        }
    }

    #[test]
    fn test_first_bottom_crossing_scenario() {
        // Perfect play: keep the bar under the ball every frame and run
        // until the ball first reaches the paddle line.
        let mut state = GameState::new();
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.ball.velocity, 1.0);

        for _ in 0..10_000 {
            state.bar.x = state.ball.pos.x.clamp(BAR_MAX_LEFT, BAR_MAX_RIGHT);
            tick(&mut state);
            if state.score > 0 {
                break;
            }
        }

        assert_eq!(state.score, 1);
        assert!((state.ball.velocity - 1.1).abs() < 1e-6);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_apply_input_moves_only_the_bar() {
        let mut state = GameState::new();
        apply_input(&mut state, InputEvent::MoveRight);
        assert_eq!(state.bar.x, 0.5);
        apply_input(&mut state, InputEvent::MoveLeft);
        apply_input(&mut state, InputEvent::MoveLeft);
        assert_eq!(state.bar.x, -0.5);

        let snapshot = state.clone();
        apply_input(&mut state, InputEvent::Quit);
        assert_eq!(state, snapshot);
    }

    proptest! {
        #[test]
        fn prop_bar_stays_clamped(moves in proptest::collection::vec(any::<bool>(), 0..500)) {
            let mut state = GameState::new();
            for right in moves {
                let event = if right {
                    InputEvent::MoveRight
                } else {
                    InputEvent::MoveLeft
                };
                apply_input(&mut state, event);
                prop_assert!(state.bar.x >= BAR_MAX_LEFT);
                prop_assert!(state.bar.x <= BAR_MAX_RIGHT);
            }
        }
    }
}
