use anyhow::{Context, Result};
use ratatui::{Terminal, backend::Backend};

use super::Renderer;
use crate::game::GameState;
use crate::metrics::GameMetrics;

/// Anything that can show the current game state
pub trait Draw {
    fn draw(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()>;
}

/// A [`Draw`] implementation backed by a ratatui terminal
pub struct TerminalView<B: Backend> {
    terminal: Terminal<B>,
    renderer: Renderer,
}

impl<B: Backend> TerminalView<B> {
    pub fn new(backend: B) -> Result<Self> {
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        Ok(Self {
            terminal,
            renderer: Renderer::new(),
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Draw for TerminalView<B> {
    fn draw(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()> {
        let renderer = &self.renderer;
        self.terminal
            .draw(|frame| renderer.render(frame, state, metrics))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig, GameEngine, Position, Snake};
    use crate::render::renderer::{BODY_GLYPH, FOOD_GLYPH, HEAD_GLYPH};
    use ratatui::backend::TestBackend;

    fn screen(view: &mut TerminalView<TestBackend>) -> String {
        view.terminal_mut()
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn view() -> TerminalView<TestBackend> {
        TerminalView::new(TestBackend::new(80, 32)).unwrap()
    }

    #[test]
    fn test_idle_screen_hides_food() {
        let mut engine = GameEngine::new(GameConfig::default());
        let state = engine.new_state();
        let mut view = view();

        view.draw(&state, &GameMetrics::new()).unwrap();
        let text = screen(&mut view);

        assert!(text.contains("Score: 000"));
        assert!(text.contains("High: 000"));
        assert!(text.contains("SPACE"));
        assert!(text.contains(HEAD_GLYPH.trim()));
        assert!(!text.contains(FOOD_GLYPH.trim()));
    }

    #[test]
    fn test_running_screen_shows_food_and_body() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.new_state();
        engine.start(&mut state);
        state.snake = Snake::from_segments(vec![
            Position::new(5, 5),
            Position::new(4, 5),
            Position::new(3, 5),
            Position::new(2, 5),
            Position::new(1, 5),
            Position::new(1, 6),
            Position::new(1, 7),
            Position::new(1, 8),
        ])
        .unwrap();
        state.food = Position::new(15, 15);
        state.direction = Direction::Right;
        let mut view = view();

        view.draw(&state, &GameMetrics::new()).unwrap();
        let text = screen(&mut view);

        assert!(text.contains("Score: 007"));
        assert!(text.contains(FOOD_GLYPH.trim()));
        assert!(text.contains(BODY_GLYPH.trim()));
        assert!(text.contains("WASD"));
    }

    #[test]
    fn test_high_score_shown_after_reset() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.new_state();
        state.snake = Snake::from_segments(vec![Position::new(3, 3), Position::new(3, 4)]).unwrap();
        engine.reset(&mut state);
        let mut view = view();

        view.draw(&state, &GameMetrics::new()).unwrap();
        let text = screen(&mut view);

        assert!(text.contains("Score: 000"));
        assert!(text.contains("High: 001"));
        assert!(text.contains("Best 001"));
    }
}
