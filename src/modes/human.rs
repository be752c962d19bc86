use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::backend::CrosstermBackend;
use std::io::{Stderr, stderr};

use crate::game::{Command, GameConfig, GameEngine, GameState, InputEvent, TickOutcome, format_score};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Draw, TerminalView};
use crate::schedule::Ticker;

type CrosstermView = TerminalView<CrosstermBackend<Stderr>>;

/// An interactive session: keyboard in, one ticker driving the game, a view out
pub struct HumanMode<V: Draw> {
    engine: GameEngine,
    state: GameState,
    ticker: Ticker,
    metrics: GameMetrics,
    view: V,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode<CrosstermView> {
    /// Take over the terminal, play until the player quits, then restore it
    pub async fn run(config: GameConfig) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        if let Err(err) = execute!(stderr, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("Failed to enter alternate screen");
        }

        let result = match TerminalView::new(CrosstermBackend::new(stderr)) {
            Ok(view) => {
                let mut mode = HumanMode::new(config, view);

                let mut result = mode.prepare_terminal();
                if result.is_ok() {
                    result = mode.run_game_loop().await;
                }

                // Restore the terminal even if the loop failed
                let cleanup = mode.cleanup_terminal();
                result.and(cleanup)
            }
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(std::io::stderr(), LeaveAlternateScreen);
                Err(err)
            }
        };

        info!("Session ended");
        result
    }

    fn prepare_terminal(&mut self) -> Result<()> {
        let terminal = self.view.terminal_mut();
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        Ok(())
    }

    async fn run_game_loop(&mut self) -> Result<()> {
        let mut event_stream = EventStream::new();

        self.redraw()?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event)?,
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick; pends while no run is in progress
                _ = self.ticker.tick() => {
                    self.update_game()?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn cleanup_terminal(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        let terminal = self.view.terminal_mut();
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl<V: Draw> HumanMode<V> {
    pub fn new(config: GameConfig, view: V) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.new_state();

        info!("New session on a {0}x{0} grid", state.grid_size);

        Self {
            engine,
            state,
            ticker: Ticker::new(),
            metrics: GameMetrics::new(),
            view,
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(_, _) => self.redraw(),
            _ => Ok(()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Game(event) => self.handle_input(event),
            KeyAction::Quit => {
                self.should_quit = true;
                Ok(())
            }
            KeyAction::None => Ok(()),
        }
    }

    fn handle_input(&mut self, event: InputEvent) -> Result<()> {
        match self.engine.apply_input(&mut self.state, event) {
            Some(Command::Start) => {
                self.ticker.start(self.state.speed.as_duration());
                self.metrics.on_game_start();
                info!("Game started");
                self.redraw()
            }
            // Takes effect on the next tick
            Some(Command::Turn(direction)) => {
                debug!("Direction buffered: {:?}", direction);
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn update_game(&mut self) -> Result<()> {
        match self.engine.tick(&mut self.state) {
            TickOutcome::Idle => self.ticker.stop(),
            TickOutcome::Moved => {}
            TickOutcome::Ate { speed } => self.ticker.reschedule(speed.as_duration()),
            TickOutcome::GameOver { collision, score } => {
                self.ticker.stop();
                self.metrics.on_game_over();
                info!(
                    "Game over ({:?}): score {}, high score {}",
                    collision,
                    format_score(score),
                    format_score(self.state.high_score)
                );
            }
        }

        self.redraw()
    }

    fn redraw(&mut self) -> Result<()> {
        self.metrics.update();
        self.view.draw(&self.state, &self.metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position, Snake, TickInterval};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::time::Duration;
    use tokio::time::Instant;

    /// Keeps a copy of every frame it is asked to draw
    #[derive(Default)]
    struct RecordingView {
        frames: Vec<GameState>,
    }

    impl Draw for RecordingView {
        fn draw(&mut self, state: &GameState, _metrics: &GameMetrics) -> Result<()> {
            self.frames.push(state.clone());
            Ok(())
        }
    }

    fn mode() -> HumanMode<RecordingView> {
        HumanMode::new(GameConfig::default(), RecordingView::default())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert!(!mode.state.running);
        assert_eq!(mode.state.score(), 0);
        assert_eq!(mode.state.snake.body, vec![Position::new(10, 10)]);
        assert!(!mode.ticker.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_space_starts_ticker_at_current_speed() {
        let mut mode = mode();

        mode.handle_event(key(KeyCode::Char(' '))).unwrap();

        assert!(mode.state.running);
        assert_eq!(mode.ticker.period(), Some(Duration::from_millis(200)));
        assert_eq!(mode.view.frames.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_start_is_ignored() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Char(' '))).unwrap();
        mode.state.speed = TickInterval::from_millis(120);

        mode.handle_event(key(KeyCode::Char(' '))).unwrap();

        // Ticker was not restarted with the new speed
        assert_eq!(mode.ticker.period(), Some(Duration::from_millis(200)));
        assert_eq!(mode.view.frames.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_turns_ignored_until_started() {
        let mut mode = mode();

        mode.handle_event(key(KeyCode::Up)).unwrap();
        assert_eq!(mode.state.direction, Direction::Right);

        mode.handle_event(key(KeyCode::Char(' '))).unwrap();
        mode.handle_event(key(KeyCode::Up)).unwrap();
        assert_eq!(mode.state.direction, Direction::Up);
    }

    #[tokio::test(start_paused = true)]
    async fn test_key_release_ignored() {
        let mut mode = mode();
        let release = KeyEvent::new_with_kind(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );

        mode.handle_event(Event::Key(release)).unwrap();

        assert!(!mode.state.running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_follow_the_ticker() {
        let mut mode = mode();
        mode.state.food = Position::new(1, 1);
        let started = Instant::now();
        mode.handle_event(key(KeyCode::Char(' '))).unwrap();

        mode.ticker.tick().await;
        mode.update_game().unwrap();

        assert_eq!(started.elapsed(), Duration::from_millis(200));
        assert_eq!(mode.state.snake.head(), Position::new(11, 10));
        assert_eq!(mode.view.frames.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_eating_reschedules_ticker() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Char(' '))).unwrap();
        mode.state.food = Position::new(11, 10);

        mode.update_game().unwrap();

        assert_eq!(mode.state.score(), 1);
        assert_eq!(mode.ticker.period(), Some(Duration::from_millis(195)));
        assert!(mode.ticker.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_game_over_stops_ticker() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Char(' '))).unwrap();
        mode.state.snake =
            Snake::from_segments(vec![Position::new(1, 10), Position::new(2, 10)]).unwrap();
        mode.state.direction = Direction::Left;
        mode.state.food = Position::new(15, 15);

        mode.update_game().unwrap();

        assert!(!mode.state.running);
        assert!(!mode.ticker.is_active());
        assert_eq!(mode.metrics.games_played, 1);
        assert_eq!(mode.state.high_score, 1);
        assert_eq!(mode.state.score(), 0);

        let last = mode.view.frames.last().unwrap();
        assert_eq!(last.snake.body, vec![Position::new(10, 10)]);
        assert_eq!(format_score(last.score()), "000");
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_game_over() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Char(' '))).unwrap();
        mode.state.snake = Snake::new(Position::new(20, 5));
        mode.update_game().unwrap();
        assert!(!mode.state.running);

        mode.handle_event(key(KeyCode::Char(' '))).unwrap();

        assert!(mode.state.running);
        assert_eq!(mode.ticker.period(), Some(TickInterval::INITIAL.as_duration()));
    }

    #[test]
    fn test_quit_key() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Char('q'))).unwrap();
        assert!(mode.should_quit);
    }
}
