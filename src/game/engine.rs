use super::{
    action::{Command, Direction, InputEvent, resolve},
    config::GameConfig,
    speed::TickInterval,
    state::{CollisionType, GameState, Position, Snake},
};
use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

/// Result of moving the snake one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Plain move, length unchanged
    Moved,
    /// The head landed on the food; the ticker must run at `speed` from now on
    Ate { speed: TickInterval },
}

/// Result of one ticker firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed
    Idle,
    Moved,
    Ate { speed: TickInterval },
    /// The run ended and the state was reset
    GameOver {
        collision: CollisionType,
        score: u32,
    },
}

/// The game engine that handles all game logic
pub struct GameEngine<R: Rng = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The state the game is in when first loaded
    pub fn new_state(&mut self) -> GameState {
        let snake = Snake::new(self.config.start_position());
        let food = self.spawn_food(&snake);

        GameState::new(snake, food, self.config.grid_size)
    }

    /// Begin a run. Returns false if one is already in progress.
    pub fn start(&mut self, state: &mut GameState) -> bool {
        if state.running {
            return false;
        }

        state.running = true;
        true
    }

    /// Buffer a direction for the next step. The latest call wins.
    pub fn turn(&mut self, state: &mut GameState, direction: Direction) {
        state.direction = direction;
    }

    /// Resolve an input event and apply it to the state.
    ///
    /// Returns the command that took effect, if any, so the caller can
    /// start its ticker on [`Command::Start`].
    pub fn apply_input(&mut self, state: &mut GameState, event: InputEvent) -> Option<Command> {
        let command = resolve(event, state.running)?;

        match command {
            Command::Start => {
                self.start(state);
            }
            Command::Turn(direction) => self.turn(state, direction),
        }

        Some(command)
    }

    /// Advance the snake one cell in the buffered direction
    pub fn step(&mut self, state: &mut GameState) -> StepOutcome {
        let ate_food = state.snake.head().moved_in_direction(state.direction) == state.food;

        state.snake.advance(state.direction, ate_food);

        if !ate_food {
            return StepOutcome::Moved;
        }

        state.food = self.spawn_food(&state.snake);
        state.speed = state.speed.accelerated();

        debug!(
            "Food eaten at ({}, {}), length {}, interval {}ms",
            state.snake.head().x,
            state.snake.head().y,
            state.snake.len(),
            state.speed.as_millis()
        );

        StepOutcome::Ate { speed: state.speed }
    }

    /// Check the current head against the walls, then against the body
    pub fn check_collision(&self, state: &GameState) -> Option<CollisionType> {
        let head = state.snake.head();

        if !state.is_in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        if state.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// End the current run and restore the initial configuration.
    ///
    /// The high score is kept and raised if the finished run beat it.
    /// Returns the score of the finished run.
    pub fn reset(&mut self, state: &mut GameState) -> u32 {
        let score = state.score();
        state.high_score = state.high_score.max(score);

        state.running = false;
        state.snake = Snake::new(self.config.start_position());
        state.food = self.spawn_food(&state.snake);
        state.direction = Direction::Right;
        state.speed = TickInterval::INITIAL;

        score
    }

    /// One ticker firing: step, collision check, reset on collision
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if !state.running {
            return TickOutcome::Idle;
        }

        let step = self.step(state);

        if let Some(collision) = self.check_collision(state) {
            let score = self.reset(state);
            return TickOutcome::GameOver { collision, score };
        }

        match step {
            StepOutcome::Moved => TickOutcome::Moved,
            StepOutcome::Ate { speed } => TickOutcome::Ate { speed },
        }
    }

    /// Pick a food cell uniformly among the cells the snake does not cover
    fn spawn_food(&mut self, snake: &Snake) -> Position {
        let size = self.config.grid_size;
        let free: Vec<Position> = (1..=size)
            .flat_map(|y| (1..=size).map(move |x| Position::new(x, y)))
            .filter(|pos| !snake.occupies(*pos))
            .collect();

        match free.choose(&mut self.rng) {
            Some(pos) => *pos,
            // Board is full; the next step collides whatever we pick
            None => Position::new(
                self.rng.gen_range(1..=size),
                self.rng.gen_range(1..=size),
            ),
        }
    }
}
