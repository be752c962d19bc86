use super::action::Direction;
use super::speed::TickInterval;

/// A cell on the game grid, 1-indexed on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    pub body: Vec<Position>,
}

impl Snake {
    /// A single-segment snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_segments(body: Vec<Position>) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Push a new head one cell in `direction`; drop the tail unless growing
    pub fn advance(&mut self, direction: Direction, grow: bool) -> Position {
        let new_head = self.head().moved_in_direction(direction);
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }

        new_head
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false for a snake built through the public constructors
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the grid
    Wall,
    /// Head ran into another segment
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Direction applied on the next step
    pub direction: Direction,
    pub speed: TickInterval,
    pub running: bool,
    /// Best score of the session; never decreases
    pub high_score: u32,
    pub grid_size: i32,
}

impl GameState {
    /// A fresh idle state with the given snake and food
    pub fn new(snake: Snake, food: Position, grid_size: i32) -> Self {
        Self {
            snake,
            food,
            direction: Direction::Right,
            speed: TickInterval::INITIAL,
            running: false,
            high_score: 0,
            grid_size,
        }
    }

    /// Current score, derived from the snake's length
    pub fn score(&self) -> u32 {
        (self.snake.len() - 1) as u32
    }

    /// Check if a position is within `1..=grid_size` on both axes
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        (1..=self.grid_size).contains(&pos.x) && (1..=self.grid_size).contains(&pos.y)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }
}

/// Format a score the way the score display shows it: at least three digits
pub fn format_score(score: u32) -> String {
    format!("{:03}", score)
}
