/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    ///
    /// The grid's y axis grows downwards, so `Up` decrements y.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Backend-independent input signal
///
/// Input layers (terminal keys, scripted tests) translate whatever they
/// receive into one of these before the game sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The designated start key
    Start,
    /// A direction key
    Turn(Direction),
}

impl From<Direction> for InputEvent {
    fn from(direction: Direction) -> Self {
        InputEvent::Turn(direction)
    }
}

/// What the game should do in response to an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a new run
    Start,
    /// Change the buffered direction for the next step
    Turn(Direction),
}

/// Resolve an input event against the running flag.
///
/// Start is only honoured while idle, turns only while running. Anything
/// else is dropped.
pub fn resolve(event: InputEvent, running: bool) -> Option<Command> {
    match (event, running) {
        (InputEvent::Start, false) => Some(Command::Start),
        (InputEvent::Turn(direction), true) => Some(Command::Turn(direction)),
        _ => None,
    }
}
