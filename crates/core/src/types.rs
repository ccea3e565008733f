use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbor expansion order used by the pathfinder.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Wall,
    Player,
    Bot,
}

/// Which rule of the pursuit policy produced a bot's step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyBranch {
    AdjacentChase,
    DeferToAlly,
    PathStep { path_len: u32 },
    Unreachable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotDecision {
    pub branch: PolicyBranch,
    /// `None` means the bot stands still this tick.
    pub step: Option<Direction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotMove {
    pub bot: usize,
    pub decision: BotDecision,
    pub moved: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Caught { bot: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickResult {
    pub tick: u64,
    pub player_moved: bool,
    /// True when the cadence gate opened and every bot was offered a move.
    pub bots_acted: bool,
    pub bot_moves: Vec<BotMove>,
    pub outcome: Option<RunOutcome>,
}

impl TickResult {
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    PlayerMoved { from: Pos, to: Pos },
    PolicyChosen { bot: usize, branch: PolicyBranch },
    BotMoved { bot: usize, from: Pos, to: Pos },
    PlayerCaught { bot: usize, tick: u64 },
}
