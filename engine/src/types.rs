#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// Signed cell value used by line sums: X = +1, O = -1, Empty = 0.
    pub fn value(&self) -> i8 {
        match self {
            Mark::Empty => 0,
            Mark::X => 1,
            Mark::O => -1,
        }
    }

    pub fn from_value(value: i8) -> Option<Mark> {
        match value {
            0 => Some(Mark::Empty),
            1 => Some(Mark::X),
            -1 => Some(Mark::O),
            _ => None,
        }
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            Mark::X => Some(Side::X),
            Mark::O => Some(Side::O),
            Mark::Empty => None,
        }
    }

    pub fn opponent(&self) -> Option<Mark> {
        self.side().map(|side| side.opponent().mark())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    X,
    O,
}

impl Side {
    pub fn sign(&self) -> i8 {
        match self {
            Side::X => 1,
            Side::O => -1,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::X => write!(f, "X"),
            Side::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    XWins,
    OWins,
    Draw,
    /// The contained side made an illegal move and lost the game.
    Forfeit(Side),
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::XWins => Some(Side::X),
            GameOutcome::OWins => Some(Side::O),
            GameOutcome::Forfeit(side) => Some(side.opponent()),
            GameOutcome::Ongoing | GameOutcome::Draw => None,
        }
    }

    pub fn win_for(side: Side) -> Self {
        match side {
            Side::X => GameOutcome::XWins,
            Side::O => GameOutcome::OWins,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "in progress"),
            GameOutcome::XWins => write!(f, "X wins"),
            GameOutcome::OWins => write!(f, "O wins"),
            GameOutcome::Draw => write!(f, "draw"),
            GameOutcome::Forfeit(side) => write!(f, "{} forfeits", side),
        }
    }
}
