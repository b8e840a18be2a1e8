#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    #[display("illegal move at position {position}")]
    IllegalMove { position: usize },
    #[display("player passed instead of moving")]
    NoMove,
    #[display("board is full")]
    BoardFull,
    #[display("both sides completed a line; turns were not alternated")]
    UnreachableState,
    #[display("state id {id} is outside the encodable range")]
    InvalidStateId { id: u32 },
    #[display("game is already over")]
    GameOver,
}
