use thiserror::Error;

/// Rejections raised while decoding the integer codes used on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("invalid disc code {0}, expected 1 (black) or 2 (white)")]
    InvalidDisc(u8),
    #[error("invalid cell code {0}, expected 0 (empty), 1 (black) or 2 (white)")]
    InvalidCell(u8),
    #[error("invalid winner code {0}, expected 0 (tie), 1 (black) or 2 (white)")]
    InvalidWinner(u8),
    #[error("coordinate ({row}, {col}) is outside the 8x8 board")]
    CoordOutOfRange { row: u8, col: u8 },
}
