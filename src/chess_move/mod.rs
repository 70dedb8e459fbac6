pub mod castle;
pub mod chess_move;
pub mod factory;
pub mod pawn_promotion;
pub mod standard;

pub use castle::CastleChessMove;
pub use chess_move::ChessMove;
pub use factory::MoveFactory;
pub use pawn_promotion::PawnPromotionChessMove;
pub use standard::StandardChessMove;
