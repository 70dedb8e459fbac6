use core::fmt;
use std::hash::{Hash, Hasher};

use common::coordinate::Coordinate;

use crate::board::{Board, BoardError, Piece};

use super::castle::CastleChessMove;
use super::pawn_promotion::PawnPromotionChessMove;
use super::standard::StandardChessMove;

/// Every move a piece can make. Moves are plain values describing a
/// transition; they never hold the board they were generated on, so the same
/// move can be replayed against any board that still has the moved piece in
/// place.
#[derive(Clone)]
pub enum ChessMove {
    /// A quiet move by a knight, bishop, rook, queen or king
    Major(StandardChessMove),
    /// A king taking a piece
    Attack(StandardChessMove),
    /// A knight, bishop, rook or queen taking a piece
    MajorAttack(StandardChessMove),
    /// A single step forward
    Pawn(StandardChessMove),
    /// A double step from the start rank
    PawnJump(StandardChessMove),
    /// A diagonal pawn capture
    PawnAttack(StandardChessMove),
    /// A diagonal pawn capture of the pawn that just jumped past
    PawnEnPassantAttack(StandardChessMove),
    PawnPromotion(PawnPromotionChessMove),
    KingSideCastle(CastleChessMove),
    QueenSideCastle(CastleChessMove),
    /// Sentinel for "no such move"; remembers the squares that were asked
    /// for. It cannot be executed.
    Null { from: Coordinate, to: Coordinate },
}

macro_rules! delegate_to_standard_variants {
    ($self:ident, $m:ident => $body:expr, $($other:pat => $other_body:expr),* $(,)?) => {
        match $self {
            ChessMove::Major($m)
            | ChessMove::Attack($m)
            | ChessMove::MajorAttack($m)
            | ChessMove::Pawn($m)
            | ChessMove::PawnJump($m)
            | ChessMove::PawnAttack($m)
            | ChessMove::PawnEnPassantAttack($m) => $body,
            $($other => $other_body,)*
        }
    };
}

impl ChessMove {
    /// The null move asked for when nothing moves from `from` to `to`.
    pub fn null(from: Coordinate, to: Coordinate) -> Self {
        ChessMove::Null { from, to }
    }

    /// The piece being moved, in its pre-move state. For a castle this is
    /// the king.
    pub fn moved_piece(&self) -> Option<&Piece> {
        delegate_to_standard_variants!(self, m => Some(m.piece()),
            ChessMove::PawnPromotion(m) => m.inner().moved_piece(),
            ChessMove::KingSideCastle(m) | ChessMove::QueenSideCastle(m) => Some(m.king()),
            ChessMove::Null { .. } => None,
        )
    }

    pub fn source(&self) -> Coordinate {
        delegate_to_standard_variants!(self, m => m.from_square(),
            ChessMove::PawnPromotion(m) => m.inner().source(),
            ChessMove::KingSideCastle(m) | ChessMove::QueenSideCastle(m) => m.from_square(),
            ChessMove::Null { from, .. } => *from,
        )
    }

    pub fn destination(&self) -> Coordinate {
        delegate_to_standard_variants!(self, m => m.to_square(),
            ChessMove::PawnPromotion(m) => m.to_square(),
            ChessMove::KingSideCastle(m) | ChessMove::QueenSideCastle(m) => m.to_square(),
            ChessMove::Null { to, .. } => *to,
        )
    }

    pub fn attacked_piece(&self) -> Option<&Piece> {
        delegate_to_standard_variants!(self, m => m.capture(),
            ChessMove::PawnPromotion(m) => m.inner().attacked_piece(),
            ChessMove::KingSideCastle(_) | ChessMove::QueenSideCastle(_) => None,
            ChessMove::Null { .. } => None,
        )
    }

    /// The rook that moves alongside the king, for castles.
    pub fn castle_rook(&self) -> Option<&Piece> {
        match self {
            ChessMove::KingSideCastle(m) | ChessMove::QueenSideCastle(m) => Some(m.rook()),
            _ => None,
        }
    }

    pub fn is_attack(&self) -> bool {
        self.attacked_piece().is_some()
    }

    pub fn is_castling_move(&self) -> bool {
        matches!(self, ChessMove::KingSideCastle(_) | ChessMove::QueenSideCastle(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ChessMove::Null { .. })
    }

    /// Builds the board that results from playing this move on `board`,
    /// with the opponent of the moved piece to move next. Legality is not
    /// checked here; see `Player::make_move`.
    pub fn execute(&self, board: &Board) -> Result<Board, BoardError> {
        match self {
            ChessMove::Null { .. } => Err(BoardError::NullMoveExecution),
            ChessMove::PawnPromotion(m) => m.execute(board),
            ChessMove::KingSideCastle(m) | ChessMove::QueenSideCastle(m) => {
                m.execute(board, m.king().move_piece(self))
            }
            ChessMove::PawnJump(m) => {
                let landed = m.piece().move_piece(self);
                m.execute(board, landed, Some(landed))
            }
            ChessMove::Major(m)
            | ChessMove::Attack(m)
            | ChessMove::MajorAttack(m)
            | ChessMove::Pawn(m)
            | ChessMove::PawnAttack(m)
            | ChessMove::PawnEnPassantAttack(m) => {
                m.execute(board, m.piece().move_piece(self), None)
            }
        }
    }

    fn identity(&self) -> (Option<&Piece>, Coordinate, Coordinate, Option<&Piece>, Option<&Piece>) {
        (
            self.moved_piece(),
            self.source(),
            self.destination(),
            self.attacked_piece(),
            self.castle_rook(),
        )
    }
}

/// Builds the board that follows `moved` leaving its square: every piece on
/// `board` except `removed`, plus `placed`, with `moved`'s opponent to move.
pub(super) fn successor_board(
    board: &Board,
    moved: &Piece,
    removed: &[Piece],
    placed: &[Piece],
    en_passant_pawn: Option<Piece>,
) -> Result<Board, BoardError> {
    if board.piece_at(moved.position()) != Some(moved) {
        return Err(BoardError::PieceNotOnBoard {
            position: moved.position(),
        });
    }

    let pieces = board
        .all_pieces()
        .filter(|piece| !removed.contains(piece))
        .copied()
        .chain(placed.iter().copied());

    Board::new(pieces, moved.alliance().opposite(), en_passant_pawn)
}

/// Two moves are equal when they move the same piece between the same
/// squares taking the same piece; the variant itself is not compared.
impl PartialEq for ChessMove {
    fn eq(&self, other: &ChessMove) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

/// Short algebraic notation without disambiguation or check markers:
/// `Nf3`, `Qxh4`, `e4`, `exd5`, `e8=Q`, `O-O`, `O-O-O`, and `--` for the
/// null move.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessMove::Major(m) => write!(f, "{}{}", m.piece().kind(), m.to_square()),
            ChessMove::Attack(m) | ChessMove::MajorAttack(m) => {
                write!(f, "{}x{}", m.piece().kind(), m.to_square())
            }
            ChessMove::Pawn(m) | ChessMove::PawnJump(m) => write!(f, "{}", m.to_square()),
            ChessMove::PawnAttack(m) | ChessMove::PawnEnPassantAttack(m) => {
                let file = &m.from_square().to_algebraic()[..1];
                write!(f, "{}x{}", file, m.to_square())
            }
            ChessMove::PawnPromotion(m) => write!(f, "{}=Q", m.inner()),
            ChessMove::KingSideCastle(_) => write!(f, "O-O"),
            ChessMove::QueenSideCastle(_) => write!(f, "O-O-O"),
            ChessMove::Null { .. } => write!(f, "--"),
        }
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}{})", self, self.source(), self.destination())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::board::{Alliance, PieceKind};
    use crate::chess_move::MoveFactory;
    use crate::chess_position;
    use common::coordinate::*;

    fn find(board: &Board, from: Coordinate, to: Coordinate) -> ChessMove {
        let chess_move = MoveFactory::create_move(board, from, to);
        assert!(!chess_move.is_null(), "no move {}{} on\n{}", from, to, board);
        chess_move
    }

    #[test]
    fn test_execute_pawn_jump_sets_en_passant_pawn() {
        let board = Board::standard();
        let next = find(&board, E2, E4).execute(&board).unwrap();

        assert_eq!(Alliance::Black, next.mover());
        assert!(!next.tile(E2).is_occupied());
        let pawn = next.piece_at(E4).unwrap();
        assert_eq!(PieceKind::Pawn, pawn.kind());
        assert!(!pawn.is_first_move());
        assert_eq!(Some(pawn), next.en_passant_pawn());

        // the source board is untouched
        assert_eq!(Board::standard(), board);
    }

    #[test]
    fn test_any_other_move_clears_en_passant_pawn() {
        let board = Board::standard();
        let board = find(&board, E2, E4).execute(&board).unwrap();
        let board = find(&board, G8, F6).execute(&board).unwrap();
        assert_eq!(None, board.en_passant_pawn());
        assert_eq!(Alliance::White, board.mover());
    }

    #[test]
    fn test_execute_capture_removes_captured_piece() {
        let board = chess_position! {
            ....k...
            ........
            ........
            n.......
            ........
            ........
            ........
            R...K...
        };
        let capture = find(&board, A1, A5);
        assert!(matches!(capture, ChessMove::MajorAttack(_)));
        assert_eq!(Some(PieceKind::Knight), capture.attacked_piece().map(|p| p.kind()));

        let next = capture.execute(&board).unwrap();
        assert_eq!(1, next.black_pieces().len());
        assert_eq!(Some(Alliance::White), next.piece_at(A5).map(|p| p.alliance()));
        assert!(!next.tile(A1).is_occupied());
    }

    #[test]
    fn test_execute_en_passant_removes_passed_pawn() {
        let board = chess_position! { @Black
            ....k...
            ...p....
            ........
            ....P...
            ........
            ........
            ........
            ....K...
        };
        let board = find(&board, D7, D5).execute(&board).unwrap();
        let en_passant = find(&board, E5, D6);
        assert!(matches!(en_passant, ChessMove::PawnEnPassantAttack(_)));
        assert_eq!(Some(D5), en_passant.attacked_piece().map(|p| p.position()));

        let next = en_passant.execute(&board).unwrap();
        assert!(!next.tile(D5).is_occupied());
        assert!(!next.tile(E5).is_occupied());
        assert_eq!(Some(PieceKind::Pawn), next.piece_at(D6).map(|p| p.kind()));
        assert_eq!(1, next.black_pieces().len());
    }

    #[test]
    fn test_execute_castles_move_king_and_rook() {
        let board = chess_position! {
            r...k..r
            ........
            ........
            ........
            ........
            ........
            ........
            R...K..R
        };
        let king_side = find(&board, E1, G1);
        assert!(matches!(king_side, ChessMove::KingSideCastle(_)));
        assert_eq!(Some(H1), king_side.castle_rook().map(|p| p.position()));

        let next = king_side.execute(&board).unwrap();
        assert_eq!(Some(PieceKind::King), next.piece_at(G1).map(|p| p.kind()));
        assert_eq!(Some(PieceKind::Rook), next.piece_at(F1).map(|p| p.kind()));
        assert!(!next.tile(E1).is_occupied());
        assert!(!next.tile(H1).is_occupied());
        assert!(next.piece_at(F1).map_or(false, |rook| !rook.is_first_move()));

        let board = Board::new(board.all_pieces().copied(), Alliance::Black, None).unwrap();
        let queen_side = find(&board, E8, C8);
        assert!(matches!(queen_side, ChessMove::QueenSideCastle(_)));
        let next = queen_side.execute(&board).unwrap();
        assert_eq!(Some(PieceKind::King), next.piece_at(C8).map(|p| p.kind()));
        assert_eq!(Some(PieceKind::Rook), next.piece_at(D8).map(|p| p.kind()));
        assert!(!next.tile(A8).is_occupied());
        assert_eq!(Alliance::White, next.mover());
    }

    #[test]
    fn test_execute_promotion_places_queen() {
        let board = chess_position! {
            ....k...
            P.......
            ........
            ........
            ........
            ........
            ........
            ....K...
        };
        let promotion = find(&board, A7, A8);
        assert!(matches!(promotion, ChessMove::PawnPromotion(_)));

        let next = promotion.execute(&board).unwrap();
        let queen = next.piece_at(A8).unwrap();
        assert_eq!(PieceKind::Queen, queen.kind());
        assert_eq!(Alliance::White, queen.alliance());
        assert!(next.white_pieces().iter().all(|p| p.kind() != PieceKind::Pawn));
    }

    #[test]
    fn test_execute_null_move_fails() {
        let board = Board::standard();
        assert_eq!(
            Err(BoardError::NullMoveExecution),
            ChessMove::null(E2, E5).execute(&board)
        );
    }

    #[test]
    fn test_execute_against_wrong_board_fails() {
        let board = Board::standard();
        let jump = find(&board, E2, E4);
        let next = jump.execute(&board).unwrap();
        assert_eq!(Err(BoardError::PieceNotOnBoard { position: E2 }), jump.execute(&next));
    }

    #[test]
    fn test_execute_is_repeatable() {
        let board = Board::standard();
        let knight = find(&board, G1, F3);
        assert_eq!(knight.execute(&board).unwrap(), knight.execute(&board).unwrap());
    }

    #[test]
    fn test_notation() {
        let board = Board::standard();
        assert_eq!("e4", find(&board, E2, E4).to_string());
        assert_eq!("e3", find(&board, E2, E3).to_string());
        assert_eq!("Nf3", find(&board, G1, F3).to_string());

        let board = chess_position! {
            ....k..r
            P.......
            ........
            ...p....
            ....P..q
            ........
            .....P..
            R...K.NR
        };
        assert_eq!("exd5", find(&board, E4, D5).to_string());
        assert_eq!("Qxe4", find(&board, H4, E4).to_string());
        assert_eq!("a8=Q", find(&board, A7, A8).to_string());
        assert_eq!("O-O-O", find(&board, E1, C1).to_string());
        assert_eq!("O-O", find(&board, E8, G8).to_string());
        assert_eq!("--", ChessMove::null(A1, A2).to_string());
    }

    #[test]
    fn test_equality_is_structural() {
        let first = Board::standard();
        let second = Board::standard();
        let a = find(&first, B1, C3);
        let b = find(&second, B1, C3);
        assert_eq!(a, b);

        let set: HashSet<ChessMove> = first
            .current_player()
            .legal_moves()
            .iter()
            .cloned()
            .collect();
        assert_eq!(20, set.len());
        assert!(set.contains(&b));
        assert!(!set.contains(&find(&first, B8, C6)));
    }
}
