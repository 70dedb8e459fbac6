use common::coordinate::Coordinate;

use super::{crosses_side_edge, ChessMoveList};
use crate::board::{Alliance, Piece, Tiles};
use crate::chess_move::{ChessMove, PawnPromotionChessMove, StandardChessMove};

const PUSH: i32 = 8;
const JUMP: i32 = 16;
const CAPTURES: [i32; 2] = [7, 9];

pub fn generate_pawn_moves(
    moves: &mut ChessMoveList,
    pawn: &Piece,
    tiles: &Tiles,
    en_passant_pawn: Option<&Piece>,
) {
    let from = pawn.position();
    let alliance = pawn.alliance();
    let direction = alliance.direction();

    if let Some(to) = from.offset(PUSH * direction) {
        if !tiles.is_occupied(to) {
            let push = ChessMove::Pawn(StandardChessMove::new(*pawn, to, None));
            moves.push(promote_if_last_rank(push, alliance, to));

            if pawn.is_first_move() && alliance.is_pawn_start_square(from) {
                if let Some(jump_to) = from.offset(JUMP * direction) {
                    if !tiles.is_occupied(jump_to) {
                        moves.push(ChessMove::PawnJump(StandardChessMove::new(
                            *pawn, jump_to, None,
                        )));
                    }
                }
            }
        }
    }

    for capture in CAPTURES {
        let vector = capture * direction;
        if crosses_side_edge(from, vector) {
            continue;
        }
        let to = match from.offset(vector) {
            Some(to) => to,
            None => continue,
        };
        match tiles.piece_at(to) {
            Some(occupant) if occupant.alliance() != alliance => {
                let attack =
                    ChessMove::PawnAttack(StandardChessMove::new(*pawn, to, Some(*occupant)));
                moves.push(promote_if_last_rank(attack, alliance, to));
            }
            Some(_) => {}
            None => {
                if let Some(victim) = en_passant_victim(pawn, to, tiles, en_passant_pawn) {
                    moves.push(ChessMove::PawnEnPassantAttack(StandardChessMove::new(
                        *pawn,
                        to,
                        Some(victim),
                    )));
                }
            }
        }
    }
}

fn promote_if_last_rank(chess_move: ChessMove, alliance: Alliance, to: Coordinate) -> ChessMove {
    if alliance.is_pawn_promotion_square(to) {
        ChessMove::PawnPromotion(PawnPromotionChessMove::new(chess_move))
    } else {
        chess_move
    }
}

/// The enemy pawn that can be taken en passant by moving to `to`: the pawn
/// that just jumped, standing directly behind `to` from the capturer's view,
/// which places it on the capturer's rank one file over.
fn en_passant_victim(
    pawn: &Piece,
    to: Coordinate,
    tiles: &Tiles,
    en_passant_pawn: Option<&Piece>,
) -> Option<Piece> {
    let candidate = en_passant_pawn?;
    if candidate.alliance() == pawn.alliance() || !candidate.kind().is_pawn() {
        return None;
    }
    let behind = to.offset(PUSH * pawn.alliance().opposite_direction())?;
    if candidate.position() != behind || tiles.piece_at(behind) != Some(candidate) {
        return None;
    }
    Some(*candidate)
}
