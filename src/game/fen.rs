//! Component G: FEN (Forsyth-Edwards Notation) loading.

use crate::error::FenError;
use crate::model::{Bitboard, CastlingRights, Color, Piece, Square};

use super::state::Game;

impl Game {
    /// Replaces the position with the one described by `fen`. Leaves
    /// the game unmodified and returns `Err` on any malformed input;
    /// per spec.md 4.G, a caller that only wants the boolean can use
    /// `.is_ok()`. Halfmove and fullmove counters, if present, are
    /// parsed but ignored.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut pieces = [[Bitboard::EMPTY; 6]; 2];
        parse_piece_placement(parts[0], &mut pieces)?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let castling_rights = parse_castling_rights(parts[2])?;
        let en_passant_square = parse_en_passant(parts[3], side_to_move)?;

        let mut occupied = [Bitboard::EMPTY; 2];
        let mut all_occupied = Bitboard::EMPTY;
        for color in [Color::White, Color::Black] {
            for piece_bb in pieces[color.index()] {
                occupied[color.index()] = occupied[color.index()] | piece_bb;
            }
            all_occupied = all_occupied | occupied[color.index()];
        }

        self.pieces = pieces;
        self.occupied = occupied;
        self.all_occupied = all_occupied;
        self.side_to_move = side_to_move;
        self.castling_rights = castling_rights;
        self.en_passant_square = en_passant_square;
        self.history.clear();
        self.cursor = 0;
        self.move_cache.invalidate();
        Ok(())
    }

    /// The FEN string for the current position (piece placement, side
    /// to move, castling rights, en-passant target; halfmove and
    /// fullmove counters are emitted as `0 1` since this crate does
    /// not track them).
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8u8).rev() {
            let mut empty_run = 0u8;
            for file in 0..8u8 {
                match self.get_piece(Square::new(file, rank)) {
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            placement.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        placement.push(piece.to_char(color));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                placement.push((b'0' + empty_run) as char);
            }
            if rank != 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        if !self.castling_rights.white_can_never_castle_short() {
            castling.push('K');
        }
        if !self.castling_rights.white_can_never_castle_long() {
            castling.push('Q');
        }
        if !self.castling_rights.black_can_never_castle_short() {
            castling.push('k');
        }
        if !self.castling_rights.black_can_never_castle_long() {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = match self.en_passant_square {
            // The stored square is where the double-pushed pawn
            // landed; the FEN field names the square it passed over,
            // one rank back towards the side now to move.
            Some(sq) => sq
                .forward(self.side_to_move)
                .expect("a landing square always has a passed-over square behind it")
                .to_string(),
            None => "-".to_string(),
        };

        format!("{placement} {side} {castling} {en_passant} 0 1")
    }
}

fn parse_piece_placement(section: &str, pieces: &mut [[Bitboard; 6]; 2]) -> Result<(), FenError> {
    let ranks: Vec<&str> = section.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRank {
            rank: ranks.len(),
            files: 0,
        });
    }
    for (rank_from_top, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_from_top as u8;
        let mut file = 0u8;
        for ch in rank_str.chars() {
            if let Some(digit) = ch.to_digit(10) {
                file += digit as u8;
            } else if let Some((color, piece)) = Piece::from_char(ch) {
                if file >= 8 {
                    return Err(FenError::InvalidRank {
                        rank: rank as usize,
                        files: file as usize + 1,
                    });
                }
                pieces[color.index()][piece.index()].set(Square::new(file, rank));
                file += 1;
            } else {
                return Err(FenError::InvalidPiece { ch });
            }
        }
        if file != 8 {
            return Err(FenError::InvalidRank {
                rank: rank as usize,
                files: file as usize,
            });
        }
    }
    Ok(())
}

fn parse_castling_rights(section: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::all_lost();
    if section == "-" {
        return Ok(rights);
    }
    for ch in section.chars() {
        match ch {
            'K' => rights.set_can_never_castle(Color::White, true, false),
            'Q' => rights.set_can_never_castle(Color::White, false, false),
            'k' => rights.set_can_never_castle(Color::Black, true, false),
            'q' => rights.set_can_never_castle(Color::Black, false, false),
            other => return Err(FenError::InvalidCastling { ch: other }),
        }
    }
    Ok(rights)
}

fn parse_en_passant(section: &str, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if section == "-" {
        return Ok(None);
    }
    let passed_over = section
        .parse::<Square>()
        .map_err(|_| FenError::InvalidEnPassant {
            found: section.to_string(),
        })?;
    // The FEN field names the square the double-pushing pawn passed
    // over; the engine stores the square it landed on, one rank
    // further in the mover's own forward direction. The mover is the
    // side that just moved, i.e. the opponent of `side_to_move`.
    let mover = side_to_move.opponent();
    passed_over
        .forward(mover)
        .ok_or_else(|| FenError::InvalidEnPassant {
            found: section.to_string(),
        })
}
