use super::Color;

const WHITE_SHORT: u8 = 1 << 0;
const WHITE_LONG: u8 = 1 << 1;
const BLACK_SHORT: u8 = 1 << 2;
const BLACK_LONG: u8 = 1 << 3;

/// The four `{white,black}_can_never_castle_{short,long}` flags from
/// spec.md 3, packed into one byte. A set bit means the right has
/// been permanently lost, matching the spec's "never castle" polarity
/// exactly (this is the opposite of the more common "has right" bit
/// convention, kept inverted here on purpose for fidelity).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Nothing lost yet: both sides retain both rights.
    #[must_use]
    pub const fn new() -> Self {
        CastlingRights(0)
    }

    /// Both rights lost for both sides. Used as the FEN-parsing
    /// default before the castling-rights section is read: "rights
    /// default to all-never before parsing" (spec.md 4.G).
    #[must_use]
    pub const fn all_lost() -> Self {
        CastlingRights(WHITE_SHORT | WHITE_LONG | BLACK_SHORT | BLACK_LONG)
    }

    const fn bit(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => WHITE_SHORT,
            (Color::White, false) => WHITE_LONG,
            (Color::Black, true) => BLACK_SHORT,
            (Color::Black, false) => BLACK_LONG,
        }
    }

    #[must_use]
    pub const fn can_never_castle(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit(color, kingside) != 0
    }

    #[must_use]
    pub const fn white_can_never_castle_short(self) -> bool {
        self.can_never_castle(Color::White, true)
    }
    #[must_use]
    pub const fn white_can_never_castle_long(self) -> bool {
        self.can_never_castle(Color::White, false)
    }
    #[must_use]
    pub const fn black_can_never_castle_short(self) -> bool {
        self.can_never_castle(Color::Black, true)
    }
    #[must_use]
    pub const fn black_can_never_castle_long(self) -> bool {
        self.can_never_castle(Color::Black, false)
    }

    /// Permanently forbids castling on the given side. Never call the
    /// inverse: once lost, a right is never restored during play.
    pub fn forbid(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit(color, kingside);
    }

    pub fn forbid_both(&mut self, color: Color) {
        self.forbid(color, true);
        self.forbid(color, false);
    }

    /// Sets a right explicitly, used only by the FEN loader which
    /// reads an absolute statement of rights rather than an
    /// incremental loss.
    pub(crate) fn set_can_never_castle(&mut self, color: Color, kingside: bool, never: bool) {
        if never {
            self.0 |= Self::bit(color, kingside);
        } else {
            self.0 &= !Self::bit(color, kingside);
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_every_right_intact() {
        let rights = CastlingRights::new();
        assert!(!rights.white_can_never_castle_short());
        assert!(!rights.white_can_never_castle_long());
        assert!(!rights.black_can_never_castle_short());
        assert!(!rights.black_can_never_castle_long());
    }

    #[test]
    fn forbid_is_permanent_and_per_side() {
        let mut rights = CastlingRights::new();
        rights.forbid(Color::White, true);
        assert!(rights.white_can_never_castle_short());
        assert!(!rights.white_can_never_castle_long());
        assert!(!rights.black_can_never_castle_short());
    }

    #[test]
    fn forbid_both_clears_both_sides_of_one_color() {
        let mut rights = CastlingRights::new();
        rights.forbid_both(Color::Black);
        assert!(rights.black_can_never_castle_short());
        assert!(rights.black_can_never_castle_long());
        assert!(!rights.white_can_never_castle_short());
    }

    #[test]
    fn all_lost_forbids_everything() {
        let rights = CastlingRights::all_lost();
        assert!(rights.white_can_never_castle_short());
        assert!(rights.white_can_never_castle_long());
        assert!(rights.black_can_never_castle_short());
        assert!(rights.black_can_never_castle_long());
    }
}
