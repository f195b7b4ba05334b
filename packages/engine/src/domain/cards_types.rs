//! Core card-related types: Card, CardKind, CardColor

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
    /// Unresolved color of a wild card still in a hand or pile.
    Wild,
}

impl CardColor {
    /// The four concrete colors a wild card may resolve to.
    pub const CONCRETE: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
    ];

    pub fn is_concrete(self) -> bool {
        self != CardColor::Wild
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardKind {
    pub fn is_wild(self) -> bool {
        matches!(self, CardKind::Wild | CardKind::WildDrawFour)
    }

    /// Cards that create or extend a forced-draw obligation.
    pub fn is_draw_effect(self) -> bool {
        matches!(self, CardKind::DrawTwo | CardKind::WildDrawFour)
    }
}

/// Immutable card value object.
///
/// A wild card carries `CardColor::Wild` until it is played; the resolved
/// color is set exactly once, as the card moves onto the discard pile.
/// Undoing that play restores `CardColor::Wild`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub color: CardColor,
}

impl Card {
    pub fn number(color: CardColor, value: u8) -> Self {
        debug_assert!(value <= 9, "numbered cards range 0..=9");
        Self {
            kind: CardKind::Number(value),
            color,
        }
    }

    pub fn skip(color: CardColor) -> Self {
        Self {
            kind: CardKind::Skip,
            color,
        }
    }

    pub fn reverse(color: CardColor) -> Self {
        Self {
            kind: CardKind::Reverse,
            color,
        }
    }

    pub fn draw_two(color: CardColor) -> Self {
        Self {
            kind: CardKind::DrawTwo,
            color,
        }
    }

    pub fn wild() -> Self {
        Self {
            kind: CardKind::Wild,
            color: CardColor::Wild,
        }
    }

    pub fn wild_draw_four() -> Self {
        Self {
            kind: CardKind::WildDrawFour,
            color: CardColor::Wild,
        }
    }

    pub fn is_wild(self) -> bool {
        self.kind.is_wild()
    }

    /// Numeric face value, present only for numbered cards.
    pub fn numeric_value(self) -> Option<u8> {
        match self.kind {
            CardKind::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Copy of this card with its color resolved to `color`.
    pub fn with_color(self, color: CardColor) -> Self {
        Self {
            kind: self.kind,
            color,
        }
    }

    /// Copy of this card as it sits in a hand (wild color unresolved).
    pub fn unresolved(self) -> Self {
        if self.is_wild() {
            self.with_color(CardColor::Wild)
        } else {
            self
        }
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            CardColor::Red => 'R',
            CardColor::Blue => 'B',
            CardColor::Green => 'G',
            CardColor::Yellow => 'Y',
            CardColor::Wild => 'W',
        };
        write!(f, "{c}")
    }
}

// Display mirrors the token grammar accepted by `FromStr` in cards_parsing:
// "R5", "GS", "BR", "YD2", "W", "W4".
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CardKind::Number(n) => write!(f, "{}{n}", self.color),
            CardKind::Skip => write!(f, "{}S", self.color),
            CardKind::Reverse => write!(f, "{}R", self.color),
            CardKind::DrawTwo => write!(f, "{}D2", self.color),
            CardKind::Wild => write!(f, "W"),
            CardKind::WildDrawFour => write!(f, "W4"),
        }
    }
}
