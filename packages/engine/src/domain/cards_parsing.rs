//! Card parsing from string representations (e.g., "R5", "GS", "W4")

use std::str::FromStr;

use super::cards_types::{Card, CardColor, CardKind};
use crate::errors::GameError;

fn parse_error(s: &str) -> GameError {
    GameError::ParseCard {
        token: s.to_string(),
    }
}

impl FromStr for Card {
    type Err = GameError;

    /// Token grammar: a color letter (`R`, `B`, `G`, `Y`) followed by a kind
    /// (`0`..`9`, `S` skip, `R` reverse, `D2` draw-two), or the bare wild
    /// tokens `W` and `W4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => return Ok(Card::wild()),
            "W4" => return Ok(Card::wild_draw_four()),
            _ => {}
        }

        let mut chars = s.chars();
        let color = match chars.next().ok_or_else(|| parse_error(s))? {
            'R' => CardColor::Red,
            'B' => CardColor::Blue,
            'G' => CardColor::Green,
            'Y' => CardColor::Yellow,
            _ => return Err(parse_error(s)),
        };
        let kind = match chars.as_str() {
            "S" => CardKind::Skip,
            "R" => CardKind::Reverse,
            "D2" => CardKind::DrawTwo,
            rest => {
                let n: u8 = rest.parse().map_err(|_| parse_error(s))?;
                if n > 9 {
                    return Err(parse_error(s));
                }
                CardKind::Number(n)
            }
        };
        Ok(Card { kind, color })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, GameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
