//! Serialization and deserialization for card types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Suit};

const SUIT_NAMES: [(Suit, &str); 4] = [
    (Suit::Clubs, "CLUBS"),
    (Suit::Diamonds, "DIAMONDS"),
    (Suit::Hearts, "HEARTS"),
    (Suit::Spades, "SPADES"),
];

impl Suit {
    /// Upper-case wire name, e.g. `"HEARTS"`.
    pub fn name(self) -> &'static str {
        SUIT_NAMES[self.index() as usize].1
    }

    pub fn from_name(name: &str) -> Option<Suit> {
        SUIT_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(suit, _)| *suit)
    }
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Suit::from_name(&s).ok_or_else(|| serde::de::Error::custom(format!("unknown suit {s:?}")))
    }
}

// Card serde uses the compact token form ("AS", "TH", "2C")
impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>().map_err(serde::de::Error::custom)
    }
}
