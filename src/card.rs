//! Card types and identities.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Spade, Self::Heart, Self::Diamond, Self::Club];

    /// Returns the lowercase suit name used in card ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "spade",
            Self::Heart => "heart",
            Self::Diamond => "diamond",
            Self::Club => "club",
        }
    }

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spade => '♠',
            Self::Heart => '♥',
            Self::Diamond => '♦',
            Self::Club => '♣',
        }
    }

    const fn index(self) -> u8 {
        self as u8
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in canonical deck order, ace low.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the ordering value (A = 1 … K = 13).
    ///
    /// This is the value sequences are built on.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the penalty value counted in a hand.
    ///
    /// Face cards are capped at 10 points.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self.value(),
        }
    }

    /// Returns the short rank label (`A`, `2` … `10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

/// A stable card identity derived from suit and rank.
///
/// Displays as `<suit>-<rank>`, for example `spade-A` or `heart-10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u8);

impl CardId {
    /// Returns the card this id identifies.
    #[must_use]
    pub const fn card(self) -> Card {
        Card::new(
            Suit::ALL[(self.0 / 13) as usize],
            Rank::ALL[(self.0 % 13) as usize],
        )
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.card();
        write!(f, "{}-{}", card.suit.name(), card.rank.label())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the card id, unique per suit and rank.
    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId(self.suit.index() * 13 + self.rank as u8)
    }

    /// Returns the ordering value used for sequences.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Returns the penalty value counted in a hand.
    #[must_use]
    pub const fn points(&self) -> u8 {
        self.rank.points()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
