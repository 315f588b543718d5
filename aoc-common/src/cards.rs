//! A standard 52-card deck.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::CommonError;

/// Cards per suit, also the width of one line of [`Deck`] output.
pub const SUIT_SIZE: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; SUIT_SIZE] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// 1 for an ace up to 13 for a king.
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.icon())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn outline(self) -> char {
        match self {
            Suit::Clubs => '♧',
            Suit::Diamonds => '♢',
            Suit::Hearts => '♡',
            Suit::Spades => '♤',
        }
    }

    pub const fn solid(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// A rank and a suit, shown as e.g. `10♥`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Orders by rank only; cards of equal rank compare equal whatever
    /// their suit.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank.value().cmp(&other.rank.value())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.icon(), self.suit.solid())
    }
}

/// An ordered pile of cards; the top card is the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::full()
    }
}

impl Deck {
    /// All 52 cards, suit by suit, ace to king.
    pub fn full() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    pub fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &VecDeque<Card> {
        &self.cards
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Puts `card` at the bottom.
    pub fn accept(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Shuffles with the thread-local generator.
    pub fn shuffle(&mut self) -> &mut Self {
        self.shuffle_with(&mut rand::rng())
    }

    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.make_contiguous().shuffle(rng);
        self
    }

    /// Fisher-Yates shuffle with the thread-local generator.
    pub fn fisher_yates(&mut self) -> &mut Self {
        self.fisher_yates_with(&mut rand::rng())
    }

    /// Walks from the bottom up, swapping each card with a random card at or
    /// above it.
    pub fn fisher_yates_with<R: Rng>(&mut self, rng: &mut R) -> &mut Self {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        self
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// [`CommonError::EmptyCollection`] when the deck is empty.
    pub fn deal(&mut self) -> Result<Card, CommonError> {
        self.cards
            .pop_front()
            .ok_or_else(|| CommonError::EmptyCollection("the deck is empty".to_string()))
    }

    /// Moves the top card to the bottom of `destination` and returns it.
    pub fn deal_into(&mut self, destination: &mut Deck) -> Result<Card, CommonError> {
        let card = self.deal()?;
        destination.accept(card);
        Ok(card)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::collections::vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Deck {
    /// Up to 13 cards on one line separated by spaces. Longer decks start
    /// with a newline and put 13 cards per line, padded so columns align.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let multiline = self.cards.len() > SUIT_SIZE;
        if multiline {
            writeln!(f)?;
        }
        for (index, card) in self.cards.iter().enumerate() {
            let column = index % SUIT_SIZE;
            if column > 0 {
                f.write_str(" ")?;
            }
            if multiline && card.rank != Rank::Ten {
                write!(f, " {}", card)?;
            } else {
                write!(f, "{}", card)?;
            }
            if multiline && (column + 1 == SUIT_SIZE || index + 1 == self.cards.len()) {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::Ten.to_string(), "10");
    }

    #[test]
    fn test_card_display_and_rank_order() {
        let ten = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(ten.to_string(), "10♥");
        assert_eq!(Suit::Spades.outline(), '♤');

        let jack = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(ten.cmp_rank(&jack), Ordering::Less);
        assert_eq!(
            ten.cmp_rank(&Card::new(Rank::Ten, Suit::Spades)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_full_deck() {
        let deck = Deck::full();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck.iter().collect::<HashSet<_>>().len(), 52);
        assert_eq!(deck.cards()[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(deck.cards()[51], Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn test_deal_moves_top_card() {
        let mut deck = Deck::full();
        let mut hand = Deck::empty();
        let card = deck.deal_into(&mut hand).unwrap();
        assert_eq!(card, Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(deck.len(), 51);
        assert_eq!(hand.cards(), &[card]);
    }

    #[test]
    fn test_deal_whole_deck_from_top() {
        let mut deck = Deck::full();
        let mut pile = Deck::empty();
        while !deck.is_empty() {
            deck.deal_into(&mut pile).unwrap();
        }
        assert_eq!(pile, Deck::full());
        assert_eq!(pile.cards().back(), Some(&Card::new(Rank::King, Suit::Spades)));
    }

    #[test]
    fn test_deal_from_empty() {
        let mut deck = Deck::empty();
        assert!(matches!(deck.deal(), Err(CommonError::EmptyCollection(_))));
    }

    #[test]
    fn test_shuffles_keep_cards() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::full();
        deck.shuffle_with(&mut rng).fisher_yates_with(&mut rng);
        assert_eq!(deck.len(), 52);

        let mut sorted: Vec<Card> = deck.iter().copied().collect();
        sorted.sort_by(|a, b| (a.suit as u8, a.rank).cmp(&(b.suit as u8, b.rank)));
        assert!(sorted.iter().eq(Deck::full().iter()));
    }

    #[test]
    fn test_single_line_display() {
        let deck: Deck = Rank::ALL[..3]
            .iter()
            .map(|&rank| Card::new(rank, Suit::Hearts))
            .collect();
        assert_eq!(deck.to_string(), "A♥ 2♥ 3♥");
    }

    #[test]
    fn test_multiline_display() {
        let text = Deck::full().to_string();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "");
        assert_eq!(
            lines[1],
            " A♣  2♣  3♣  4♣  5♣  6♣  7♣  8♣  9♣ 10♣  J♣  Q♣  K♣"
        );
        assert!(lines[4].starts_with(" A♠"));
        assert_eq!(lines[5], "");
    }
}
