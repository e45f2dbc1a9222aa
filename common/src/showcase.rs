//! Trades showcase carousel.

use serde::Serialize;
use std::ops::Range;

use crate::model::Tradesperson;

pub const STAR_COUNT: usize = 5;

/// Slide window over a list of cards. Movement stops at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Carousel {
    len: usize,
    per_view: usize,
    position: usize,
}

impl Carousel {
    pub fn new(len: usize, per_view: usize) -> Self {
        Carousel {
            len,
            per_view: per_view.max(1),
            position: 0,
        }
    }

    /// Starts at `position`, clamped into range.
    pub fn at(len: usize, per_view: usize, position: usize) -> Self {
        let mut carousel = Carousel::new(len, per_view);
        carousel.position = position.min(carousel.last_position());
        carousel
    }

    fn last_position(&self) -> usize {
        self.len.saturating_sub(self.per_view)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn can_prev(&self) -> bool {
        self.position > 0
    }

    pub fn can_next(&self) -> bool {
        self.position < self.last_position()
    }

    pub fn next(&mut self) {
        if self.can_next() {
            self.position += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.can_prev() {
            self.position -= 1;
        }
    }

    pub fn visible(&self) -> Range<usize> {
        self.position..(self.position + self.per_view).min(self.len)
    }
}

impl Tradesperson {
    /// Avatar fallback text.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }

    /// Star `i` is lit when `i < rating`, so 4.5 lights all five.
    pub fn stars(&self) -> [bool; STAR_COUNT] {
        std::array::from_fn(|i| (i as f32) < self.rating)
    }

    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// A tradesperson as rendered on a carousel card.
#[derive(Debug, Serialize, Clone)]
pub struct ShowcaseCard {
    #[serde(flatten)]
    pub person: Tradesperson,
    pub initials: String,
    pub stars: [bool; STAR_COUNT],
    pub rating_label: String,
}

impl From<&Tradesperson> for ShowcaseCard {
    fn from(person: &Tradesperson) -> Self {
        ShowcaseCard {
            initials: person.initials(),
            stars: person.stars(),
            rating_label: person.rating_label(),
            person: person.clone(),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct ShowcasePage {
    pub position: usize,
    pub per_view: usize,
    pub total: usize,
    pub can_prev: bool,
    pub can_next: bool,
    pub cards: Vec<ShowcaseCard>,
}

/// One carousel frame over `people`, starting at `position` (clamped).
pub fn showcase_page(people: &[Tradesperson], position: usize, per_view: usize) -> ShowcasePage {
    let carousel = Carousel::at(people.len(), per_view, position);
    ShowcasePage {
        position: carousel.position(),
        per_view: carousel.per_view,
        total: people.len(),
        can_prev: carousel.can_prev(),
        can_next: carousel.can_next(),
        cards: people[carousel.visible()]
            .iter()
            .map(ShowcaseCard::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_carousel_stops_at_ends() {
        let mut carousel = Carousel::new(6, 3);
        assert!(!carousel.can_prev());
        carousel.prev();
        assert_eq!(carousel.position(), 0);

        for _ in 0..10 {
            carousel.next();
        }
        assert_eq!(carousel.position(), 3);
        assert!(!carousel.can_next());
        assert_eq!(carousel.visible(), 3..6);
    }

    #[test]
    fn test_carousel_shorter_than_view() {
        let mut carousel = Carousel::new(2, 3);
        carousel.next();
        assert_eq!(carousel.position(), 0);
        assert_eq!(carousel.visible(), 0..2);

        let empty = Carousel::at(0, 3, 5);
        assert_eq!(empty.visible(), 0..0);
    }

    #[test]
    fn test_carousel_at_clamps_position() {
        assert_eq!(Carousel::at(6, 2, 99).position(), 4);
    }

    #[test]
    fn test_card_helpers() {
        let catalog = Catalog::embedded().unwrap();
        let youcef = catalog.tradesperson("5").unwrap();
        assert_eq!(youcef.initials(), "YO");
        assert_eq!(youcef.stars(), [true; 5]);
        assert_eq!(youcef.rating_label(), "4.5");

        let mut rookie = youcef.clone();
        rookie.rating = 3.0;
        assert_eq!(rookie.stars(), [true, true, true, false, false]);
    }

    #[test]
    fn test_showcase_page_slices_people() {
        let catalog = Catalog::embedded().unwrap();
        let page = showcase_page(&catalog.tradespeople, 1, 3);
        assert_eq!(page.cards.len(), 3);
        assert_eq!(page.cards[0].person.name, "Fatima Zahra");
        assert!(page.can_prev && page.can_next);
    }
}
