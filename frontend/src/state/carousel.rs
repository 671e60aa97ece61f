use std::rc::Rc;

use yew::Reducible;

/// Position within a looping slide deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

pub enum CarouselAction {
    Next,
    Previous,
    Select(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Previous => next.previous(),
            CarouselAction::Select(index) => next.select(index),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        let mut deck = Carousel::new(3);
        deck.next();
        deck.next();
        assert_eq!(deck.index(), 2);
        deck.next();
        assert_eq!(deck.index(), 0);
        deck.previous();
        assert_eq!(deck.index(), 2);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut deck = Carousel::new(4);
        deck.select(3);
        assert_eq!(deck.index(), 3);
        deck.select(4);
        assert_eq!(deck.index(), 3);
    }

    #[test]
    fn empty_deck_stays_put() {
        let mut deck = Carousel::new(0);
        deck.next();
        deck.previous();
        deck.select(0);
        assert_eq!(deck.index(), 0);
        assert_eq!(deck.len(), 0);
    }

    #[test]
    fn reducer_moves_position() {
        let deck = Rc::new(Carousel::new(2));
        let deck = deck.reduce(CarouselAction::Next);
        assert_eq!(deck.index(), 1);
        let deck = deck.reduce(CarouselAction::Select(0));
        assert_eq!(deck.index(), 0);
        let deck = deck.reduce(CarouselAction::Previous);
        assert_eq!(deck.index(), 1);
    }
}
