//! Index bookkeeping for the testimonial carousel.
//!
//! Exactly one item is visible at a time. `current` always satisfies
//! `current < len`, and `len` is never zero once constructed, so every
//! navigation operation is total.

use crate::error::{LandingError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// Carousel over `len` items, starting at the first one.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(LandingError::EmptyCarousel);
        }
        Ok(Self { len, current: 0 })
    }

    /// Carousel over `len` items, starting at `start`.
    pub fn starting_at(len: usize, start: usize) -> Result<Self> {
        let mut carousel = Self::new(len)?;
        carousel.jump_to(start)?;
        Ok(carousel)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Advance one item, wrapping from the last back to the first.
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    /// Step back one item, wrapping from the first to the last.
    pub fn previous(&mut self) -> usize {
        self.current = if self.current == 0 {
            self.len - 1
        } else {
            self.current - 1
        };
        self.current
    }

    /// Select `index` directly. Out-of-range indices leave the carousel untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(LandingError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(self.current)
    }

    /// One `(index, active)` pair per item, for the indicator dots.
    pub fn indicators(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.len).map(move |i| (i, self.is_active(i)))
    }

    /// Horizontal translation of the slide track, in percent.
    pub fn offset_percent(&self) -> i64 {
        -100 * self.current as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_carousel_is_rejected() {
        assert!(matches!(Carousel::new(0), Err(LandingError::EmptyCarousel)));
    }

    #[test]
    fn next_wraps_to_first() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.previous(), 2);
        assert_eq!(c.previous(), 1);
    }

    #[test]
    fn previous_near_usize_max() {
        let mut c = Carousel::starting_at(usize::MAX, usize::MAX - 1).unwrap();
        assert_eq!(c.previous(), usize::MAX - 2);
        assert_eq!(c.next(), usize::MAX - 1);
        assert_eq!(c.next(), 0);
        assert_eq!(c.previous(), usize::MAX - 1);
    }

    #[test]
    fn single_item_stays_put() {
        let mut c = Carousel::new(1).unwrap();
        assert_eq!(c.next(), 0);
        assert_eq!(c.previous(), 0);
    }

    #[test]
    fn jump_out_of_range_keeps_state() {
        let mut c = Carousel::starting_at(4, 2).unwrap();
        let err = c.jump_to(4).unwrap_err();
        assert!(matches!(err, LandingError::IndexOutOfRange { index: 4, len: 4 }));
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn exactly_one_indicator_is_active() {
        let mut c = Carousel::new(5).unwrap();
        c.jump_to(3).unwrap();
        let active: Vec<usize> = c.indicators().filter(|(_, a)| *a).map(|(i, _)| i).collect();
        assert_eq!(active, vec![3]);
        assert_eq!(c.indicators().count(), 5);
    }

    #[test]
    fn offset_tracks_current() {
        let mut c = Carousel::new(4).unwrap();
        assert_eq!(c.offset_percent(), 0);
        c.previous();
        assert_eq!(c.offset_percent(), -300);
    }
}
