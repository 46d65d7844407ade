// Carousel navigation state — a circular index over a record's image list.
//
// Each displayed record gets its own independent instance; navigating one
// never moves the other. A shared index reused across records breaks the
// moment the records are swapped, so the keyed set below resets state on
// record-identity change instead.

use std::collections::HashMap;

/// Circular index over an ordered image list of known length.
///
/// Invariant: `current < max(1, len)`. For `len == 0` the carousel is
/// inert — every operation is a no-op and `current()` stays 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// New carousel positioned at the first image.
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance to the next image, wrapping from the last back to the first.
    pub fn next(&mut self) {
        if self.len > 1 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Step to the previous image, wrapping from the first to the last.
    pub fn prev(&mut self) {
        if self.len > 1 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Jump directly to index `i`. Out-of-range targets are ignored
    /// silently — jump requests come from indicator controls that are in
    /// range by construction, but that is not trusted here.
    pub fn jump(&mut self, i: usize) {
        if i < self.len {
            self.current = i;
        }
    }
}

/// Independent carousel instances keyed by record id.
///
/// An entry is created at index 0 the first time a record is displayed and
/// reset whenever that record's image count changes (a changed count means
/// the underlying record was replaced, so a stale index must not survive).
#[derive(Debug, Default)]
pub struct CarouselSet {
    entries: HashMap<String, Carousel>,
}

impl CarouselSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The carousel for `record_id`, creating or resetting it as needed.
    pub fn for_record(&mut self, record_id: &str, image_count: usize) -> &mut Carousel {
        let entry = self
            .entries
            .entry(record_id.to_string())
            .or_insert_with(|| Carousel::new(image_count));
        if entry.len() != image_count {
            *entry = Carousel::new(image_count);
        }
        entry
    }

    /// Drop state for a record that is no longer displayed.
    pub fn remove(&mut self, record_id: &str) {
        self.entries.remove(record_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut carousel = Carousel::new(3);
        carousel.jump(2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn single_image_carousel_never_moves() {
        let mut carousel = Carousel::new(1);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        carousel.jump(0);
        assert_eq!(carousel.current(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn out_of_range_jump_is_a_silent_no_op() {
        let mut carousel = Carousel::new(3);
        carousel.jump(1);
        carousel.jump(3);
        carousel.jump(usize::MAX);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut carousel = Carousel::new(4);
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn set_keeps_records_independent() {
        let mut set = CarouselSet::new();
        set.for_record("a", 3).next();
        set.for_record("a", 3).next();
        set.for_record("b", 3).next();
        assert_eq!(set.for_record("a", 3).current(), 2);
        assert_eq!(set.for_record("b", 3).current(), 1);
    }

    #[test]
    fn set_resets_when_image_count_changes() {
        let mut set = CarouselSet::new();
        set.for_record("a", 3).jump(2);
        // Same id, different record contents: index must not carry over
        assert_eq!(set.for_record("a", 5).current(), 0);
    }

    #[test]
    fn set_remove_recreates_fresh_state() {
        let mut set = CarouselSet::new();
        set.for_record("a", 3).next();
        set.remove("a");
        assert_eq!(set.for_record("a", 3).current(), 0);
    }
}
