/// Slide position of one image carousel. The timer lives in the UI; this
/// only tracks which slide is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.index
    }

    /// A single slide (or none) never rotates
    pub fn is_static(&self) -> bool {
        self.len <= 1
    }

    /// Adopt a new slide count. Returns whether anything changed; the
    /// position restarts at the first slide when it no longer exists.
    pub fn resize(&mut self, len: usize) -> bool {
        if len == self.len {
            return false;
        }
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
        true
    }

    /// Move to the next slide, wrapping after the last one
    pub fn next(&mut self) -> usize {
        if !self.is_static() {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_around() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_single_slide_is_static() {
        let mut carousel = Carousel::new(1);
        assert!(carousel.is_static());
        assert_eq!(carousel.next(), 0);

        let mut empty = Carousel::new(0);
        assert!(empty.is_empty());
        assert_eq!(empty.next(), 0);
    }

    #[test]
    fn test_resize_updates_count_and_static_flag() {
        let mut carousel = Carousel::new(1);
        assert!(carousel.is_static());
        assert!(carousel.resize(3));
        assert!(!carousel.is_static());
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 2);

        assert!(!carousel.resize(3));
        assert!(carousel.resize(2));
        assert_eq!(carousel.current(), 0);
        assert!(carousel.resize(0));
        assert!(carousel.is_static());
    }
}
