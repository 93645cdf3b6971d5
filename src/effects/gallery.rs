/// Index state of one project card's image carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cards with a single image get neither dots nor working controls.
    pub fn is_navigable(&self) -> bool {
        self.len > 1
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_current(&self, index: usize) -> bool {
        index == self.current
    }

    /// Moves to `index`, wrapping one step past either end.
    pub fn go_to(&mut self, index: isize) -> usize {
        if !self.is_navigable() {
            return self.current;
        }
        self.current = if index < 0 {
            self.len - 1
        } else if index as usize >= self.len {
            0
        } else {
            index as usize
        };
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current as isize + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.current as isize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        let mut c = Carousel::new(3);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut c = Carousel::new(3);
        assert_eq!(c.prev(), 2);
        assert_eq!(c.prev(), 1);
        assert_eq!(c.prev(), 0);
        assert_eq!(c.prev(), 2);
    }

    #[test]
    fn test_go_to_dot() {
        let mut c = Carousel::new(4);
        assert_eq!(c.go_to(2), 2);
        assert!(c.is_current(2));
        assert!(!c.is_current(0));
        assert_eq!(c.go_to(4), 0);
        assert_eq!(c.go_to(-1), 3);
    }

    #[test]
    fn test_exactly_one_current() {
        let mut c = Carousel::new(5);
        for _ in 0..12 {
            c.next();
            assert_eq!((0..c.len()).filter(|&i| c.is_current(i)).count(), 1);
        }
    }

    #[test]
    fn test_single_image_not_navigable() {
        let mut c = Carousel::new(1);
        assert!(!c.is_navigable());
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
        assert!(c.is_current(0));

        let mut empty = Carousel::new(0);
        assert!(empty.is_empty());
        assert_eq!(empty.next(), 0);
    }
}
