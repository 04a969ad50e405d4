//! Domain Value Objects
//!
//! Range-checked location numbers of the Quran hierarchy. Constructing
//! one of these is the only way a juz/hizb/quarter number reaches the
//! store, so out-of-range values are rejected at the edge.

use std::fmt;

/// One of the 30 standard divisions of the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JuzNumber(u8);

impl JuzNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 30;

    pub fn new(n: u8) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Some(Self(n))
        } else {
            None
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for JuzNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the 60 subdivisions (2 per juz)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HizbNumber(u8);

impl HizbNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 60;

    pub fn new(n: u8) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Some(Self(n))
        } else {
            None
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Parent juz under the canonical 30x2 mapping
    pub fn juz(&self) -> JuzNumber {
        // (h - 1) / 2 + 1 stays within 1..=30 for h in 1..=60
        JuzNumber((self.0 - 1) / 2 + 1)
    }

    /// Whether this hizb lies inside the given juz
    pub fn is_in_juz(&self, juz: JuzNumber) -> bool {
        self.juz() == juz
    }
}

impl fmt::Display for HizbNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the 4 subdivisions of a hizb (Rubʿ al-Hizb)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuarterNumber(u8);

impl QuarterNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(n: u8) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Some(Self(n))
        } else {
            None
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Zero-based bucket index into the partition output
    pub fn index(&self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for QuarterNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_juz_range() {
        assert!(JuzNumber::new(1).is_some());
        assert!(JuzNumber::new(30).is_some());
        assert!(JuzNumber::new(0).is_none());
        assert!(JuzNumber::new(31).is_none());
    }

    #[test]
    fn test_hizb_range() {
        assert!(HizbNumber::new(1).is_some());
        assert!(HizbNumber::new(60).is_some());
        assert!(HizbNumber::new(0).is_none());
        assert!(HizbNumber::new(61).is_none());
    }

    #[test]
    fn test_hizb_to_juz_mapping() {
        let cases = [(1u8, 1u8), (2, 1), (3, 2), (4, 2), (59, 30), (60, 30)];
        for (hizb, juz) in cases {
            let h = HizbNumber::new(hizb).unwrap();
            assert_eq!(h.juz().get(), juz, "hizb {hizb}");
            assert!(h.is_in_juz(JuzNumber::new(juz).unwrap()));
        }

        let h5 = HizbNumber::new(5).unwrap();
        assert!(!h5.is_in_juz(JuzNumber::new(2).unwrap()));
    }

    #[test]
    fn test_quarter_index() {
        assert_eq!(QuarterNumber::new(1).unwrap().index(), 0);
        assert_eq!(QuarterNumber::new(4).unwrap().index(), 3);
        assert!(QuarterNumber::new(0).is_none());
        assert!(QuarterNumber::new(5).is_none());
    }
}
