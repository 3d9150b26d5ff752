use std::fmt::{Display, Formatter};

/// Before and after sizes of one compression run, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    pub before: usize,
    pub after: usize,
}

impl Ratio {
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Space saved as a percentage of the original size, to one decimal place.
    /// Negative when the output grew.
    pub fn percent(&self) -> f64 {
        if self.before == 0 {
            return 0.0;
        }
        let saved = 100.0 - self.after as f64 / self.before as f64 * 100.0;
        (saved * 10.0).round() / 10.0
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Before: {} bytes, After: {} bytes, Compression {:.1}%",
            self.before,
            self.after,
            self.percent()
        )
    }
}

#[cfg(test)]
mod test {
    use super::Ratio;

    #[test]
    fn percent_test() {
        assert_eq!(Ratio::new(1000, 600).percent(), 40.0);
        assert_eq!(Ratio::new(3, 2).percent(), 33.3);
        assert_eq!(Ratio::new(100, 110).percent(), -10.0);
        assert_eq!(Ratio::new(0, 0).percent(), 0.0);
    }

    #[test]
    fn display_test() {
        assert_eq!(
            Ratio::new(1000, 600).to_string(),
            "Before: 1000 bytes, After: 600 bytes, Compression 40.0%"
        );
    }
}
