//! Which extreme a heap keeps at its root.

use core::fmt;
use core::str::FromStr;

use crate::error::ParsePolarityError;
use crate::item::Item;

/// Which extreme a heap keeps at its root.
///
/// Fixed when the heap is built. Both variants drive the same sift code;
/// the only difference is which side of [`Item::less`] counts as "better".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    /// Largest element at the root.
    Max,
    /// Smallest element at the root.
    Min,
}

impl Polarity {
    /// Returns `true` if `a` belongs strictly closer to the root than `b`.
    ///
    /// ```
    /// use nexus_heap::Polarity;
    ///
    /// assert!(Polarity::Max.prefers(&9, &3));
    /// assert!(Polarity::Min.prefers(&3, &9));
    /// assert!(!Polarity::Max.prefers(&4, &4));
    /// ```
    #[inline]
    pub fn prefers<T: Item>(self, a: &T, b: &T) -> bool {
        match self {
            Polarity::Max => b.less(a),
            Polarity::Min => a.less(b),
        }
    }

    /// The other polarity.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Polarity::Max => Polarity::Min,
            Polarity::Min => Polarity::Max,
        }
    }

    /// Tag used in logs and by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Polarity::Max => "maxHeap",
            Polarity::Min => "minHeap",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Polarity {
    type Err = ParsePolarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maxHeap" | "max" => Ok(Polarity::Max),
            "minHeap" | "min" => Ok(Polarity::Min),
            other => Err(ParsePolarityError {
                input: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_is_strict() {
        assert!(Polarity::Max.prefers(&2, &1));
        assert!(!Polarity::Max.prefers(&1, &2));
        assert!(!Polarity::Max.prefers(&1, &1));

        assert!(Polarity::Min.prefers(&1, &2));
        assert!(!Polarity::Min.prefers(&2, &1));
        assert!(!Polarity::Min.prefers(&1, &1));
    }

    #[test]
    fn opposite_round_trips() {
        assert_eq!(Polarity::Max.opposite(), Polarity::Min);
        assert_eq!(Polarity::Min.opposite(), Polarity::Max);
        assert_eq!(Polarity::Max.opposite().opposite(), Polarity::Max);
    }

    #[test]
    fn parse_tags() {
        assert_eq!("maxHeap".parse::<Polarity>(), Ok(Polarity::Max));
        assert_eq!("minHeap".parse::<Polarity>(), Ok(Polarity::Min));
        assert_eq!("max".parse::<Polarity>(), Ok(Polarity::Max));
        assert_eq!("min".parse::<Polarity>(), Ok(Polarity::Min));
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        let err = "medianHeap".parse::<Polarity>().unwrap_err();
        assert_eq!(err.input, "medianHeap");
        assert_eq!(err.to_string(), "invalid heap polarity 'medianHeap'");
    }

    #[test]
    fn display_matches_parse() {
        for polarity in [Polarity::Max, Polarity::Min] {
            assert_eq!(polarity.to_string().parse::<Polarity>(), Ok(polarity));
        }
    }
}
