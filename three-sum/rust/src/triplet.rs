use std::{
    collections::{btree_set, BTreeSet},
    fmt::{self, Display, Formatter},
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TripletError {
    #[error("values sum to {sum}, not zero")]
    NonZeroSum { sum: i64 },
}

type Error = TripletError;
type Result<T> = std::result::Result<T, Error>;

/// Three values summing to zero, stored in non-decreasing order.
///
/// Field order matters: the derived `Ord` sorts by `a`, then `b`, then `c`,
/// which is the order the finder discovers triplets in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triplet {
    a: i32,
    b: i32,
    c: i32,
}

impl Triplet {
    /// Builds a triplet from three values in any order
    ///
    /// ```
    /// use three_sum::Triplet;
    ///
    /// let t = Triplet::new(2, -1, -1).unwrap();
    /// assert_eq!([-1, -1, 2], t.values());
    ///
    /// assert!(Triplet::new(1, 1, 1).is_err());
    /// ```
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self> {
        let mut values = [x, y, z];
        values.sort_unstable();
        let [a, b, c] = values;

        let triplet = Self { a, b, c };
        match triplet.sum() {
            0 => Ok(triplet),
            sum => Err(Error::NonZeroSum { sum }),
        }
    }

    /// Caller guarantees `a <= b <= c` and a zero sum
    pub(crate) fn from_sorted(a: i32, b: i32, c: i32) -> Self {
        debug_assert!(a <= b && b <= c);
        debug_assert_eq!(0, i64::from(a) + i64::from(b) + i64::from(c));
        Self { a, b, c }
    }

    pub fn a(&self) -> i32 {
        self.a
    }

    pub fn b(&self) -> i32 {
        self.b
    }

    pub fn c(&self) -> i32 {
        self.c
    }

    pub fn values(&self) -> [i32; 3] {
        [self.a, self.b, self.c]
    }

    /// Sum of the three values, widened so it cannot overflow
    pub fn sum(&self) -> i64 {
        i64::from(self.a) + i64::from(self.b) + i64::from(self.c)
    }
}

impl Display for Triplet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.a, self.b, self.c)
    }
}

impl From<Triplet> for [i32; 3] {
    fn from(value: Triplet) -> Self {
        value.values()
    }
}

impl From<Triplet> for Vec<i32> {
    fn from(value: Triplet) -> Self {
        value.values().to_vec()
    }
}

/// Distinct triplets, iterated by ascending `a` then `b`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Triplets {
    inner: BTreeSet<Triplet>,
}

impl Triplets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if an equal triplet was already present
    pub fn insert(&mut self, triplet: Triplet) -> bool {
        self.inner.insert(triplet)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, triplet: &Triplet) -> bool {
        self.inner.contains(triplet)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Triplet> {
        self.inner.iter()
    }

    /// List-of-lists shape, e.g. `[[-1, -1, 2], [-1, 0, 1]]`
    pub fn to_nested_vec(&self) -> Vec<Vec<i32>> {
        self.iter().map(|&t| t.into()).collect()
    }
}

impl Display for Triplets {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, triplet) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{triplet}")?;
        }
        write!(f, "]")
    }
}

impl FromIterator<Triplet> for Triplets {
    fn from_iter<I: IntoIterator<Item = Triplet>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Triplets {
    type Item = Triplet;
    type IntoIter = btree_set::IntoIter<Triplet>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Triplets {
    type Item = &'a Triplet;
    type IntoIter = btree_set::Iter<'a, Triplet>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
