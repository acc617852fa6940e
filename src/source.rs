use std::convert::Infallible;

use crate::scan::{try_scan, ScanError, ScanResult};

/// A collaborator able to expose its values as a single-pass element
/// stream — e.g. a decoded image handing out its pixel sequence.
///
/// Taking `self` by value makes the stream producible exactly once; a
/// source cannot be shared across scans or threads.
pub trait ElementSource {
    type Element: PartialOrd + Clone;
    /// Producer-side failure; scans pass it through uninspected.
    type Error;
    type Elements: Iterator<Item = Result<Self::Element, Self::Error>>;

    fn into_elements(self) -> Self::Elements;
}

/// Already-materialized values acting as a source; cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySource<T> {
    values: Vec<T>,
}

impl<T> MemorySource<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T: PartialOrd + Clone> ElementSource for MemorySource<T> {
    type Element = T;
    type Error = Infallible;
    type Elements = std::iter::Map<std::vec::IntoIter<T>, fn(T) -> Result<T, Infallible>>;

    fn into_elements(self) -> Self::Elements {
        self.values.into_iter().map(Ok)
    }
}

/// Wires a producer to the scanner: open the element stream, scan it, and
/// return the extrema or the first failure.
pub fn scan_source<S>(source: S) -> Result<ScanResult<S::Element>, ScanError<S::Error>>
where
    S: ElementSource,
{
    try_scan(source.into_elements())
}
