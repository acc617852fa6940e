use crate::extrema::Extrema;

/// Outcome of a successful scan: owned copies of the smallest and largest
/// elements observed, valid only once at least one element was seen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult<T> {
    pub min: T,
    pub max: T,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("input stream yielded no elements")]
pub struct EmptyInputError;

/// Scan failure: either the stream was empty, or the producer failed while
/// yielding an element. Producer errors are passed through uninspected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanError<E> {
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),
    #[error("failed to read element from source")]
    Source(E),
}

/// Computes the minimum and maximum of a single-pass element stream in one
/// forward traversal.
///
/// Ties keep the first-seen extremum. Fails with [`EmptyInputError`] if the
/// stream yields no elements; no partial result is ever produced.
pub fn scan<I>(stream: I) -> Result<ScanResult<I::Item>, EmptyInputError>
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
{
    let mut bounds = Extrema::new();
    bounds.extend(stream);
    into_result(bounds)
}

/// Like [`scan`], for producers that can fail mid-stream.
///
/// The first producer error aborts the scan and is surfaced unchanged as
/// [`ScanError::Source`].
pub fn try_scan<I, T, E>(stream: I) -> Result<ScanResult<T>, ScanError<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
    T: PartialOrd + Clone,
{
    let mut bounds = Extrema::new();
    for element in stream {
        bounds.observe(&element.map_err(ScanError::Source)?);
    }
    into_result(bounds).map_err(ScanError::from)
}

fn into_result<T: PartialOrd + Clone>(
    bounds: Extrema<T>,
) -> Result<ScanResult<T>, EmptyInputError> {
    let (min, max) = bounds.into_bounds().ok_or(EmptyInputError)?;
    Ok(ScanResult { min, max })
}
