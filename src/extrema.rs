/// Running lower/upper bounds over a sequence of comparable values.
///
/// Values only need a partial order; a value incomparable to the current
/// bounds (e.g. a float NaN) replaces neither of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Extrema<T> {
    bounds: Option<(T, T)>,
}

impl<T: PartialOrd + Clone> Extrema<T> {
    pub fn new() -> Self {
        Self { bounds: None }
    }

    /// Folds one value into the running bounds.
    ///
    /// The first observed value seeds both bounds with independent copies.
    /// After that, comparisons are strict: among equal values the first one
    /// seen remains the retained extremum.
    pub fn observe(&mut self, value: &T) {
        match &mut self.bounds {
            None => self.bounds = Some((value.clone(), value.clone())),
            Some((min, max)) => {
                if *value < *min {
                    *min = value.clone();
                }
                if *value > *max {
                    *max = value.clone();
                }
            }
        }
    }

    pub fn min(&self) -> Option<&T> {
        self.bounds.as_ref().map(|(min, _)| min)
    }

    pub fn max(&self) -> Option<&T> {
        self.bounds.as_ref().map(|(_, max)| max)
    }

    /// `None` iff no value was ever observed.
    pub fn into_bounds(self) -> Option<(T, T)> {
        self.bounds
    }
}

impl<T: PartialOrd + Clone> Default for Extrema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd + Clone> Extend<T> for Extrema<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.observe(&value);
        }
    }
}
