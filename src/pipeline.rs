use std::time::Instant;

use enough::Stop;
use log::{debug, trace};

use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::filters::Filter;

/// An ordered list of [`Filter`]s applied left to right.
///
/// Each filter consumes the previous output. The first error aborts the
/// remaining filters and is returned as-is; no partially filtered image is
/// handed back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pipeline {
    filters: Vec<Filter>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `filter` (builder style).
    #[must_use]
    pub fn with(mut self, filter: impl Into<Filter>) -> Self {
        self.filters.push(filter.into());
        self
    }

    pub fn push(&mut self, filter: impl Into<Filter>) {
        self.filters.push(filter.into());
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Fold every filter over `image`.
    pub fn apply(&self, image: PixelBuffer, stop: impl Stop) -> Result<PixelBuffer, BitmapError> {
        let start = Instant::now();
        debug!(
            "running {} filter(s) on {}x{} image",
            self.filters.len(),
            image.width(),
            image.height()
        );

        let mut image = image;
        for filter in &self.filters {
            stop.check()?;
            let filter_start = Instant::now();
            image = filter.run(image, &stop)?;
            trace!(
                "{} -> {}x{} in {:?}",
                filter.name(),
                image.width(),
                image.height(),
                filter_start.elapsed()
            );
        }

        debug!("pipeline finished in {:?}", start.elapsed());
        Ok(image)
    }
}

impl From<Vec<Filter>> for Pipeline {
    fn from(filters: Vec<Filter>) -> Self {
        Self { filters }
    }
}

impl FromIterator<Filter> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl Extend<Filter> for Pipeline {
    fn extend<I: IntoIterator<Item = Filter>>(&mut self, iter: I) {
        self.filters.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Pipeline {
    type Item = &'a Filter;
    type IntoIter = core::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}
