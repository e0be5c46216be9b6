// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Yields a separator between consecutive elements.
///
/// The separator is emitted only once the following element has been pulled,
/// so there is never a trailing separator.
#[derive(Debug, Clone)]
pub struct SeparatedBy<I: Iterator> {
    iter: I,
    separator: I::Item,
    pending: Option<I::Item>,
    started: bool,
}

impl<I: Iterator> SeparatedBy<I> {
    pub const fn new(iter: I, separator: I::Item) -> Self {
        Self {
            iter,
            separator,
            pending: None,
            started: false,
        }
    }
}

impl<I> Iterator for SeparatedBy<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(element) = self.pending.take() {
            return Some(element);
        }

        let element = self.iter.next()?;
        if !self.started {
            self.started = true;
            return Some(element);
        }

        self.pending = Some(element);
        Some(self.separator.clone())
    }
}

/// Extension trait providing separator interleaving for any iterator.
pub trait SeparatedByExt: Iterator + Sized {
    /// ```
    /// use iterflux_iter::SeparatedByExt;
    ///
    /// let csv: String = ["a", "b", "c"].into_iter().separated_by(",").collect();
    /// assert_eq!(csv, "a,b,c");
    /// ```
    fn separated_by(self, separator: Self::Item) -> SeparatedBy<Self>
    where
        Self::Item: Clone,
    {
        SeparatedBy::new(self, separator)
    }
}

impl<I: Iterator> SeparatedByExt for I {}
