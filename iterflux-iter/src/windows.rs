// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed-size grouping: sliding windows, chunks and slices.
//!
//! | Operator  | Window advance    | Trailing partial group |
//! |-----------|-------------------|------------------------|
//! | `windows` | `step` elements   | dropped                |
//! | `chunks`  | `size` elements   | dropped                |
//! | `slices`  | `size` elements   | always yielded         |
//!
//! When `step < size` consecutive windows overlap and elements are cloned into
//! every window they belong to. When `step > size` the elements between
//! windows are pulled and discarded.
//!
//! ```
//! use iterflux_iter::WindowsExt;
//!
//! # fn main() -> iterflux_core::Result<()> {
//! let windows: Vec<_> = (1..=5).windows(3, 1)?.collect();
//! assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
//!
//! let slices: Vec<_> = (1..=5).slices(2)?.collect();
//! assert_eq!(slices, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! # Ok(())
//! # }
//! ```

use crate::validation::require_positive;
use iterflux_core::Result;

/// Non-overlapping window state: skip `gap` elements, then fill `size`.
#[derive(Debug, Clone)]
struct Gapped {
    size: usize,
    gap: usize,
    pending_skip: usize,
}

impl Gapped {
    const fn new(size: usize, step: usize) -> Self {
        Self {
            size,
            gap: step - size,
            pending_skip: 0,
        }
    }

    fn next_group<I: Iterator>(&mut self, iter: &mut I) -> Option<Vec<I::Item>> {
        while self.pending_skip > 0 {
            iter.next()?;
            self.pending_skip -= 1;
        }

        let mut group = Vec::with_capacity(self.size);
        while group.len() < self.size {
            group.push(iter.next()?);
        }

        self.pending_skip = self.gap;
        Some(group)
    }
}

/// Sliding windows of `size` elements advancing by `step`.
///
/// Created by [`WindowsExt::windows`].
#[derive(Debug, Clone)]
pub struct Windows<I: Iterator> {
    iter: I,
    size: usize,
    step: usize,
    buffer: Vec<I::Item>,
    gapped: Option<Gapped>,
    done: bool,
}

impl<I: Iterator> Windows<I> {
    pub fn new(iter: I, size: usize, step: usize) -> Result<Self> {
        let size = require_positive("size", size)?;
        let step = require_positive("step", step)?;
        let gapped = (step >= size).then(|| Gapped::new(size, step));

        Ok(Self {
            iter,
            size,
            step,
            buffer: Vec::new(),
            gapped,
            done: false,
        })
    }

    fn finish(&mut self) -> Option<Vec<I::Item>> {
        self.done = true;
        self.buffer = Vec::new();
        None
    }
}

impl<I> Iterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(gapped) = &mut self.gapped {
            return match gapped.next_group(&mut self.iter) {
                Some(window) => Some(window),
                None => self.finish(),
            };
        }

        while self.buffer.len() < self.size {
            match self.iter.next() {
                Some(item) => self.buffer.push(item),
                None => return self.finish(),
            }
        }

        let window = self.buffer.clone();
        self.buffer.drain(..self.step);
        Some(window)
    }
}

/// Consecutive, non-overlapping groups of exactly `size` elements.
///
/// Created by [`WindowsExt::chunks`].
#[derive(Debug, Clone)]
pub struct Chunks<I> {
    iter: I,
    gapped: Gapped,
    done: bool,
}

impl<I: Iterator> Chunks<I> {
    pub fn new(iter: I, size: usize) -> Result<Self> {
        let size = require_positive("size", size)?;

        Ok(Self {
            iter,
            gapped: Gapped::new(size, size),
            done: false,
        })
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let chunk = self.gapped.next_group(&mut self.iter);
        self.done = chunk.is_none();
        chunk
    }
}

/// Consecutive groups of up to `size` elements.
///
/// The last slice may be shorter, and is yielded even when empty: an input
/// whose length is a multiple of `size` (including an empty input) ends with
/// an empty slice.
///
/// Created by [`WindowsExt::slices`].
#[derive(Debug, Clone)]
pub struct Slices<I> {
    iter: I,
    size: usize,
    done: bool,
}

impl<I: Iterator> Slices<I> {
    pub fn new(iter: I, size: usize) -> Result<Self> {
        let size = require_positive("size", size)?;

        Ok(Self {
            iter,
            size,
            done: false,
        })
    }
}

impl<I: Iterator> Iterator for Slices<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut slice = Vec::with_capacity(self.size);
        for item in self.iter.by_ref() {
            slice.push(item);
            if slice.len() == self.size {
                return Some(slice);
            }
        }

        // The final slice is always flushed, even when it is empty.
        self.done = true;
        Some(slice)
    }
}

/// Extension trait providing fixed-size grouping for any iterator.
pub trait WindowsExt: Iterator + Sized {
    /// Groups elements into windows of `size`, starting a new window every
    /// `step` elements.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `size` or `step` is zero; nothing is pulled.
    fn windows(self, size: usize, step: usize) -> Result<Windows<Self>>
    where
        Self::Item: Clone,
    {
        Windows::new(self, size, step)
    }

    /// Groups elements into non-overlapping chunks of exactly `size`,
    /// dropping an incomplete final chunk.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `size` is zero.
    fn chunks(self, size: usize) -> Result<Chunks<Self>> {
        Chunks::new(self, size)
    }

    /// Groups elements into slices of `size`, always ending with a final,
    /// possibly shorter or empty, slice.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `size` is zero.
    fn slices(self, size: usize) -> Result<Slices<Self>> {
        Slices::new(self, size)
    }
}

impl<I: Iterator> WindowsExt for I {}
