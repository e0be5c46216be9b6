// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Unit-step counting over any [`Numeric`] type.
//!
//! ```
//! use iterflux_iter::range;
//!
//! assert_eq!(range(0, Some(5)).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
//! assert_eq!(range(5, Some(0)).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
//! assert_eq!(range(1000_u64, None).take(3).collect::<Vec<_>>(), vec![1000, 1001, 1002]);
//! ```

use iterflux_core::Numeric;

/// Counts by one from `start` towards an exclusive `end`.
///
/// Created by [`range`]. Counts down when `end < start` and never stops when
/// there is no end; an unbounded count over a fixed-width integer overflows
/// like `+` does once the type's maximum is passed.
#[derive(Debug, Clone)]
pub struct NumericRange<N> {
    current: N,
    end: Option<N>,
    descending: bool,
    done: bool,
}

impl<N: Numeric> Iterator for NumericRange<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        if self.done {
            return None;
        }

        let in_bounds = match &self.end {
            None => true,
            Some(end) if self.descending => self.current > *end,
            Some(end) => self.current < *end,
        };

        if !in_bounds {
            self.done = true;
            return None;
        }

        let next = if self.descending {
            self.current.predecessor()
        } else {
            self.current.successor()
        };
        Some(core::mem::replace(&mut self.current, next))
    }
}

/// Yields `start`, `start ± 1`, ... up to but excluding `end`.
pub fn range<N: Numeric>(start: N, end: Option<N>) -> NumericRange<N> {
    let descending = end.as_ref().is_some_and(|end| start > *end);

    NumericRange {
        current: start,
        end,
        descending,
        done: false,
    }
}
