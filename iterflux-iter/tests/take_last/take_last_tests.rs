// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use iterflux_iter::TakeLastExt;
use iterflux_test_utils::test_data::{animal_cat, mixed_population, plant_rose};
use iterflux_test_utils::{assert_exhausted, CountingIter};

#[test]
fn test_take_last_and_drop_last() {
    assert_eq!((1..=5).take_last(2).collect::<Vec<_>>(), vec![4, 5]);
    assert_eq!((1..=5).drop_last(2).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_count_beyond_length() {
    assert_eq!((1..=3).take_last(10).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!((1..=3).drop_last(10).next().is_none());
}

#[test]
fn test_zero_count() {
    // Arrange
    let mut taken = (1..=3).take_last(0);

    // Act & Assert
    assert_exhausted(&mut taken);
    assert_eq!((1..=3).drop_last(0).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_take_last_of_test_data() {
    // Act
    let result: Vec<_> = mixed_population().into_iter().take_last(2).collect();

    // Assert
    assert_eq!(result, vec![animal_cat(), plant_rose()]);
}

#[test]
fn test_suffix_while_predicate_holds() {
    // Arrange
    let values = [1, 5, 2, 4, 6];

    // Act
    let taken: Vec<_> = values.into_iter().take_last_while(|x| *x > 3).collect();
    let dropped: Vec<_> = values.into_iter().drop_last_while(|x| *x > 3).collect();

    // Assert
    assert_eq!(taken, vec![4, 6]);
    assert_eq!(dropped, vec![1, 5, 2]);
}

#[test]
fn test_suffix_when_every_element_matches() {
    // Arrange
    let values = [4, 5, 6];

    // Act
    let taken: Vec<_> = values.into_iter().take_last_while(|x| *x > 3).collect();
    let mut dropped = values.into_iter().drop_last_while(|x| *x > 3);

    // Assert
    assert_eq!(taken, vec![4, 5, 6]);
    assert_exhausted(&mut dropped);
}

#[test]
fn test_suffix_when_last_element_fails() {
    // Arrange
    let values = [7, 8, 1];

    // Act
    let mut taken = values.into_iter().take_last_while(|x| *x > 3);
    let dropped: Vec<_> = values.into_iter().drop_last_while(|x| *x > 3).collect();

    // Assert
    assert_exhausted(&mut taken);
    assert_eq!(dropped, vec![7, 8, 1]);
}

#[test]
fn test_snapshot_is_taken_on_first_pull() {
    // Arrange
    let (source, counter) = CountingIter::new(1..=6);
    let mut taken = source.take_last(1);

    // Act & Assert
    assert_eq!(counter.get(), 0);
    assert_eq!(taken.next(), Some(6));
    assert_eq!(counter.get(), 6);
    assert_exhausted(&mut taken);
}
