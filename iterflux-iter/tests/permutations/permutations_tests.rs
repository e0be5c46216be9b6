// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use iterflux_iter::PermutationsExt;
use iterflux_test_utils::test_data::{animal_cat, animal_dog};
use iterflux_test_utils::{assert_exhausted, CountingIter};
use std::collections::HashSet;

#[test]
fn test_full_permutations_of_three() {
    // Arrange
    let permutations = [0, 1, 2].into_iter().permutations(None);

    // Act
    let result: Vec<_> = permutations.collect();

    // Assert
    assert_eq!(
        result,
        vec![
            vec![0, 1, 2],
            vec![0, 2, 1],
            vec![1, 0, 2],
            vec![1, 2, 0],
            vec![2, 0, 1],
            vec![2, 1, 0],
        ]
    );
}

#[test]
fn test_partial_permutations() {
    // Arrange
    let permutations = [1, 2, 3].into_iter().permutations(Some(2));

    // Act
    let result: Vec<_> = permutations.collect();

    // Assert
    assert_eq!(
        result,
        vec![
            vec![1, 2],
            vec![1, 3],
            vec![2, 1],
            vec![2, 3],
            vec![3, 1],
            vec![3, 2],
        ]
    );
}

#[test]
fn test_permutations_are_distinct_and_complete() {
    // Arrange
    let permutations = (0..5).permutations(Some(3));

    // Act
    let result: Vec<_> = permutations.collect();
    let distinct: HashSet<_> = result.iter().cloned().collect();

    // Assert
    assert_eq!(result.len(), 60);
    assert_eq!(distinct.len(), 60);
    assert!(result
        .iter()
        .all(|arrangement| arrangement.iter().collect::<HashSet<_>>().len() == 3));
}

#[test]
fn test_size_zero_yields_one_empty_arrangement() {
    // Arrange
    let mut permutations = (1..=3).permutations(Some(0));

    // Act & Assert
    assert_eq!(permutations.next(), Some(Vec::new()));
    assert_exhausted(&mut permutations);
}

#[test]
fn test_empty_input_has_one_empty_arrangement() {
    // Arrange
    let mut permutations = std::iter::empty::<i32>().permutations(None);

    // Act & Assert
    assert_eq!(permutations.next(), Some(Vec::new()));
    assert_exhausted(&mut permutations);
}

#[test]
fn test_size_above_length_yields_nothing() {
    // Arrange
    let mut permutations = (1..=3).permutations(Some(4));

    // Act & Assert
    assert_exhausted(&mut permutations);
}

#[test]
fn test_permutations_of_test_data() {
    // Arrange
    let animals = vec![animal_dog(), animal_cat()];

    // Act
    let result: Vec<_> = animals.into_iter().permutations(None).collect();

    // Assert
    assert_eq!(
        result,
        vec![
            vec![animal_dog(), animal_cat()],
            vec![animal_cat(), animal_dog()],
        ]
    );
}

#[test]
fn test_snapshot_is_taken_on_first_pull() {
    // Arrange
    let (source, counter) = CountingIter::new(0..4);
    let mut permutations = source.permutations(Some(2));

    // Act & Assert
    assert_eq!(counter.get(), 0);
    assert_eq!(permutations.next(), Some(vec![0, 1]));
    assert_eq!(counter.get(), 4);
}
