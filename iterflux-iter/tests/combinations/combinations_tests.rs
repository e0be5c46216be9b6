// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use iterflux_iter::CombinationsExt;
use iterflux_test_utils::test_data::{person_alice, person_bob, person_charlie};
use iterflux_test_utils::{assert_exhausted, CountingIter};

#[test]
fn test_pairs_in_lexicographic_order() {
    // Arrange
    let combinations = "ABCD".chars().combinations(2);

    // Act
    let result: Vec<String> = combinations
        .map(|selection| selection.into_iter().collect())
        .collect();

    // Assert
    assert_eq!(result, ["AB", "AC", "AD", "BC", "BD", "CD"]);
}

#[test]
fn test_size_zero_yields_one_empty_selection() {
    // Arrange
    let mut combinations = (1..=3).combinations(0);

    // Act & Assert
    assert_eq!(combinations.next(), Some(Vec::new()));
    assert_exhausted(&mut combinations);
}

#[test]
fn test_size_zero_of_empty_input_yields_one_empty_selection() {
    // Arrange
    let mut combinations = std::iter::empty::<u8>().combinations(0);

    // Act & Assert
    assert_eq!(combinations.next(), Some(Vec::new()));
    assert_exhausted(&mut combinations);
}

#[test]
fn test_size_above_length_yields_nothing() {
    // Arrange
    let mut combinations = (1..=3).combinations(4);

    // Act & Assert
    assert_exhausted(&mut combinations);
}

#[test]
fn test_size_equal_to_length_yields_input() {
    // Arrange
    let mut combinations = (1..=3).combinations(3);

    // Act & Assert
    assert_eq!(combinations.next(), Some(vec![1, 2, 3]));
    assert_exhausted(&mut combinations);
}

#[test]
fn test_count_matches_binomial_coefficient() {
    assert_eq!((0..6).combinations(3).count(), 20);
    assert_eq!((0..10).combinations(1).count(), 10);
    assert_eq!((0..10).combinations(9).count(), 10);
}

#[test]
fn test_combinations_of_test_data() {
    // Arrange
    let people = vec![person_alice(), person_bob(), person_charlie()];

    // Act
    let result: Vec<_> = people.into_iter().combinations(2).collect();

    // Assert
    assert_eq!(
        result,
        vec![
            vec![person_alice(), person_bob()],
            vec![person_alice(), person_charlie()],
            vec![person_bob(), person_charlie()],
        ]
    );
}

#[test]
fn test_snapshot_is_taken_on_first_pull() {
    // Arrange
    let (source, counter) = CountingIter::new(1..=4);
    let mut combinations = source.combinations(2);

    // Act & Assert
    assert_eq!(counter.get(), 0);
    assert_eq!(combinations.next(), Some(vec![1, 2]));
    assert_eq!(counter.get(), 4);
    assert_eq!(combinations.count(), 5);
}
