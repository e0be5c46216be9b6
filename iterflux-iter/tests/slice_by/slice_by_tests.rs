// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use iterflux_iter::SliceByExt;
use iterflux_test_utils::test_data::{
    animal_cat, animal_dog, mixed_population, person_alice, person_bob, person_charlie,
    plant_rose,
};
use iterflux_test_utils::{assert_exhausted, naturals, CountingIter};

#[test]
fn test_slice_after_closes_on_match() {
    // Arrange
    let slices = (1..=10).slice_after(|x| x % 4 == 3);

    // Act
    let result: Vec<_> = slices.collect();

    // Assert
    assert_eq!(
        result,
        vec![vec![1, 2, 3], vec![4, 5, 6, 7], vec![8, 9, 10]]
    );
}

#[test]
fn test_slice_after_has_no_empty_tail() {
    // Arrange
    let mut slices = [1, 3].into_iter().slice_after(|x| *x == 3);

    // Act & Assert
    assert_eq!(slices.next(), Some(vec![1, 3]));
    assert_exhausted(&mut slices);
}

#[test]
fn test_slice_before_opens_on_match() {
    // Arrange
    let slices = (1..=10).slice_before(|x| x % 4 == 3);

    // Act
    let result: Vec<_> = slices.collect();

    // Assert
    assert_eq!(
        result,
        vec![vec![1, 2], vec![3, 4, 5, 6], vec![7, 8, 9, 10]]
    );
}

#[test]
fn test_slice_before_leading_match_yields_empty_slice() {
    // Arrange
    let slices = mixed_population()
        .into_iter()
        .slice_before(|data| data.is_person());

    // Act
    let result: Vec<_> = slices.collect();

    // Assert
    assert_eq!(
        result,
        vec![
            vec![],
            vec![person_alice()],
            vec![person_bob()],
            vec![person_charlie(), animal_dog(), animal_cat(), plant_rose()],
        ]
    );
}

#[test]
fn test_slice_when_breaks_between_non_consecutive() {
    // Arrange
    let numbers = [1, 2, 4, 9, 10, 11, 12, 15, 16, 19, 20, 21];
    let slices = numbers
        .into_iter()
        .slice_when(|previous, current| previous + 1 != *current);

    // Act
    let result: Vec<_> = slices.collect();

    // Assert
    assert_eq!(
        result,
        vec![
            vec![1, 2],
            vec![4],
            vec![9, 10, 11, 12],
            vec![15, 16],
            vec![19, 20, 21],
        ]
    );
}

#[test]
fn test_slice_when_without_breaks_yields_whole_input() {
    // Arrange
    let slices = (1..=4).slice_when(|_, _| false);

    // Act
    let result: Vec<_> = slices.collect();

    // Assert
    assert_eq!(result, vec![vec![1, 2, 3, 4]]);
}

#[test]
fn test_empty_input_slicing() {
    // Arrange
    let mut after = std::iter::empty::<i32>().slice_after(|_| true);
    let mut before = std::iter::empty::<i32>().slice_before(|_| true);
    let mut when = std::iter::empty::<i32>().slice_when(|_, _| true);

    // Act & Assert
    assert_exhausted(&mut after);
    assert_exhausted(&mut before);
    assert_eq!(when.next(), Some(Vec::new()));
    assert_exhausted(&mut when);
}

#[test]
fn test_slice_when_pairs_use_test_data() {
    // Arrange
    let slices = mixed_population()
        .into_iter()
        .slice_when(|previous, current| previous.is_person() != current.is_person());

    // Act
    let result: Vec<_> = slices.collect();

    // Assert
    assert_eq!(
        result,
        vec![
            vec![person_alice(), person_bob(), person_charlie()],
            vec![animal_dog(), animal_cat(), plant_rose()],
        ]
    );
}

#[test]
fn test_slicing_infinite_source_is_lazy() {
    // Arrange
    let slices = naturals().slice_after(|x| x % 3 == 2);

    // Act
    let result: Vec<_> = slices.take(2).collect();

    // Assert
    assert_eq!(result, vec![vec![0, 1, 2], vec![3, 4, 5]]);
}

#[test]
fn test_slice_before_pulls_one_element_past_the_slice() {
    // Arrange
    let (source, counter) = CountingIter::new(1..=10);
    let mut slices = source.slice_before(|x| x % 4 == 3);

    // Act & Assert
    assert_eq!(counter.get(), 0);
    assert_eq!(slices.next(), Some(vec![1, 2]));
    assert_eq!(counter.get(), 3);
}
