// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use iterflux_iter::{cross_join, cross_join_all};
use iterflux_test_utils::test_data::{
    animal_cat, animal_dog, person_alice, person_bob, plant_rose,
};
use iterflux_test_utils::{assert_exhausted, CountingIter, SingleShot};

#[test]
fn test_pairs_vary_rightmost_fastest() {
    // Arrange
    let product = cross_join(([1, 2], ['a', 'b', 'c']));

    // Act
    let result: Vec<_> = product.collect();

    // Assert
    assert_eq!(
        result,
        vec![
            (1, 'a'),
            (1, 'b'),
            (1, 'c'),
            (2, 'a'),
            (2, 'b'),
            (2, 'c'),
        ]
    );
}

#[test]
fn test_three_heterogeneous_sources() {
    // Arrange
    let product = cross_join((vec![person_alice(), person_bob()], 1..=3, [true, false]));

    // Act
    let result: Vec<_> = product.collect();

    // Assert
    assert_eq!(result.len(), 12);
    assert_eq!(result.first(), Some(&(person_alice(), 1, true)));
    assert_eq!(result.last(), Some(&(person_bob(), 3, false)));
}

#[test]
fn test_single_source_wraps_each_element() {
    // Arrange
    let product = cross_join((vec![animal_dog(), animal_cat()],));

    // Act
    let result: Vec<_> = product.collect();

    // Assert
    assert_eq!(result, vec![(animal_dog(),), (animal_cat(),)]);
}

#[test]
fn test_empty_source_yields_nothing() {
    // Arrange
    let mut product = cross_join((1..=3, Vec::<char>::new(), [plant_rose()]));

    // Act & Assert
    assert_exhausted(&mut product);
}

#[test]
fn test_homogeneous_sources() {
    // Arrange
    let product = cross_join_all(vec![vec![1, 2], vec![3, 4]]);

    // Act
    let result: Vec<_> = product.collect();

    // Assert
    assert_eq!(
        result,
        vec![vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4]]
    );
}

#[test]
fn test_zero_sources_yield_nothing() {
    // Arrange
    let mut product = cross_join_all(Vec::<Vec<i32>>::new());

    // Act & Assert
    assert_exhausted(&mut product);
}

#[test]
fn test_single_shot_sources_are_snapshotted() {
    // Arrange
    let numbers = SingleShot::new(1..=2);
    let letters = SingleShot::new(['x', 'y'].into_iter());

    // Act
    let result: Vec<_> = cross_join((numbers, letters)).collect();

    // Assert
    assert_eq!(result, vec![(1, 'x'), (1, 'y'), (2, 'x'), (2, 'y')]);
}

#[test]
fn test_sources_are_not_pulled_before_first_next() {
    // Arrange
    let (left, left_counter) = CountingIter::new(1..=3);
    let (right, right_counter) = CountingIter::new(4..=5);
    let mut product = cross_join((left, right));

    // Act & Assert
    assert_eq!(left_counter.get(), 0);
    assert_eq!(right_counter.get(), 0);

    assert_eq!(product.next(), Some((1, 4)));
    assert_eq!(left_counter.get(), 3);
    assert_eq!(right_counter.get(), 2);
    assert_eq!(product.count(), 5);
}
