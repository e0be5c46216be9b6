// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use iterflux_iter::{zip, zip_longest, zip_strict, ZipExt};
use iterflux_test_utils::test_data::{
    animal_cat, animal_dog, person_alice, person_bob, person_charlie,
};
use iterflux_test_utils::{assert_exhausted, naturals, unwrap_value, CountingIter};

#[test]
fn test_zip_stops_at_shortest() {
    // Arrange
    let zipped = zip(([1, 2, 3], ["a", "b", "c", "d"]));

    // Act
    let result: Vec<_> = zipped.collect();

    // Assert
    assert_eq!(result, vec![(1, "a"), (2, "b"), (3, "c")]);
}

#[test]
fn test_zip_longest_pads_with_none() {
    // Arrange
    let zipped = zip_longest(([1, 2, 3], ["a", "b", "c", "d"]));

    // Act
    let result: Vec<_> = zipped.collect();

    // Assert
    assert_eq!(
        result,
        vec![
            (Some(1), Some("a")),
            (Some(2), Some("b")),
            (Some(3), Some("c")),
            (None, Some("d")),
        ]
    );
}

#[test]
fn test_zip_strict_with_equal_lengths() {
    // Arrange
    let mut zipped = zip_strict((
        vec![person_alice(), person_bob()],
        vec![animal_dog(), animal_cat()],
    ));

    // Act & Assert
    assert_eq!(
        unwrap_value(zipped.next()),
        (person_alice(), animal_dog())
    );
    assert_eq!(unwrap_value(zipped.next()), (person_bob(), animal_cat()));
    assert_exhausted(&mut zipped);
}

#[test]
fn test_three_heterogeneous_sources() {
    // Arrange
    let zipped = zip((1..=3, "xyz".chars(), [true, false, true]));

    // Act
    let result: Vec<_> = zipped.collect();

    // Assert
    assert_eq!(
        result,
        vec![(1, 'x', true), (2, 'y', false), (3, 'z', true)]
    );
}

#[test]
fn test_homogeneous_sources() {
    // Arrange
    let sources = vec![vec![1, 2], vec![3, 4, 5]];

    // Act
    let shortest: Vec<_> = zip(sources.clone()).collect();
    let longest: Vec<_> = zip_longest(sources).collect();

    // Assert
    assert_eq!(shortest, vec![vec![1, 3], vec![2, 4]]);
    assert_eq!(
        longest,
        vec![
            vec![Some(1), Some(3)],
            vec![Some(2), Some(4)],
            vec![None, Some(5)],
        ]
    );
}

#[test]
fn test_zero_sources_yield_nothing() {
    // Arrange
    let mut zipped = zip(Vec::<Vec<i32>>::new());
    let mut longest = zip_longest(Vec::<Vec<i32>>::new());
    let mut strict = zip_strict(Vec::<Vec<i32>>::new());

    // Act & Assert
    assert_exhausted(&mut zipped);
    assert_exhausted(&mut longest);
    assert!(strict.next().is_none());
}

#[test]
fn test_zip_with_infinite_source() {
    // Arrange
    let zipped = zip((naturals(), vec![person_charlie(), animal_dog()]));

    // Act
    let result: Vec<_> = zipped.collect();

    // Assert
    assert_eq!(result, vec![(0, person_charlie()), (1, animal_dog())]);
}

#[test]
fn test_binary_zip_longest_method() {
    // Arrange
    let zipped = [1, 2].into_iter().zip_longest(["a"]);

    // Act
    let result: Vec<_> = zipped.collect();

    // Assert
    assert_eq!(result, vec![(Some(1), Some("a")), (Some(2), None)]);
}

#[test]
fn test_zip_advances_every_source_each_step() {
    // Arrange
    let (longer, counter) = CountingIter::new(1..=3);
    let zipped = zip((vec![10], longer));

    // Act
    let result: Vec<_> = zipped.collect();

    // Assert - the second step pulls the longer source before stopping
    assert_eq!(result, vec![(10, 1)]);
    assert_eq!(counter.get(), 2);
}
