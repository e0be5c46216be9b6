// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Heterogeneous fixture records for keyed operators.
//!
//! The three record kinds share a display name, which makes them convenient
//! keys for `unique_by`, `intersect` and the grouping operators.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Animal {
    pub name: String,
    pub legs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Plant {
    pub species: String,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
    Plant(Plant),
}

impl TestData {
    /// The fixture's display name: person name, animal name or plant species.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            TestData::Person(p) => &p.name,
            TestData::Animal(a) => &a.name,
            TestData::Plant(p) => &p.species,
        }
    }

    #[must_use]
    pub const fn is_person(&self) -> bool {
        matches!(self, TestData::Person(_))
    }

    #[must_use]
    pub const fn is_animal(&self) -> bool {
        matches!(self, TestData::Animal(_))
    }

    #[must_use]
    pub const fn is_plant(&self) -> bool {
        matches!(self, TestData::Plant(_))
    }
}

pub fn person_alice() -> TestData {
    TestData::Person(Person {
        name: "Alice".to_string(),
        age: 25,
    })
}

pub fn person_bob() -> TestData {
    TestData::Person(Person {
        name: "Bob".to_string(),
        age: 30,
    })
}

pub fn person_charlie() -> TestData {
    TestData::Person(Person {
        name: "Charlie".to_string(),
        age: 35,
    })
}

pub fn person_diane() -> TestData {
    TestData::Person(Person {
        name: "Diane".to_string(),
        age: 40,
    })
}

pub fn animal_dog() -> TestData {
    TestData::Animal(Animal {
        name: "Dog".to_string(),
        legs: 4,
    })
}

pub fn animal_cat() -> TestData {
    TestData::Animal(Animal {
        name: "Cat".to_string(),
        legs: 4,
    })
}

pub fn animal_spider() -> TestData {
    TestData::Animal(Animal {
        name: "Spider".to_string(),
        legs: 8,
    })
}

pub fn animal_bird() -> TestData {
    TestData::Animal(Animal {
        name: "Bird".to_string(),
        legs: 2,
    })
}

pub fn animal_ant() -> TestData {
    TestData::Animal(Animal {
        name: "Ant".to_string(),
        legs: 6,
    })
}

pub fn plant_rose() -> TestData {
    TestData::Plant(Plant {
        species: "Rose".to_string(),
        height: 15,
    })
}

pub fn plant_sunflower() -> TestData {
    TestData::Plant(Plant {
        species: "Sunflower".to_string(),
        height: 180,
    })
}

pub fn plant_fern() -> TestData {
    TestData::Plant(Plant {
        species: "Fern".to_string(),
        height: 150,
    })
}

pub fn plant_oak() -> TestData {
    TestData::Plant(Plant {
        species: "Oak".to_string(),
        height: 1000,
    })
}

pub fn person(name: String, age: u32) -> TestData {
    TestData::Person(Person { name, age })
}

pub fn animal(name: String, legs: u32) -> TestData {
    TestData::Animal(Animal { name, legs })
}

pub fn plant(name: String, height: u32) -> TestData {
    TestData::Plant(Plant {
        species: name,
        height,
    })
}

/// Alice, Bob, Charlie, Dog, Cat, Rose: a mixed population in a fixed order.
pub fn mixed_population() -> Vec<TestData> {
    vec![
        person_alice(),
        person_bob(),
        person_charlie(),
        animal_dog(),
        animal_cat(),
        plant_rose(),
    ]
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestData::Person(p) => write!(f, "Person[name={}, age={}]", p.name, p.age),
            TestData::Animal(a) => write!(f, "Animal[name={}, legs={}]", a.name, a.legs),
            TestData::Plant(p) => {
                write!(f, "Plant[species={}, height={}]", p.species, p.height)
            }
        }
    }
}
