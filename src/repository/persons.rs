//! Person storage

use crate::models::{Person, PersonId};

/// Storage interface for the person registry
pub trait PersonStore: Send + Sync {
    /// All persons in registration order
    fn all(&self) -> Vec<&Person>;

    fn get(&self, id: PersonId) -> Option<&Person>;

    fn get_mut(&mut self, id: PersonId) -> Option<&mut Person>;

    fn insert(&mut self, person: Person);
}

/// Vector-backed store with linear lookup
#[derive(Debug, Default)]
pub struct InMemoryPersonStore {
    persons: Vec<Person>,
}

impl PersonStore for InMemoryPersonStore {
    fn all(&self) -> Vec<&Person> {
        self.persons.iter().collect()
    }

    fn get(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.persons.iter_mut().find(|p| p.id == id)
    }

    fn insert(&mut self, person: Person) {
        self.persons.push(person);
    }
}
