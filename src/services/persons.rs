//! Person registry and hour totals

use crate::{
    error::AppResult,
    models::{CreatePerson, Person, PersonHours, PersonHoursSummary, PersonId, UpdatePerson},
    repository::Repository,
    tracking::person_hours,
};

#[derive(Clone)]
pub struct PersonsService {
    repository: Repository,
}

impl PersonsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all persons in registration order
    pub async fn list(&self) -> Vec<Person> {
        let stores = self.repository.read().await;
        stores.persons.all().into_iter().cloned().collect()
    }

    pub async fn get(&self, id: PersonId) -> AppResult<Person> {
        let stores = self.repository.read().await;
        stores.person(id).cloned()
    }

    /// Register a new person
    pub async fn create(&self, data: CreatePerson) -> AppResult<Person> {
        let person = Person::new(self.repository.next_id(), data)?;
        let mut stores = self.repository.write().await;
        stores.persons.insert(person.clone());
        tracing::info!("Created person {} ({})", person.id, person.full_name());
        Ok(person)
    }

    /// Update contact fields and manual hours
    pub async fn update(&self, id: PersonId, data: UpdatePerson) -> AppResult<Person> {
        let mut stores = self.repository.write().await;
        let person = stores
            .persons
            .get_mut(id)
            .ok_or_else(|| crate::error::AppError::person_not_found(id))?;
        person.apply(data)?;
        tracing::info!("Updated person {}", id);
        Ok(person.clone())
    }

    /// Number of stored persons and events
    pub async fn store_sizes(&self) -> (usize, usize) {
        let stores = self.repository.read().await;
        (stores.persons.all().len(), stores.events.all().len())
    }

    /// Total and approved hours of one person, optionally for a single year
    pub async fn hours(&self, id: PersonId, year: Option<i32>) -> AppResult<PersonHours> {
        let stores = self.repository.read().await;
        let person = stores.person(id)?;
        let hours = person_hours(stores.events.all(), person, year);
        tracing::debug!("Hours of person {} (year {:?}): {:?}", id, year, hours);
        Ok(hours)
    }

    /// Hours of every registered person
    pub async fn hours_overview(&self, year: Option<i32>) -> Vec<PersonHoursSummary> {
        let stores = self.repository.read().await;
        let events = stores.events.all();
        stores
            .persons
            .all()
            .into_iter()
            .map(|person| {
                let hours = person_hours(events.iter().copied(), person, year);
                PersonHoursSummary {
                    person_id: person.id,
                    full_name: person.full_name(),
                    total_hours: hours.total_hours,
                    approved_hours: hours.approved_hours,
                }
            })
            .collect()
    }
}
