// Low-level data access traits.
//
// Each repository is responsible for a single entity and its
// relationships. Related entities are only referenced by their id and
// never modified or loaded by another repository.

use std::io;

use thiserror::Error;
use time::Date;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ClientRepo {
    fn create_client(&self, client: &Client) -> Result<()>;
    fn get_client(&self, id: &Id) -> Result<Client>;
    fn all_clients(&self) -> Result<Vec<Client>>;
    fn count_clients(&self) -> Result<usize>;
}

pub trait AppointmentRepo {
    fn create_appointment(&self, appointment: &Appointment) -> Result<()>;
    fn all_appointments(&self) -> Result<Vec<Appointment>>;

    fn appointments_on(&self, date: Date) -> Result<Vec<Appointment>> {
        Ok(self
            .all_appointments()?
            .into_iter()
            .filter(|appointment| appointment.date == date)
            .collect())
    }
}

pub trait MileageRepo {
    fn create_mileage_entry(&self, entry: &MileageEntry) -> Result<()>;
    fn all_mileage_entries(&self) -> Result<Vec<MileageEntry>>;
}

pub trait RoutePrefsRepo {
    fn load_route_prefs(&self) -> Result<Option<RoutePrefs>>;
    fn save_route_prefs(&self, prefs: &RoutePrefs) -> Result<()>;
}
