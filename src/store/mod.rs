// File-backed data store.
//
// The whole dataset is kept in memory and written back as a single
// TOML document. Mutations only touch the in-memory copy; `save`
// persists them explicitly.

use std::{
    cell::RefCell,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use rounds_core::{
    entities::*,
    repositories::{self, AppointmentRepo, ClientRepo, MileageRepo, RoutePrefsRepo},
};

mod models;

type RepoResult<T> = std::result::Result<T, repositories::Error>;

#[derive(Debug, Default)]
struct Dataset {
    clients: Vec<Client>,
    appointments: Vec<Appointment>,
    mileage: Vec<MileageEntry>,
    route_prefs: Option<RoutePrefs>,
}

impl TryFrom<models::Document> for Dataset {
    type Error = anyhow::Error;
    fn try_from(from: models::Document) -> Result<Self> {
        let models::Document {
            clients,
            appointments,
            mileage,
            route,
        } = from;
        Ok(Self {
            clients: clients.into_iter().map(Into::into).collect(),
            appointments: appointments
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_>>()?,
            mileage: mileage
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_>>()?,
            route_prefs: route.map(Into::into),
        })
    }
}

impl TryFrom<&Dataset> for models::Document {
    type Error = anyhow::Error;
    fn try_from(from: &Dataset) -> Result<Self> {
        let Dataset {
            clients,
            appointments,
            mileage,
            route_prefs,
        } = from;
        Ok(Self {
            clients: clients.iter().map(Into::into).collect(),
            appointments: appointments
                .iter()
                .map(TryInto::try_into)
                .collect::<Result<_>>()?,
            mileage: mileage
                .iter()
                .map(TryInto::try_into)
                .collect::<Result<_>>()?,
            route: route_prefs.as_ref().map(Into::into),
        })
    }
}

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    dataset: RefCell<Dataset>,
}

impl FileStore {
    /// Reads the data file or starts with an empty dataset if it does
    /// not exist yet.
    pub fn try_load<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let dataset = match fs::read_to_string(&path) {
            Ok(contents) => {
                let document: models::Document = toml::from_str(&contents)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                document.try_into()?
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("{} not found => start with an empty dataset.", path.display());
                Dataset::default()
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {}", path.display()));
            }
        };
        Ok(Self {
            path,
            dataset: RefCell::new(dataset),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        let document = models::Document::try_from(&*self.dataset.borrow())?;
        let contents = toml::to_string_pretty(&document)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        log::debug!("Saved data file {}", self.path.display());
        Ok(())
    }
}

impl ClientRepo for FileStore {
    fn create_client(&self, client: &Client) -> RepoResult<()> {
        let mut dataset = self.dataset.borrow_mut();
        if dataset.clients.iter().any(|c| c.id == client.id) {
            return Err(repositories::Error::AlreadyExists);
        }
        dataset.clients.push(client.clone());
        Ok(())
    }

    fn get_client(&self, id: &Id) -> RepoResult<Client> {
        self.dataset
            .borrow()
            .clients
            .iter()
            .find(|client| client.id == *id)
            .cloned()
            .ok_or(repositories::Error::NotFound)
    }

    fn all_clients(&self) -> RepoResult<Vec<Client>> {
        Ok(self.dataset.borrow().clients.clone())
    }

    fn count_clients(&self) -> RepoResult<usize> {
        Ok(self.dataset.borrow().clients.len())
    }
}

impl AppointmentRepo for FileStore {
    fn create_appointment(&self, appointment: &Appointment) -> RepoResult<()> {
        let mut dataset = self.dataset.borrow_mut();
        if dataset.appointments.iter().any(|a| a.id == appointment.id) {
            return Err(repositories::Error::AlreadyExists);
        }
        dataset.appointments.push(appointment.clone());
        Ok(())
    }

    fn all_appointments(&self) -> RepoResult<Vec<Appointment>> {
        Ok(self.dataset.borrow().appointments.clone())
    }
}

impl MileageRepo for FileStore {
    fn create_mileage_entry(&self, entry: &MileageEntry) -> RepoResult<()> {
        let mut dataset = self.dataset.borrow_mut();
        if dataset.mileage.iter().any(|e| e.id == entry.id) {
            return Err(repositories::Error::AlreadyExists);
        }
        dataset.mileage.push(entry.clone());
        Ok(())
    }

    fn all_mileage_entries(&self) -> RepoResult<Vec<MileageEntry>> {
        Ok(self.dataset.borrow().mileage.clone())
    }
}

impl RoutePrefsRepo for FileStore {
    fn load_route_prefs(&self) -> RepoResult<Option<RoutePrefs>> {
        Ok(self.dataset.borrow().route_prefs.clone())
    }

    fn save_route_prefs(&self, prefs: &RoutePrefs) -> RepoResult<()> {
        self.dataset.borrow_mut().route_prefs = Some(prefs.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, time};

    use rounds_entities::builders::*;

    use super::*;

    fn empty_store() -> FileStore {
        let dir = std::env::temp_dir();
        FileStore::try_load(dir.join(format!("rounds-test-{}.toml", Id::new()))).unwrap()
    }

    #[test]
    fn missing_file_starts_empty() {
        let store = empty_store();
        assert_eq!(0, store.count_clients().unwrap());
        assert!(store.all_appointments().unwrap().is_empty());
        assert!(store.all_mileage_entries().unwrap().is_empty());
        assert!(store.load_route_prefs().unwrap().is_none());
    }

    #[test]
    fn create_and_get_client() {
        let store = empty_store();
        let client = Client::build()
            .id("anna")
            .name("Anna")
            .address("1 First St")
            .finish();
        store.create_client(&client).unwrap();
        assert_eq!(client, store.get_client(&"anna".into()).unwrap());
        assert!(matches!(
            store.create_client(&client),
            Err(repositories::Error::AlreadyExists)
        ));
        assert!(matches!(
            store.get_client(&"nope".into()),
            Err(repositories::Error::NotFound)
        ));
    }

    #[test]
    fn persist_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.data.toml");

        let client = Client::build()
            .id("anna")
            .name("Anna")
            .address("1 First St, Springfield")
            .finish();
        let appointment = Appointment::build()
            .client(&client)
            .date(date!(2024 - 06 - 03))
            .time(time!(14:30))
            .location("9 Elsewhere Rd")
            .finish();
        let entry = MileageEntry::build()
            .date(date!(2024 - 06 - 03))
            .distance(12.5)
            .purpose("Client visits")
            .finish();
        let prefs = RoutePrefs {
            start_address: Some("Home Base".into()),
            end_address: None,
        };

        {
            let store = FileStore::try_load(&path).unwrap();
            store.create_client(&client).unwrap();
            store.create_appointment(&appointment).unwrap();
            store.create_mileage_entry(&entry).unwrap();
            store.save_route_prefs(&prefs).unwrap();
            store.save().unwrap();
        }

        let store = FileStore::try_load(&path).unwrap();
        assert_eq!(vec![client], store.all_clients().unwrap());
        assert_eq!(vec![appointment], store.all_appointments().unwrap());
        assert_eq!(vec![entry], store.all_mileage_entries().unwrap());
        assert_eq!(Some(prefs), store.load_route_prefs().unwrap());
    }

    #[test]
    fn filter_appointments_by_date() {
        let store = empty_store();
        let monday = Appointment::build().date(date!(2024 - 06 - 03)).finish();
        let tuesday = Appointment::build().date(date!(2024 - 06 - 04)).finish();
        store.create_appointment(&monday).unwrap();
        store.create_appointment(&tuesday).unwrap();
        assert_eq!(
            vec![monday],
            store.appointments_on(date!(2024 - 06 - 03)).unwrap()
        );
    }

    #[test]
    fn reject_corrupt_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.data.toml");
        fs::write(&path, "clients = 5\n").unwrap();
        assert!(FileStore::try_load(&path).is_err());
    }

    #[test]
    fn reject_unparsable_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.data.toml");
        fs::write(
            &path,
            r#"
            [[appointments]]
            id = "a"
            client-id = "anna"
            date = "yesterday"
            time = "14:30"
            "#,
        )
        .unwrap();
        assert!(FileStore::try_load(&path).is_err());
    }
}
