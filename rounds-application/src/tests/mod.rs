
pub mod prelude {
    use std::{
        cell::RefCell,
        collections::HashMap,
        result,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;

    pub use time::macros::{date, time};

    pub use rounds_entities::builders::*;

    pub use rounds_core::{
        entities::*,
        gateways::geocoding::GeocodingGateway,
        repositories::{Error as RepoError, *},
        usecases,
        util::pacing::Pacer,
    };

    pub use crate::{error::AppError, prelude as flows};

    pub type RepoResult<T> = result::Result<T, RepoError>;

    #[derive(Debug, Default)]
    pub struct MockStore {
        pub clients: RefCell<Vec<Client>>,
        pub appointments: RefCell<Vec<Appointment>>,
        pub mileage: RefCell<Vec<MileageEntry>>,
        pub route_prefs: RefCell<Option<RoutePrefs>>,
    }

    impl MockStore {
        pub fn with_clients(self, clients: Vec<Client>) -> Self {
            *self.clients.borrow_mut() = clients;
            self
        }

        pub fn with_appointments(self, appointments: Vec<Appointment>) -> Self {
            *self.appointments.borrow_mut() = appointments;
            self
        }
    }

    impl ClientRepo for MockStore {
        fn create_client(&self, client: &Client) -> RepoResult<()> {
            let mut clients = self.clients.borrow_mut();
            if clients.iter().any(|c| c.id == client.id) {
                return Err(RepoError::AlreadyExists);
            }
            clients.push(client.clone());
            Ok(())
        }

        fn get_client(&self, id: &Id) -> RepoResult<Client> {
            self.clients
                .borrow()
                .iter()
                .find(|client| client.id == *id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        fn all_clients(&self) -> RepoResult<Vec<Client>> {
            Ok(self.clients.borrow().clone())
        }

        fn count_clients(&self) -> RepoResult<usize> {
            Ok(self.clients.borrow().len())
        }
    }

    impl AppointmentRepo for MockStore {
        fn create_appointment(&self, appointment: &Appointment) -> RepoResult<()> {
            self.appointments.borrow_mut().push(appointment.clone());
            Ok(())
        }

        fn all_appointments(&self) -> RepoResult<Vec<Appointment>> {
            Ok(self.appointments.borrow().clone())
        }
    }

    impl MileageRepo for MockStore {
        fn create_mileage_entry(&self, entry: &MileageEntry) -> RepoResult<()> {
            self.mileage.borrow_mut().push(entry.clone());
            Ok(())
        }

        fn all_mileage_entries(&self) -> RepoResult<Vec<MileageEntry>> {
            Ok(self.mileage.borrow().clone())
        }
    }

    impl RoutePrefsRepo for MockStore {
        fn load_route_prefs(&self) -> RepoResult<Option<RoutePrefs>> {
            Ok(self.route_prefs.borrow().clone())
        }

        fn save_route_prefs(&self, prefs: &RoutePrefs) -> RepoResult<()> {
            *self.route_prefs.borrow_mut() = Some(prefs.clone());
            Ok(())
        }
    }

    /// Resolves addresses from a fixed table, instantly.
    #[derive(Debug, Default)]
    pub struct StaticGeocoder {
        locations: HashMap<String, GeoPoint>,
    }

    impl StaticGeocoder {
        pub fn with_location(mut self, address: &str, point: GeoPoint) -> Self {
            self.locations.insert(address.to_owned(), point);
            self
        }
    }

    #[async_trait]
    impl GeocodingGateway for StaticGeocoder {
        async fn resolve_address(&self, address: &Address) -> Option<GeoPoint> {
            self.locations.get(address.as_str()).copied()
        }
    }

    /// Counts lookups and never resolves anything.
    #[derive(Debug, Default)]
    pub struct CountingGeocoder {
        calls: AtomicUsize,
    }

    impl CountingGeocoder {
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GeocodingGateway for CountingGeocoder {
        async fn resolve_address(&self, _address: &Address) -> Option<GeoPoint> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            None
        }
    }
}
