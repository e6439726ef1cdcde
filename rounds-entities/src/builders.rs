use time::macros::{date, time};

use crate::{address::Address, appointment::Appointment, client::Client, geo::Distance, id::Id, mileage::MileageEntry};

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{appointment_builder::*, client_builder::*, mileage_entry_builder::*};

pub mod client_builder {
    use super::*;

    impl Builder for Client {
        type Build = ClientBuild;
        fn build() -> Self::Build {
            ClientBuild {
                client: Client {
                    id: Id::new(),
                    name: String::new(),
                    address: None,
                    phone: None,
                    email: None,
                    notes: None,
                },
            }
        }
    }

    #[derive(Debug)]
    pub struct ClientBuild {
        client: Client,
    }

    impl ClientBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.client.id = id.into();
            self
        }

        pub fn name(mut self, name: &str) -> Self {
            self.client.name = name.into();
            self
        }

        pub fn address(mut self, address: &str) -> Self {
            self.client.address = Some(Address::from(address));
            self
        }

        pub fn finish(self) -> Client {
            self.client
        }
    }
}

pub mod appointment_builder {
    use super::*;
    use time::{Date, Time};

    impl Builder for Appointment {
        type Build = AppointmentBuild;
        fn build() -> Self::Build {
            AppointmentBuild {
                appointment: Appointment {
                    id: Id::new(),
                    client_id: Id::new(),
                    date: date!(2001 - 01 - 01),
                    time: time!(09:00),
                    location: None,
                    notes: None,
                },
            }
        }
    }

    #[derive(Debug)]
    pub struct AppointmentBuild {
        appointment: Appointment,
    }

    impl AppointmentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.appointment.id = id.into();
            self
        }

        pub fn client(mut self, client: &Client) -> Self {
            self.appointment.client_id = client.id.clone();
            self
        }

        pub fn client_id(mut self, client_id: &str) -> Self {
            self.appointment.client_id = client_id.into();
            self
        }

        pub fn date(mut self, date: Date) -> Self {
            self.appointment.date = date;
            self
        }

        pub fn time(mut self, time: Time) -> Self {
            self.appointment.time = time;
            self
        }

        pub fn location(mut self, location: &str) -> Self {
            self.appointment.location = Some(Address::from(location));
            self
        }

        pub fn finish(self) -> Appointment {
            self.appointment
        }
    }
}

pub mod mileage_entry_builder {
    use super::*;
    use time::Date;

    impl Builder for MileageEntry {
        type Build = MileageEntryBuild;
        fn build() -> Self::Build {
            MileageEntryBuild {
                entry: MileageEntry {
                    id: Id::new(),
                    date: date!(2001 - 01 - 01),
                    distance: Distance::ZERO,
                    purpose: None,
                    notes: None,
                },
            }
        }
    }

    #[derive(Debug)]
    pub struct MileageEntryBuild {
        entry: MileageEntry,
    }

    impl MileageEntryBuild {
        pub fn date(mut self, date: Date) -> Self {
            self.entry.date = date;
            self
        }

        pub fn distance(mut self, miles: f64) -> Self {
            self.entry.distance = Distance::from_miles(miles);
            self
        }

        pub fn purpose(mut self, purpose: &str) -> Self {
            self.entry.purpose = Some(purpose.into());
            self
        }

        pub fn finish(self) -> MileageEntry {
            self.entry
        }
    }
}
