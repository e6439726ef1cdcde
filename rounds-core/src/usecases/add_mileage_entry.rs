use time::Date;

use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewMileageEntry {
    pub date: Date,
    /// Distance in miles.
    pub distance: f64,
    pub purpose: Option<String>,
    pub notes: Option<String>,
}

/// Validates and stores a new entry of the mileage log.
pub fn add_mileage_entry<R>(repo: &R, new_entry: NewMileageEntry) -> Result<MileageEntry>
where
    R: MileageRepo,
{
    let NewMileageEntry {
        date,
        distance,
        purpose,
        notes,
    } = new_entry;
    let distance = Distance::try_from_miles(distance).ok_or(Error::Distance)?;
    let entry = MileageEntry {
        id: Id::new(),
        date,
        distance,
        purpose: non_blank(purpose),
        notes: non_blank(notes),
    };
    log::debug!("Adding mileage entry {} ({} mi)", entry.id, entry.distance);
    repo.create_mileage_entry(&entry)?;
    Ok(entry)
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    use time::macros::date;

    use crate::usecases::tests::MockStore;

    fn new_entry(distance: f64) -> NewMileageEntry {
        NewMileageEntry {
            date: date!(2024 - 06 - 03),
            distance,
            purpose: Some("Client visits".into()),
            notes: None,
        }
    }

    #[test]
    fn stores_a_valid_entry() {
        let store = MockStore::default();
        let entry = add_mileage_entry(&store, new_entry(12.5)).unwrap();
        assert_eq!(Distance::from_miles(12.5), entry.distance);
        assert_eq!(Some("Client visits".into()), entry.purpose);
        assert_eq!(vec![entry], *store.mileage.borrow());
    }

    #[test]
    fn rejects_invalid_distances() {
        let store = MockStore::default();
        for miles in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                add_mileage_entry(&store, new_entry(miles)),
                Err(Error::Distance)
            ));
        }
        assert!(store.mileage.borrow().is_empty());
    }

    #[test]
    fn blank_purpose_and_notes_are_dropped() {
        let store = MockStore::default();
        let entry = add_mileage_entry(
            &store,
            NewMileageEntry {
                date: date!(2024 - 06 - 03),
                distance: 1.0,
                purpose: Some("   ".into()),
                notes: Some("".into()),
            },
        )
        .unwrap();
        assert_eq!(None, entry.purpose);
        assert_eq!(None, entry.notes);
    }
}
