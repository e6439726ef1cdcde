use itertools::Itertools as _;

use super::prelude::*;

/// Returns all entries of the mileage log, newest first.
pub fn mileage_log<R>(repo: &R) -> Result<Vec<MileageEntry>>
where
    R: MileageRepo,
{
    Ok(repo
        .all_mileage_entries()?
        .into_iter()
        .sorted_by(|a, b| b.date.cmp(&a.date))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use time::macros::date;

    use rounds_entities::builders::*;

    use crate::usecases::tests::MockStore;

    #[test]
    fn entries_are_sorted_newest_first() {
        let store = MockStore::default();
        for date in [
            date!(2024 - 06 - 03),
            date!(2024 - 06 - 10),
            date!(2024 - 06 - 07),
        ] {
            store
                .mileage
                .borrow_mut()
                .push(MileageEntry::build().date(date).distance(1.0).finish());
        }

        let log = mileage_log(&store).unwrap();

        let dates: Vec<_> = log.iter().map(|entry| entry.date).collect();
        assert_eq!(
            vec![
                date!(2024 - 06 - 10),
                date!(2024 - 06 - 07),
                date!(2024 - 06 - 03)
            ],
            dates
        );
    }

    #[test]
    fn an_empty_log_stays_empty() {
        let store = MockStore::default();
        assert!(mileage_log(&store).unwrap().is_empty());
    }
}
