// NOTE:
// Dates are stored as `2024-06-03`, times of day as `14:30` and
// distances as plain miles.

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use time::{format_description::BorrowedFormatItem, macros::format_description, Date, Time};

use rounds_core::entities::*;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

type Result<T> = std::result::Result<T, anyhow::Error>;

/// Everything that lives in the data file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Document {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clients: Vec<ClientRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub appointments: Vec<AppointmentRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mileage: Vec<MileageRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct AppointmentRecord {
    pub id: String,
    pub client_id: String,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct MileageRecord {
    pub id: String,
    pub date: String,
    pub miles: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RouteRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_address: Option<String>,
}

fn parse_date(date: &str) -> Result<Date> {
    Date::parse(date, DATE_FORMAT).with_context(|| format!("Invalid date: {date}"))
}

fn format_date(date: Date) -> Result<String> {
    Ok(date.format(DATE_FORMAT)?)
}

impl From<&Client> for ClientRecord {
    fn from(from: &Client) -> Self {
        let Client {
            id,
            name,
            address,
            phone,
            email,
            notes,
        } = from;
        Self {
            id: id.to_string(),
            name: name.clone(),
            address: address.as_ref().map(ToString::to_string),
            phone: phone.clone(),
            email: email.clone(),
            notes: notes.clone(),
        }
    }
}

impl From<ClientRecord> for Client {
    fn from(from: ClientRecord) -> Self {
        let ClientRecord {
            id,
            name,
            address,
            phone,
            email,
            notes,
        } = from;
        Self {
            id: id.into(),
            name,
            address: address.map(Into::into),
            phone,
            email,
            notes,
        }
    }
}

impl TryFrom<&Appointment> for AppointmentRecord {
    type Error = anyhow::Error;
    fn try_from(from: &Appointment) -> Result<Self> {
        let Appointment {
            id,
            client_id,
            date,
            time,
            location,
            notes,
        } = from;
        Ok(Self {
            id: id.to_string(),
            client_id: client_id.to_string(),
            date: format_date(*date)?,
            time: time.format(TIME_FORMAT)?,
            location: location.as_ref().map(ToString::to_string),
            notes: notes.clone(),
        })
    }
}

impl TryFrom<AppointmentRecord> for Appointment {
    type Error = anyhow::Error;
    fn try_from(from: AppointmentRecord) -> Result<Self> {
        let AppointmentRecord {
            id,
            client_id,
            date,
            time,
            location,
            notes,
        } = from;
        Ok(Self {
            id: id.into(),
            client_id: client_id.into(),
            date: parse_date(&date)?,
            time: Time::parse(&time, TIME_FORMAT)
                .with_context(|| format!("Invalid time of day: {time}"))?,
            location: location.map(Into::into),
            notes,
        })
    }
}

impl TryFrom<&MileageEntry> for MileageRecord {
    type Error = anyhow::Error;
    fn try_from(from: &MileageEntry) -> Result<Self> {
        let MileageEntry {
            id,
            date,
            distance,
            purpose,
            notes,
        } = from;
        Ok(Self {
            id: id.to_string(),
            date: format_date(*date)?,
            miles: distance.to_miles(),
            purpose: purpose.clone(),
            notes: notes.clone(),
        })
    }
}

impl TryFrom<MileageRecord> for MileageEntry {
    type Error = anyhow::Error;
    fn try_from(from: MileageRecord) -> Result<Self> {
        let MileageRecord {
            id,
            date,
            miles,
            purpose,
            notes,
        } = from;
        Ok(Self {
            id: id.into(),
            date: parse_date(&date)?,
            distance: Distance::try_from_miles(miles)
                .ok_or_else(|| anyhow!("Invalid distance: {miles}"))?,
            purpose,
            notes,
        })
    }
}

impl From<&RoutePrefs> for RouteRecord {
    fn from(from: &RoutePrefs) -> Self {
        let RoutePrefs {
            start_address,
            end_address,
        } = from;
        Self {
            start_address: start_address.as_ref().map(ToString::to_string),
            end_address: end_address.as_ref().map(ToString::to_string),
        }
    }
}

impl From<RouteRecord> for RoutePrefs {
    fn from(from: RouteRecord) -> Self {
        let RouteRecord {
            start_address,
            end_address,
        } = from;
        Self {
            start_address: start_address.map(Into::into),
            end_address: end_address.map(Into::into),
        }
    }
}
