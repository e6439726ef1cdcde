use crate::{address::Address, id::Id};

/// A person or business that is visited regularly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: Id,
    pub name: String,
    /// Default visiting address of this client.
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}
