use std::fmt;

/// Free-text description of a location, e.g. a street address or a
/// place name.
///
/// Surrounding whitespace is trimmed on construction. Emptiness is the
/// only property that is ever checked; everything else is left to the
/// geocoding service.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Address {
    fn from(from: String) -> Self {
        Self(from.trim().to_owned())
    }
}

impl From<&str> for Address {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<Address> for String {
    fn from(from: Address) -> Self {
        from.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
