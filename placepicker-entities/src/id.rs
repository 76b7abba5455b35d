use std::fmt;

/// Opaque identifier of a place as issued by the places provider.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PlaceId(String);

impl PlaceId {
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for PlaceId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for PlaceId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<PlaceId> for String {
    fn from(from: PlaceId) -> Self {
        from.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
