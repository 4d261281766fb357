use std::fmt;

use uuid::Uuid;

const HYPHENATED_LEN: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses caller-supplied text. Only the hyphenated 8-4-4-4-12 form is
    /// accepted; padded, simple, braced and `urn:uuid:` spellings are rejected.
    pub fn parse(raw: &str) -> Result<Self, InvalidJobId> {
        if raw.len() != HYPHENATED_LEN {
            return Err(InvalidJobId(raw.to_string()));
        }
        Uuid::try_parse(raw)
            .map(Self)
            .map_err(|_| InvalidJobId(raw.to_string()))
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid job id: {0}")]
pub struct InvalidJobId(pub String);
