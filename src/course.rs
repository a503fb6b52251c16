use core::fmt;
use serde::{Deserialize, Serialize};

/// A single catalog entry: identifier, title and the identifiers of the
/// courses it requires, in the order the catalog declared them.
///
/// `Course::default()` is the "not found" sentinel: empty id and title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: String,
    title: String,
    #[serde(default)]
    prerequisites: Vec<String>,
}

impl Course {
    pub fn new<I, T, P>(id: I, title: T, prerequisites: P) -> Self
    where
        I: Into<String>,
        T: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// True for the empty record handed back when a lookup misses.
    pub fn is_sentinel(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.title)
    }
}
