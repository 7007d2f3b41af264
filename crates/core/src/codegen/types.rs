use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Errors raised while validating an incoming generation request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Description cannot be empty")]
    EmptyDescription,
}

/// A validated request for UI code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    description: String,
}

impl GenerationRequest {
    /// Build a request, rejecting empty or whitespace-only descriptions.
    ///
    /// The description is kept verbatim; it is not trimmed.
    pub fn new(description: impl Into<String>) -> Result<Self, RequestError> {
        let description = description.into();

        if description.trim().is_empty() {
            return Err(RequestError::EmptyDescription);
        }

        Ok(Self { description })
    }

    /// The natural-language description of the UI to generate.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Final text returned by an agent session.
///
/// `content` is `None` when the session produced no usable final message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentResponse {
    pub content: Option<String>,
}

impl AgentResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn empty() -> Self {
        Self { content: None }
    }
}

/// Which chain of agents produces the generated files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pipeline {
    /// A single developer agent (default)
    #[default]
    Developer,
    /// A developer agent followed by a designer agent that polishes its output
    Designer,
}

/// Flat, ordered mapping from project-relative file path to file content.
///
/// Keys encode directory structure (`src/App.tsx`) but the map itself is
/// never nested. Iteration follows insertion order, which for parsed maps is
/// the order the keys appear in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileMap(IndexMap<String, String>);

impl FileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.0.insert(path.into(), content.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    /// Remove a file from the map, keeping the order of the remaining entries.
    pub fn remove(&mut self, path: &str) -> Option<String> {
        self.0.shift_remove(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for FileMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for FileMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
