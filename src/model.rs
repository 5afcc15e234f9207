use std::fmt;

/// Opaque note identifier handed out by the note store, e.g.
/// `note://tomboy/0b4a...`. An empty reference means "no such note".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NoteReference(String);

impl NoteReference {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NoteReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRequest {
    pub title: String,
    pub source_url: String,
    pub snippet: String,
}

impl NoteRequest {
    pub fn new(
        title: impl Into<String>,
        source_url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source_url: source_url.into(),
            snippet: snippet.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilingOutcome {
    Created(NoteReference),
    Appended(NoteReference),
    NoOp,
}

impl FilingOutcome {
    pub fn reference(&self) -> Option<&NoteReference> {
        match self {
            FilingOutcome::Created(reference) | FilingOutcome::Appended(reference) => {
                Some(reference)
            }
            FilingOutcome::NoOp => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilingOutcome::Created(_) => "created",
            FilingOutcome::Appended(_) => "appended",
            FilingOutcome::NoOp => "nothing selected",
        }
    }
}
