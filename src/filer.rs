use log::{debug, info, warn};

use crate::{
    content,
    error::FilerError,
    escape::xml_escape,
    model::{FilingOutcome, NoteReference, NoteRequest},
    note_store::{NoteStore, StoreOp},
    selection::SelectionProvider,
    settings::FilerSettings,
};

pub struct NoteFiler {
    store: Box<dyn NoteStore>,
    tag: String,
}

impl NoteFiler {
    pub fn new(store: Box<dyn NoteStore>, settings: &FilerSettings) -> Self {
        Self {
            store,
            tag: content::notebook_tag(&settings.notebook),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn file_note(&mut self, request: &NoteRequest) -> Result<FilingOutcome, FilerError> {
        if request.snippet.is_empty() {
            debug!("nothing selected, skipping");
            return Ok(FilingOutcome::NoOp);
        }
        if request.title.is_empty() {
            return Err(FilerError::MissingTitle);
        }

        let title = xml_escape(&request.title);
        let snippet = xml_escape(&request.snippet);
        let fragment = content::source_fragment(&xml_escape(&request.source_url));

        let result = self.apply(&title, &snippet, &fragment);
        match &result {
            Ok(outcome) => info!("{} note {:?}", outcome.label(), request.title),
            Err(err) => warn!("filing into {:?} abandoned: {err}", request.title),
        }
        result
    }

    pub fn file_selection(
        &mut self,
        provider: &dyn SelectionProvider,
        title: &str,
        source_url: &str,
    ) -> Result<FilingOutcome, FilerError> {
        let snippet = provider.selected_text().map_err(FilerError::Selection)?;
        self.file_note(&NoteRequest::new(title, source_url, snippet))
    }

    fn apply(
        &mut self,
        title: &str,
        snippet: &str,
        fragment: &str,
    ) -> Result<FilingOutcome, FilerError> {
        match self.existing_note(title)? {
            Some(note) => {
                debug!("appending to {note}");
                let current = self
                    .store
                    .get_note_content(&note)
                    .map_err(|e| FilerError::store(StoreOp::GetNoteContentsXml, e))?;
                let previous = content::unwrap_envelope(&current);
                let body = content::appended_body(previous, snippet, fragment);
                self.write_tag_display(&note, &body)?;
                Ok(FilingOutcome::Appended(note))
            }
            None => {
                let note = self
                    .store
                    .create_named_note(title)
                    .map_err(|e| FilerError::store(StoreOp::CreateNamedNote, e))?;
                debug!("created {note}");
                let body = content::new_note_body(title, snippet, fragment);
                self.write_tag_display(&note, &body)?;
                Ok(FilingOutcome::Created(note))
            }
        }
    }

    /// An empty reference from the lookup means "not found"; the existence
    /// check is only asked about real references.
    fn existing_note(&mut self, title: &str) -> Result<Option<NoteReference>, FilerError> {
        let note = self
            .store
            .find_note(title)
            .map_err(|e| FilerError::store(StoreOp::FindNote, e))?;
        if note.is_empty() {
            return Ok(None);
        }
        let exists = self
            .store
            .note_exists(&note)
            .map_err(|e| FilerError::store(StoreOp::NoteExists, e))?;
        Ok(exists.then_some(note))
    }

    fn write_tag_display(&mut self, note: &NoteReference, body: &str) -> Result<(), FilerError> {
        let written = self
            .store
            .set_note_content(note, &content::wrap_envelope(body))
            .map_err(|e| FilerError::store(StoreOp::SetNoteContentsXml, e))?;
        if !written {
            return Err(FilerError::store(
                StoreOp::SetNoteContentsXml,
                anyhow::anyhow!("store rejected the new content of {note}"),
            ));
        }
        self.store
            .add_tag_to_note(note, &self.tag)
            .map_err(|e| FilerError::store(StoreOp::AddTagToNote, e))?;
        self.store
            .display_note(note)
            .map_err(|e| FilerError::store(StoreOp::DisplayNote, e))
    }
}
