//! Upload form state.
//!
//! [`FormState`] holds everything the upload form edits: the selected
//! files, the instruction text and the [`SubmissionState`]. It has no
//! browser dependency, the file handle type is a parameter.

use crate::config::{FILES_FIELD, INSTRUCTION_FIELD};
use crate::types::{
    AppError, AppResult, FileId, MultipartForm, NamedFile, SelectedFile, SubmissionState,
};

#[derive(Clone, Debug)]
pub struct FormState<F> {
    files: Vec<SelectedFile<F>>,
    instruction: String,
    submission: SubmissionState,
    next_id: u64,
}

impl<F> FormState<F> {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            instruction: String::new(),
            submission: SubmissionState::Idle,
            next_id: 0,
        }
    }

    pub fn files(&self) -> &[SelectedFile<F>] {
        &self.files
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Append files in the order given. Returns the ids assigned to them.
    pub fn add_files<I>(&mut self, files: I) -> Vec<FileId>
    where
        I: IntoIterator<Item = F>,
        F: NamedFile,
    {
        files
            .into_iter()
            .map(|file| {
                let id = FileId(self.next_id);
                self.next_id += 1;
                self.files.push(SelectedFile::new(id, file.file_name(), file));
                id
            })
            .collect()
    }

    /// Remove the file with this id. Returns `false` if it was not selected.
    pub fn remove_file(&mut self, id: FileId) -> bool {
        let before = self.files.len();
        self.files.retain(|file| file.id() != id);
        self.files.len() != before
    }

    pub fn remove_all_files(&mut self) {
        self.files.clear();
    }

    /// Replace the instruction verbatim (no trimming).
    pub fn set_instruction(&mut self, text: impl Into<String>) {
        self.instruction = text.into();
    }

    /// Check that there is something to submit.
    pub fn validate(&self) -> AppResult<()> {
        if self.files.is_empty() {
            return Err(AppError::Validation("no files selected".to_string()));
        }
        if self.instruction.is_empty() {
            return Err(AppError::Validation("instruction is empty".to_string()));
        }
        Ok(())
    }

    /// Validate and enter [`SubmissionState::Submitting`].
    ///
    /// Returns the multipart payload to send: one `files` part per selected
    /// file in selection order, then the `instruction` part. On error the
    /// state is left untouched.
    pub fn begin_submit(&mut self) -> AppResult<MultipartForm<F>>
    where
        F: Clone,
    {
        if self.submission.is_submitting() {
            return Err(AppError::InFlight);
        }
        self.validate()?;

        let form = self
            .files
            .iter()
            .fold(MultipartForm::new(), |form, selected| {
                form.file(FILES_FIELD, selected.name(), selected.file().clone())
            })
            .text(INSTRUCTION_FIELD, self.instruction.clone());

        self.submission = SubmissionState::Submitting;
        Ok(form)
    }

    /// Leave [`SubmissionState::Submitting`] with the outcome of the request.
    ///
    /// Success moves to `Completed`, failure back to `Idle`.
    pub fn finish_submit(&mut self, downloaded: Option<String>) {
        self.submission = match downloaded {
            Some(filename) => SubmissionState::Completed { filename },
            None => SubmissionState::Idle,
        };
    }
}

impl<F> Default for FormState<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FormPart;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(&'static str);

    impl NamedFile for FakeFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn names(state: &FormState<FakeFile>) -> Vec<&str> {
        state.files().iter().map(|f| f.name()).collect()
    }

    #[test]
    fn test_add_files_appends_in_order() {
        let mut state = FormState::new();
        state.add_files([FakeFile("a.pdf"), FakeFile("b.docx")]);
        state.add_files([FakeFile("c.txt")]);

        assert_eq!(names(&state), vec!["a.pdf", "b.docx", "c.txt"]);
    }

    #[test]
    fn test_add_files_keeps_duplicate_names() {
        let mut state = FormState::new();
        let first = state.add_files([FakeFile("same.txt")]);
        let second = state.add_files([FakeFile("same.txt")]);

        assert_eq!(state.files().len(), 2);
        assert_ne!(first, second);
    }

    #[test]
    fn test_remove_file_by_identity() {
        let mut state = FormState::new();
        let ids = state.add_files([FakeFile("same.txt"), FakeFile("same.txt"), FakeFile("x.pdf")]);

        assert!(state.remove_file(ids[1]));
        assert_eq!(state.files().len(), 2);
        assert_eq!(state.files()[0].id(), ids[0]);
        assert_eq!(state.files()[1].id(), ids[2]);
    }

    #[test]
    fn test_remove_missing_file_is_noop() {
        let mut state = FormState::new();
        let ids = state.add_files([FakeFile("a.pdf")]);
        assert!(state.remove_file(ids[0]));

        assert!(!state.remove_file(ids[0]));
        assert!(!state.remove_file(FileId(42)));
        assert!(state.files().is_empty());
    }

    #[test]
    fn test_remove_all_then_validate_fails() {
        let mut state = FormState::new();
        state.add_files([FakeFile("a.pdf"), FakeFile("b.pdf")]);
        state.set_instruction("summarize");
        state.remove_all_files();

        assert!(matches!(state.validate(), Err(AppError::Validation(_))));
        assert!(matches!(state.begin_submit(), Err(AppError::Validation(_))));
        assert_eq!(state.submission(), &SubmissionState::Idle);
    }

    #[test]
    fn test_empty_instruction_is_rejected() {
        let mut state = FormState::new();
        state.add_files([FakeFile("a.pdf")]);

        assert!(matches!(state.begin_submit(), Err(AppError::Validation(_))));
        assert_eq!(state.submission(), &SubmissionState::Idle);
    }

    #[test]
    fn test_instruction_is_not_trimmed() {
        let mut state = FormState::new();
        state.add_files([FakeFile("a.pdf")]);
        state.set_instruction("  ");

        assert_eq!(state.instruction(), "  ");
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_begin_submit_builds_payload() {
        let mut state = FormState::new();
        state.add_files([FakeFile("a.pdf"), FakeFile("b.docx")]);
        state.set_instruction("summarize");

        let form = state.begin_submit().unwrap();

        assert_eq!(state.submission(), &SubmissionState::Submitting);
        assert_eq!(form.file_count(), 2);
        assert_eq!(
            form.parts(),
            &[
                FormPart::File {
                    field: "files",
                    filename: "a.pdf".to_string(),
                    file: FakeFile("a.pdf"),
                },
                FormPart::File {
                    field: "files",
                    filename: "b.docx".to_string(),
                    file: FakeFile("b.docx"),
                },
                FormPart::Text {
                    field: "instruction",
                    value: "summarize".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_begin_submit_refuses_while_in_flight() {
        let mut state = FormState::new();
        state.add_files([FakeFile("a.pdf")]);
        state.set_instruction("summarize");
        state.begin_submit().unwrap();

        assert_eq!(state.begin_submit(), Err(AppError::InFlight));
        assert_eq!(state.submission(), &SubmissionState::Submitting);
    }

    #[test]
    fn test_finish_submit_transitions() {
        let mut state = FormState::new();
        state.add_files([FakeFile("a.pdf")]);
        state.set_instruction("summarize");

        state.begin_submit().unwrap();
        state.finish_submit(Some("out.pdf".to_string()));
        assert_eq!(
            state.submission(),
            &SubmissionState::Completed {
                filename: "out.pdf".to_string()
            }
        );

        // A completed form can be submitted again.
        state.begin_submit().unwrap();
        assert!(state.submission().is_submitting());
        state.finish_submit(None);
        assert_eq!(state.submission(), &SubmissionState::Idle);
    }
}
