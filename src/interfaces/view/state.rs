use crate::{
    entities::job_posting::{JobField, JobForm, JobPosting, NewJobResponse},
    errors::AppError,
};

/// Everything the job screen displays. Each [`ViewMessage`] yields a new value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub form: JobForm,
    pub postings: Vec<JobPosting>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Edits and task completions, applied in arrival order.
#[derive(Debug)]
pub enum ViewMessage {
    FieldEdited { field: JobField, value: String },
    ListRequested,
    ListFinished(Result<Vec<JobPosting>, AppError>),
    CreateFinished(Result<NewJobResponse, AppError>),
}

impl ViewState {
    pub fn with_form(form: JobForm) -> Self {
        ViewState { form, ..Self::default() }
    }

    pub fn update(self, message: ViewMessage) -> Self {
        match message {
            ViewMessage::FieldEdited { field, value } => ViewState {
                form: self.form.with(field, value),
                ..self
            },
            ViewMessage::ListRequested => ViewState { loading: true, ..self },
            ViewMessage::ListFinished(Ok(postings)) => ViewState {
                postings,
                loading: false,
                ..self
            },
            // The previous listing stays on screen.
            ViewMessage::ListFinished(Err(e)) => ViewState {
                loading: false,
                error: Some(e.user_message()),
                ..self
            },
            // The listing is not refreshed after a create.
            ViewMessage::CreateFinished(Ok(_)) => ViewState {
                form: JobForm::default(),
                error: None,
                ..self
            },
            ViewMessage::CreateFinished(Err(e)) => ViewState {
                error: Some(e.user_message()),
                ..self
            },
        }
    }
}
