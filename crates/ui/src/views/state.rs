use dioxus::prelude::*;
use services::QuizServiceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    EmptySource,
    SourceUnavailable,
}

impl ViewError {
    #[must_use]
    pub fn from_service(err: &QuizServiceError) -> Self {
        match err {
            _ if err.is_empty_source() => Self::EmptySource,
            QuizServiceError::Source(_) => Self::SourceUnavailable,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Something went wrong. Please try again.",
            Self::EmptySource => {
                "No words found. Add rows with `word` and `meaning` columns to the word list."
            }
            Self::SourceUnavailable => {
                "Could not load the word list. Check the sheet link and its sharing settings."
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
