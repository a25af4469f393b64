use services::GenerationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Busy,
    NoQuestions,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_generation(err: &GenerationError) -> Self {
        match err {
            GenerationError::Busy => ViewError::Busy,
            GenerationError::UnrecognizedPayload => ViewError::NoQuestions,
            _ => ViewError::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Busy => "Questions are already being generated.",
            ViewError::NoQuestions => "No questions came back. Try another topic.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}
