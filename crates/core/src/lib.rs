#![forbid(unsafe_code)]

pub mod model;
pub mod normalize;
pub mod session;
pub mod time;

pub use normalize::{Shape, normalize, normalize_with_shape};
pub use session::{QuestionStatus, QuizProgress, QuizSession, SessionError, SessionState};
pub use time::Clock;
