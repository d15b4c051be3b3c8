pub mod session;
pub mod subject;

pub use session::{EventType, NewSession, Session, SessionIssue, SessionStatus};
pub use subject::Subject;
