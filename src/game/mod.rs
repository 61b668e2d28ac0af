//! Game logic: answer selection, rounds, and sessions

mod round;
pub mod selector;
mod session;

pub use round::{Attempt, EvaluatedGuess, MAX_ATTEMPTS, Outcome, Round};
pub use selector::choose_answer;
pub use session::{Session, Turn};
