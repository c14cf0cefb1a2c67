pub mod lexicon;
pub mod ranked_answer;
pub mod request;
pub mod synonym;

pub use lexicon::{Sense, ServiceWord};
pub use ranked_answer::RankedAnswer;
pub use request::{NewRequest, Request};
pub use synonym::Synonym;
