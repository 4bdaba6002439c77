pub mod candidate;
pub mod evaluate;
pub mod filter;
pub mod gate;
pub mod intent;
pub mod present;
pub mod ranking;

pub use candidate::{Candidate, CandidateKind, Pool};
pub use evaluate::{Evaluation, MatchStatus, evaluate};
pub use intent::{Intent, IntentClassifier, KeywordClassifier, PhraseTableError};
pub use present::PresentedEntry;
