use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::candidate::CandidateKind;

pub const DEFAULT_PROVIDER_PHRASES: &[&str] = &[
	"looking for",
	"searching for",
	"need a",
	"need an",
	"i need",
	"we need",
	"is there a",
	"is there an",
	"available",
	"can anyone recommend",
	"\u{0639}\u{0627}\u{064A}\u{0632} \u{062D}\u{062F}", // عايز حد
	"\u{0645}\u{062D}\u{062A}\u{0627}\u{062C} \u{062D}\u{062F}", // محتاج حد
	"\u{0645}\u{062D}\u{062A}\u{0627}\u{062C} \u{0648}\u{0627}\u{062D}\u{062F}", // محتاج واحد
	"\u{0628}\u{062F}\u{0648}\u{0631} \u{0639}\u{0644}\u{0649}", // بدور على
	"\u{0627}\u{0628}\u{062D}\u{062B} \u{0639}\u{0646}", // ابحث عن
	"\u{0645}\u{062A}\u{0627}\u{062D}", // متاح
];
pub const DEFAULT_REQUESTER_PHRASES: &[&str] = &[
	"someone needs",
	"somebody needs",
	"who needs",
	"who wants",
	"anyone who needs",
	"is there anyone who wants",
	"any requests",
	"\u{062D}\u{062F} \u{0645}\u{062D}\u{062A}\u{0627}\u{062C}", // حد محتاج
	"\u{0645}\u{064A}\u{0646} \u{0645}\u{062D}\u{062A}\u{0627}\u{062C}", // مين محتاج
	"\u{062D}\u{062F} \u{0639}\u{0627}\u{064A}\u{0632}", // حد عايز
	"\u{0645}\u{064A}\u{0646} \u{0639}\u{0627}\u{064A}\u{0632}", // مين عايز
];

/// Pragmatic goal of a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
	/// The user wants someone who offers a service.
	ProviderSeeking,
	/// The user wants someone who asked for a service.
	RequesterSeeking,
	Unknown,
}
impl Intent {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::ProviderSeeking => "provider_seeking",
			Self::RequesterSeeking => "requester_seeking",
			Self::Unknown => "unknown",
		}
	}

	/// Whether a candidate of `kind` answers this intent. `Unknown` accepts everything.
	pub fn accepts(self, kind: CandidateKind) -> bool {
		match self {
			Self::ProviderSeeking => kind == CandidateKind::Providing,
			Self::RequesterSeeking => kind == CandidateKind::Request,
			Self::Unknown => true,
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum PhraseTableError {
	#[error("Intent phrase {phrase:?} has no words after normalization.")]
	NoWords { phrase: String },
	#[error("Requester phrase {requester:?} can never match because it contains provider phrase {provider:?}.")]
	Shadowed { requester: String, provider: String },
}

pub trait IntentClassifier
where
	Self: Send + Sync,
{
	fn classify(&self, text: &str) -> Intent;
}

/// Phrase-table classifier.
///
/// Text and phrases go through [`normalize_words`] and a phrase matches only as a contiguous run
/// of whole words. Provider-seeking phrases are tried first, so a text matching both tables is
/// classified as [`Intent::ProviderSeeking`].
#[derive(Clone, Debug)]
pub struct KeywordClassifier {
	provider: Vec<Vec<String>>,
	requester: Vec<Vec<String>>,
}
impl KeywordClassifier {
	pub fn new<P, R>(provider_phrases: P, requester_phrases: R) -> Self
	where
		P: IntoIterator,
		P::Item: AsRef<str>,
		R: IntoIterator,
		R::Item: AsRef<str>,
	{
		Self { provider: phrase_table(provider_phrases), requester: phrase_table(requester_phrases) }
	}

	/// Builds the classifier from configured tables, or the built-in ones when `cfg` is `None`.
	///
	/// Configured tables are checked after normalization: every phrase must keep at least one
	/// word, and no requester phrase may contain a provider phrase as a word run, since the
	/// provider match would always win.
	pub fn from_config(cfg: Option<&souq_config::Intent>) -> Result<Self, PhraseTableError> {
		let Some(intent) = cfg else {
			return Ok(Self::default());
		};

		for phrase in intent.provider_phrases.iter().chain(&intent.requester_phrases) {
			if normalize_words(phrase).is_empty() {
				return Err(PhraseTableError::NoWords { phrase: phrase.clone() });
			}
		}

		let classifier = Self::new(&intent.provider_phrases, &intent.requester_phrases);

		for (requester, raw) in classifier.requester.iter().zip(&intent.requester_phrases) {
			if let Some(provider) =
				classifier.provider.iter().find(|provider| contains_phrase(requester, provider))
			{
				return Err(PhraseTableError::Shadowed {
					requester: raw.clone(),
					provider: provider.join(" "),
				});
			}
		}

		Ok(classifier)
	}
}
impl Default for KeywordClassifier {
	fn default() -> Self {
		Self::new(DEFAULT_PROVIDER_PHRASES, DEFAULT_REQUESTER_PHRASES)
	}
}
impl IntentClassifier for KeywordClassifier {
	fn classify(&self, text: &str) -> Intent {
		let words = normalize_words(text);

		if self.provider.iter().any(|phrase| contains_phrase(&words, phrase)) {
			return Intent::ProviderSeeking;
		}
		if self.requester.iter().any(|phrase| contains_phrase(&words, phrase)) {
			return Intent::RequesterSeeking;
		}

		Intent::Unknown
	}
}

/// Splits `text` into comparison words.
///
/// Applies NFKC and lowercasing, folds Arabic letter variants (hamza-carrying alefs to bare alef,
/// teh marbuta to heh, alef maksura to yeh) and drops tatweel and harakat, then segments on
/// Unicode word boundaries. Punctuation never forms a word.
pub fn normalize_words(text: &str) -> Vec<String> {
	let folded: String =
		text.nfkc().flat_map(char::to_lowercase).filter_map(fold_arabic).collect();

	folded.unicode_words().map(str::to_string).collect()
}

fn fold_arabic(ch: char) -> Option<char> {
	match ch {
		'\u{0622}' | '\u{0623}' | '\u{0625}' | '\u{0671}' => Some('\u{0627}'),
		'\u{0629}' => Some('\u{0647}'),
		'\u{0649}' => Some('\u{064A}'),
		'\u{0640}' | '\u{064B}'..='\u{065F}' | '\u{0670}' => None,
		_ => Some(ch),
	}
}

fn phrase_table<I>(phrases: I) -> Vec<Vec<String>>
where
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	phrases
		.into_iter()
		.map(|phrase| normalize_words(phrase.as_ref()))
		.filter(|words| !words.is_empty())
		.collect()
}

fn contains_phrase(words: &[String], phrase: &[String]) -> bool {
	words.windows(phrase.len()).any(|window| window == phrase)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn normalization_folds_arabic_variants() {
		// "أبحث" with hamza and a fatha, and "على" with alef maksura.
		let words = normalize_words("\u{0623}\u{064E}\u{0628}\u{062D}\u{062B} \u{0639}\u{0644}\u{0649}");

		assert_eq!(words, vec!["\u{0627}\u{0628}\u{062D}\u{062B}", "\u{0639}\u{0644}\u{064A}"]);
	}

	#[test]
	fn normalization_drops_punctuation_and_case() {
		assert_eq!(normalize_words("Need   an ELECTRICIAN?!"), vec!["need", "an", "electrician"]);
		assert!(normalize_words("?!  ...").is_empty());
	}

	#[test]
	fn phrases_match_whole_words_only() {
		let words = normalize_words("is there anyone who wants a tutor");

		assert!(!contains_phrase(&words, &normalize_words("is there a")));
		assert!(contains_phrase(&words, &normalize_words("is there anyone who wants")));
	}

	#[test]
	fn default_requester_phrases_are_reachable() {
		let provider = phrase_table(DEFAULT_PROVIDER_PHRASES);
		let requester = phrase_table(DEFAULT_REQUESTER_PHRASES);

		for phrase in &requester {
			assert!(
				provider.iter().all(|shadow| !contains_phrase(phrase, shadow)),
				"phrase: {phrase:?}"
			);
		}
	}
}
