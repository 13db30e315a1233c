// ── Password generation ──
//
// Pure generation of WPA passphrases from validated constraints. Uses
// `OsRng` directly from the operating system's CSPRNG -- output must never
// be reproducible across calls.
//
// Feasibility is checked before any sampling: a spec whose word count,
// length window, and delimiter cannot land inside the controller's 8..=63
// byte bound is a configuration error, not a retry loop.

use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::wordlist::WORDS;

/// The controller accepts WPA passphrases of 8 through 63 bytes.
pub const WPA_MIN_LEN: usize = 8;
pub const WPA_MAX_LEN: usize = 63;

/// Character set for the random method: mixed-case alphanumerics plus
/// router-safe symbols.
const RANDOM_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&*+-=?@_";

/// Bounded sampling attempts for the passphrase method. With feasibility
/// proven up front, a handful of draws is always enough in practice.
const MAX_SAMPLING_ATTEMPTS: usize = 64;

/// How a password is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Dictionary words joined by a delimiter.
    Passphrase,
    /// Arbitrary characters from [`RANDOM_CHARSET`].
    Random,
}

/// Delimiter between passphrase words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Space,
    Dash,
    None,
}

impl Delimiter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Dash => "-",
            Self::None => "",
        }
    }
}

/// Constraints for one password generation call.
///
/// Ranges mirror the host platform's service schema: word lengths 3..=9,
/// word count 3..=6, character count 8..=63. The generator re-validates
/// defensively -- an out-of-range spec must fail before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordSpec {
    pub method: Method,
    #[serde(default)]
    pub delimiter: Delimiter,
    /// Minimum word length (passphrase method).
    pub min_length: usize,
    /// Maximum word length (passphrase method).
    pub max_length: usize,
    /// Number of words (passphrase method).
    pub word_count: usize,
    /// Exact output length (random method).
    pub char_count: usize,
}

impl Default for PasswordSpec {
    fn default() -> Self {
        Self {
            method: Method::Passphrase,
            delimiter: Delimiter::Space,
            min_length: 5,
            max_length: 8,
            word_count: 4,
            char_count: 24,
        }
    }
}

impl PasswordSpec {
    /// Generate a password satisfying this spec.
    ///
    /// Blocking (random-number acquisition); use [`generate_password`] from
    /// async contexts.
    pub fn generate(&self) -> Result<String, CoreError> {
        self.validate()?;
        match self.method {
            Method::Passphrase => self.generate_passphrase(),
            Method::Random => Ok(Self::generate_random(self.char_count)),
        }
    }

    /// Reject out-of-range values before touching the RNG.
    fn validate(&self) -> Result<(), CoreError> {
        if self.min_length > self.max_length {
            return Err(invalid(format!(
                "min_length ({}) must be less than or equal to max_length ({})",
                self.min_length, self.max_length
            )));
        }
        if !(3..=9).contains(&self.min_length) || !(3..=9).contains(&self.max_length) {
            return Err(invalid("word lengths must be between 3 and 9"));
        }
        if !(3..=6).contains(&self.word_count) {
            return Err(invalid("word_count must be between 3 and 6"));
        }
        if !(WPA_MIN_LEN..=WPA_MAX_LEN).contains(&self.char_count) {
            return Err(invalid(format!(
                "char_count must be between {WPA_MIN_LEN} and {WPA_MAX_LEN}"
            )));
        }
        Ok(())
    }

    fn generate_passphrase(&self) -> Result<String, CoreError> {
        let pool: Vec<&str> = WORDS
            .iter()
            .copied()
            .filter(|w| (self.min_length..=self.max_length).contains(&w.len()))
            .collect();
        if pool.is_empty() {
            return Err(invalid(format!(
                "no dictionary words with length {}..={}",
                self.min_length, self.max_length
            )));
        }

        // Feasibility against the WPA bound, using the lengths actually
        // present in the filtered pool.
        let shortest = pool.iter().map(|w| w.len()).min().unwrap_or(0);
        let longest = pool.iter().map(|w| w.len()).max().unwrap_or(0);
        let delim_total = self.delimiter.as_str().len() * (self.word_count - 1);
        let lo = self.word_count * shortest + delim_total;
        let hi = self.word_count * longest + delim_total;
        if hi < WPA_MIN_LEN || lo > WPA_MAX_LEN {
            return Err(invalid(format!(
                "passphrase length range {lo}..={hi} cannot satisfy the \
                 {WPA_MIN_LEN}..={WPA_MAX_LEN} passphrase bound"
            )));
        }

        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            let words: Vec<&str> = (0..self.word_count)
                .map(|_| pool.choose(&mut OsRng).copied().unwrap_or(pool[0]))
                .collect();
            let candidate = words.join(self.delimiter.as_str());
            if (WPA_MIN_LEN..=WPA_MAX_LEN).contains(&candidate.len()) {
                return Ok(candidate);
            }
        }

        // Reachable only for pathological pools; still bounded.
        Err(invalid(
            "could not sample a passphrase within the length bound",
        ))
    }

    fn generate_random(char_count: usize) -> String {
        (0..char_count)
            .map(|_| {
                let idx = OsRng.gen_range(0..RANDOM_CHARSET.len());
                char::from(RANDOM_CHARSET[idx])
            })
            .collect()
    }
}

/// Generate a password on the blocking pool.
///
/// Random-number acquisition may block, so generation runs off the
/// cooperative scheduler; the result is awaited before being used in a
/// network update.
pub async fn generate_password(spec: PasswordSpec) -> Result<String, CoreError> {
    tokio::task::spawn_blocking(move || spec.generate())
        .await
        .map_err(|e| CoreError::Internal(format!("password generation task failed: {e}")))?
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::InvalidPasswordSpec {
        message: message.into(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn passphrase_spec() -> PasswordSpec {
        PasswordSpec {
            method: Method::Passphrase,
            delimiter: Delimiter::Space,
            min_length: 4,
            max_length: 6,
            word_count: 3,
            char_count: 24,
        }
    }

    #[test]
    fn passphrase_length_within_wpa_bound() {
        for _ in 0..50 {
            let pw = passphrase_spec().generate().unwrap();
            assert!((WPA_MIN_LEN..=WPA_MAX_LEN).contains(&pw.len()), "{pw}");
        }
    }

    #[test]
    fn passphrase_has_no_empty_words() {
        for _ in 0..50 {
            let pw = passphrase_spec().generate().unwrap();
            assert!(!pw.contains("  "), "adjacent delimiters in {pw:?}");
            assert!(!pw.starts_with(' ') && !pw.ends_with(' '), "{pw:?}");
            assert_eq!(pw.split(' ').count(), 3);
            assert!(pw.split(' ').all(|w| (4..=6).contains(&w.len())), "{pw}");
        }
    }

    #[test]
    fn dash_delimiter_is_used() {
        let spec = PasswordSpec {
            delimiter: Delimiter::Dash,
            ..passphrase_spec()
        };
        let pw = spec.generate().unwrap();
        assert_eq!(pw.split('-').count(), 3);
    }

    #[test]
    fn none_delimiter_joins_words_directly() {
        let spec = PasswordSpec {
            delimiter: Delimiter::None,
            ..passphrase_spec()
        };
        let pw = spec.generate().unwrap();
        assert!(!pw.contains(' ') && !pw.contains('-'));
        assert!((12..=18).contains(&pw.len()), "{pw}");
    }

    #[test]
    fn random_method_has_exact_length_and_charset() {
        let spec = PasswordSpec {
            method: Method::Random,
            char_count: 24,
            ..PasswordSpec::default()
        };
        let pw = spec.generate().unwrap();
        assert_eq!(pw.len(), 24);
        assert!(pw.bytes().all(|b| RANDOM_CHARSET.contains(&b)));
    }

    #[test]
    fn consecutive_calls_differ() {
        // Non-determinism property: 100 samples, overwhelming probability
        // of no collisions at all.
        for spec in [
            passphrase_spec(),
            PasswordSpec {
                method: Method::Random,
                ..PasswordSpec::default()
            },
        ] {
            let samples: HashSet<String> =
                (0..100).map(|_| spec.generate().unwrap()).collect();
            assert!(samples.len() > 95, "only {} distinct samples", samples.len());
        }
    }

    #[test]
    fn min_greater_than_max_rejected() {
        let spec = PasswordSpec {
            min_length: 7,
            max_length: 4,
            ..passphrase_spec()
        };
        assert!(matches!(
            spec.generate(),
            Err(CoreError::InvalidPasswordSpec { .. })
        ));
    }

    #[test]
    fn out_of_range_values_rejected() {
        let too_long_words = PasswordSpec {
            min_length: 2,
            max_length: 10,
            ..passphrase_spec()
        };
        assert!(too_long_words.generate().is_err());

        let too_few_chars = PasswordSpec {
            method: Method::Random,
            char_count: 4,
            ..PasswordSpec::default()
        };
        assert!(too_few_chars.generate().is_err());
    }

    #[test]
    fn delimiter_tokens_deserialize_from_service_schema() {
        assert_eq!(
            serde_json::from_str::<Delimiter>("\"space\"").unwrap(),
            Delimiter::Space
        );
        assert_eq!(
            serde_json::from_str::<Delimiter>("\"dash\"").unwrap(),
            Delimiter::Dash
        );
        assert_eq!(
            serde_json::from_str::<Delimiter>("\"none\"").unwrap(),
            Delimiter::None
        );
        assert!(serde_json::from_str::<Delimiter>("\"comma\"").is_err());
    }

    #[tokio::test]
    async fn worker_pool_generation_matches_sync_contract() {
        let pw = generate_password(passphrase_spec()).await.unwrap();
        assert!((WPA_MIN_LEN..=WPA_MAX_LEN).contains(&pw.len()));
    }
}
