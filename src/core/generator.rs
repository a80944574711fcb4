//! # Password Generation
//!
//! Builds a candidate alphabet from the enabled character classes and draws
//! each password character independently and uniformly from it. The alphabet
//! is assembled in a fixed order (uppercase, lowercase, digits, special) so
//! the same configuration always samples from the same pool.
//!
//! `rand::thread_rng()` backs the sampling. It is the ecosystem's
//! general-purpose source and happens to be cryptographically secure, so no
//! separate RNG is needed for stronger guarantees.

use std::fmt;

use log::debug;
use rand::Rng;

/// Uppercase class: `A-Z`.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase class: `a-z`.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
/// Digit class: `0-9`.
pub const DIGITS: &[u8] = b"0123456789";
/// Special class: the 32 ASCII punctuation characters.
pub const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Smallest selectable password length.
pub const LENGTH_MIN: u8 = 8;
/// Largest selectable password length.
pub const LENGTH_MAX: u8 = 32;

/// One of the four character classes a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    /// All classes, in alphabet-assembly order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// The characters belonging to this class.
    pub fn chars(&self) -> &'static [u8] {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }
}

/// Length and class selection for password generation.
///
/// Invariant: at least one class flag must be true for [`generate`] to
/// succeed. The length is kept inside `[LENGTH_MIN, LENGTH_MAX]` by
/// [`GenerationConfig::adjust_length`] and by config resolution; `generate`
/// trusts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: u8,
    pub use_upper: bool,
    pub use_lower: bool,
    pub use_digits: bool,
    pub use_special: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            use_upper: true,
            use_lower: true,
            use_digits: true,
            use_special: true,
        }
    }
}

impl GenerationConfig {
    /// Whether the given class is enabled.
    pub fn enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.use_upper,
            CharClass::Lower => self.use_lower,
            CharClass::Digit => self.use_digits,
            CharClass::Special => self.use_special,
        }
    }

    /// Flip the given class flag.
    pub fn toggle(&mut self, class: CharClass) {
        match class {
            CharClass::Upper => self.use_upper = !self.use_upper,
            CharClass::Lower => self.use_lower = !self.use_lower,
            CharClass::Digit => self.use_digits = !self.use_digits,
            CharClass::Special => self.use_special = !self.use_special,
        }
    }

    /// Adjust the length by `delta`, clamped to `[LENGTH_MIN, LENGTH_MAX]`.
    pub fn adjust_length(&mut self, delta: i16) {
        let target = (self.length as i16 + delta).clamp(LENGTH_MIN as i16, LENGTH_MAX as i16);
        self.length = target as u8;
    }

    /// Concatenation of all enabled classes, in fixed order.
    /// Empty when no class is enabled.
    pub fn alphabet(&self) -> Vec<u8> {
        let mut alphabet = Vec::new();
        for class in CharClass::ALL {
            if self.enabled(class) {
                alphabet.extend_from_slice(class.chars());
            }
        }
        alphabet
    }

    /// Compact class summary for logging, e.g. `"UL-S"`.
    pub fn class_mask(&self) -> String {
        let mut mask = String::with_capacity(4);
        for (class, tag) in CharClass::ALL.into_iter().zip(['U', 'L', 'D', 'S']) {
            mask.push(if self.enabled(class) { tag } else { '-' });
        }
        mask
    }
}

/// Returned by [`generate`] when no character class is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigError;

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no character class is enabled")
    }
}

impl std::error::Error for ConfigError {}

/// Generate a password: `config.length` independent uniform draws (with
/// replacement) from the enabled classes' alphabet, concatenated in draw
/// order.
pub fn generate(config: &GenerationConfig) -> Result<String, ConfigError> {
    let alphabet = config.alphabet();
    if alphabet.is_empty() {
        return Err(ConfigError);
    }

    let mut rng = rand::thread_rng();
    let mut password = String::with_capacity(config.length as usize);
    for _ in 0..config.length {
        let idx = rng.gen_range(0..alphabet.len());
        password.push(alphabet[idx] as char);
    }

    // Length and class mask only — the password itself never reaches the log.
    debug!(
        "generated password: length={} classes={}",
        config.length,
        config.class_mask()
    );

    Ok(password)
}
