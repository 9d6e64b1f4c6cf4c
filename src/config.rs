//! Steganography parameters and the textual descriptors they are read from.
//!
//! Descriptors only exist at the edge (command line, user input). They are
//! parsed into [`Pattern`] and [`Obfuscation`] before reaching the codec:
//!
//! | descriptor              | value                               |
//! |-------------------------|-------------------------------------|
//! | `"<n>"`                 | `Pattern::Stride(n)`                |
//! | `"random,<seed>,<lo>,<hi>"` | `Pattern::Random { seed, lo, hi }` |
//! | `"none"`                | `Obfuscation::None`                 |
//! | `"caesar<n>"`           | `Obfuscation::Caesar(n)`            |
//! | `"vigenere<key>"`       | `Obfuscation::Vigenere(key)`        |

use std::fmt;
use std::str::FromStr;

use crate::crypto::Obfuscation;
use crate::error::{Result, StegError};
use crate::walker::Pattern;

const RANDOM_PREFIX: &str = "random,";
const CAESAR_PREFIX: &str = "caesar";
const VIGENERE_PREFIX: &str = "vigenere";

/// Everything the encoder and decoder have to agree on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StegConfig {
    /// Least significant bits overwritten per pixel byte, `1..=8`
    pub bits_used: u8,
    pub pattern: Pattern,
    pub obfuscation: Obfuscation,
}

impl Default for StegConfig {
    fn default() -> Self {
        StegConfig {
            bits_used: 1,
            pattern: Pattern::Stride(1),
            obfuscation: Obfuscation::None,
        }
    }
}

impl StegConfig {
    pub fn new(bits_used: u8, pattern: Pattern, obfuscation: Obfuscation) -> Result<StegConfig> {
        let config = StegConfig {
            bits_used,
            pattern,
            obfuscation,
        };
        config.validate()?;

        Ok(config)
    }

    /// Build a configuration straight from descriptors
    pub fn parse(bits_used: u8, method: &str, obfuscation: &str) -> Result<StegConfig> {
        StegConfig::new(bits_used, method.parse()?, obfuscation.parse()?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=8).contains(&self.bits_used) {
            return Err(StegError::config(format!(
                "The number of bits used must be between 1 and 8, not {}",
                self.bits_used
            )));
        }

        validate_pattern(&self.pattern)?;
        validate_obfuscation(&self.obfuscation)
    }
}

fn validate_pattern(pattern: &Pattern) -> Result<()> {
    match *pattern {
        Pattern::Stride(0) => Err(StegError::config("'Every n pixels' value must be positive!")),
        Pattern::Random { lo, .. } if lo == 0 => {
            Err(StegError::config("The lower bound must be positive!"))
        }
        Pattern::Random { lo, hi, .. } if lo >= hi => Err(StegError::config(
            "The lower bound must be smaller than the upper bound!",
        )),
        Pattern::Random { hi, .. } if hi > i32::MAX as u32 => Err(StegError::config(format!(
            "The upper bound can not exceed {}!",
            i32::MAX
        ))),
        _ => Ok(()),
    }
}

fn validate_obfuscation(obfuscation: &Obfuscation) -> Result<()> {
    match obfuscation {
        Obfuscation::Caesar(shift) if !(1..=7).contains(shift) => Err(StegError::config(
            "The caesar shift must be between 1 and 7!",
        )),
        Obfuscation::Vigenere(key) if key.is_empty() => {
            Err(StegError::config("The vigenere key can not be empty!"))
        }
        _ => Ok(()),
    }
}

/// Plain decimal only: no surrounding whitespace and no `+` sign
fn parse_number<T: FromStr>(text: &str, what: &str) -> Result<T> {
    let invalid = || StegError::config(format!("'{}' value should be a number, not '{}'", what, text));

    if text.starts_with('+') || text.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    text.parse().map_err(|_| invalid())
}

impl FromStr for Pattern {
    type Err = StegError;

    fn from_str(s: &str) -> Result<Pattern> {
        let pattern = match s.strip_prefix(RANDOM_PREFIX) {
            Some(params) => {
                let params: Vec<&str> = params.split(',').collect();

                if params.len() != 3 {
                    return Err(StegError::config(format!(
                        "A random method looks like 'random,<seed>,<lo>,<hi>', not '{}'",
                        s
                    )));
                }

                Pattern::Random {
                    seed: parse_number(params[0], "Seed")?,
                    lo: parse_number(params[1], "Lower bound")?,
                    hi: parse_number(params[2], "Upper bound")?,
                }
            }
            None => Pattern::Stride(parse_number(s, "Every n pixels")?),
        };

        validate_pattern(&pattern)?;
        Ok(pattern)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Stride(n) => write!(f, "{}", n),
            Pattern::Random { seed, lo, hi } => write!(f, "{}{},{},{}", RANDOM_PREFIX, seed, lo, hi),
        }
    }
}

impl FromStr for Obfuscation {
    type Err = StegError;

    fn from_str(s: &str) -> Result<Obfuscation> {
        let obfuscation = if s == "none" {
            Obfuscation::None
        } else if let Some(shift) = s.strip_prefix(CAESAR_PREFIX) {
            Obfuscation::Caesar(parse_number(shift, "Caesar shift")?)
        } else if let Some(key) = s.strip_prefix(VIGENERE_PREFIX) {
            Obfuscation::Vigenere(key.to_string())
        } else {
            return Err(StegError::config(format!(
                "Unknown obfuscation '{}'; use 'none', 'caesar<n>' or 'vigenere<key>'",
                s
            )));
        };

        validate_obfuscation(&obfuscation)?;
        Ok(obfuscation)
    }
}

impl fmt::Display for Obfuscation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Obfuscation::None => write!(f, "none"),
            Obfuscation::Caesar(shift) => write!(f, "{}{}", CAESAR_PREFIX, shift),
            Obfuscation::Vigenere(key) => write!(f, "{}{}", VIGENERE_PREFIX, key),
        }
    }
}
