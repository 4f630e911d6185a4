//! Validated person-name fields.
//!
//! A name must start with an uppercase letter of the configured alphabet and
//! may continue with letters of that alphabet or whitespace. Setters check the
//! value before storing it, so a rejected write leaves the previous value in
//! place.

use clap::ValueEnum;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{RecordError, Result};

static CYRILLIC_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[А-ЯЁ][а-яА-ЯёЁ\s]*$").unwrap());

static LATIN_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z\s]*$").unwrap());

/// Alphabet a name is validated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NameAlphabet {
    #[default]
    Cyrillic,
    Latin,
}

impl NameAlphabet {
    fn pattern(self) -> &'static Regex {
        match self {
            NameAlphabet::Cyrillic => &CYRILLIC_NAME,
            NameAlphabet::Latin => &LATIN_NAME,
        }
    }

    /// Returns true if `value` is a well-formed name in this alphabet.
    pub fn matches(self, value: &str) -> bool {
        self.pattern().is_match(value)
    }

    fn check(self, value: &str) -> Result<()> {
        if self.matches(value) {
            return Ok(());
        }
        let err = RecordError::InvalidName {
            value: value.to_string(),
            alphabet: self.to_string(),
        };
        log::error!("{}", err);
        Err(err)
    }
}

impl fmt::Display for NameAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameAlphabet::Cyrillic => write!(f, "cyrillic"),
            NameAlphabet::Latin => write!(f, "latin"),
        }
    }
}

/// A single name attribute whose setter rejects values outside the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameField {
    alphabet: NameAlphabet,
    value: Option<String>,
}

impl NameField {
    pub fn new(alphabet: NameAlphabet) -> Self {
        Self {
            alphabet,
            value: None,
        }
    }

    /// Store `value` if it is a valid name; otherwise keep the current value.
    pub fn set(&mut self, value: &str) -> Result<()> {
        self.alphabet.check(value)?;
        self.value = Some(value.to_string());
        Ok(())
    }

    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Family name, given name and patronymic of a person.
///
/// The fields can be set one at a time, or all at once from a full name.
/// A full name is kept verbatim and is what [`PersonName::full_name`] returns
/// until one of the individual fields is set again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    alphabet: NameAlphabet,
    family: NameField,
    given: NameField,
    patronymic: NameField,
    full: Option<String>,
}

impl PersonName {
    pub fn new(alphabet: NameAlphabet) -> Self {
        Self {
            alphabet,
            family: NameField::new(alphabet),
            given: NameField::new(alphabet),
            patronymic: NameField::new(alphabet),
            full: None,
        }
    }

    pub fn set_family_name(&mut self, value: &str) -> Result<()> {
        self.family.set(value)?;
        self.full = None;
        Ok(())
    }

    pub fn family_name(&self) -> Option<&str> {
        self.family.get()
    }

    pub fn set_given_name(&mut self, value: &str) -> Result<()> {
        self.given.set(value)?;
        self.full = None;
        Ok(())
    }

    pub fn given_name(&self) -> Option<&str> {
        self.given.get()
    }

    pub fn set_patronymic(&mut self, value: &str) -> Result<()> {
        self.patronymic.set(value)?;
        self.full = None;
        Ok(())
    }

    pub fn patronymic(&self) -> Option<&str> {
        self.patronymic.get()
    }

    /// Assign a whole "Family Given Patronymic" string.
    ///
    /// The string is checked as one name, the same way a single field is.
    /// On success every field is replaced: the first word is the family name,
    /// the second the given name, and all remaining words form the patronymic.
    /// Fields without a word are cleared.
    pub fn set_full_name(&mut self, value: &str) -> Result<()> {
        self.alphabet.check(value)?;

        let mut words = value.split_whitespace();
        let family = words.next().map(str::to_string);
        let given = words.next().map(str::to_string);
        let rest = words.collect::<Vec<_>>().join(" ");

        self.family.value = family;
        self.given.value = given;
        self.patronymic.value = (!rest.is_empty()).then_some(rest);
        self.full = Some(value.to_string());
        Ok(())
    }

    /// The assigned full name, or the set fields joined by a single space,
    /// family name first.
    pub fn full_name(&self) -> String {
        if let Some(full) = &self.full {
            return full.clone();
        }
        [self.family_name(), self.given_name(), self.patronymic()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
