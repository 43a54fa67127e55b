//! Locales for error-message rendering
//!
//! A [`Locale`] selects the template table used when rendering accumulated
//! validation errors into human-readable messages. Engines are constructed
//! bound to a locale; the form never inspects it directly.

use std::fmt;
use std::str::FromStr;

/// A message-rendering locale supported by the built-in engine.
///
/// The default is Brazilian Portuguese, matching the systems this crate was
/// originally written for.
///
/// # Examples
///
/// ```
/// use formvet::Locale;
///
/// assert_eq!(Locale::default(), Locale::PtBr);
/// assert_eq!(Locale::PtBr.tag(), "pt-br");
/// assert_eq!("en".parse(), Ok(Locale::En));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    /// Brazilian Portuguese (`pt-br`)
    #[default]
    PtBr,
    /// English (`en`)
    En,
}

impl Locale {
    /// The lowercase IETF-style tag for this locale.
    #[inline]
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-br",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing an unrecognized locale tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale tag: {:?}", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pt-br" | "pt_br" => Ok(Locale::PtBr),
            "en" | "en-us" => Ok(Locale::En),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}
