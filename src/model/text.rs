//! Localization structures.

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

/// Declares a closed set of names with a fixed wire spelling.
///
/// Each generated enum gets an `ALL` table, `as_str()`, [`Display`], and a
/// [`FromStr`] impl whose error type is `Unknown<Enum>`.
///
/// A variant may list extra spellings after its name, as in
/// `Foo => "foo" | "FOO",`; these are accepted when parsing and
/// deserializing, but never produced.
///
/// [`Display`]: std::fmt::Display
/// [`FromStr`]: std::str::FromStr
#[doc(hidden)]
macro_rules! well_known {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $($(#[$vmeta:meta])* $variant:ident => $str:literal $(| $alias:literal)*,)*
    }
  ) => {paste::paste! {
    $(#[$meta])*
    #[derive(
      Copy,
      Clone,
      Debug,
      PartialEq,
      Eq,
      Hash,
      serde::Serialize,
      serde::Deserialize,
    )]
    pub enum $name {
      $($(#[$vmeta])* #[serde(rename = $str $(, alias = $alias)*)] $variant,)*
    }

    impl $name {
      /// Every name, in declaration order.
      pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

      /// Returns the wire spelling of this name.
      pub fn as_str(self) -> &'static str {
        match self {
          $(Self::$variant => $str,)*
        }
      }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
      }
    }

    #[doc = "Error returned when parsing an unrecognized [`" $name "`]."]
    #[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
    #[error("unknown {kind} {0:?}", kind = stringify!($name))]
    pub struct [<Unknown $name>](pub String);

    impl std::str::FromStr for $name {
      type Err = [<Unknown $name>];

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
          $($str $(| $alias)* => Ok(Self::$variant),)*
          _ => Err([<Unknown $name>](s.to_string())),
        }
      }
    }
  }};
}

well_known! {
  /// A language that text can be localized for.
  pub enum Language {
    /// English, in Latin script. Every lookup falls back to this.
    English => "en",
    /// Japanese.
    Japanese => "ja",
    /// Chinese, in simplified hanzi.
    ChineseSimplified => "zh-CN",
    /// Chinese, in traditional hanzi.
    ChineseTraditional => "zh-TW",
  }
}

impl Default for Language {
  fn default() -> Self {
    Self::English
  }
}

/// Text localized into the supported [`Language`]s.
///
/// English and Japanese are mandatory upstream, but every slot is optional
/// here so that malformed records can be detected instead of trusted. Empty
/// strings count as missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
  /// The English text.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub en: Option<String>,
  /// The Japanese text.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ja: Option<String>,
  /// The simplified Chinese text.
  #[serde(rename = "zh-CN")]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub zh_cn: Option<String>,
  /// The traditional Chinese text.
  #[serde(rename = "zh-TW")]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub zh_tw: Option<String>,
}

impl LocalizedText {
  /// Creates text with the two mandatory translations.
  pub fn new(en: impl Into<String>, ja: impl Into<String>) -> Self {
    Self {
      en: Some(en.into()),
      ja: Some(ja.into()),
      ..Self::default()
    }
  }

  /// Returns `self` with the translation for `lang` replaced.
  pub fn with(mut self, lang: Language, text: impl Into<String>) -> Self {
    *self.slot_mut(lang) = Some(text.into());
    self
  }

  fn slot(&self, lang: Language) -> &Option<String> {
    match lang {
      Language::English => &self.en,
      Language::Japanese => &self.ja,
      Language::ChineseSimplified => &self.zh_cn,
      Language::ChineseTraditional => &self.zh_tw,
    }
  }

  fn slot_mut(&mut self, lang: Language) -> &mut Option<String> {
    match lang {
      Language::English => &mut self.en,
      Language::Japanese => &mut self.ja,
      Language::ChineseSimplified => &mut self.zh_cn,
      Language::ChineseTraditional => &mut self.zh_tw,
    }
  }

  /// Returns the translation for `lang`, if one is present.
  pub fn get(&self, lang: Language) -> Option<&str> {
    self
      .slot(lang)
      .as_deref()
      .filter(|text| !text.is_empty())
  }

  /// Returns an iterator over all present translations.
  pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> + '_ {
    Language::ALL
      .iter()
      .filter_map(move |&lang| self.get(lang).map(|text| (lang, text)))
  }

  /// Resolves the text for `requested`, falling back to English.
  ///
  /// Fails only if the English text itself is missing.
  pub fn resolve(&self, requested: Language) -> Result<&str, Error> {
    self
      .get(requested)
      .or_else(|| self.get(Language::English))
      .ok_or(Error::MissingTranslation { requested })
  }

  /// Like [`LocalizedText::resolve()`], but for a raw language code.
  ///
  /// Codes outside of [`Language`] resolve to English.
  pub fn resolve_code(&self, code: &str) -> Result<&str, Error> {
    self.resolve(code.parse().unwrap_or_default())
  }
}

/// Resolves `text` for the `requested` language; see
/// [`LocalizedText::resolve()`].
pub fn resolve_localized(
  text: &LocalizedText,
  requested: Language,
) -> Result<&str, Error> {
  text.resolve(requested)
}
