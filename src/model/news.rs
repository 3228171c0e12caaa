//! News articles.

use chrono::DateTime;
use chrono::Utc;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::model::text::Language;
use crate::model::text::LocalizedText;

/// A published news article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
  /// This article's ID.
  pub id: String,
  /// The headline in various languages.
  pub title: LocalizedText,
  /// The body in various languages.
  pub content: LocalizedText,
  /// A short teaser in various languages.
  pub excerpt: LocalizedText,
  /// The author's name.
  pub author: String,
  #[allow(missing_docs)]
  pub published_at: DateTime<Utc>,
  /// A link to the header image.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,
  /// Free-form tags.
  #[serde(default)]
  pub tags: Vec<String>,
}

/// A [`NewsArticle`] with its text resolved for one language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ArticleView<'a> {
  pub id: &'a str,
  pub title: &'a str,
  pub content: &'a str,
  pub excerpt: &'a str,
  pub author: &'a str,
  pub published_at: DateTime<Utc>,
  pub tags: &'a [String],
}

impl NewsArticle {
  /// Resolves every localized field for `lang`, falling back to English.
  pub fn view(&self, lang: Language) -> Result<ArticleView<'_>, Error> {
    Ok(ArticleView {
      id: &self.id,
      title: self.title.resolve(lang)?,
      content: self.content.resolve(lang)?,
      excerpt: self.excerpt.resolve(lang)?,
      author: &self.author,
      published_at: self.published_at,
      tags: &self.tags,
    })
  }

  /// Returns whether this article carries `tag`, ignoring case.
  pub fn has_tag(&self, tag: &str) -> bool {
    self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
  }
}
