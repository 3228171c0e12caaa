//! Response envelopes shared with the API layer.
//!
//! Every endpoint answers with an [`ApiResponse`]; list endpoints wrap their
//! page of results in a [`PaginatedResponse`] first.

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

/// The envelope around every API response.
///
/// A successful response carries `data`; a failed one carries an `error` code
/// (see [`ErrorKind::code()`]) and a human-readable `message`.
///
/// [`ErrorKind::code()`]: crate::error::ErrorKind::code
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
  /// Whether the request succeeded.
  pub success: bool,
  /// The response payload.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
  /// A machine-readable error code.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  /// A human-readable message.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl<T> ApiResponse<T> {
  /// Creates a successful response carrying `data`.
  pub fn ok(data: T) -> Self {
    Self {
      success: true,
      data: Some(data),
      error: None,
      message: None,
    }
  }

  /// Creates a failed response describing `error`.
  pub fn err(error: &Error) -> Self {
    Self {
      success: false,
      data: None,
      error: Some(error.kind().code().to_string()),
      message: Some(error.to_string()),
    }
  }

  /// Creates a successful response with only a message, for operations that
  /// have nothing to return.
  pub fn message(message: impl Into<String>) -> Self {
    Self {
      success: true,
      data: None,
      error: None,
      message: Some(message.into()),
    }
  }

  /// Converts this response into a [`Result`].
  pub fn into_result(self) -> Result<Option<T>, String> {
    if self.success {
      Ok(self.data)
    } else {
      Err(self.message.or(self.error).unwrap_or_default())
    }
  }
}

impl<T> From<Result<T, Error>> for ApiResponse<T> {
  fn from(result: Result<T, Error>) -> Self {
    match result {
      Ok(data) => Self::ok(data),
      Err(e) => Self::err(&e),
    }
  }
}

/// One page of a list of results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
  /// The results on this page.
  pub data: Vec<T>,
  /// The number of results across all pages.
  pub total: u64,
  /// This page's number, starting at 1.
  pub page: u32,
  /// The most results a page can hold.
  pub limit: u32,
  /// The number of pages; zero when `limit` is zero.
  pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
  /// Creates a page, computing `total_pages` from `total` and `limit`.
  pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
    let total_pages = match limit {
      0 => 0,
      limit => total.div_ceil(limit as u64).min(u32::MAX as u64) as u32,
    };
    Self {
      data,
      total,
      page,
      limit,
      total_pages,
    }
  }

  /// Cuts page number `page` (starting at 1) out of `items`.
  ///
  /// Pages past the end, and page 0, are empty.
  pub fn from_slice(items: &[T], page: u32, limit: u32) -> Self
  where
    T: Clone,
  {
    let start = (page.max(1) as usize - 1).saturating_mul(limit as usize);
    let data = if page == 0 {
      Vec::new()
    } else {
      items
        .iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect()
    };
    Self::new(data, items.len() as u64, page, limit)
  }

  /// Returns whether there is a page after this one.
  pub fn has_next(&self) -> bool {
    self.page < self.total_pages
  }
}
