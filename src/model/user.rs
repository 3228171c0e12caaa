//! Users and the accounts linked to them.

use chrono::DateTime;
use chrono::Utc;

use serde::Deserialize;
use serde::Serialize;

use crate::model::team::Team;
use crate::model::text::Language;

well_known! {
  /// What a [`User`] is allowed to do.
  pub enum Role {
    /// A regular user.
    User => "user",
    /// A site administrator.
    Admin => "admin",
    /// A community moderator.
    Moderator => "moderator",
  }
}

well_known! {
  /// How a [`User`] originally signed up.
  pub enum AuthProvider {
    /// Username and password.
    Local => "local",
    #[allow(missing_docs)]
    Google => "google",
    #[allow(missing_docs)]
    Twitter => "twitter",
  }
}

well_known! {
  /// An external identity provider a [`LinkedAccount`] comes from.
  pub enum LinkProvider {
    #[allow(missing_docs)]
    Google => "google",
    #[allow(missing_docs)]
    Twitter => "twitter",
  }
}

/// A registered user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  /// This user's ID.
  pub id: String,
  /// This user's display name.
  pub username: String,
  /// This user's email address.
  pub email: String,
  /// A link to this user's avatar.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar: Option<String>,

  /// This user's role.
  pub role: Role,
  /// How this user signed up.
  pub auth_provider: AuthProvider,
  /// Whether this user can log in with a password.
  pub has_password: bool,
  /// External accounts linked to this user.
  #[serde(default)]
  pub linked_accounts: Vec<LinkedAccount>,
  /// The language this user reads the site in.
  #[serde(default)]
  pub preferred_language: Language,

  /// Whether this user has an active subscription.
  pub is_premium: bool,
  #[allow(missing_docs)]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subscription_id: Option<String>,
  #[allow(missing_docs)]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subscription_expiry: Option<DateTime<Utc>>,

  #[allow(missing_docs)]
  pub created_at: DateTime<Utc>,
  /// Teams this user has built.
  #[serde(default)]
  pub teams: Vec<Team>,
}

impl User {
  /// Returns whether this user can moderate other users' content.
  pub fn can_moderate(&self) -> bool {
    matches!(self.role, Role::Admin | Role::Moderator)
  }

  /// Returns whether this user's premium subscription is active at `now`.
  ///
  /// A premium user without an expiry date never expires.
  pub fn has_active_premium(&self, now: DateTime<Utc>) -> bool {
    self.is_premium && self.subscription_expiry.map_or(true, |end| now < end)
  }

  /// Returns the account linked from `provider`, if any.
  pub fn linked(&self, provider: LinkProvider) -> Option<&LinkedAccount> {
    self.linked_accounts.iter().find(|a| a.provider == provider)
  }

  /// Returns whether this user could still log in after unlinking
  /// `provider`.
  ///
  /// Users need at least one remaining way to authenticate: a password, or
  /// another linked account.
  pub fn can_unlink(&self, provider: LinkProvider) -> bool {
    self.linked(provider).is_some()
      && (self.has_password
        || self.linked_accounts.iter().any(|a| a.provider != provider))
  }
}

/// An external account linked to a [`User`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccount {
  /// This link's ID.
  pub id: String,
  /// Where the account lives.
  pub provider: LinkProvider,
  /// The account's ID at the provider.
  pub provider_id: String,
  /// The account's email at the provider.
  pub provider_email: String,
  /// When the link was made.
  pub linked_at: DateTime<Utc>,
}
