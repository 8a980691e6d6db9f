//! crates/codegenio_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! The account-scoped structs derive serde because the persisted snapshot
//! is serialized wholesale by the storage adapter.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three subscription tiers an account can register under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionTier {
    Individual,
    Family,
    Institution,
}

impl SubscriptionTier {
    /// User-facing plan name, as shown on the pricing cards.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionTier::Individual => "Individual",
            SubscriptionTier::Family => "Familiar",
            SubscriptionTier::Institution => "Institución Educativa",
        }
    }

    /// Whether the dashboard offers the "add profile" action for this tier.
    ///
    /// This is a UI capability only; profile creation itself is never
    /// capped by the state machine.
    pub fn allows_extra_profiles(&self) -> bool {
        matches!(self, SubscriptionTier::Family | SubscriptionTier::Institution)
    }

    /// Advertised profile allowance. `None` means unbounded (institution
    /// licenses cover whole classes).
    pub fn max_profiles(&self) -> Option<usize> {
        match self {
            SubscriptionTier::Individual => Some(1),
            SubscriptionTier::Family => Some(5),
            SubscriptionTier::Institution => None,
        }
    }
}

/// One authenticated registrant. The email is the storage partition key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub tier: SubscriptionTier,
}

/// One learner identity under an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub avatar_color: String,
    pub xp: u32,
    pub completed_lessons: Vec<String>,
    #[serde(default)]
    pub is_educator: bool,
}

/// The per-account persisted snapshot: authenticated account, its learner
/// profiles, the active profile pointer and the optional certificate logo
/// (a base64 data URL).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountState {
    pub account: Option<Account>,
    pub profiles: Vec<Profile>,
    pub active_profile_id: Option<Uuid>,
    pub institution_logo: Option<String>,
}

impl AccountState {
    /// Resolves the active profile, requiring that it belongs to the
    /// authenticated account.
    pub fn active_profile(&self) -> Option<&Profile> {
        let account = self.account.as_ref()?;
        let id = self.active_profile_id?;
        self.profiles
            .iter()
            .find(|p| p.id == id && p.account_id == account.id)
    }

    /// Mutable counterpart of [`active_profile`](Self::active_profile).
    pub fn active_profile_mut(&mut self) -> Option<&mut Profile> {
        let account_id = self.account.as_ref()?.id;
        let id = self.active_profile_id?;
        self.profiles
            .iter_mut()
            .find(|p| p.id == id && p.account_id == account_id)
    }

    /// Profiles owned by the authenticated account.
    pub fn owned_profiles(&self) -> Vec<&Profile> {
        match &self.account {
            Some(account) => self
                .profiles
                .iter()
                .filter(|p| p.account_id == account.id)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// A fixed curriculum tier, part of the static catalog.
#[derive(Debug, Clone)]
pub struct Level {
    pub id: String,
    pub title: String,
    pub description: String,
    pub lessons: Vec<Lesson>,
}

/// One teachable unit. The body content may embed fenced code blocks
/// delimited by `[CODE_START]`/`[CODE_END]`.
#[derive(Debug, Clone)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub assistant_context: String,
    pub estimated_time: String,
}

/// One pricing card of the static catalog.
#[derive(Debug, Clone)]
pub struct SubscriptionPlan {
    pub tier: SubscriptionTier,
    pub price: String,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub cta: String,
    pub highlight: bool,
}

/// One multiple-choice calibration question.
#[derive(Debug, Clone)]
pub struct PlacementQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// Who spoke a chat turn in the lesson assistant widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    Student,
    Assistant,
}

/// One exchange line in the per-lesson chat history.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Fixed avatar palette, in allocation order.
pub const AVATAR_PALETTE: [&str; 8] = [
    "blue", "green", "red", "yellow", "purple", "indigo", "pink", "teal",
];

/// Picks an avatar color for a new profile: the first palette color not
/// already used by a sibling profile, cycling by sibling count once the
/// palette is exhausted.
pub fn assign_avatar_color(siblings: &[&Profile]) -> &'static str {
    AVATAR_PALETTE
        .iter()
        .find(|color| !siblings.iter().any(|p| p.avatar_color == **color))
        .copied()
        .unwrap_or(AVATAR_PALETTE[siblings.len() % AVATAR_PALETTE.len()])
}

/// Shallow format check used by the login flow before any storage lookup.
pub fn is_valid_email(email: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap())
        .is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_color(color: &str) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            name: "Test".to_string(),
            avatar_color: color.to_string(),
            xp: 0,
            completed_lessons: Vec::new(),
            is_educator: false,
        }
    }

    #[test]
    fn avatar_color_prefers_unused() {
        let first = profile_with_color("blue");
        let second = profile_with_color("green");
        let siblings = vec![&first, &second];
        assert_eq!(assign_avatar_color(&siblings), "red");
    }

    #[test]
    fn avatar_color_cycles_when_palette_exhausted() {
        let owned: Vec<Profile> = AVATAR_PALETTE
            .iter()
            .map(|c| profile_with_color(c))
            .collect();
        let siblings: Vec<&Profile> = owned.iter().collect();
        // Eight siblings use the whole palette; the ninth wraps around.
        assert_eq!(assign_avatar_color(&siblings), AVATAR_PALETTE[0]);
    }

    #[test]
    fn email_validation_accepts_plain_addresses() {
        assert!(is_valid_email("ana@ejemplo.com"));
        assert!(!is_valid_email("ana@ejemplo"));
        assert!(!is_valid_email("ana ejemplo.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn active_profile_requires_ownership() {
        let account = Account {
            id: Uuid::new_v4(),
            name: "Ana García".to_string(),
            email: "ana@ejemplo.com".to_string(),
            tier: SubscriptionTier::Family,
        };
        let foreign = profile_with_color("blue");
        let state = AccountState {
            account: Some(account),
            profiles: vec![foreign.clone()],
            active_profile_id: Some(foreign.id),
            institution_logo: None,
        };
        // The pointer references a profile owned by another account.
        assert!(state.active_profile().is_none());
    }
}
