//! crates/codegenio_core/src/machine.rs
//!
//! The application state machine: one mutable state record plus the pure
//! transition function. Side effects (persistence, scroll reset) are
//! described by [`Effect`] values and executed afterwards by the session
//! driver, never interleaved with a transition.

use uuid::Uuid;

use crate::catalog;
use crate::domain::{
    assign_avatar_color, Account, AccountState, Profile, SubscriptionTier,
};
use crate::placement;

/// Experience points awarded for the first completion of a lesson.
pub const LESSON_XP_REWARD: u32 = 100;

/// Closed set of top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    LevelLessons,
    LessonContent,
    Dashboard,
    PlacementTest,
    Certificate,
    Login,
}

//=========================================================================================
// Events (User Actions)
//=========================================================================================

/// Represents the user actions the state machine can process.
#[derive(Debug, Clone)]
pub enum Event {
    /// Returns to the landing view and clears the level/lesson selection.
    NavigateHome,

    /// Opens the login flow.
    OpenLogin,

    /// Opens the family/educator dashboard.
    NavigateToDashboard,

    /// Opens the completion certificate for the active profile.
    NavigateToCertificate,

    /// Starts the placement test. Redirects to login without an
    /// authenticated account.
    StartTest,

    /// Selects a curriculum level. Redirects to login without an
    /// authenticated account; unknown level ids are ignored.
    SelectLevel { level_id: String },

    /// Opens one lesson of the selected level. Ignored when no level is
    /// selected or the lesson does not belong to it.
    SelectLesson { lesson_id: String },

    /// Returns from a lesson to its level's lesson list.
    BackToLessonList,

    /// Marks a lesson as completed by the active profile. Re-completing a
    /// lesson already in the set is a no-op.
    CompleteLesson { lesson_id: String },

    /// Finishes the placement test with the computed score and jumps to the
    /// recommended level's lesson list.
    CompleteTest { score: u32 },

    /// Installs a snapshot loaded for an existing account. This is the pure
    /// tail of the email-check login flow; the storage lookup itself happens
    /// in the session driver.
    SignIn { state: AccountState },

    /// Creates a new account with its first profile and signs it in. The
    /// caller is responsible for having checked that the email is free.
    Register {
        name: String,
        email: String,
        tier: SubscriptionTier,
    },

    /// Clears the active account pointer and resets to the signed-out state.
    Logout,

    /// Activates another profile of the authenticated account. Profile ids
    /// not owned by that account are rejected.
    SwitchProfile { profile_id: Uuid },

    /// Adds a learner profile under the authenticated account. Plan tiers
    /// gate this in the UI only; no cap is enforced here.
    CreateProfile { name: String },

    /// Replaces (or clears) the institution logo shown on certificates.
    UpdateInstitutionLogo { logo: Option<String> },
}

/// Side effects requested by a transition, to be executed in order by the
/// session driver after the state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Persist the authenticated account's snapshot wholesale.
    PersistState,
    /// Point the store at this account email, or clear the pointer.
    SetActiveAccount(Option<String>),
    /// The view changed; the front-end should reset its scroll position.
    ResetScroll,
}

//=========================================================================================
// Session State and Transitions
//=========================================================================================

/// The in-memory state record: current view, level/lesson selection and the
/// account-scoped snapshot.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub current_view: View,
    pub selected_level: Option<String>,
    pub selected_lesson: Option<String>,
    pub app: AccountState,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn signed_in(&self) -> bool {
        self.app.account.is_some()
    }

    /// Applies one event to the state record and returns the effects the
    /// caller must execute. Pure: no storage or network access.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::NavigateHome => {
                self.current_view = View::Home;
                self.selected_level = None;
                self.selected_lesson = None;
                vec![Effect::ResetScroll]
            }

            Event::OpenLogin => {
                self.current_view = View::Login;
                vec![Effect::ResetScroll]
            }

            Event::NavigateToDashboard => {
                self.current_view = View::Dashboard;
                vec![Effect::ResetScroll]
            }

            Event::NavigateToCertificate => {
                self.current_view = View::Certificate;
                vec![Effect::ResetScroll]
            }

            Event::StartTest => {
                if !self.signed_in() {
                    self.current_view = View::Login;
                    return vec![Effect::ResetScroll];
                }
                self.current_view = View::PlacementTest;
                self.selected_level = None;
                self.selected_lesson = None;
                vec![Effect::ResetScroll]
            }

            Event::SelectLevel { level_id } => {
                if !self.signed_in() {
                    self.current_view = View::Login;
                    return vec![Effect::ResetScroll];
                }
                if catalog::level(&level_id).is_none() {
                    return Vec::new();
                }
                self.selected_level = Some(level_id);
                self.selected_lesson = None;
                self.current_view = View::LevelLessons;
                vec![Effect::ResetScroll]
            }

            Event::SelectLesson { lesson_id } => {
                let Some(level_id) = self.selected_level.as_deref() else {
                    return Vec::new();
                };
                if catalog::lesson(level_id, &lesson_id).is_none() {
                    return Vec::new();
                }
                self.selected_lesson = Some(lesson_id);
                self.current_view = View::LessonContent;
                vec![Effect::ResetScroll]
            }

            Event::BackToLessonList => {
                self.selected_lesson = None;
                self.current_view = View::LevelLessons;
                vec![Effect::ResetScroll]
            }

            Event::CompleteLesson { lesson_id } => self.complete_lesson(lesson_id),

            Event::CompleteTest { score } => {
                let recommended = placement::recommended_level(score);
                self.selected_level = Some(recommended.to_string());
                self.selected_lesson = None;
                self.current_view = View::LevelLessons;
                vec![Effect::ResetScroll]
            }

            Event::SignIn { state } => {
                self.app = state;
                self.current_view = View::Home;
                self.selected_level = None;
                self.selected_lesson = None;
                vec![Effect::ResetScroll]
            }

            Event::Register { name, email, tier } => self.register(name, email, tier),

            Event::Logout => {
                self.app = AccountState::default();
                self.current_view = View::Home;
                self.selected_level = None;
                self.selected_lesson = None;
                vec![Effect::SetActiveAccount(None), Effect::ResetScroll]
            }

            Event::SwitchProfile { profile_id } => {
                let owned = self
                    .app
                    .account
                    .as_ref()
                    .map(|account| {
                        self.app
                            .profiles
                            .iter()
                            .any(|p| p.id == profile_id && p.account_id == account.id)
                    })
                    .unwrap_or(false);
                if !owned {
                    return Vec::new();
                }
                self.app.active_profile_id = Some(profile_id);
                self.current_view = View::Home;
                vec![Effect::PersistState, Effect::ResetScroll]
            }

            Event::CreateProfile { name } => self.create_profile(name),

            Event::UpdateInstitutionLogo { logo } => {
                self.app.institution_logo = logo;
                vec![Effect::PersistState]
            }
        }
    }

    fn complete_lesson(&mut self, lesson_id: String) -> Vec<Effect> {
        let Some(profile) = self.app.active_profile_mut() else {
            return Vec::new();
        };
        if profile.completed_lessons.contains(&lesson_id) {
            return Vec::new();
        }
        profile.completed_lessons.push(lesson_id);
        profile.xp += LESSON_XP_REWARD;
        vec![Effect::PersistState]
    }

    fn register(&mut self, name: String, email: String, tier: SubscriptionTier) -> Vec<Effect> {
        let account = Account {
            id: Uuid::new_v4(),
            name: name.clone(),
            email: email.clone(),
            tier,
        };
        // The first profile is named after the registrant's first name.
        let profile_name = name
            .split_whitespace()
            .next()
            .unwrap_or(name.as_str())
            .to_string();
        let profile = Profile {
            id: Uuid::new_v4(),
            account_id: account.id,
            name: profile_name,
            avatar_color: assign_avatar_color(&[]).to_string(),
            xp: 0,
            completed_lessons: Vec::new(),
            is_educator: tier == SubscriptionTier::Institution,
        };

        self.app = AccountState {
            account: Some(account),
            active_profile_id: Some(profile.id),
            profiles: vec![profile],
            institution_logo: None,
        };
        self.current_view = View::Home;
        self.selected_level = None;
        self.selected_lesson = None;
        vec![
            Effect::SetActiveAccount(Some(email)),
            Effect::PersistState,
            Effect::ResetScroll,
        ]
    }

    fn create_profile(&mut self, name: String) -> Vec<Effect> {
        let Some(account_id) = self.app.account.as_ref().map(|a| a.id) else {
            return Vec::new();
        };
        let color = {
            let siblings = self.app.owned_profiles();
            assign_avatar_color(&siblings).to_string()
        };
        self.app.profiles.push(Profile {
            id: Uuid::new_v4(),
            account_id,
            name,
            avatar_color: color,
            xp: 0,
            completed_lessons: Vec::new(),
            is_educator: false,
        });
        vec![Effect::PersistState]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn registered(tier: SubscriptionTier) -> SessionState {
        let mut state = SessionState::new();
        state.apply(Event::Register {
            name: "Ana García".to_string(),
            email: "ana@ejemplo.com".to_string(),
            tier,
        });
        state
    }

    #[test]
    fn registration_creates_exactly_one_fresh_profile() {
        let state = registered(SubscriptionTier::Family);
        let account = state.app.account.as_ref().unwrap();
        assert_eq!(state.app.profiles.len(), 1);

        let profile = &state.app.profiles[0];
        assert_eq!(profile.account_id, account.id);
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.xp, 0);
        assert!(profile.completed_lessons.is_empty());
        assert!(!profile.is_educator);
        assert_eq!(state.app.active_profile_id, Some(profile.id));
        assert_eq!(state.current_view, View::Home);
    }

    #[test]
    fn registration_emits_pointer_and_persist_effects() {
        let mut state = SessionState::new();
        let effects = state.apply(Event::Register {
            name: "Ana García".to_string(),
            email: "ana@ejemplo.com".to_string(),
            tier: SubscriptionTier::Individual,
        });
        assert_eq!(
            effects,
            vec![
                Effect::SetActiveAccount(Some("ana@ejemplo.com".to_string())),
                Effect::PersistState,
                Effect::ResetScroll,
            ]
        );
    }

    #[test]
    fn institution_registration_marks_the_educator() {
        let state = registered(SubscriptionTier::Institution);
        assert!(state.app.profiles[0].is_educator);
    }

    #[test]
    fn completing_a_lesson_twice_is_a_no_op() {
        let mut state = registered(SubscriptionTier::Individual);

        let effects = state.apply(Event::CompleteLesson {
            lesson_id: "ini-1".to_string(),
        });
        assert_eq!(effects, vec![Effect::PersistState]);
        assert_eq!(state.app.profiles[0].xp, LESSON_XP_REWARD);
        assert_eq!(state.app.profiles[0].completed_lessons, vec!["ini-1"]);

        let effects = state.apply(Event::CompleteLesson {
            lesson_id: "ini-1".to_string(),
        });
        assert!(effects.is_empty());
        assert_eq!(state.app.profiles[0].xp, LESSON_XP_REWARD);
        assert_eq!(state.app.profiles[0].completed_lessons, vec!["ini-1"]);
    }

    #[test]
    fn completing_a_lesson_without_an_active_profile_does_nothing() {
        let mut state = SessionState::new();
        let effects = state.apply(Event::CompleteLesson {
            lesson_id: "ini-1".to_string(),
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn level_selection_requires_sign_in() {
        let mut state = SessionState::new();
        state.apply(Event::SelectLevel {
            level_id: catalog::LEVEL_INICIAL.to_string(),
        });
        assert_eq!(state.current_view, View::Login);
        assert!(state.selected_level.is_none());

        state.apply(Event::StartTest);
        assert_eq!(state.current_view, View::Login);
    }

    #[test]
    fn unknown_level_and_lesson_ids_are_ignored() {
        let mut state = registered(SubscriptionTier::Individual);
        assert!(state
            .apply(Event::SelectLevel {
                level_id: "experto".to_string(),
            })
            .is_empty());
        assert_eq!(state.current_view, View::Home);

        state.apply(Event::SelectLevel {
            level_id: catalog::LEVEL_INICIAL.to_string(),
        });
        // int-1 belongs to the intermediate level, not the selected one.
        assert!(state
            .apply(Event::SelectLesson {
                lesson_id: "int-1".to_string(),
            })
            .is_empty());
        assert_eq!(state.current_view, View::LevelLessons);
        assert!(state.selected_lesson.is_none());
    }

    #[test]
    fn lesson_navigation_round_trip() {
        let mut state = registered(SubscriptionTier::Individual);
        state.apply(Event::SelectLevel {
            level_id: catalog::LEVEL_INICIAL.to_string(),
        });
        state.apply(Event::SelectLesson {
            lesson_id: "ini-2".to_string(),
        });
        assert_eq!(state.current_view, View::LessonContent);
        assert_eq!(state.selected_lesson.as_deref(), Some("ini-2"));

        state.apply(Event::BackToLessonList);
        assert_eq!(state.current_view, View::LevelLessons);
        assert!(state.selected_lesson.is_none());
        assert_eq!(state.selected_level.as_deref(), Some(catalog::LEVEL_INICIAL));
    }

    #[test]
    fn three_correct_answers_recommend_the_intermediate_level() {
        let mut state = registered(SubscriptionTier::Individual);
        state.apply(Event::StartTest);
        assert_eq!(state.current_view, View::PlacementTest);

        // q1, q2 and q3 answered correctly; q4 and q5 missed.
        let answers: HashMap<String, usize> = [
            ("q1".to_string(), 1),
            ("q2".to_string(), 2),
            ("q3".to_string(), 2),
            ("q4".to_string(), 0),
            ("q5".to_string(), 3),
        ]
        .into_iter()
        .collect();
        let score = crate::placement::score(&answers);
        assert_eq!(score, 3);

        state.apply(Event::CompleteTest { score });
        assert_eq!(state.current_view, View::LevelLessons);
        assert_eq!(
            state.selected_level.as_deref(),
            Some(catalog::LEVEL_INTERMEDIO)
        );
    }

    #[test]
    fn switching_to_a_foreign_profile_is_rejected() {
        let mut state = registered(SubscriptionTier::Family);
        let own_profile = state.app.profiles[0].id;

        let foreign = Profile {
            id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            name: "Intruso".to_string(),
            avatar_color: "blue".to_string(),
            xp: 0,
            completed_lessons: Vec::new(),
            is_educator: false,
        };
        let foreign_id = foreign.id;
        state.app.profiles.push(foreign);

        let effects = state.apply(Event::SwitchProfile {
            profile_id: foreign_id,
        });
        assert!(effects.is_empty());
        assert_eq!(state.app.active_profile_id, Some(own_profile));
    }

    #[test]
    fn switching_between_own_profiles_changes_the_active_pointer() {
        let mut state = registered(SubscriptionTier::Family);
        state.apply(Event::CreateProfile {
            name: "Luis".to_string(),
        });
        let second = state.app.profiles[1].id;

        let effects = state.apply(Event::SwitchProfile { profile_id: second });
        assert_eq!(effects, vec![Effect::PersistState, Effect::ResetScroll]);
        assert_eq!(state.app.active_profile_id, Some(second));
        assert_eq!(state.current_view, View::Home);
    }

    #[test]
    fn created_profiles_take_unused_avatar_colors_first() {
        let mut state = registered(SubscriptionTier::Family);
        assert_eq!(state.app.profiles[0].avatar_color, "blue");

        state.apply(Event::CreateProfile {
            name: "Luis".to_string(),
        });
        assert_eq!(state.app.profiles[1].avatar_color, "green");
    }

    #[test]
    fn profile_creation_is_not_capped_by_the_plan_tier() {
        // The individual tier advertises a single profile; the dashboard
        // hides the action, but the machine itself accepts the event.
        let mut state = registered(SubscriptionTier::Individual);
        assert!(!SubscriptionTier::Individual.allows_extra_profiles());
        assert!(SubscriptionTier::Family.allows_extra_profiles());

        state.apply(Event::CreateProfile {
            name: "Hermano".to_string(),
        });
        assert_eq!(state.app.profiles.len(), 2);
    }

    #[test]
    fn logout_resets_to_the_signed_out_state() {
        let mut state = registered(SubscriptionTier::Family);
        state.apply(Event::SelectLevel {
            level_id: catalog::LEVEL_INICIAL.to_string(),
        });

        let effects = state.apply(Event::Logout);
        assert_eq!(
            effects,
            vec![Effect::SetActiveAccount(None), Effect::ResetScroll]
        );
        assert_eq!(state.app, AccountState::default());
        assert_eq!(state.current_view, View::Home);
        assert!(state.selected_level.is_none());
    }

    #[test]
    fn sign_in_installs_the_loaded_snapshot() {
        let donor = registered(SubscriptionTier::Family);
        let snapshot = donor.app.clone();

        let mut state = SessionState::new();
        state.apply(Event::OpenLogin);
        let effects = state.apply(Event::SignIn {
            state: snapshot.clone(),
        });
        assert_eq!(effects, vec![Effect::ResetScroll]);
        assert_eq!(state.app, snapshot);
        assert_eq!(state.current_view, View::Home);
    }

    #[test]
    fn updating_the_logo_persists_without_a_view_change() {
        let mut state = registered(SubscriptionTier::Institution);
        state.apply(Event::NavigateToDashboard);

        let effects = state.apply(Event::UpdateInstitutionLogo {
            logo: Some("data:image/png;base64,AAAA".to_string()),
        });
        assert_eq!(effects, vec![Effect::PersistState]);
        assert_eq!(state.current_view, View::Dashboard);
        assert!(state.app.institution_logo.is_some());

        state.apply(Event::UpdateInstitutionLogo { logo: None });
        assert!(state.app.institution_logo.is_none());
    }
}
