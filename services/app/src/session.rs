//! services/app/src/session.rs
//!
//! The session driver: the explicit store object handed to the front-end.
//! It owns the in-memory state record, applies pure transitions and then
//! executes their effects against the storage port, in order. One user
//! action is fully processed before the next is accepted.

use std::sync::Arc;

use chrono::NaiveDate;
use codegenio_core::domain::{is_valid_email, ChatRole, ChatTurn};
use codegenio_core::machine::{Effect, Event, SessionState};
use codegenio_core::ports::{LessonAssistantService, StateStore};
use codegenio_core::{catalog, export, view};
use tracing::{info, warn};

/// Result of the login flow's email check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailCheck {
    /// The account exists and has been signed in.
    Exists,
    /// No account under this email; the caller proceeds to registration.
    NotRegistered,
    /// The address failed the format check; surfaced as an inline form error.
    Invalid,
}

pub struct Session {
    state: SessionState,
    store: Arc<dyn StateStore>,
    assistant: Arc<dyn LessonAssistantService>,
    /// Chat history of the lesson named by `chat_lesson`; reset whenever the
    /// selected lesson changes.
    chat_history: Vec<ChatTurn>,
    chat_lesson: Option<String>,
}

impl Session {
    pub fn new(store: Arc<dyn StateStore>, assistant: Arc<dyn LessonAssistantService>) -> Self {
        Self {
            state: SessionState::new(),
            store,
            assistant,
            chat_history: Vec::new(),
            chat_lesson: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Derives the current render model.
    pub fn screen(&self) -> view::Screen<'_> {
        view::resolve(&self.state)
    }

    pub fn chat_history(&self) -> &[ChatTurn] {
        &self.chat_history
    }

    /// Loads the active account's snapshot at startup, if any. A cold start
    /// leaves the default signed-out state in place.
    pub async fn resume(&mut self) {
        if let Some(loaded) = self.store.load_active_account_state().await {
            info!("Resuming session for the active account");
            self.state.app = loaded;
        }
    }

    /// Applies one event and executes its effects in order. Returns the
    /// effects so the front-end can react to the scroll reset.
    pub async fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        let effects = self.state.apply(event);
        for effect in &effects {
            match effect {
                Effect::PersistState => self.persist().await,
                Effect::SetActiveAccount(email) => {
                    if let Err(e) = self.store.set_active_account(email.as_deref()).await {
                        warn!("Failed to update the active-account pointer: {}", e);
                    }
                }
                Effect::ResetScroll => {}
            }
        }
        self.sync_chat_scope();
        effects
    }

    /// The login flow's first step: validate the address, then branch on
    /// account existence. Existing accounts are signed in on the spot.
    pub async fn check_email(&mut self, email: &str) -> EmailCheck {
        if !is_valid_email(email) {
            return EmailCheck::Invalid;
        }
        if !self.store.account_exists(email).await {
            return EmailCheck::NotRegistered;
        }
        // The loader resolves the pointer, so it has to be written first.
        if let Err(e) = self.store.set_active_account(Some(email)).await {
            warn!("Failed to update the active-account pointer: {}", e);
        }
        match self.store.load_active_account_state().await {
            Some(state) => {
                self.dispatch(Event::SignIn { state }).await;
                EmailCheck::Exists
            }
            None => EmailCheck::NotRegistered,
        }
    }

    /// Sends a lesson question to the assistant and records both chat turns.
    /// Returns `None` when no lesson is open.
    pub async fn ask_assistant(&mut self, question: &str) -> Option<String> {
        let level_id = self.state.selected_level.as_deref()?;
        let lesson_id = self.state.selected_lesson.as_deref()?;
        let (_, lesson) = catalog::lesson(level_id, lesson_id)?;

        self.chat_history.push(ChatTurn {
            role: ChatRole::Student,
            text: question.to_string(),
        });
        let reply = self
            .assistant
            .ask(question, &lesson.content, &lesson.title)
            .await;
        // The reply lands in whatever history is current once the await
        // returns; histories are only reset on lesson changes.
        self.chat_history.push(ChatTurn {
            role: ChatRole::Assistant,
            text: reply.text.clone(),
        });
        Some(reply.text)
    }

    /// CSV progress report for the authenticated account: file name and
    /// document body. `None` when signed out.
    pub fn export_report(&self, date: NaiveDate) -> Option<(String, String)> {
        self.state.app.account.as_ref()?;
        let profiles = self.state.app.owned_profiles();
        Some((
            export::report_file_name(date),
            export::progress_report_csv(&profiles),
        ))
    }

    async fn persist(&mut self) {
        let Some(email) = self.state.app.account.as_ref().map(|a| a.email.clone()) else {
            return;
        };
        if let Err(e) = self.store.save_account_state(&email, &self.state.app).await {
            warn!(
                "Failed to persist account state; continuing with the in-memory copy: {}",
                e
            );
        }
    }

    fn sync_chat_scope(&mut self) {
        if self.chat_lesson != self.state.selected_lesson {
            self.chat_lesson = self.state.selected_lesson.clone();
            self.chat_history.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use codegenio_core::domain::{AccountState, SubscriptionTier};
    use codegenio_core::ports::{AssistantReply, PortError, PortResult};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Port double mirroring the JSON store's semantics in memory.
    #[derive(Default)]
    struct InMemoryStore {
        inner: Mutex<(Option<String>, HashMap<String, AccountState>)>,
    }

    #[async_trait]
    impl StateStore for InMemoryStore {
        async fn load_active_account_state(&self) -> Option<AccountState> {
            let inner = self.inner.lock().unwrap();
            let email = inner.0.clone()?;
            inner.1.get(&email).cloned()
        }

        async fn save_account_state(&self, email: &str, state: &AccountState) -> PortResult<()> {
            self.inner
                .lock()
                .unwrap()
                .1
                .insert(email.to_string(), state.clone());
            Ok(())
        }

        async fn set_active_account(&self, email: Option<&str>) -> PortResult<()> {
            self.inner.lock().unwrap().0 = email.map(str::to_string);
            Ok(())
        }

        async fn account_exists(&self, email: &str) -> bool {
            self.inner.lock().unwrap().1.contains_key(email)
        }
    }

    /// Port double for a storage backend that is down.
    struct BrokenStore;

    #[async_trait]
    impl StateStore for BrokenStore {
        async fn load_active_account_state(&self) -> Option<AccountState> {
            None
        }

        async fn save_account_state(&self, _: &str, _: &AccountState) -> PortResult<()> {
            Err(PortError::Unexpected("quota exceeded".to_string()))
        }

        async fn set_active_account(&self, _: Option<&str>) -> PortResult<()> {
            Err(PortError::Unexpected("quota exceeded".to_string()))
        }

        async fn account_exists(&self, _: &str) -> bool {
            false
        }
    }

    struct StubAssistant;

    #[async_trait]
    impl LessonAssistantService for StubAssistant {
        async fn ask(&self, _: &str, _: &str, lesson_title: &str) -> AssistantReply {
            AssistantReply {
                text: format!("Respuesta sobre {lesson_title}"),
            }
        }
    }

    fn session_with(store: Arc<dyn StateStore>) -> Session {
        Session::new(store, Arc::new(StubAssistant))
    }

    async fn register(session: &mut Session) {
        session
            .dispatch(Event::Register {
                name: "Ana García".to_string(),
                email: "ana@ejemplo.com".to_string(),
                tier: SubscriptionTier::Family,
            })
            .await;
    }

    #[tokio::test]
    async fn registration_persists_and_check_email_signs_back_in() {
        let store = Arc::new(InMemoryStore::default());
        let mut session = session_with(store.clone());
        register(&mut session).await;
        session
            .dispatch(Event::CompleteLesson {
                lesson_id: "ini-1".to_string(),
            })
            .await;
        let snapshot = session.state().app.clone();

        session.dispatch(Event::Logout).await;
        assert!(session.state().app.account.is_none());

        let check = session.check_email("ana@ejemplo.com").await;
        assert_eq!(check, EmailCheck::Exists);
        assert_eq!(session.state().app, snapshot);
    }

    #[tokio::test]
    async fn resume_restores_the_active_account() {
        let store = Arc::new(InMemoryStore::default());
        {
            let mut session = session_with(store.clone());
            register(&mut session).await;
        }

        let mut fresh = session_with(store);
        fresh.resume().await;
        assert!(fresh.state().app.account.is_some());
        assert_eq!(fresh.state().app.profiles.len(), 1);
    }

    #[tokio::test]
    async fn malformed_and_unknown_emails_do_not_sign_in() {
        let store = Arc::new(InMemoryStore::default());
        let mut session = session_with(store);

        assert_eq!(session.check_email("no-es-un-email").await, EmailCheck::Invalid);
        assert_eq!(
            session.check_email("nadie@ejemplo.com").await,
            EmailCheck::NotRegistered
        );
        assert!(session.state().app.account.is_none());
    }

    #[tokio::test]
    async fn storage_failure_leaves_the_in_memory_state_authoritative() {
        let mut session = session_with(Arc::new(BrokenStore));
        register(&mut session).await;

        assert!(session.state().app.account.is_some());
        session
            .dispatch(Event::CompleteLesson {
                lesson_id: "ini-1".to_string(),
            })
            .await;
        assert_eq!(session.state().app.profiles[0].xp, 100);
    }

    #[tokio::test]
    async fn chat_history_is_scoped_to_the_open_lesson() {
        let store = Arc::new(InMemoryStore::default());
        let mut session = session_with(store);
        register(&mut session).await;
        session
            .dispatch(Event::SelectLevel {
                level_id: catalog::LEVEL_INICIAL.to_string(),
            })
            .await;
        session
            .dispatch(Event::SelectLesson {
                lesson_id: "ini-1".to_string(),
            })
            .await;

        let reply = session.ask_assistant("¿Qué es esto?").await;
        assert_eq!(
            reply.as_deref(),
            Some("Respuesta sobre Tu Primer \"Hola Mundo\"")
        );
        assert_eq!(session.chat_history().len(), 2);
        assert_eq!(session.chat_history()[0].role, ChatRole::Student);
        assert_eq!(session.chat_history()[1].role, ChatRole::Assistant);

        session.dispatch(Event::BackToLessonList).await;
        session
            .dispatch(Event::SelectLesson {
                lesson_id: "ini-2".to_string(),
            })
            .await;
        assert!(session.chat_history().is_empty());
    }

    #[tokio::test]
    async fn asking_without_an_open_lesson_is_rejected() {
        let store = Arc::new(InMemoryStore::default());
        let mut session = session_with(store);
        register(&mut session).await;

        assert!(session.ask_assistant("¿Hola?").await.is_none());
        assert!(session.chat_history().is_empty());
    }

    #[tokio::test]
    async fn report_covers_the_account_roster() {
        let store = Arc::new(InMemoryStore::default());
        let mut session = session_with(store);

        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert!(session.export_report(date).is_none());

        register(&mut session).await;
        session
            .dispatch(Event::CreateProfile {
                name: "Luis".to_string(),
            })
            .await;
        session
            .dispatch(Event::CompleteLesson {
                lesson_id: "ini-1".to_string(),
            })
            .await;

        let (file_name, body) = session.export_report(date).unwrap();
        assert_eq!(file_name, "reporte_rendimiento_CodeGenio_2024-03-09.csv");
        assert_eq!(
            body,
            "Nombre,Puntos de Experiencia (XP),Lecciones Completadas\n\"Ana\",100,1\n\"Luis\",0,0"
        );
    }
}
