//! crates/codegenio_core/src/view.rs
//!
//! The view router: derives a render model from the current state. Purely a
//! function of state; invalid view/selection combinations resolve to the
//! empty screen instead of failing.

use chrono::NaiveDate;

use crate::catalog;
use crate::domain::{
    Account, Lesson, Level, PlacementQuestion, Profile, SubscriptionPlan, SubscriptionTier,
};
use crate::machine::{SessionState, View};

//=========================================================================================
// Lesson Body Segmentation
//=========================================================================================

/// One renderable piece of a lesson body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonSegment {
    Paragraph(String),
    Code(String),
}

const CODE_OPEN: &str = "[CODE_START]";
const CODE_CLOSE: &str = "[CODE_END]";

/// Splits a lesson body into paragraphs and fenced code blocks.
pub fn lesson_segments(content: &str) -> Vec<LessonSegment> {
    let mut segments = Vec::new();
    let mut rest = content;
    while let Some(start) = rest.find(CODE_OPEN) {
        push_paragraphs(&rest[..start], &mut segments);
        let after = &rest[start + CODE_OPEN.len()..];
        match after.find(CODE_CLOSE) {
            Some(end) => {
                segments.push(LessonSegment::Code(after[..end].trim().to_string()));
                rest = &after[end + CODE_CLOSE.len()..];
            }
            None => {
                // Unterminated fence: render the remainder as code.
                segments.push(LessonSegment::Code(after.trim().to_string()));
                rest = "";
            }
        }
    }
    push_paragraphs(rest, &mut segments);
    segments
}

fn push_paragraphs(text: &str, out: &mut Vec<LessonSegment>) {
    for paragraph in text.lines().map(str::trim).filter(|p| !p.is_empty()) {
        out.push(LessonSegment::Paragraph(paragraph.to_string()));
    }
}

//=========================================================================================
// Screens
//=========================================================================================

/// Data for the print-oriented certificate template.
#[derive(Debug, PartialEq)]
pub struct CertificateData<'a> {
    pub student_name: &'a str,
    pub course_title: &'static str,
    pub issuer: &'static str,
    pub institution_logo: Option<&'a str>,
    /// Educator accounts without a logo get a placeholder box where it
    /// would be printed.
    pub show_logo_placeholder: bool,
}

/// The exhaustive set of renderable screens, derived from one state record.
#[derive(Debug)]
pub enum Screen<'a> {
    Home {
        levels: &'static [Level],
        plans: &'static [SubscriptionPlan],
        signed_in: bool,
    },
    LevelLessons {
        level: &'static Level,
    },
    LessonContent {
        level: &'static Level,
        lesson: &'static Lesson,
        completed: bool,
    },
    Dashboard {
        account: &'a Account,
        profiles: Vec<&'a Profile>,
        can_add_profile: bool,
        is_educator: bool,
        institution_logo: Option<&'a str>,
    },
    PlacementTest {
        questions: &'static [PlacementQuestion],
    },
    Certificate(CertificateData<'a>),
    Login,
    /// Safe fallback for view/selection combinations that cannot render.
    Empty,
}

/// Maps the current view tag and selections to a screen.
pub fn resolve(state: &SessionState) -> Screen<'_> {
    match state.current_view {
        View::Home => Screen::Home {
            levels: catalog::levels(),
            plans: catalog::subscription_plans(),
            signed_in: state.app.account.is_some(),
        },

        View::Login => Screen::Login,

        View::PlacementTest => Screen::PlacementTest {
            questions: catalog::placement_questions(),
        },

        View::LevelLessons => match state.selected_level.as_deref().and_then(catalog::level) {
            Some(level) => Screen::LevelLessons { level },
            None => Screen::Empty,
        },

        View::LessonContent => {
            let selection = state
                .selected_level
                .as_deref()
                .zip(state.selected_lesson.as_deref());
            match selection.and_then(|(level_id, lesson_id)| catalog::lesson(level_id, lesson_id)) {
                Some((level, lesson)) => Screen::LessonContent {
                    level,
                    lesson,
                    completed: state
                        .app
                        .active_profile()
                        .is_some_and(|p| p.completed_lessons.contains(&lesson.id)),
                },
                None => Screen::Empty,
            }
        }

        View::Dashboard => match &state.app.account {
            Some(account) => Screen::Dashboard {
                account,
                profiles: state.app.owned_profiles(),
                can_add_profile: account.tier.allows_extra_profiles(),
                is_educator: account.tier == SubscriptionTier::Institution,
                institution_logo: state.app.institution_logo.as_deref(),
            },
            None => Screen::Empty,
        },

        View::Certificate => match state.app.active_profile() {
            Some(profile) => Screen::Certificate(CertificateData {
                student_name: &profile.name,
                course_title: catalog::COURSE_TITLE,
                issuer: catalog::CERTIFICATE_ISSUER,
                institution_logo: state.app.institution_logo.as_deref(),
                show_logo_placeholder: state.app.institution_logo.is_none() && profile.is_educator,
            }),
            None => Screen::Empty,
        },
    }
}

/// Issue-date line of the certificate, day/month/year without padding.
pub fn format_issue_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}
