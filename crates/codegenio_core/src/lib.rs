pub mod catalog;
pub mod domain;
pub mod export;
pub mod machine;
pub mod placement;
pub mod ports;
pub mod view;

pub use domain::{
    Account, AccountState, ChatRole, ChatTurn, Lesson, Level, PlacementQuestion, Profile,
    SubscriptionPlan, SubscriptionTier,
};
pub use machine::{Effect, Event, SessionState, View};
pub use ports::{AssistantReply, LessonAssistantService, PortError, PortResult, StateStore};
