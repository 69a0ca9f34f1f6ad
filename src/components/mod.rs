pub mod message;
pub mod task_intake;
pub mod recommendations;
pub mod sessions;

pub use message::{MessageView, role_class, role_label};
pub use task_intake::{TaskIntake, IntakeError, validate_description, MIN_DESCRIPTION_LEN};
pub use recommendations::{RecommendationsPanel, embed_hint};
pub use sessions::SessionsPanel;
