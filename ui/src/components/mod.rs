pub mod auth_form;
pub mod confirmation_modal;
pub mod idea_list_item;
pub mod idea_submission_form;
pub mod ideas_list;
pub mod layout;
pub mod pagination_controls;
pub mod require_auth;
pub mod spinner;

pub use auth_form::{AuthForm, AuthMode};
pub use confirmation_modal::ConfirmationModal;
pub use idea_list_item::IdeaListItem;
pub use idea_submission_form::IdeaSubmissionForm;
pub use ideas_list::{IdeaSource, IdeasList};
pub use pagination_controls::PaginationControls;
pub use require_auth::RequireAuth;
pub use spinner::Spinner;
