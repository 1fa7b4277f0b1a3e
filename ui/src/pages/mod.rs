pub mod add_idea;
pub mod home;
pub mod ideas;
pub mod login;
pub mod logout;
pub mod my_ideas;
pub mod not_found;
pub mod profile;
pub mod profile_edit;
pub mod register;
pub mod user_add;
pub mod user_detail;
pub mod user_edit;
pub mod user_ideas;
pub mod users;

pub use add_idea::AddIdeaPage;
pub use home::HomePage;
pub use ideas::IdeasPage;
pub use login::LoginPage;
pub use logout::LogoutPage;
pub use my_ideas::MyIdeasPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use profile_edit::ProfileEditPage;
pub use register::RegisterPage;
pub use user_add::UserAddPage;
pub use user_detail::UserDetailPage;
pub use user_edit::UserEditPage;
pub use user_ideas::UserIdeasPage;
pub use users::UsersPage;
