//! Pages
//!
//! One component per route.

mod dashboard;
mod not_authorized;
mod sign_in;
mod sign_up;
mod user_management;

pub use dashboard::DashboardPage;
pub use not_authorized::NotAuthorizedPage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
pub use user_management::UserManagementPage;
