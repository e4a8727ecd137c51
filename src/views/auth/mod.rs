pub mod auth_page;
pub mod login_form;
pub mod sign_up_form;

pub use auth_page::AuthPage;
pub use login_form::LoginForm;
pub use sign_up_form::SignUpForm;
