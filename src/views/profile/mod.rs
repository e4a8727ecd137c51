pub mod change_password_form;
pub mod profile_page;

pub use change_password_form::ChangePasswordForm;
pub use profile_page::ProfilePage;
