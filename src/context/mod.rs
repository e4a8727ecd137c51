pub mod session;
pub mod theme;
pub mod toast;

pub use session::{use_session, SessionContext, SessionProvider};
pub use theme::{use_theme, Theme, ThemeProvider};
pub use toast::{use_toast, Toast, ToastProvider};
