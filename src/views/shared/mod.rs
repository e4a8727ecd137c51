pub mod confirm_dialog;
pub mod data_table;
pub mod form;
pub mod layout;
pub mod navbar;
pub mod not_found;
pub mod protected;

pub use confirm_dialog::ConfirmDialog;
pub use data_table::{ColumnDef, DataTable, HideBelow, TableRow};
pub use form::{Alert, FormField};
pub use layout::{AuthLayout, MainLayout};
pub use not_found::NotFound;
pub use protected::Protected;
