//! Widget components for the TUI

pub mod confirm_dialog;
pub mod dashboard;
pub mod header;
pub mod login_form;
pub mod modal_overlay;
pub mod remote_form;
pub mod remote_list;
pub mod search_input;
pub mod status_bar;
pub mod toasts;

pub use confirm_dialog::ConfirmDialog;
pub use dashboard::Dashboard;
pub use header::MainHeader;
pub use login_form::LoginForm;
pub use remote_form::RemoteFormDialog;
pub use remote_list::RemoteList;
pub use search_input::SearchInput;
pub use status_bar::StatusBar;
pub use toasts::ToastStack;
