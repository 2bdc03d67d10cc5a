pub mod create_dialog;

pub use create_dialog::CreateTaskDialog;
