//! UI Components
//!
//! Leptos components making up the todo page.

mod todo_form;
mod todo_list;
mod todo_row;
mod status_message;
mod server_status;

pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use status_message::StatusMessage;
pub use server_status::ServerStatusBadge;
