pub mod error;
pub mod handler_manager;
pub mod operation_message;
