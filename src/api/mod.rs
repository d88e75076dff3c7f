pub mod format;

pub use format::{
    CreateTodoRequest, DeleteTodoRequest, ResponseEnvelope, TodoDto, UpdateTodoRequest,
};
