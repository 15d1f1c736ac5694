// src/application/commands/posts/mod.rs
mod create;
mod delete;
mod input;
mod service;
mod update;

pub use create::CreatePostCommand;
pub use delete::DeletePostCommand;
pub use input::PostInput;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
