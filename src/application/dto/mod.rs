pub mod pagination;
pub mod posts;
pub mod serde_time;

pub use pagination::PostPage;
pub use posts::PostDto;
