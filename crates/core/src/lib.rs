pub mod id;
pub mod storage;
pub mod todo;

pub use todo::Todo;
