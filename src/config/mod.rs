pub mod global;
pub mod roots;
