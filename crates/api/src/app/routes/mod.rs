pub mod documents;
pub mod system;
