pub mod response;
pub mod resume;
