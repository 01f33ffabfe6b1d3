pub mod course;
pub mod instructor;
pub mod service;
