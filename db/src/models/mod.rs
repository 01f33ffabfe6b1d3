pub mod course;
pub mod instructor;
