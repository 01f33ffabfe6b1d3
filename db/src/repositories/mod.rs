pub mod course_repository;
pub mod instructor_repository;
pub mod repository;
