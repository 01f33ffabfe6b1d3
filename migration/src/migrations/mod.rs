pub mod m202610160001_create_instructors;
pub mod m202610160002_create_courses;
