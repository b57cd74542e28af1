mod assignment;
mod roster;
mod student;

pub use assignment::{Assignment, Status};
pub use roster::ClassList;
pub use student::Student;
