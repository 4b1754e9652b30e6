//! Static lookup tables loaded once at startup and shared immutably.

pub mod salary;
pub mod subjects;

pub use salary::{Region, SalaryCatalog, SalaryRange};
pub use subjects::SubjectCatalog;
