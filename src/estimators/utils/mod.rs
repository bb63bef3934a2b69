// Shared numerical and I/O helpers used by the ECDF objective functions

pub mod linalg;
pub mod output;
