mod employee;

pub use employee::{Compensation, Employee, EmployeeRef, ReportingStructure};
