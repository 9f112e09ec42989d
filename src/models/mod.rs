//! Data models for PhoneDesk

pub mod allocation;
pub mod employee;
pub mod phone;

// Re-export commonly used types
pub use allocation::{Allocation, CreateAllocation};
pub use employee::{CreateEmployee, Employee, UpdateEmployee};
pub use phone::{CreatePhone, Phone, PhoneStatus, UpdatePhone};
