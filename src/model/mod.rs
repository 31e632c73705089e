pub mod balance;
pub mod leave_policy;
pub mod leave_record;
pub mod leave_request;
pub mod verdict;
