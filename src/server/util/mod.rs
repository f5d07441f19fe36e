pub mod password;
pub mod retry;
