pub mod leave;
