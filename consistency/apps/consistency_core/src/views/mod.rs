pub mod consistency;
pub mod health;
pub mod page;
