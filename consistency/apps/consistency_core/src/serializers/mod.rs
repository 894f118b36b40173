pub mod consistency;
pub mod health;
