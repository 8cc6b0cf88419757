pub mod config;
pub mod proto;
pub mod router;
pub mod search;
pub mod services;
