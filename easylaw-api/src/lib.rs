pub mod limits;
pub mod request;
#[cfg(feature = "json")]
pub mod response;
pub mod status;
