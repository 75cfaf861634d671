pub mod hostname;
pub mod logging;
