pub mod daily;
pub mod error;
pub mod locale;
pub mod map;
pub mod weather;
