pub mod money;
pub mod patch;
pub mod response;
pub mod validation;
