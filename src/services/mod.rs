pub mod locale;
pub mod session;
pub mod spam;
pub mod validation;
