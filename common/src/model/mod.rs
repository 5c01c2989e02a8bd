pub mod certificate;
pub mod template;
