pub mod artifact;
pub mod certificate;
pub mod token;
pub mod validation;
pub mod visual;
