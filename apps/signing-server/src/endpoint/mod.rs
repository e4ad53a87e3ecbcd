pub mod authentication;
pub mod document;
pub mod misc;
pub mod pades_signature;
