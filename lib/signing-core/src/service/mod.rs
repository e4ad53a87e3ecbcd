pub mod authentication;
pub mod document;
pub mod error;
pub mod pades_signature;

#[cfg(test)]
pub(crate) mod test_utilities;
