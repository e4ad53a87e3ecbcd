pub mod artifact_storage;
pub mod http_client;
pub mod signing_service;
