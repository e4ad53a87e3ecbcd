pub mod api_clients;
pub mod context;
pub mod mock_server;
