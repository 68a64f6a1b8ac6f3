pub mod mock_contact_client;

#[allow(unused_imports)]
pub use mock_contact_client::MockContactClient;
