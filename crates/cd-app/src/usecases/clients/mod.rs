//! Client directory use cases.

mod create_client;
mod delete_client;
mod get_client;
mod list_clients;
mod update_client;

pub use create_client::CreateClient;
pub use delete_client::DeleteClient;
pub use get_client::GetClient;
pub use list_clients::ListClients;
pub use update_client::UpdateClient;
