//! Spreadsheet import use cases.

mod import_clients;

pub use import_clients::{ImportClients, ImportReport};
