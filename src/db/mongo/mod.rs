//! MongoDB storage backend.

mod budget;
mod connection;


pub use budget::{BudgetDocument, MongoBudgetRepository};
pub use connection::MongoDatabase;
