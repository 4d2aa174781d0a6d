mod gateway;
mod schema;

pub use gateway::StoreGateway;
