//! Entity ↔ model mappers

mod category;
mod channel;
mod server;
mod user;
