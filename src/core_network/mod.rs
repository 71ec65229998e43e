pub mod dispatcher;
pub mod network;

pub use dispatcher::Dispatcher;
