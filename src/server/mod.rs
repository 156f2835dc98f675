// Server module entry point
// Provides listener binding and the accept loop

pub mod conn;
pub mod listener;

pub use conn::run;
pub use listener::bind_listener;
