pub mod dequeue;
pub mod discover;
pub mod generator;
pub mod server_connection;
pub mod server_viewer_msg;
pub mod shape;
pub mod svg;
pub mod token;
pub mod viewer_server_msg;
