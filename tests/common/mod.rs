pub mod method_server;
