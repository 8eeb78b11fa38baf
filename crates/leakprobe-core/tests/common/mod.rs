pub mod leak_server;
