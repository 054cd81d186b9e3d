pub mod sheet_server;
