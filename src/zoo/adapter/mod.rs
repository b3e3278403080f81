pub mod static_tables;
