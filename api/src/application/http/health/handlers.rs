pub mod get_status;
