pub mod addresses_info;
