pub mod powerbi;
