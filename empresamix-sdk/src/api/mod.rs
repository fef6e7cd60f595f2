pub(crate) mod powerbi;
