pub mod a001_dictionary;
pub mod a002_unit;
pub mod a003_customer;
