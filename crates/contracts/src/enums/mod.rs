pub mod customer_type;
pub mod dictionary_kind;
pub mod unit_category;
