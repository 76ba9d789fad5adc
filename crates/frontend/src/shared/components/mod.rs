pub mod card_animated;
pub mod page_header;
pub mod table_checkbox;
pub mod ui;
