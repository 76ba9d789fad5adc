//! Domain model of the back-office console: dictionaries, units,
//! customers and the save extension point shared by their dialogs.

pub mod domain;
pub mod enums;
pub mod shared;
