pub mod colors;
pub mod formatting;
pub mod table;
