pub mod art;
pub mod panels;
pub mod plot;
pub mod table;
