//! Front-end state shared by the interactive views.

pub mod table;
