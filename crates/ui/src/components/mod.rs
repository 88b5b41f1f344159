//! # UI Components
//!
//! Reusable building blocks shared by the three record pages.

pub mod inputs;
pub mod table;

pub use inputs::{FormActions, SelectField, SelectOption, TextAreaField, TextField, submit_label};
pub use table::{DataTable, EmptyRow, RowActions};
