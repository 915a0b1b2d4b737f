pub mod entry_form;
pub mod expenses;
