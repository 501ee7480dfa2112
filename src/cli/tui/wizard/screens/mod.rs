/// Screen modules for the form wizard
pub mod complete;
pub mod form;
