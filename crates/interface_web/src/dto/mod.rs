//! Request bodies and page models

pub mod forms;
pub mod pages;
