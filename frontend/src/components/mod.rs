pub mod entries;
pub mod feedback;
pub mod feedback_list;
pub mod forms;
pub mod header;
