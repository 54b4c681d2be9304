pub mod delete_confirm_modal;
pub mod edit_entry_modal;
pub mod entries_table;
pub mod entries_view;

pub use delete_confirm_modal::DeleteConfirmModal;
pub use edit_entry_modal::EditEntryModal;
pub use entries_table::EntriesTable;
pub use entries_view::EntriesView;
