mod actions;
pub(crate) mod args;
mod format;

pub(crate) use actions::{handle_add, handle_delete, handle_list, handle_reorder, handle_test};
