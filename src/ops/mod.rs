//! Pure transforms over ordered question collections.
//!
//! Every function takes a `&[Question]` and returns fresh values; inputs
//! are never mutated, and order is preserved except where duplication
//! inserts. "Not found" degrades to `None` or an unchanged copy, never an
//! error.

mod edits;
mod export;
mod queries;

pub use edits::{
    add_question, change_kind_by_id, duplicate_after, edit_option, publish_all, remove_by_id,
    rename_by_id,
};
pub use export::{make_answers, to_csv};
pub use queries::{
    find_by_id, names, non_empty, published, same_kind, sum_points, sum_published_points,
};
