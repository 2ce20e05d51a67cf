mod bounds;
mod position_index;
mod raw_sorted_list;

pub(crate) use bounds::{resolve_index, resolve_range};
pub(crate) use raw_sorted_list::RawSortedList;
