mod string_list;

pub use string_list::StringList;
