pub mod data_table;
pub mod loading_view;
