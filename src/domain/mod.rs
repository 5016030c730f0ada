pub mod data_clerk;
pub mod data_processor;
pub mod file_loader;
pub mod manager;
pub mod number_finder;
pub mod ports;
pub mod score_writer;
pub mod tokeniser;
pub mod topic;
