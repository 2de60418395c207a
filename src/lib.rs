pub mod cli;
pub mod date_provider;
pub mod error;
pub mod gui;
pub mod question;
pub mod question_source;
pub mod quiz_service;
pub mod report;
pub mod session;
pub mod shuffle;
pub mod statistics;
pub mod storage;
pub mod store_factory;
pub mod time_format;
