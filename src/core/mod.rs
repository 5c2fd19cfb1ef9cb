pub mod aggregator;
pub mod backup;
pub mod datetime;
pub mod extractor;
pub mod parser;
pub mod pipeline;
pub mod status;
pub mod update;
pub mod validator;
