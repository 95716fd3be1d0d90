pub mod match_report;
pub mod results;
pub mod standings;
pub mod top_scorers;
pub mod validation;
