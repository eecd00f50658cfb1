pub mod client;
pub mod employee;
pub mod participant;
pub mod project;
pub mod report;
pub mod review;
pub mod status;
pub mod topic;
pub mod vote;
