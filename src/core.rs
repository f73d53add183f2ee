pub mod benchmark;
pub mod contract;
pub mod demand;
pub mod evaluation;
pub mod fuel;
pub mod month;
pub mod plan;
pub mod storage;
