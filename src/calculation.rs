pub mod assessment;
pub mod linear;
pub mod report;
pub mod storage;
pub mod tiered;
