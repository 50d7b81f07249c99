// Field detectors: each generates competing candidates from independent
// signals and picks one winner. They share the candidate/score/select
// pattern but have no dependencies on each other.

pub mod company;
pub mod role;
pub mod salary;
