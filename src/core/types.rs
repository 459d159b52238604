/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (1-based, assigned in input order)
pub type Pid = u32;

/// Simulated clock value in integer time units
pub type Tick = u64;

/// Common result type for simulation operations
pub type SimResult<T> = Result<T, super::errors::SimulationError>;
