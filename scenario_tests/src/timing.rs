//! Pause timing scenarios on the simulated clock
