// src/axis_names.rs

/// Number of components in a vector field.
pub const COMPONENT_COUNT: usize = 3;

/// Legend names of the vector components, indexed 0=x, 1=y, 2=z.
pub const COMPONENT_NAMES: [&str; COMPONENT_COUNT] = ["x", "y", "z"];

// src/axis_names.rs
