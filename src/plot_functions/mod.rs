// src/plot_functions/mod.rs

pub mod plot_time_series;
pub mod plot_trajectory;

// src/plot_functions/mod.rs
