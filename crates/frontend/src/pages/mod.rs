pub mod hazard_map;
