pub mod coordinate_input;
pub mod help_overlay;
pub mod location_panel;
pub mod map_view;
pub mod panel;
pub mod route_panel;
