pub mod details_panel;
pub mod input_area;
pub mod picker;
pub mod results_panel;
pub mod story_panel;
