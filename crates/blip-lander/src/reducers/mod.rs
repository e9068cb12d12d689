pub mod app_reducer;
pub mod blip_reducer;
pub mod prompt_reducer;
pub mod root_view_reducer;
