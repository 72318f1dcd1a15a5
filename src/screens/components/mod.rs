pub mod confirm_dialogue;
pub mod date_input;
pub mod navigation_footer;
pub mod notify_banner;
pub mod text_box;
