pub mod grammar_view;
pub mod popup;
pub mod quiz_view;
pub mod reading_view;
pub mod sidebar;
pub mod welcome;
