pub mod commands;
pub mod frequency;
pub mod section;
pub mod section_state;
