pub mod effects;
pub mod layout;
pub mod navigation;
pub mod sections;
