pub mod category_card;
pub mod features;
pub mod hero;
pub mod item_card;
pub mod services_section;

pub use category_card::CategoryCard;
pub use features::Features;
pub use hero::Hero;
pub use item_card::ItemCard;
pub use services_section::ServicesSection;
