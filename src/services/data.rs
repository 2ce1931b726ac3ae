//! Built-in health service categories shown on the landing page.

use crate::error::PortalResult;
use crate::services::catalog::CatalogStore;
use crate::types::{Category, Item};

pub fn health_services() -> Vec<Category> {
    vec![
        Category::new(
            "symptoms",
            "🩺",
            "Symptom Checker",
            vec![
                Item::free(
                    "Fever & Cold",
                    "Get guidance on managing fever, cold symptoms, and when to seek medical attention",
                ),
                Item::free(
                    "Digestive Issues",
                    "Information about stomach problems, diarrhea, and dietary recommendations",
                ),
                Item::free(
                    "Skin Conditions",
                    "Identify common skin problems and get treatment suggestions",
                ),
            ],
        ),
        Category::new(
            "vaccination",
            "💉",
            "Vaccination Schedule",
            vec![
                Item::free(
                    "Child Immunization",
                    "Complete vaccination schedule for children from birth to 18 years",
                ),
                Item::free(
                    "Adult Vaccines",
                    "Recommended vaccines for adults including seasonal flu and COVID-19",
                ),
                Item::free(
                    "Pregnancy Vaccines",
                    "Safe vaccination schedule during pregnancy and breastfeeding",
                ),
            ],
        ),
        Category::new(
            "prevention",
            "🛡️",
            "Disease Prevention",
            vec![
                Item::free(
                    "Malaria Prevention",
                    "Tips to prevent malaria, mosquito control, and early detection",
                ),
                Item::free(
                    "Dengue Awareness",
                    "Recognize dengue symptoms and prevention strategies during monsoon",
                ),
                Item::free(
                    "Hygiene Practices",
                    "Daily hygiene habits to prevent common infections and diseases",
                ),
            ],
        ),
        Category::new(
            "emergency",
            "🚨",
            "Emergency Guidance",
            vec![
                Item::free(
                    "First Aid",
                    "Basic first aid instructions for common emergencies and injuries",
                ),
                Item::free(
                    "Emergency Contacts",
                    "Local hospital numbers, ambulance services, and health helplines",
                ),
                Item::free(
                    "Outbreak Alerts",
                    "Real-time alerts about disease outbreaks in your area",
                ),
            ],
        ),
    ]
}

pub fn health_services_catalog() -> PortalResult<CatalogStore> {
    CatalogStore::new(health_services())
}
