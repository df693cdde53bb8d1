//! Catalog document contract
//!
//! Shape of the static JSON catalog the frontend fetches once at startup.
//! The document is immutable for the session; all derived views are computed
//! on demand from the loaded struct.

use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Display glyph shown next to the category name
    pub icon: String,
}

// ============================================================================
// Item
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    /// Foreign key into `Category.id`. A dangling reference degrades the
    /// category label in the UI, it is never treated as a load error.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub description: String,
    /// Ordered image URLs. Items reachable from navigation always have at
    /// least one image; the detail page shows `images[0]` first.
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

// ============================================================================
// Contact info
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub whatsapp: String,
}

// ============================================================================
// Catalog document
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<Category>,
    pub items: Vec<Item>,
    #[serde(rename = "contactInfo")]
    pub contact_info: ContactInfo,
}

impl CatalogDocument {
    /// Items belonging to the given category, in catalog order.
    pub fn items_in_category(&self, category_id: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.category == category_id)
            .collect()
    }

    /// Items flagged for the home-page highlight carousel, in catalog order.
    pub fn featured_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.featured).collect()
    }

    /// Lookup by category id. Absence is a normal outcome, not an error.
    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Lookup by item id. Absence is a normal outcome, not an error.
    pub fn item_by_id(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, category: &str, featured: bool) -> Item {
        Item {
            id,
            title: format!("item {}", id),
            category: category.to_string(),
            price: None,
            description: String::new(),
            images: vec!["x.jpg".to_string()],
            featured,
        }
    }

    fn sample_document() -> CatalogDocument {
        CatalogDocument {
            categories: vec![Category {
                id: "k1".to_string(),
                name: "مطابخ".to_string(),
                icon: "🍽".to_string(),
            }],
            items: vec![item(1, "k1", true)],
            contact_info: ContactInfo {
                phone: "+971501234567".to_string(),
                email: "info@example.com".to_string(),
                whatsapp: "+971 50 123 4567".to_string(),
            },
        }
    }

    #[test]
    fn test_items_in_category() {
        let doc = sample_document();
        let in_k1 = doc.items_in_category("k1");
        assert_eq!(in_k1.len(), 1);
        assert_eq!(in_k1[0].id, 1);
        assert!(doc.items_in_category("missing").is_empty());
    }

    #[test]
    fn test_every_item_is_member_of_its_own_category() {
        let mut doc = sample_document();
        doc.items.push(item(2, "k1", false));
        doc.items.push(item(3, "k2", false));
        for i in &doc.items {
            assert!(doc
                .items_in_category(&i.category)
                .iter()
                .any(|member| member.id == i.id));
        }
    }

    #[test]
    fn test_featured_items_preserve_catalog_order() {
        let mut doc = sample_document();
        doc.items.push(item(2, "k1", false));
        doc.items.push(item(3, "k1", true));
        let featured: Vec<u32> = doc.featured_items().iter().map(|i| i.id).collect();
        assert_eq!(featured, vec![1, 3]);
    }

    #[test]
    fn test_lookups() {
        let doc = sample_document();
        assert_eq!(doc.category_by_id("k1").map(|c| c.name.as_str()), Some("مطابخ"));
        assert!(doc.category_by_id("k2").is_none());
        assert_eq!(doc.item_by_id(1).map(|i| i.id), Some(1));
        assert!(doc.item_by_id(42).is_none());
    }

    #[test]
    fn test_document_json_field_names() {
        let json = r#"{
            "categories": [{"id": "k1", "name": "مطابخ", "icon": "🍽"}],
            "items": [{
                "id": 1,
                "title": "مطبخ خشبي",
                "category": "k1",
                "description": "وصف",
                "images": ["a.jpg", "b.jpg"],
                "featured": true
            }],
            "contactInfo": {
                "phone": "+971501234567",
                "email": "info@example.com",
                "whatsapp": "+971 50 123 4567"
            }
        }"#;
        let doc: CatalogDocument = serde_json::from_str(json).expect("valid catalog");
        assert_eq!(doc.items[0].images.len(), 2);
        // price is optional, featured defaults to false when omitted
        assert_eq!(doc.items[0].price, None);
        assert_eq!(doc.contact_info.email, "info@example.com");

        let round = serde_json::to_value(&doc).expect("serializable");
        assert!(round.get("contactInfo").is_some());
    }
}
