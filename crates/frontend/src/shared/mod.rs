pub mod contact_links;
pub mod icons;
