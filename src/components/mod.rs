//! Storefront Components

mod cart_drawer;
mod cart_line_item;
mod cart_note;
mod cart_page;
mod product_gallery;
mod quantity_stepper;
mod quick_add_button;
mod reveal;
mod stat_counter;

pub use cart_drawer::CartDrawer;
pub use cart_line_item::CartLineItem;
pub use cart_note::CartNote;
pub use cart_page::CartPage;
pub use product_gallery::ProductGallery;
pub use quantity_stepper::QuantityStepper;
pub use quick_add_button::QuickAddButton;
pub use reveal::Reveal;
pub use stat_counter::StatCounter;
