//! Database Models

// Serde helpers
pub mod serde_helpers;

// Catalog Domain
pub mod product;

// Events
pub mod event;

// Orders
pub mod sold_item;
pub mod sold_ticket;
pub mod status;

// Re-exports
pub use event::{Event, EventId};
pub use product::{
    Brand, Category, KNOWN_BRANDS, KNOWN_CATEGORIES, Product, ProductCreate, ProductId,
    ProductUpdate, SIZE_ORDER, Size,
};
pub use sold_item::{CartLine, SoldItem, SoldItemId};
pub use sold_ticket::{SoldTicket, SoldTicketId};
pub use status::OrderStatus;
