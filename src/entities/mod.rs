//! The portal's closed set of record variants

pub mod macros;
pub mod notification;
pub mod product;
pub mod request;
pub mod ticket;
pub mod user;

pub use notification::{Notification, NotificationKind};
pub use product::{LOW_STOCK_THRESHOLD, Product, ProductStatus, StockStatus};
pub use request::{Priority, QuoteRequest, RequestComment, RequestItem, RequestStatus};
pub use ticket::{Ticket, TicketCategory, TicketPriority, TicketStatus};
pub use user::{User, UserRole, UserStatus};
