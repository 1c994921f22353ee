mod event_service;
mod order_service;
mod user_service;

pub use event_service::{EventService, EventServiceDependencies};
pub use order_service::{OrderService, OrderServiceDependencies};
pub use user_service::{UserService, UserServiceDependencies};
