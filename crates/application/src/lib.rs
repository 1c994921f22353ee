//! 应用层实现。
//!
//! 这里提供围绕领域模型的用例服务，负责输入校验、字段赋值，
//! 并把结果交给仓储保存。

pub mod clock;
pub mod error;
pub mod services;
pub mod usecase;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ApplicationError, ApplicationResult};
pub use services::{
    EventService, EventServiceDependencies, OrderService, OrderServiceDependencies, UserService,
    UserServiceDependencies,
};
pub use usecase::{EventUsecase, OrderUsecase, UserUsecase};

#[cfg(feature = "testing")]
pub use usecase::{MockEventUsecase, MockOrderUsecase, MockUserUsecase};
