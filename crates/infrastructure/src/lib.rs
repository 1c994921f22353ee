//! 基础设施层实现。
//!
//! 提供领域层仓储接口的进程内存实现。

pub mod memory;

pub use memory::InMemoryRepository;
