//! 主应用程序入口
//!
//! 启动 Axum Web API 服务。

use std::sync::Arc;

use application::{
    Clock, EventService, EventServiceDependencies, OrderService, OrderServiceDependencies,
    SystemClock, UserService, UserServiceDependencies,
};
use config::AppConfig;
use domain::{EntityRepository, Event, Order, User};
use infrastructure::InMemoryRepository;
use tracing_subscriber::EnvFilter;
use web_api::{router, AppState, StatusPolicy};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // 初始化日志，RUST_LOG 优先于配置文件
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 数据只保存在进程内存中
    let users = Arc::new(InMemoryRepository::<User>::new());
    let events = Arc::new(InMemoryRepository::<Event>::new());
    let orders = Arc::new(InMemoryRepository::<Order>::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let user_service = UserService::new(UserServiceDependencies {
        user_repository: users.clone(),
    });
    let event_service = EventService::new(EventServiceDependencies {
        event_repository: events.clone(),
    });
    let order_service = OrderService::new(OrderServiceDependencies {
        order_repository: orders.clone(),
        clock,
    });

    let status_policy = StatusPolicy::new(config.http.status_mode);
    let state = AppState::new(
        Arc::new(user_service),
        Arc::new(event_service),
        Arc::new(order_service),
        status_policy,
    );

    let app = router(state);
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!(
        address = %address,
        status_mode = ?status_policy.mode(),
        "票务服务启动在 http://{}",
        address
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 内存中的数据随进程一起丢弃
    tracing::info!(
        users = users.count().await?,
        events = events.count().await?,
        orders = orders.count().await?,
        "服务已停止"
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = listen_or_park("ctrl-c", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = listen_or_park("SIGTERM", async {
        let mut signal =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
        signal.recv().await;
        Ok::<(), std::io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// 等待信号；监听失败时只记录错误并永久挂起，不触发关闭
async fn listen_or_park<F>(name: &str, listen: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(err) = listen.await {
        tracing::error!(signal = name, error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
