use std::sync::Arc;

use async_trait::async_trait;
use domain::{EntityId, RepositoryError, User, UserRepository};
use tracing::{debug, info};

use crate::{
    error::{ApplicationError, ApplicationResult},
    usecase::UserUsecase,
};

pub struct UserServiceDependencies {
    pub user_repository: Arc<UserRepository>,
}

pub struct UserService {
    deps: UserServiceDependencies,
}

impl UserService {
    pub fn new(deps: UserServiceDependencies) -> Self {
        Self { deps }
    }
}

#[async_trait]
impl UserUsecase for UserService {
    async fn create_user(&self, user: User) -> ApplicationResult<User> {
        user.validate()?;

        let stored = self.deps.user_repository.create(user).await?;
        info!(user_id = stored.id, "user created");
        Ok(stored)
    }

    async fn list_users(&self) -> ApplicationResult<Vec<User>> {
        let users = self.deps.user_repository.list().await?;
        debug!(count = users.len(), "users listed");
        Ok(users)
    }

    async fn get_user(&self, id: EntityId) -> ApplicationResult<User> {
        self.deps
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::from(RepositoryError::not_found("user", id)))
    }

    async fn update_user(&self, user: User) -> ApplicationResult<User> {
        user.validate_update()?;

        let stored = self.deps.user_repository.update(user).await?;
        info!(user_id = stored.id, "user updated");
        Ok(stored)
    }

    async fn delete_user(&self, id: EntityId) -> ApplicationResult<()> {
        self.deps.user_repository.delete(id).await?;
        info!(user_id = id, "user deleted");
        Ok(())
    }
}
