use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::admin::CreateAdminParams;

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an admin by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find_by_id(id).one(self.db).await
    }

    /// Finds an admin by email, including the password hash needed for login.
    ///
    /// Emails are stored lowercased, so callers should normalize before lookup.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Inserts a new admin account.
    pub async fn create(&self, params: CreateAdminParams) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            last_name: ActiveValue::Set(params.last_name),
            first_name: ActiveValue::Set(params.first_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
