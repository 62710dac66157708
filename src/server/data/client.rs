use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, prelude::Expr, sea_query::ExprTrait,
};

use crate::server::model::client::{Client, ClientParams};

pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all clients ordered by last name then first name, with reservation counts.
    pub async fn get_all(&self) -> Result<Vec<Client>, DbErr> {
        let clients = entity::prelude::Client::find()
            .order_by_asc(entity::client::Column::LastName)
            .order_by_asc(entity::client::Column::FirstName)
            .order_by_asc(entity::client::Column::Id)
            .all(self.db)
            .await?;

        let counts = self.reservation_counts().await?;

        Ok(clients
            .into_iter()
            .map(|c| {
                let count = counts.get(&c.id).copied().unwrap_or(0);
                Client::from_entity(c, count)
            })
            .collect())
    }

    /// Gets a client by ID with its reservation count.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Client>, DbErr> {
        let Some(client) = entity::prelude::Client::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let count = entity::prelude::ReservationClient::find()
            .filter(entity::reservation_client::Column::ClientId.eq(id))
            .count(self.db)
            .await?;

        Ok(Some(Client::from_entity(client, count)))
    }

    /// Finds a client by exact email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::client::Model>, DbErr> {
        entity::prelude::Client::find()
            .filter(entity::client::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Inserts a new client.
    pub async fn create(&self, params: ClientParams) -> Result<Client, DbErr> {
        let client = entity::client::ActiveModel {
            last_name: ActiveValue::Set(params.last_name),
            first_name: ActiveValue::Set(params.first_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Client::from_entity(client, 0))
    }

    /// Replaces a client's editable fields.
    ///
    /// # Returns
    /// - `Ok(Some(Client))` - Updated client
    /// - `Ok(None)` - No client with this ID
    /// - `Err(DbErr)` - Database error, including unique violations on email
    pub async fn update(&self, id: i32, params: ClientParams) -> Result<Option<Client>, DbErr> {
        let Some(existing) = entity::prelude::Client::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::client::ActiveModel = existing.into();
        active.last_name = ActiveValue::Set(params.last_name);
        active.first_name = ActiveValue::Set(params.first_name);
        active.email = ActiveValue::Set(params.email);
        active.phone = ActiveValue::Set(params.phone);
        active.update(self.db).await?;

        self.get_by_id(id).await
    }

    /// Deletes a client by ID.
    ///
    /// Fails with a foreign key error if the client is still attached to a reservation.
    ///
    /// # Returns
    /// - `Ok(true)` - Client deleted
    /// - `Ok(false)` - No client with this ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Client::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Whether any reservation references this client.
    pub async fn is_referenced(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ReservationClient::find()
            .filter(entity::reservation_client::Column::ClientId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the IDs from `ids` that do not belong to any client, in input order.
    pub async fn find_missing(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: HashSet<i32> = entity::prelude::Client::find()
            .select_only()
            .column(entity::client::Column::Id)
            .filter(entity::client::Column::Id.is_in(ids.to_vec()))
            .into_tuple::<i32>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        Ok(ids.iter().copied().filter(|id| !found.contains(id)).collect())
    }

    /// Number of reservations per client ID, counted with `GROUP BY client_id`.
    async fn reservation_counts(&self) -> Result<HashMap<i32, u64>, DbErr> {
        let rows: Vec<(i32, i64)> = entity::prelude::ReservationClient::find()
            .select_only()
            .column(entity::reservation_client::Column::ClientId)
            .column_as(
                Expr::col(entity::reservation_client::Column::ReservationId).count(),
                "n",
            )
            .group_by(entity::reservation_client::Column::ClientId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(client_id, n)| (client_id, n as u64))
            .collect())
    }
}
