//! Redis store implementation using bb8 connection pool.
//!
//! Employees are stored as JSON documents under `{prefix}:employee:{id}`.

use async_trait::async_trait;
use bb8::{Pool, PooledConnection};
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, RedisError};

use crate::config::settings::RedisStoreConfig;
use crate::models::Employee;
use crate::store::{EmployeeStore, StoreError};

type RedisPool = Pool<Client>;

fn employee_key(prefix: &str, id: &str) -> String {
    format!("{}:employee:{}", prefix, id)
}

/// Redis-backed employee store with bb8 connection pool.
pub struct RedisEmployeeStore {
    pool: RedisPool,
    key_prefix: String,
}

impl RedisEmployeeStore {
    pub async fn new(config: &RedisStoreConfig) -> Result<Self, StoreError> {
        let client =
            Client::open(config.url.as_str()).map_err(|e| StoreError::Connection(e.to_string()))?;

        let pool = Pool::builder()
            .max_size(config.pool_size)
            .connection_timeout(std::time::Duration::from_secs(config.connection_timeout))
            .build(client)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Ok(Self {
            pool,
            key_prefix: config.key_prefix.clone(),
        })
    }

    fn key(&self, id: &str) -> String {
        employee_key(&self.key_prefix, id)
    }

    async fn get_conn(&self) -> Result<PooledConnection<'_, Client>, StoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))
    }

    fn encode(employee: &Employee) -> Result<String, StoreError> {
        serde_json::to_string(employee).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn decode(raw: &str) -> Result<Employee, StoreError> {
        serde_json::from_str(raw).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    async fn write(&self, employee: Employee) -> Result<Employee, StoreError> {
        let mut conn: PooledConnection<'_, Client> = self.get_conn().await?;
        let key = self.key(&employee.employee_id);
        let document = Self::encode(&employee)?;

        let conn_ref: &mut MultiplexedConnection = &mut conn;
        conn_ref
            .set::<_, _, ()>(&key, document)
            .await
            .map_err(|e| StoreError::Operation(e.to_string()))?;

        Ok(employee)
    }
}

#[async_trait]
impl EmployeeStore for RedisEmployeeStore {
    async fn insert(&self, employee: Employee) -> Result<Employee, StoreError> {
        self.write(employee).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, StoreError> {
        let mut conn: PooledConnection<'_, Client> = self.get_conn().await?;
        let key = self.key(id);

        let conn_ref: &mut MultiplexedConnection = &mut conn;
        let raw: Option<String> = conn_ref
            .get(&key)
            .await
            .map_err(|e: RedisError| StoreError::Operation(e.to_string()))?;

        raw.map(|document| Self::decode(&document)).transpose()
    }

    async fn save(&self, employee: Employee) -> Result<Employee, StoreError> {
        self.write(employee).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn: PooledConnection<'_, Client> = self.get_conn().await?;

        let conn_ref: &mut MultiplexedConnection = &mut conn;
        let _: String = redis::cmd("PING")
            .query_async(conn_ref)
            .await
            .map_err(|e: RedisError| StoreError::Operation(e.to_string()))?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
