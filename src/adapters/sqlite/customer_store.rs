//! SQLite implementation of the CustomerStore.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Customer;
use crate::domain::ports::CustomerStore;

#[derive(Clone)]
pub struct SqliteCustomerStore {
    pool: SqlitePool,
}

impl SqliteCustomerStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for SqliteCustomerStore {
    async fn add(&self, customer: &Customer) -> DomainResult<u64> {
        // Connection is scoped to this operation and returned to the pool
        // on every exit path.
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(
            r#"INSERT INTO customers (id, company_name, contact_name, contact_title,
               address, city, region, postal_code, country, phone, fax,
               created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&customer.id)
        .bind(&customer.company_name)
        .bind(&customer.contact_name)
        .bind(&customer.contact_title)
        .bind(&customer.address)
        .bind(&customer.city)
        .bind(&customer.region)
        .bind(&customer.postal_code)
        .bind(&customer.country)
        .bind(&customer.phone)
        .bind(&customer.fax)
        .bind(customer.created_at.to_rfc3339())
        .bind(customer.updated_at.to_rfc3339())
        .execute(&mut *conn)
        .await;

        match result {
            Ok(r) => Ok(r.rows_affected()),
            // A primary-key conflict means the store did not accept the
            // write; report it through the affected-row protocol.
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    async fn find(&self, id: &str) -> DomainResult<Option<Customer>> {
        let mut conn = self.pool.acquire().await?;

        let row: Option<CustomerRow> = sqlx::query_as("SELECT * FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn update(&self, customer: &Customer) -> DomainResult<u64> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(
            r#"UPDATE customers SET company_name = ?, contact_name = ?, contact_title = ?,
               address = ?, city = ?, region = ?, postal_code = ?, country = ?,
               phone = ?, fax = ?, updated_at = ?
               WHERE id = ?"#,
        )
        .bind(&customer.company_name)
        .bind(&customer.contact_name)
        .bind(&customer.contact_title)
        .bind(&customer.address)
        .bind(&customer.city)
        .bind(&customer.region)
        .bind(&customer.postal_code)
        .bind(&customer.country)
        .bind(&customer.phone)
        .bind(&customer.fax)
        .bind(customer.updated_at.to_rfc3339())
        .bind(&customer.id)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected())
    }

    async fn remove(&self, id: &str) -> DomainResult<u64> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    async fn all(&self) -> DomainResult<Vec<Customer>> {
        let mut conn = self.pool.acquire().await?;

        let rows: Vec<CustomerRow> = sqlx::query_as("SELECT * FROM customers")
            .fetch_all(&mut *conn)
            .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: String,
    company_name: String,
    contact_name: Option<String>,
    contact_title: Option<String>,
    address: Option<String>,
    city: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
    phone: Option<String>,
    fax: Option<String>,
    created_at: String,
    updated_at: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = DomainError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let created_at = super::parse_datetime(&row.created_at)?;
        let updated_at = super::parse_datetime(&row.updated_at)?;

        Ok(Customer {
            id: row.id,
            company_name: row.company_name,
            contact_name: row.contact_name,
            contact_title: row.contact_title,
            address: row.address,
            city: row.city,
            region: row.region,
            postal_code: row.postal_code,
            country: row.country,
            phone: row.phone,
            fax: row.fax,
            created_at,
            updated_at,
        })
    }
}
