use cakeday_core::{
    Account, AccountId, AccountOrder, AccountStore, AccountStoreError, HashedPassword,
    NewAccount, Role, Username,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{SqlitePool, migrate::MigrateError};

#[derive(Debug, Clone)]
pub struct SqliteAccountStore {
    pool: SqlitePool,
}

impl SqliteAccountStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteAccountStore { pool }
    }

    /// Creates the `users` table when it does not exist yet.
    #[tracing::instrument(name = "Running SQLite migrations", skip_all)]
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    password: String,
    birthdate: String,
    role: Option<String>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountStoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = move |e: cakeday_core::AccountError| {
            AccountStoreError::Unavailable(format!("corrupt row {id}: {e}"))
        };

        let username = Username::try_from(row.username).map_err(corrupt)?;
        let birthdate = row.birthdate.parse().map_err(corrupt)?;
        let role = match row.role.as_deref() {
            Some(role) => role.parse().map_err(corrupt)?,
            None => Role::default(),
        };

        Ok(Account::new(
            AccountId::new(id),
            username,
            HashedPassword::new(Secret::new(row.password)),
            birthdate,
            role,
        ))
    }
}

fn unexpected(e: sqlx::Error) -> AccountStoreError {
    AccountStoreError::Unavailable(e.to_string())
}

#[async_trait::async_trait]
impl AccountStore for SqliteAccountStore {
    #[tracing::instrument(name = "Adding account to SQLite", skip_all)]
    async fn create(&self, account: NewAccount) -> Result<AccountId, AccountStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO users (username, password, birthdate, role)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(account.username().as_str())
        .bind(account.password_hash().as_ref().expose_secret())
        .bind(account.birthdate().to_string())
        .bind(account.role().as_str());

        let result = query.execute(&self.pool).await.map_err(|e| {
            if e
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                return AccountStoreError::DuplicateUsername;
            }
            unexpected(e)
        })?;

        Ok(AccountId::new(result.last_insert_rowid()))
    }

    #[tracing::instrument(name = "Retrieving account by username from SQLite", skip_all)]
    async fn find_by_username(&self, username: &Username) -> Result<Account, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, username, password, birthdate, role
                FROM users
                WHERE username = ?
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(AccountStoreError::NotFound);
        };

        row.try_into()
    }

    #[tracing::instrument(name = "Retrieving account by id from SQLite", skip_all)]
    async fn find_by_id(&self, id: AccountId) -> Result<Account, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, username, password, birthdate, role
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(AccountStoreError::NotFound);
        };

        row.try_into()
    }

    #[tracing::instrument(name = "Listing accounts from SQLite", skip(self))]
    async fn list_all(&self, order: AccountOrder) -> Result<Vec<Account>, AccountStoreError> {
        // Birthdates are stored as YYYY-MM-DD, so text order is date order.
        let sql = match order {
            AccountOrder::Insertion => {
                "SELECT id, username, password, birthdate, role FROM users ORDER BY id"
            }
            AccountOrder::Birthdate => {
                "SELECT id, username, password, birthdate, role FROM users ORDER BY birthdate, id"
            }
        };

        let rows = sqlx::query_as::<_, AccountRow>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;

        rows.into_iter().map(Account::try_from).collect()
    }
}
