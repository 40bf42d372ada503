use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use cakeday_core::{
    Account, AccountId, AccountOrder, AccountStore, AccountStoreError, NewAccount, Username,
};

/// Process-local account store. Contents are lost on restart.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<Username, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn create(&self, account: NewAccount) -> Result<AccountId, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.username()) {
            return Err(AccountStoreError::DuplicateUsername);
        }
        // Accounts are never removed, so the count doubles as a monotonic id.
        let id = AccountId::new(accounts.len() as i64 + 1);
        accounts.insert(account.username().clone(), account.into_account(id));
        Ok(id)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(username)
            .cloned()
            .ok_or(AccountStoreError::NotFound)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .values()
            .find(|account| account.id() == id)
            .cloned()
            .ok_or(AccountStoreError::NotFound)
    }

    async fn list_all(&self, order: AccountOrder) -> Result<Vec<Account>, AccountStoreError> {
        let mut accounts: Vec<Account> = self.accounts.read().await.values().cloned().collect();
        match order {
            AccountOrder::Insertion => accounts.sort_by_key(|account| account.id()),
            AccountOrder::Birthdate => {
                accounts.sort_by_key(|account| (*account.birthdate(), account.id()))
            }
        }
        Ok(accounts)
    }
}
