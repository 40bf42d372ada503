use cakeday_core::{
    AccountId, AccountOrder, AccountStore, AccountStoreError, Birthdate, Clock, Role, Username,
};
use serde::Serialize;

/// Row of a "whose birthday is it today" listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayEntry {
    pub username: Username,
    pub birthdate: Birthdate,
}

/// Row of the admin listing of every birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayListing {
    pub username: Username,
    pub birthdate: Birthdate,
    pub role: Role,
}

/// Birthday queries over the account store, evaluated against the clock's today.
pub struct BirthdayQueryUseCase<'a, A, C>
where
    A: AccountStore,
    C: Clock,
{
    account_store: &'a A,
    clock: &'a C,
}

impl<'a, A, C> BirthdayQueryUseCase<'a, A, C>
where
    A: AccountStore,
    C: Clock,
{
    pub fn new(account_store: &'a A, clock: &'a C) -> Self {
        Self {
            account_store,
            clock,
        }
    }

    pub fn is_birthday_today(&self, birthdate: &Birthdate) -> bool {
        birthdate.is_birthday_on(self.clock.today())
    }

    /// Reads the birthdate from the store, since sessions do not carry it.
    #[tracing::instrument(name = "BirthdayQueryUseCase::is_account_birthday_today", skip(self))]
    pub async fn is_account_birthday_today(&self, id: AccountId) -> Result<bool, AccountStoreError> {
        let account = self.account_store.find_by_id(id).await?;
        Ok(self.is_birthday_today(account.birthdate()))
    }

    /// Accounts whose birthday is today, in insertion order.
    #[tracing::instrument(name = "BirthdayQueryUseCase::todays_birthdays", skip_all)]
    pub async fn todays_birthdays(&self) -> Result<Vec<BirthdayEntry>, AccountStoreError> {
        let today = self.clock.today();
        let accounts = self.account_store.list_all(AccountOrder::Insertion).await?;

        Ok(accounts
            .into_iter()
            .filter(|account| account.birthdate().is_birthday_on(today))
            .map(|account| BirthdayEntry {
                username: account.username().clone(),
                birthdate: *account.birthdate(),
            })
            .collect())
    }

    /// Every account, oldest birthdate first.
    #[tracing::instrument(name = "BirthdayQueryUseCase::all_birthdays_sorted", skip_all)]
    pub async fn all_birthdays_sorted(&self) -> Result<Vec<BirthdayListing>, AccountStoreError> {
        let accounts = self.account_store.list_all(AccountOrder::Birthdate).await?;

        Ok(accounts
            .into_iter()
            .map(|account| BirthdayListing {
                username: account.username().clone(),
                birthdate: *account.birthdate(),
                role: account.role(),
            })
            .collect())
    }
}
