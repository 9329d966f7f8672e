use std::collections::HashMap;

use solana_account_decoder::UiAccountEncoding;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;
use tracing::{debug, warn};

use crate::{LookupConfig, SdkResult};

/// Raw-byte comparison against account data at `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemcmpFilter {
    pub offset: usize,
    pub bytes: Vec<u8>,
}

impl MemcmpFilter {
    pub fn new(offset: usize, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            offset,
            bytes: bytes.into(),
        }
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        data.get(self.offset..self.offset + self.bytes.len()) == Some(self.bytes.as_slice())
    }
}

/// Read access to on-chain accounts.
///
/// Lookups only need these two calls, which keeps them testable against an
/// in-memory map.
pub trait AccountReader {
    fn get_account(&self, address: &Pubkey) -> SdkResult<Option<Account>>;

    /// Accounts owned by `program` whose data matches every filter.
    fn get_program_accounts(
        &self,
        program: &Pubkey,
        filters: &[MemcmpFilter],
    ) -> SdkResult<Vec<(Pubkey, Account)>>;
}

impl AccountReader for HashMap<Pubkey, Account> {
    fn get_account(&self, address: &Pubkey) -> SdkResult<Option<Account>> {
        Ok(self.get(address).cloned())
    }

    fn get_program_accounts(
        &self,
        program: &Pubkey,
        filters: &[MemcmpFilter],
    ) -> SdkResult<Vec<(Pubkey, Account)>> {
        Ok(self
            .iter()
            .filter(|(_, account)| account.owner == *program)
            .filter(|(_, account)| filters.iter().all(|f| f.matches(&account.data)))
            .map(|(address, account)| (*address, account.clone()))
            .collect())
    }
}

/// [`AccountReader`] over JSON-RPC, retrying transport failures with backoff.
pub struct RpcAccountReader {
    rpc_client: RpcClient,
    config: LookupConfig,
}

impl RpcAccountReader {
    pub fn new(rpc_client: RpcClient, config: LookupConfig) -> Self {
        Self { rpc_client, config }
    }

    pub fn rpc_client(&self) -> &RpcClient {
        &self.rpc_client
    }

    fn with_retry<T>(
        &self,
        what: &str,
        mut op: impl FnMut() -> Result<T, ClientError>,
    ) -> SdkResult<T> {
        let result = backoff::retry(self.config.backoff(), || {
            op().map_err(|e| {
                if is_transient(&e) {
                    warn!("{} failed, retrying: {}", what, e);
                    backoff::Error::Transient {
                        err: e,
                        retry_after: None,
                    }
                } else {
                    backoff::Error::Permanent(e)
                }
            })
        });

        result.map_err(|e| match e {
            backoff::Error::Permanent(err) => err.into(),
            backoff::Error::Transient { err, .. } => err.into(),
        })
    }
}

fn is_transient(err: &ClientError) -> bool {
    matches!(
        err.kind(),
        ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_)
    )
}

impl AccountReader for RpcAccountReader {
    fn get_account(&self, address: &Pubkey) -> SdkResult<Option<Account>> {
        let commitment = self.rpc_client.commitment();
        let response = self.with_retry("get_account", || {
            self.rpc_client
                .get_account_with_commitment(address, commitment)
        })?;
        Ok(response.value)
    }

    fn get_program_accounts(
        &self,
        program: &Pubkey,
        filters: &[MemcmpFilter],
    ) -> SdkResult<Vec<(Pubkey, Account)>> {
        let config = RpcProgramAccountsConfig {
            filters: Some(
                filters
                    .iter()
                    .map(|f| RpcFilterType::Memcmp(Memcmp::new_raw_bytes(f.offset, f.bytes.clone())))
                    .collect(),
            ),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                commitment: Some(self.rpc_client.commitment()),
                ..Default::default()
            },
            ..Default::default()
        };

        let accounts = self.with_retry("get_program_accounts", || {
            self.rpc_client
                .get_program_accounts_with_config(program, config.clone())
        })?;
        debug!(
            "{} accounts under {} matched {} filters",
            accounts.len(),
            program,
            filters.len()
        );
        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(owner: Pubkey, data: Vec<u8>) -> Account {
        Account {
            lamports: 1,
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        }
    }

    #[test]
    fn test_memcmp_filter_matches_at_offset() {
        let filter = MemcmpFilter::new(2, vec![7, 8]);
        assert!(filter.matches(&[0, 0, 7, 8, 9]));
        assert!(!filter.matches(&[0, 7, 8, 9]));
        assert!(!filter.matches(&[0, 0, 7]));
    }

    #[test]
    fn test_map_reader_filters_by_owner_and_data() {
        let program = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let c = Pubkey::new_unique();

        let mut accounts = HashMap::new();
        accounts.insert(a, account(program, vec![1, 2, 3]));
        accounts.insert(b, account(program, vec![9, 2, 3]));
        accounts.insert(c, account(other, vec![1, 2, 3]));

        let found = accounts
            .get_program_accounts(&program, &[MemcmpFilter::new(0, vec![1])])
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, a);

        assert!(accounts.get_account(&Pubkey::new_unique()).unwrap().is_none());
        assert_eq!(accounts.get_account(&b).unwrap().unwrap().data, vec![9, 2, 3]);
    }
}
