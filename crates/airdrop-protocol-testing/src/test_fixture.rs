use {
    crate::load_programs,
    airdrop_protocol_sdk::{
        build_claim_ixs, build_close_ix, build_configure_ixs, AddressFinder, AirdropState,
        CampaignAddresses, ClaimParams, ClaimProof, ConfigureParams, VerifierConfig,
    },
    anchor_lang::AccountDeserialize,
    litesvm::{
        types::{FailedTransactionMetadata, TransactionResult},
        LiteSVM,
    },
    litesvm_token::{
        spl_token::solana_program::native_token::LAMPORTS_PER_SOL,
        CreateAssociatedTokenAccount, CreateMint, MintTo,
    },
    solana_account::Account,
    solana_instruction::{error::InstructionError, Instruction},
    solana_keypair::Keypair,
    solana_message::Message,
    solana_pubkey::Pubkey,
    solana_signer::Signer as _,
    solana_transaction::Transaction,
    solana_transaction_error::TransactionError,
    spl_token::{solana_program::program_pack::Pack as _, state::Account as TokenAccount},
};

pub const MINT_DECIMALS: u8 = 6;

/// A funded depositor with their own mint, plus the programs loaded into a fresh VM.
pub struct TestFixture {
    pub depositor: Keypair,
    pub mint: Pubkey,
    pub depositor_token_account: Pubkey,
    pub address_finder: AddressFinder,

    log_send_transaction_results: bool,
    svm: LiteSVM,
}

impl TestFixture {
    /// Mints `supply` tokens to the depositor's associated token account.
    pub fn new(supply: u64) -> Result<Self, FailedTransactionMetadata> {
        let mut svm = LiteSVM::new();
        load_programs(&mut svm);

        let depositor = Keypair::new();
        svm.airdrop(&depositor.pubkey(), LAMPORTS_PER_SOL * 100)?;

        let mint = CreateMint::new(&mut svm, &depositor)
            .decimals(MINT_DECIMALS)
            .send()?;
        let depositor_token_account =
            CreateAssociatedTokenAccount::new(&mut svm, &depositor, &mint).send()?;
        if supply > 0 {
            MintTo::new(&mut svm, &depositor, &mint, &depositor_token_account, supply).send()?;
        }

        Ok(Self {
            depositor,
            mint,
            depositor_token_account,
            address_finder: AddressFinder::default(),
            log_send_transaction_results: true,
            svm,
        })
    }

    pub fn svm(&mut self) -> &mut LiteSVM {
        &mut self.svm
    }

    pub fn disable_send_transaction_logging(&mut self) {
        self.log_send_transaction_results = false;
    }

    pub fn campaign(&self, seed: &[u8; 32], verifier: &VerifierConfig) -> CampaignAddresses {
        self.address_finder.campaign(seed, verifier.policy())
    }

    /// A wallet with SOL for fees and rent.
    pub fn new_wallet(&mut self) -> Keypair {
        let wallet = Keypair::new();
        self.svm
            .airdrop(&wallet.pubkey(), LAMPORTS_PER_SOL)
            .unwrap_or_else(|e| panic!("Failed to airdrop to {}: {e:?}", wallet.pubkey()));
        wallet
    }

    pub fn set_account(&mut self, address: Pubkey, account: Account) {
        self.svm
            .set_account(address, account)
            .unwrap_or_else(|e| panic!("Failed to set account {address}: {e:?}"));
    }

    /// Creates a mint owned by the depositor and mints `amount` to `owner`'s
    /// associated token account, returning `(mint, token_account)`.
    pub fn mint_new_token_to(
        &mut self,
        owner: &Pubkey,
        decimals: u8,
        amount: u64,
    ) -> Result<(Pubkey, Pubkey), FailedTransactionMetadata> {
        let mint = CreateMint::new(&mut self.svm, &self.depositor)
            .decimals(decimals)
            .send()?;
        let token_account = CreateAssociatedTokenAccount::new(&mut self.svm, &self.depositor, &mint)
            .owner(owner)
            .send()?;
        MintTo::new(&mut self.svm, &self.depositor, &mint, &token_account, amount).send()?;
        Ok((mint, token_account))
    }

    // ================================================================================================
    // Protocol operations
    // ================================================================================================

    pub fn configure(
        &mut self,
        seed: [u8; 32],
        amount: u64,
        verifier: VerifierConfig,
    ) -> TransactionResult {
        let params = ConfigureParams {
            seed,
            depositor: self.depositor.pubkey(),
            close_authority: self.depositor.pubkey(),
            mint: self.mint,
            source: self.depositor_token_account,
            amount,
            verifier,
        };
        let instructions = build_configure_ixs(&self.address_finder, &params)
            .expect("Failed to build configure instructions");

        let depositor = self.depositor.insecure_clone();
        self.send_instructions(&instructions, &depositor)
    }

    /// Claims into the claimant's associated token account, creating it if needed.
    pub fn claim(
        &mut self,
        claimant: &Keypair,
        seed: [u8; 32],
        amount: u64,
        proof: ClaimProof,
    ) -> TransactionResult {
        self.send_claim(claimant, seed, amount, proof, None)
    }

    /// Claims into an existing token account of the caller's choosing.
    pub fn claim_into(
        &mut self,
        claimant: &Keypair,
        seed: [u8; 32],
        amount: u64,
        proof: ClaimProof,
        recipient: Pubkey,
    ) -> TransactionResult {
        self.send_claim(claimant, seed, amount, proof, Some(recipient))
    }

    fn send_claim(
        &mut self,
        claimant: &Keypair,
        seed: [u8; 32],
        amount: u64,
        proof: ClaimProof,
        recipient: Option<Pubkey>,
    ) -> TransactionResult {
        let params = ClaimParams {
            seed,
            claimant: claimant.pubkey(),
            mint: self.mint,
            recipient,
            amount,
            proof,
        };
        let instructions = build_claim_ixs(&self.address_finder, &params)
            .expect("Failed to build claim instructions");

        self.send_instructions(&instructions, claimant)
    }

    pub fn close(&mut self, authority: &Keypair, seed: [u8; 32]) -> TransactionResult {
        let (close_ix, _, _) = build_close_ix(
            &self.address_finder,
            &authority.pubkey(),
            &self.depositor_token_account,
            seed,
        )
        .expect("Failed to build close instruction");

        self.send_instructions(&[close_ix], authority)
    }

    // ================================================================================================
    // Transactions
    // ================================================================================================

    pub fn send_instructions(&mut self, instructions: &[Instruction], payer: &Keypair) -> TransactionResult {
        let tx = Transaction::new(
            &[payer],
            Message::new(instructions, Some(&payer.pubkey())),
            self.svm.latest_blockhash(),
        );

        self.send_transaction(tx)
    }

    /// Send a transaction and optionally print logs based on the logging_enabled setting
    pub fn send_transaction(&mut self, tx: Transaction) -> TransactionResult {
        let result = self.svm.send_transaction(tx);

        if self.log_send_transaction_results {
            match &result {
                Ok(meta) => {
                    println!("=== Transaction Logs (Success) ===");
                    for (i, log) in meta.logs.iter().enumerate() {
                        println!("{}: {}", i, log);
                    }
                    println!("=== End Logs ===\n");
                }
                Err(failed_meta) => {
                    println!("=== Transaction Logs (Failed) ===");
                    for (i, log) in failed_meta.meta.logs.iter().enumerate() {
                        println!("{}: {}", i, log);
                    }
                    println!("Error: {:?}", failed_meta.err);
                    println!("=== End Logs ===\n");
                }
            }
        }

        // Identical retries would otherwise be rejected as already processed.
        self.svm.expire_blockhash();

        result
    }

    // ================================================================================================
    // Reads
    // ================================================================================================

    pub fn account_exists(&self, address: &Pubkey) -> bool {
        self.svm.get_account(address).is_some()
    }

    pub fn fetch_airdrop_state(&self, seed: &[u8; 32]) -> Option<AirdropState> {
        let (address, _) = self.address_finder.find_airdrop_state_address(seed);
        self.fetch_anchor_account(&address)
    }

    pub fn fetch_anchor_account<T: AccountDeserialize>(&self, address: &Pubkey) -> Option<T> {
        self.svm
            .get_account(address)
            .and_then(|a| T::try_deserialize(&mut &a.data[..]).ok())
    }

    /// Token balance, 0 if the account doesn't exist.
    pub fn token_balance(&self, token_account: &Pubkey) -> u64 {
        self.svm
            .get_account(token_account)
            .and_then(|account| TokenAccount::unpack(&account.data).ok())
            .map(|account| account.amount)
            .unwrap_or(0)
    }

    pub fn vault_balance(&self, seed: &[u8; 32]) -> u64 {
        let (airdrop_state, _) = self.address_finder.find_airdrop_state_address(seed);
        let (vault, _) = self.address_finder.find_vault_address(&airdrop_state);
        self.token_balance(&vault)
    }

    pub fn claimant_balance(&self, claimant: &Pubkey) -> u64 {
        let ata = self
            .address_finder
            .find_associated_token_address(claimant, &self.mint);
        self.token_balance(&ata)
    }
}

/// Asserts the transaction failed with the given custom program error.
pub fn assert_custom_error(result: &TransactionResult, expected: u32) {
    match result {
        Err(failed) => match &failed.err {
            TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
                assert_eq!(*code, expected, "unexpected custom error code");
            }
            other => panic!("expected custom error {expected}, got {other:?}"),
        },
        Ok(_) => panic!("expected custom error {expected}, transaction succeeded"),
    }
}

/// Asserts the transaction failed because an account it tried to create already exists.
pub fn assert_account_in_use(result: &TransactionResult) {
    let failed = result
        .as_ref()
        .expect_err("expected the transaction to fail");
    assert!(
        failed
            .meta
            .logs
            .iter()
            .any(|log| log.contains("already in use")),
        "expected an account-in-use failure, got {:?}",
        failed.err
    );
}
