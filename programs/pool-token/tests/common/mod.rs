#![allow(dead_code)]

use std::sync::Once;

use anchor_lang::{
    system_program, AccountDeserialize, AnchorDeserialize, Discriminator, InstructionData,
    ToAccountMetas,
};
use base64::{prelude::BASE64_STANDARD, Engine};
use pool_token::constants::{ALLOWANCE_SEED, HOLDING_SEED, LEDGER_SEED};
use pool_token::permit::{new_ed25519_instruction, permit_digest};
use pool_token::state::{Holding, TokenLedger};
use solana_program_test::{processor, ProgramTest, ProgramTestContext};
use solana_sdk::{
    account_info::AccountInfo,
    clock::Clock,
    entrypoint::ProgramResult,
    instruction::{Instruction, InstructionError},
    program_stubs::{self, SyscallStubs},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction, sysvar,
    transaction::{Transaction, TransactionError},
};

pub const SYMBOL: &str = "SHR";
pub const CHAIN_ID: u64 = 1;

fn process_shares(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    pool_token::entry(program_id, accounts, data)
}

/// Forwards to the program-test stubs and additionally writes event data
/// into the transaction logs, which native processors otherwise print to stdout.
struct EventLogStubs(Box<dyn SyscallStubs>);

impl SyscallStubs for EventLogStubs {
    fn sol_log(&self, message: &str) {
        self.0.sol_log(message)
    }

    fn sol_log_data(&self, fields: &[&[u8]]) {
        let encoded: Vec<String> = fields
            .iter()
            .map(|field| BASE64_STANDARD.encode(field))
            .collect();
        self.0.sol_log(&format!("Program data: {}", encoded.join(" ")))
    }

    fn sol_invoke_signed(
        &self,
        instruction: &Instruction,
        account_infos: &[AccountInfo],
        signers_seeds: &[&[&[u8]]],
    ) -> ProgramResult {
        self.0
            .sol_invoke_signed(instruction, account_infos, signers_seeds)
    }

    fn sol_get_clock_sysvar(&self, var_addr: *mut u8) -> u64 {
        self.0.sol_get_clock_sysvar(var_addr)
    }

    fn sol_get_epoch_schedule_sysvar(&self, var_addr: *mut u8) -> u64 {
        self.0.sol_get_epoch_schedule_sysvar(var_addr)
    }

    fn sol_get_epoch_rewards_sysvar(&self, var_addr: *mut u8) -> u64 {
        self.0.sol_get_epoch_rewards_sysvar(var_addr)
    }

    fn sol_get_fees_sysvar(&self, var_addr: *mut u8) -> u64 {
        self.0.sol_get_fees_sysvar(var_addr)
    }

    fn sol_get_rent_sysvar(&self, var_addr: *mut u8) -> u64 {
        self.0.sol_get_rent_sysvar(var_addr)
    }

    fn sol_get_last_restart_slot(&self, var_addr: *mut u8) -> u64 {
        self.0.sol_get_last_restart_slot(var_addr)
    }

    fn sol_get_return_data(&self) -> Option<(Pubkey, Vec<u8>)> {
        self.0.sol_get_return_data()
    }

    fn sol_set_return_data(&self, data: &[u8]) {
        self.0.sol_set_return_data(data)
    }

    fn sol_get_stack_height(&self) -> u64 {
        self.0.sol_get_stack_height()
    }
}

struct NoStubs;

impl SyscallStubs for NoStubs {}

/// Must run after the first bank is up, since program-test installs its own stubs there
fn capture_event_logs() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let inner = program_stubs::set_syscall_stubs(Box::new(NoStubs));
        program_stubs::set_syscall_stubs(Box::new(EventLogStubs(inner)));
    });
}

pub struct TxOutcome {
    pub result: Result<(), TransactionError>,
    pub logs: Vec<String>,
}

impl TxOutcome {
    pub fn assert_ok(&self) {
        assert!(
            self.result.is_ok(),
            "transaction failed: {:?}\n{}",
            self.result,
            self.logs.join("\n")
        );
    }

    pub fn custom_error(&self) -> Option<u32> {
        match &self.result {
            Err(TransactionError::InstructionError(_, InstructionError::Custom(code))) => {
                Some(*code)
            }
            _ => None,
        }
    }

    pub fn assert_error(&self, expected: impl Into<u32>) {
        assert_eq!(
            self.custom_error(),
            Some(expected.into()),
            "unexpected outcome: {:?}\n{}",
            self.result,
            self.logs.join("\n")
        );
    }

    pub fn events<T: AnchorDeserialize + Discriminator>(&self) -> Vec<T> {
        self.logs
            .iter()
            .filter_map(|line| line.split_once("Program data: "))
            .filter_map(|(_, data)| BASE64_STANDARD.decode(data.trim()).ok())
            .filter(|bytes| bytes.starts_with(T::DISCRIMINATOR))
            .filter_map(|bytes| T::try_from_slice(&bytes[T::DISCRIMINATOR.len()..]).ok())
            .collect()
    }
}

/// An owner's signature over a permit, as a wallet would hand it to a relayer
pub struct SignedPermit {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub value: u64,
    pub deadline: i64,
    pub digest: [u8; 32],
    pub signature: [u8; 64],
}

/// One ledger whose mint authority is `authority`
pub struct ShareTest {
    pub context: ProgramTestContext,
    pub authority: Keypair,
    pub ledger: Pubkey,
}

impl ShareTest {
    pub async fn start() -> Self {
        let mut program_test = ProgramTest::default();
        program_test.prefer_bpf(false);
        program_test.add_program("pool_token", pool_token::ID, processor!(process_shares));
        let context = program_test.start_with_context().await;
        capture_event_logs();

        let authority = Keypair::new();
        let (ledger, _) = Pubkey::find_program_address(
            &[LEDGER_SEED, authority.pubkey().as_ref(), SYMBOL.as_bytes()],
            &pool_token::ID,
        );
        let mut test = Self {
            context,
            authority,
            ledger,
        };

        let ix = Instruction {
            program_id: pool_token::ID,
            accounts: pool_token::accounts::InitializeLedger {
                ledger,
                authority: test.authority.pubkey(),
                payer: test.payer(),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: pool_token::instruction::InitializeLedger {
                name: "Shares".to_string(),
                symbol: SYMBOL.to_string(),
                decimals: 9,
                chain_id: CHAIN_ID,
            }
            .data(),
        };
        let authority = test.authority.insecure_clone();
        test.send(&[ix], &[&authority]).await.assert_ok();
        test
    }

    pub fn payer(&self) -> Pubkey {
        self.context.payer.pubkey()
    }

    pub async fn send(&mut self, instructions: &[Instruction], signers: &[&Keypair]) -> TxOutcome {
        let blockhash = self
            .context
            .banks_client
            .get_latest_blockhash()
            .await
            .unwrap();
        let mut all_signers = vec![&self.context.payer];
        all_signers.extend_from_slice(signers);
        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&self.context.payer.pubkey()),
            all_signers.as_slice(),
            blockhash,
        );

        let processed = self
            .context
            .banks_client
            .process_transaction_with_metadata(tx)
            .await
            .unwrap();
        TxOutcome {
            result: processed.result,
            logs: processed
                .metadata
                .map(|meta| meta.log_messages)
                .unwrap_or_default(),
        }
    }

    pub async fn now(&mut self) -> i64 {
        self.context
            .banks_client
            .get_sysvar::<Clock>()
            .await
            .unwrap()
            .unix_timestamp
    }

    /// A keypair with lamports, able to pay for allowance accounts
    pub async fn funded_keypair(&mut self) -> Keypair {
        let keypair = Keypair::new();
        let ix = system_instruction::transfer(&self.payer(), &keypair.pubkey(), 1_000_000_000);
        self.send(&[ix], &[]).await.assert_ok();
        keypair
    }

    pub async fn anchor_account<T: AccountDeserialize>(&mut self, address: &Pubkey) -> T {
        let data = self
            .context
            .banks_client
            .get_account(*address)
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("account {address} not found"))
            .data;
        T::try_deserialize(&mut data.as_slice()).unwrap()
    }

    pub async fn account_exists(&mut self, address: &Pubkey) -> bool {
        self.context
            .banks_client
            .get_account(*address)
            .await
            .unwrap()
            .is_some()
    }

    pub fn holding_address(&self, owner: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(
            &[HOLDING_SEED, self.ledger.as_ref(), owner.as_ref()],
            &pool_token::ID,
        )
        .0
    }

    pub fn allowance_address(&self, owner: &Pubkey, spender: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(
            &[
                ALLOWANCE_SEED,
                self.ledger.as_ref(),
                owner.as_ref(),
                spender.as_ref(),
            ],
            &pool_token::ID,
        )
        .0
    }

    pub async fn holding(&mut self, owner: &Pubkey) -> Holding {
        let address = self.holding_address(owner);
        self.anchor_account(&address).await
    }

    pub async fn open_holding(&mut self, owner: &Pubkey) -> Pubkey {
        let holding = self.holding_address(owner);
        let ix = Instruction {
            program_id: pool_token::ID,
            accounts: pool_token::accounts::OpenHolding {
                ledger: self.ledger,
                owner: *owner,
                holding,
                payer: self.payer(),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: pool_token::instruction::OpenHolding {}.data(),
        };
        self.send(&[ix], &[]).await.assert_ok();
        holding
    }

    pub async fn mint_to(&mut self, owner: &Pubkey, amount: u64) {
        let ix = Instruction {
            program_id: pool_token::ID,
            accounts: pool_token::accounts::MintTo {
                ledger: self.ledger,
                authority: self.authority.pubkey(),
                to: self.holding_address(owner),
            }
            .to_account_metas(None),
            data: pool_token::instruction::MintTo { amount }.data(),
        };
        let authority = self.authority.insecure_clone();
        self.send(&[ix], &[&authority]).await.assert_ok();
    }

    /// Signs the permit `signer` would produce for `owner`'s current nonce
    pub async fn sign_permit(
        &mut self,
        signer: &Keypair,
        owner: &Pubkey,
        spender: &Pubkey,
        value: u64,
        deadline: i64,
    ) -> SignedPermit {
        let ledger_key = self.ledger;
        let ledger: TokenLedger = self.anchor_account(&ledger_key).await;
        let nonce = self.holding(owner).await.nonce;
        let digest = permit_digest(
            &ledger.domain_separator,
            owner,
            spender,
            value,
            nonce,
            deadline,
        );
        SignedPermit {
            owner: *owner,
            spender: *spender,
            value,
            deadline,
            digest,
            signature: signer.sign_message(&digest).into(),
        }
    }

    /// The ed25519 verification by `verified_key` followed by the permit itself
    pub fn permit_ixs(
        &self,
        permit: &SignedPermit,
        verified_key: &Pubkey,
        relayer: &Pubkey,
    ) -> Vec<Instruction> {
        vec![
            new_ed25519_instruction(verified_key, &permit.digest, &permit.signature),
            self.permit_ix(permit, relayer),
        ]
    }

    pub fn permit_ix(&self, permit: &SignedPermit, relayer: &Pubkey) -> Instruction {
        Instruction {
            program_id: pool_token::ID,
            accounts: pool_token::accounts::Permit {
                ledger: self.ledger,
                owner_holding: self.holding_address(&permit.owner),
                spender: permit.spender,
                allowance: self.allowance_address(&permit.owner, &permit.spender),
                relayer: *relayer,
                instructions: sysvar::instructions::ID,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: pool_token::instruction::Permit {
                value: permit.value,
                deadline: permit.deadline,
                signature: permit.signature,
            }
            .data(),
        }
    }

    pub fn transfer_from_ix(
        &self,
        spender: &Pubkey,
        owner: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Instruction {
        Instruction {
            program_id: pool_token::ID,
            accounts: pool_token::accounts::TransferTokensFrom {
                spender: *spender,
                from: self.holding_address(owner),
                to: self.holding_address(to),
                allowance: self.allowance_address(owner, spender),
            }
            .to_account_metas(None),
            data: pool_token::instruction::TransferFrom { amount }.data(),
        }
    }
}
