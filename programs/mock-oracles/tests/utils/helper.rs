#![allow(dead_code)]
use std::{cell::RefCell, fmt::Debug, rc::Rc};

use anchor_client::{
    solana_sdk::{
        account::Account, commitment_config::CommitmentConfig, signature::Keypair,
        signer::Signer, system_instruction, transaction::Transaction,
    },
    Client, Cluster, Program,
};
use anchor_lang::prelude::Pubkey;
use solana_program_test::{ProgramTest, ProgramTestContext};

pub fn get_mock_oracles_program_id() -> Pubkey {
    mock_oracles::id()
}

pub async fn get_context() -> Rc<RefCell<ProgramTestContext>> {
    let pt = ProgramTest::new("mock_oracles", get_mock_oracles_program_id(), None);
    let context = pt.start_with_context().await;

    Rc::new(RefCell::new(context))
}

pub fn get_program() -> Program {
    let client = Client::new_with_options(
        Cluster::Debug,
        Rc::new(Keypair::new()),
        CommitmentConfig::processed(),
    );
    client.program(get_mock_oracles_program_id())
}

pub async fn transfer(context: &mut ProgramTestContext, recipient: &Pubkey, amount: u64) {
    let transaction = Transaction::new_signed_with_payer(
        &[system_instruction::transfer(
            &context.payer.pubkey(),
            recipient,
            amount,
        )],
        Some(&context.payer.pubkey()),
        &[&context.payer],
        context.banks_client.get_latest_blockhash().await.unwrap(),
    );

    context
        .banks_client
        .process_transaction_with_preflight(transaction)
        .await
        .unwrap();
}

pub async fn get_account(context: &mut ProgramTestContext, pubkey: Pubkey) -> Account {
    context
        .banks_client
        .get_account(pubkey)
        .await
        .unwrap()
        .unwrap()
}

pub trait TestResult<T, E> {
    fn assert_unwrap(self) -> T;
    fn assert_err(self);
    fn assert_ok(self);
}
impl<T, E> TestResult<T, E> for Result<T, E>
where
    E: Debug,
{
    fn assert_unwrap(self) -> T {
        if !self.is_ok() {
            panic!("error: {:?}", self.err().unwrap());
        }
        self.unwrap()
    }

    fn assert_err(self) {
        assert!(self.is_err());
    }

    fn assert_ok(self) {
        if !self.is_ok() {
            panic!("error: {:?}", self.err().unwrap());
        }
    }
}
