use std::{cell::RefCell, rc::Rc};

use anchor_client::{
    solana_sdk::{account::Account, signature::Keypair, signer::Signer, transport::TransportError},
    Program,
};
use anchor_lang::prelude::{Pubkey, Rent};
use mock_oracles::{pyth::PythPrice, switchboard::load_aggregator};
use pyth_sdk_solana::state::{load_price_account, PriceStatus};
use solana_program_test::ProgramTestContext;

use crate::utils::{
    get_account, get_context, get_program, set_init_pyth, set_init_switchboard, set_pyth_price,
    set_switchboard_price, set_write_data, transfer, TestResult,
};

pub struct OracleTestContext {
    pub context: Rc<RefCell<ProgramTestContext>>,
    pub program: Program,
    pub payer: Keypair,
}

#[allow(dead_code)]
impl OracleTestContext {
    pub async fn new() -> OracleTestContext {
        let context = get_context().await;
        let program = get_program();
        let payer = Keypair::new();

        let transfer_sol_amount = 10_000_000_000;
        transfer(
            &mut context.borrow_mut(),
            &payer.pubkey(),
            transfer_sol_amount,
        )
        .await;

        OracleTestContext {
            context,
            program,
            payer,
        }
    }

    pub async fn create_pyth(&self) -> (Keypair, Keypair) {
        let price = Keypair::new();
        let product = Keypair::new();

        set_init_pyth::setup(
            &mut self.context.borrow_mut(),
            &self.program,
            &self.payer,
            &price,
            &product,
        )
        .await
        .assert_ok();

        (price, product)
    }

    pub async fn create_switchboard_with_space(
        &self,
        space: usize,
    ) -> Result<Keypair, TransportError> {
        let aggregator = Keypair::new();

        set_init_switchboard::setup(
            &mut self.context.borrow_mut(),
            &self.program,
            &self.payer,
            &aggregator,
            space,
        )
        .await?;

        Ok(aggregator)
    }

    pub async fn set_pyth_price(
        &self,
        price_account: &Pubkey,
        input: PythPrice,
        slot: Option<u64>,
    ) -> Result<(), TransportError> {
        set_pyth_price::setup(
            &mut self.context.borrow_mut(),
            &self.program,
            &self.payer,
            price_account,
            input,
            slot,
        )
        .await
    }

    pub async fn set_switchboard_price(
        &self,
        aggregator: &Pubkey,
        price: i64,
        expo: i32,
        slot: Option<u64>,
    ) -> Result<(), TransportError> {
        set_switchboard_price::setup(
            &mut self.context.borrow_mut(),
            &self.program,
            &self.payer,
            aggregator,
            price,
            expo,
            slot,
        )
        .await
    }

    pub async fn write_data(
        &self,
        target: &Pubkey,
        offset: u64,
        data: Vec<u8>,
    ) -> Result<(), TransportError> {
        set_write_data::setup(
            &mut self.context.borrow_mut(),
            &self.program,
            &self.payer,
            target,
            offset,
            data,
        )
        .await
    }

    pub async fn get_rent(&self) -> Rent {
        self.context
            .borrow_mut()
            .banks_client
            .get_rent()
            .await
            .unwrap()
    }

    pub async fn get_account(&self, pubkey: Pubkey) -> Account {
        get_account(&mut self.context.borrow_mut(), pubkey).await
    }

    pub async fn assert_pyth_price(&self, price_account: &Pubkey, expected: PythPrice) {
        let account = self.get_account(*price_account).await;
        let price = load_price_account(&account.data).assert_unwrap();

        assert_eq!(price.agg.price, expected.price);
        assert_eq!(price.agg.conf, expected.conf);
        assert_eq!(price.expo, expected.expo);
        assert_eq!(price.ema_price.val, expected.ema_price);
        assert_eq!(price.ema_conf.val, expected.ema_conf as i64);
        assert!(price.agg.status == PriceStatus::Trading);
    }

    pub async fn assert_switchboard_result(&self, aggregator: &Pubkey, expected: &str) {
        let account = self.get_account(*aggregator).await;
        let aggregator = load_aggregator(&account.data).assert_unwrap();

        assert_eq!(aggregator.get_result().to_string(), expected);
    }
}
