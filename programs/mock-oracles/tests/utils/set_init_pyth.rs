#![allow(dead_code)]
use anchor_client::{
    solana_sdk::{
        signature::Keypair, signer::Signer, transaction::Transaction, transport::TransportError,
    },
    Program,
};
use solana_program_test::ProgramTestContext;

use super::compose_init_pyth_ixs;

pub async fn setup(
    context: &mut ProgramTestContext,
    program: &Program,
    payer: &Keypair,
    price: &Keypair,
    product: &Keypair,
) -> Result<(), TransportError> {
    let init_pyth_ixs = compose_init_pyth_ixs(context, program, payer, price, product).await;

    let transaction = Transaction::new_signed_with_payer(
        &init_pyth_ixs,
        Some(&payer.pubkey()),
        &[payer, price, product],
        context.last_blockhash,
    );

    context
        .banks_client
        .process_transaction(transaction)
        .await
        .map_err(|e| e.into())
}
