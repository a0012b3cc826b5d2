use crate::types::{Address, Balance, Gas, GasWeight, PromiseId, PublicKey};

/// A single action carried by a batch.
///
/// The runtime applies the actions of a batch in the order they were added,
/// against the batch's target account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromiseAction {
    /// Creates the target account.
    CreateAccount,
    /// Deploys the contract code to the target account.
    DeployContract { code: Vec<u8> },
    /// Calls a method of the target contract with a fixed amount of attached gas.
    FunctionCall {
        method_name: String,
        args: Vec<u8>,
        amount: Balance,
        gas: Gas,
    },
    /// Calls a method of the target contract; on top of the fixed `gas`, the
    /// action receives a `weight` share of the gas left unspent at the end of
    /// the current invocation.
    FunctionCallWeight {
        method_name: String,
        args: Vec<u8>,
        amount: Balance,
        gas: Gas,
        weight: GasWeight,
    },
    /// Transfers tokens to the target account.
    Transfer { amount: Balance },
    /// Stakes tokens with the given validator key.
    Stake {
        amount: Balance,
        public_key: PublicKey,
    },
    /// Adds a full-access key to the target account.
    AddFullAccessKey { public_key: PublicKey, nonce: u64 },
    /// Adds an access key limited to calling `method_names` on `receiver_id`.
    /// An empty `method_names` string allows any method.
    AddAccessKey {
        public_key: PublicKey,
        allowance: Balance,
        receiver_id: Address,
        method_names: String,
        nonce: u64,
    },
    /// Removes a key from the target account.
    DeleteKey { public_key: PublicKey },
    /// Deletes the target account; the remaining balance goes to `beneficiary_id`.
    DeleteAccount { beneficiary_id: Address },
}

impl PromiseAction {
    /// Reports the action to the runtime, appending it to the batch behind `promise_id`.
    pub(crate) fn add(&self, promise_id: PromiseId) {
        use PromiseAction::*;
        match self {
            CreateAccount => crate::promise_batch_action_create_account(promise_id),
            DeployContract { code } => {
                crate::promise_batch_action_deploy_contract(promise_id, code)
            }
            FunctionCall {
                method_name,
                args,
                amount,
                gas,
            } => crate::promise_batch_action_function_call(
                promise_id,
                method_name,
                args,
                *amount,
                *gas,
            ),
            FunctionCallWeight {
                method_name,
                args,
                amount,
                gas,
                weight,
            } => crate::promise_batch_action_function_call_weight(
                promise_id,
                method_name,
                args,
                *amount,
                *gas,
                *weight,
            ),
            Transfer { amount } => crate::promise_batch_action_transfer(promise_id, *amount),
            Stake { amount, public_key } => {
                crate::promise_batch_action_stake(promise_id, *amount, public_key)
            }
            AddFullAccessKey { public_key, nonce } => {
                crate::promise_batch_action_add_key_with_full_access(promise_id, public_key, *nonce)
            }
            AddAccessKey {
                public_key,
                allowance,
                receiver_id,
                method_names,
                nonce,
            } => crate::promise_batch_action_add_key_with_function_call(
                promise_id,
                public_key,
                *nonce,
                *allowance,
                receiver_id,
                method_names,
            ),
            DeleteKey { public_key } => {
                crate::promise_batch_action_delete_key(promise_id, public_key)
            }
            DeleteAccount { beneficiary_id } => {
                crate::promise_batch_action_delete_account(promise_id, beneficiary_id)
            }
        }
    }
}
