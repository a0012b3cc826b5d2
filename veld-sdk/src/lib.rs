pub use veld_sys as sys;

use std::panic as std_panic;
use types::{
    Address, Balance, BlockHash, BlockNumber, Gas, GasWeight, PromiseId, PublicKey, TimeStamp,
};

pub mod promise;
pub mod store;
pub mod types;
use promise::PromiseResult;

const EVICTED_REGISTER: u64 = std::u64::MAX - 1;
const ATOMIC_OP_REGISTER: u64 = std::u64::MAX - 2;

macro_rules! try_method_into_register {
    ( $method:ident ) => {{
        unsafe { veld_sys::$method(ATOMIC_OP_REGISTER) };
        read_register(ATOMIC_OP_REGISTER)
    }};
}

macro_rules! method_into_register {
    ( $method:ident ) => {{
        expect_register(try_method_into_register!($method))
    }};
}

/// Returns the size of the register. If register is not used returns `None`.
fn register_len(register_id: u64) -> Option<u64> {
    let len = unsafe { veld_sys::register_len(register_id) };
    if len == std::u64::MAX {
        None
    } else {
        Some(len)
    }
}

/// Reads the content of the `register_id`. If register is not used returns `None`.
fn read_register(register_id: u64) -> Option<Vec<u8>> {
    let len: usize = register_len(register_id)?
        .try_into()
        .unwrap_or_else(|_| abort());

    let mut buffer = Vec::with_capacity(len);

    unsafe {
        veld_sys::read_register(register_id, buffer.as_mut_ptr() as u64);

        buffer.set_len(len);
    }
    Some(buffer)
}

fn expect_register<T>(option: Option<T>) -> T {
    option.unwrap_or_else(|| abort())
}

/// Implements panic hook that converts `PanicInfo` into a string and provides it through the
/// blockchain interface.
fn panic_hook_impl(info: &std_panic::PanicInfo) {
    panic(&info.to_string());
}

/// Setups panic hook to expose error info to the blockchain.
pub fn setup_panic_hook() {
    std_panic::set_hook(Box::new(panic_hook_impl));
}

/// Aborts the current contract execution without a custom message.
/// To include a message, use [`crate::panic`].
pub fn abort() -> ! {
    #[cfg(test)]
    std::panic!("Mocked panic function called!");
    #[cfg(not(test))]
    unsafe {
        veld_sys::panic()
    }
}

/// Terminates the execution of the program with the message.
pub fn panic(message: &str) -> ! {
    msg(message);

    #[cfg(test)]
    std::panic!("Mocked panic function called!");
    #[cfg(not(test))]
    unsafe {
        veld_sys::panic_msg(message.as_ptr() as _, message.len() as _)
    }
}

/// The input to the contract call serialized as bytes. If input is not provided returns `None`.
pub fn input() -> Option<Vec<u8>> {
    #[cfg(test)]
    {
        return tests::input();
    }
    #[cfg(not(test))]
    try_method_into_register!(input)
}

/// Writes `data` to 'output' register
pub fn output(data: &[u8]) {
    #[cfg(test)]
    {
        return tests::output(data);
    }
    #[cfg(not(test))]
    unsafe {
        sys::output(data.as_ptr() as _, data.len() as _)
    }
}

pub fn msg(message: &str) {
    #[cfg(test)]
    {
        return tests::msg(message);
    }
    #[cfg(not(test))]
    {
        #[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
        eprintln!("{}", message);

        unsafe { veld_sys::msg(message.as_ptr() as _, message.len() as _) }
    }
}

/// Writes key-value into storage.
///
/// If the storage did not have this key present, `false` is returned.
///
/// If the storage did have this key present, the value is updated and `true` is
/// returned; the replaced value is parked in the eviction register and can be
/// retrieved with [`storage_get_evicted`] before the next storage operation.
pub fn storage_write(key: &[u8], value: &[u8]) -> bool {
    #[cfg(test)]
    {
        return tests::storage_write(key, value);
    }
    #[cfg(not(test))]
    match unsafe {
        sys::storage_write(
            key.as_ptr() as _,
            key.len() as _,
            value.as_ptr() as _,
            value.len() as _,
            EVICTED_REGISTER,
        )
    } {
        0 => false,
        1 => true,
        _ => abort(),
    }
}

/// Removes the value stored under the given key.
///
/// If key-value existed returns `true`, otherwise `false`. The removed value is
/// parked in the eviction register, same as for [`storage_write`].
pub fn storage_remove(key: &[u8]) -> bool {
    #[cfg(test)]
    {
        return tests::storage_remove(key);
    }

    #[cfg(not(test))]
    match unsafe { sys::storage_remove(key.as_ptr() as _, key.len() as _, EVICTED_REGISTER) } {
        0 => false,
        1 => true,
        _ => abort(),
    }
}

/// Reads the value stored under the given key.
///
/// If the storage doesn't have the key present, returns `None`
pub fn storage_read(key: &[u8]) -> Option<Vec<u8>> {
    #[cfg(test)]
    {
        return tests::storage_read(key);
    }

    #[cfg(not(test))]
    match unsafe { sys::storage_read(key.as_ptr() as _, key.len() as _, ATOMIC_OP_REGISTER) } {
        0 => None,
        1 => Some(expect_register(read_register(ATOMIC_OP_REGISTER))),
        _ => abort(),
    }
}

/// Returns `true` if the storage has the key present, without reading the value.
pub fn storage_has_key(key: &[u8]) -> bool {
    #[cfg(test)]
    {
        return tests::storage_has_key(key);
    }

    #[cfg(not(test))]
    match unsafe { sys::storage_has_key(key.as_ptr() as _, key.len() as _) } {
        0 => false,
        1 => true,
        _ => abort(),
    }
}

/// Returns the value that the most recent [`storage_write`] or [`storage_remove`]
/// evicted, or `None` if that operation evicted nothing.
///
/// The eviction register holds only the latest evicted value and is rewritten by
/// the next write or remove, so the result must be consumed before any other
/// storage operation is issued.
pub fn storage_get_evicted() -> Option<Vec<u8>> {
    #[cfg(test)]
    {
        return tests::storage_get_evicted();
    }

    #[cfg(not(test))]
    read_register(EVICTED_REGISTER)
}

/// Returns the address of the account that owns the current contract.
pub fn contract_owner_address() -> Address {
    #[cfg(test)]
    {
        return tests::contract_owner_address();
    }
    #[cfg(not(test))]
    method_into_register!(contract_owner_address)
        .try_into()
        .unwrap_or_else(|_| abort())
}

/// Returns the address of the account or the contract that called the current contract.
pub fn caller_address() -> Address {
    #[cfg(test)]
    {
        return tests::caller_address();
    }
    #[cfg(not(test))]
    method_into_register!(caller_address)
        .try_into()
        .unwrap_or_else(|_| abort())
}

/// Returns the address of the current contract's instance.
pub fn contract_instance_address() -> Address {
    #[cfg(test)]
    {
        return tests::contract_instance_address();
    }
    #[cfg(not(test))]
    method_into_register!(contract_instance_address)
        .try_into()
        .unwrap_or_else(|_| abort())
}

/// Returns the hash of the current block
pub fn block_hash() -> BlockHash {
    #[cfg(test)]
    {
        return tests::block_hash();
    }
    #[cfg(not(test))]
    {
        let mut buf = BlockHash::default();

        unsafe { veld_sys::block_hash(buf.as_mut_ptr() as _, buf.len() as _) };

        buf
    }
}

/// Returns the number of the current block
pub fn block_number() -> BlockNumber {
    #[cfg(test)]
    {
        return tests::block_number();
    }
    #[cfg(not(test))]
    {
        let mut buf = [0u8; std::mem::size_of::<BlockNumber>()];

        unsafe { veld_sys::block_number(buf.as_mut_ptr() as _, buf.len() as _) };

        BlockNumber::from_le_bytes(buf)
    }
}

/// Returns the timestamp of the current block
pub fn block_timestamp() -> TimeStamp {
    #[cfg(test)]
    {
        return tests::block_timestamp();
    }
    #[cfg(not(test))]
    {
        let mut buf = [0u8; std::mem::size_of::<TimeStamp>()];

        unsafe { veld_sys::block_timestamp(buf.as_mut_ptr() as _, buf.len() as _) };

        TimeStamp::from_le_bytes(buf)
    }
}

/// Returns the total amount of `Gas` that is allowed the contract to burn out
pub fn gas_limit() -> Gas {
    #[cfg(test)]
    {
        return tests::gas_limit();
    }
    #[cfg(not(test))]
    unsafe {
        veld_sys::gas_limit()
    }
}

/// Returns the amount of available `Gas`
pub fn gas_left() -> Gas {
    #[cfg(test)]
    {
        return tests::gas_left();
    }
    #[cfg(not(test))]
    unsafe {
        veld_sys::gas_left()
    }
}

/// Opens a fresh batch of actions addressed to `account_id` and returns its handle.
///
/// The batch is dispatched by the host only after the current invocation ends.
pub fn promise_batch_create(account_id: &Address) -> PromiseId {
    #[cfg(test)]
    {
        return tests::promise_batch_create(account_id);
    }
    #[cfg(not(test))]
    {
        let account_id = account_id.as_bytes();
        unsafe { sys::promise_batch_create(account_id.as_ptr() as _, account_id.len() as _) }
    }
}

/// Opens a batch addressed to `account_id` that executes only after the batch
/// behind `after_id` has settled.
pub fn promise_batch_then(after_id: PromiseId, account_id: &Address) -> PromiseId {
    #[cfg(test)]
    {
        return tests::promise_batch_then(after_id, account_id);
    }
    #[cfg(not(test))]
    {
        let account_id = account_id.as_bytes();
        unsafe {
            sys::promise_batch_then(after_id, account_id.as_ptr() as _, account_id.len() as _)
        }
    }
}

/// Combines the given handles into a single handle that settles when all of them have.
pub fn promise_and(promise_ids: &[PromiseId]) -> PromiseId {
    #[cfg(test)]
    {
        return tests::promise_and(promise_ids);
    }
    #[cfg(not(test))]
    unsafe {
        sys::promise_and(promise_ids.as_ptr() as _, promise_ids.len() as _)
    }
}

/// Appends an account-creation action to the batch behind `promise_id`.
pub fn promise_batch_action_create_account(promise_id: PromiseId) {
    #[cfg(test)]
    {
        return tests::promise_batch_action_create_account(promise_id);
    }
    #[cfg(not(test))]
    unsafe {
        sys::promise_batch_action_create_account(promise_id)
    }
}

/// Appends a contract-deployment action to the batch behind `promise_id`.
pub fn promise_batch_action_deploy_contract(promise_id: PromiseId, code: &[u8]) {
    #[cfg(test)]
    {
        return tests::promise_batch_action_deploy_contract(promise_id, code);
    }
    #[cfg(not(test))]
    unsafe {
        sys::promise_batch_action_deploy_contract(promise_id, code.as_ptr() as _, code.len() as _)
    }
}

/// Appends a function-call action to the batch behind `promise_id`.
pub fn promise_batch_action_function_call(
    promise_id: PromiseId,
    method_name: &str,
    args: &[u8],
    amount: Balance,
    gas: Gas,
) {
    #[cfg(test)]
    {
        return tests::promise_batch_action_function_call(promise_id, method_name, args, amount, gas);
    }
    #[cfg(not(test))]
    {
        let amount = amount.to_le_bytes();
        unsafe {
            sys::promise_batch_action_function_call(
                promise_id,
                method_name.as_ptr() as _,
                method_name.len() as _,
                args.as_ptr() as _,
                args.len() as _,
                amount.as_ptr() as _,
                amount.len() as _,
                gas,
            )
        }
    }
}

/// Appends a function-call action whose attached gas is a weight over the gas
/// left unspent at the end of the invocation.
pub fn promise_batch_action_function_call_weight(
    promise_id: PromiseId,
    method_name: &str,
    args: &[u8],
    amount: Balance,
    gas: Gas,
    weight: GasWeight,
) {
    #[cfg(test)]
    {
        return tests::promise_batch_action_function_call_weight(
            promise_id,
            method_name,
            args,
            amount,
            gas,
            weight,
        );
    }
    #[cfg(not(test))]
    {
        let amount = amount.to_le_bytes();
        unsafe {
            sys::promise_batch_action_function_call_weight(
                promise_id,
                method_name.as_ptr() as _,
                method_name.len() as _,
                args.as_ptr() as _,
                args.len() as _,
                amount.as_ptr() as _,
                amount.len() as _,
                gas,
                weight,
            )
        }
    }
}

/// Appends a token-transfer action to the batch behind `promise_id`.
pub fn promise_batch_action_transfer(promise_id: PromiseId, amount: Balance) {
    #[cfg(test)]
    {
        return tests::promise_batch_action_transfer(promise_id, amount);
    }
    #[cfg(not(test))]
    {
        let amount = amount.to_le_bytes();
        unsafe {
            sys::promise_batch_action_transfer(promise_id, amount.as_ptr() as _, amount.len() as _)
        }
    }
}

/// Appends a staking action to the batch behind `promise_id`.
pub fn promise_batch_action_stake(promise_id: PromiseId, amount: Balance, public_key: &PublicKey) {
    #[cfg(test)]
    {
        return tests::promise_batch_action_stake(promise_id, amount, public_key);
    }
    #[cfg(not(test))]
    {
        let amount = amount.to_le_bytes();
        let public_key = public_key.as_bytes();
        unsafe {
            sys::promise_batch_action_stake(
                promise_id,
                amount.as_ptr() as _,
                amount.len() as _,
                public_key.as_ptr() as _,
                public_key.len() as _,
            )
        }
    }
}

/// Appends an action that adds a full-access key to the batch's target account.
pub fn promise_batch_action_add_key_with_full_access(
    promise_id: PromiseId,
    public_key: &PublicKey,
    nonce: u64,
) {
    #[cfg(test)]
    {
        return tests::promise_batch_action_add_key_with_full_access(promise_id, public_key, nonce);
    }
    #[cfg(not(test))]
    {
        let public_key = public_key.as_bytes();
        unsafe {
            sys::promise_batch_action_add_key_with_full_access(
                promise_id,
                public_key.as_ptr() as _,
                public_key.len() as _,
                nonce,
            )
        }
    }
}

/// Appends an action that adds a function-call-scoped access key to the batch's
/// target account. `method_names` is a comma-separated list; an empty string
/// allows any method of `receiver_id`.
pub fn promise_batch_action_add_key_with_function_call(
    promise_id: PromiseId,
    public_key: &PublicKey,
    nonce: u64,
    allowance: Balance,
    receiver_id: &Address,
    method_names: &str,
) {
    #[cfg(test)]
    {
        return tests::promise_batch_action_add_key_with_function_call(
            promise_id,
            public_key,
            nonce,
            allowance,
            receiver_id,
            method_names,
        );
    }
    #[cfg(not(test))]
    {
        let public_key = public_key.as_bytes();
        let allowance = allowance.to_le_bytes();
        let receiver_id = receiver_id.as_bytes();
        unsafe {
            sys::promise_batch_action_add_key_with_function_call(
                promise_id,
                public_key.as_ptr() as _,
                public_key.len() as _,
                nonce,
                allowance.as_ptr() as _,
                allowance.len() as _,
                receiver_id.as_ptr() as _,
                receiver_id.len() as _,
                method_names.as_ptr() as _,
                method_names.len() as _,
            )
        }
    }
}

/// Appends an action that removes a key from the batch's target account.
pub fn promise_batch_action_delete_key(promise_id: PromiseId, public_key: &PublicKey) {
    #[cfg(test)]
    {
        return tests::promise_batch_action_delete_key(promise_id, public_key);
    }
    #[cfg(not(test))]
    {
        let public_key = public_key.as_bytes();
        unsafe {
            sys::promise_batch_action_delete_key(
                promise_id,
                public_key.as_ptr() as _,
                public_key.len() as _,
            )
        }
    }
}

/// Appends an action that deletes the batch's target account, sending the
/// remaining balance to `beneficiary_id`.
pub fn promise_batch_action_delete_account(promise_id: PromiseId, beneficiary_id: &Address) {
    #[cfg(test)]
    {
        return tests::promise_batch_action_delete_account(promise_id, beneficiary_id);
    }
    #[cfg(not(test))]
    {
        let beneficiary_id = beneficiary_id.as_bytes();
        unsafe {
            sys::promise_batch_action_delete_account(
                promise_id,
                beneficiary_id.as_ptr() as _,
                beneficiary_id.len() as _,
            )
        }
    }
}

/// Returns how many dispatched-call results are available to the current
/// (callback) invocation.
pub fn promise_results_count() -> u64 {
    #[cfg(test)]
    {
        return tests::promise_results_count();
    }
    #[cfg(not(test))]
    unsafe {
        sys::promise_results_count()
    }
}

/// Returns the result of a previously dispatched call.
///
/// Only callback invocations have results to read; `result_idx` addresses the
/// fixed result slot populated by the host before the callback started.
pub fn promise_result(result_idx: u64) -> PromiseResult {
    #[cfg(test)]
    {
        return tests::promise_result(result_idx);
    }
    #[cfg(not(test))]
    match unsafe { sys::promise_result(result_idx, ATOMIC_OP_REGISTER) } {
        0 => PromiseResult::NotReady,
        1 => PromiseResult::Successful(expect_register(read_register(ATOMIC_OP_REGISTER))),
        2 => PromiseResult::Failed,
        _ => abort(),
    }
}

/// Reports the batch behind `promise_id` as the return value of the current invocation.
pub fn promise_return(promise_id: PromiseId) {
    #[cfg(test)]
    {
        return tests::promise_return(promise_id);
    }
    #[cfg(not(test))]
    unsafe {
        sys::promise_return(promise_id)
    }
}

#[cfg(test)]
mod tests {

    use crate::promise::{PromiseAction, PromiseResult};
    use crate::types::{
        Address, Balance, BlockHash, BlockNumber, Gas, GasWeight, PromiseId, PublicKey, TimeStamp,
    };
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static MOCK_DATA: RefCell<MockData> = RefCell::new(MockData::new());
    }

    const CONTRACT_OWNER_ADDRESS: &[u8; 20] = b"mock_owner_address11";
    const CONTRACT_INSTANCE_ADDRESS: &[u8; 20] = b"mock_instance_addres";
    const CALLER_ADDRESS: &[u8; 20] = b"mock_caller_address1";

    const BLOCK_NUMBER: BlockNumber = 7;
    const BLOCK_TIMESTAMP: TimeStamp = 1_724_000_000_000;
    const BLOCK_HASH: &BlockHash = b"mock_block_hash_0123456789abcdef";
    const GAS_LIMIT: Gas = 1_000_000_000_000;
    const GAS_LEFT: Gas = 999_000_000_000;

    /// A batch or a joint handle recorded by the mock host, in creation order;
    /// the handle value is the index into the recorded list.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum MockPromise {
        Batch {
            target: Address,
            after: Option<PromiseId>,
            actions: Vec<PromiseAction>,
        },
        Joint {
            dependencies: Vec<PromiseId>,
        },
    }

    pub struct MockData {
        storage: HashMap<Vec<u8>, Vec<u8>>,
        evicted_value: Option<Vec<u8>>,
        input: Option<Vec<u8>>,
        output: Vec<u8>,
        messages: Vec<String>,
        contract_owner_address: Address,
        caller_address: Address,
        contract_instance_address: Address,
        promises: Vec<MockPromise>,
        promise_results: Vec<PromiseResult>,
        returned_promise: Option<PromiseId>,
    }

    impl MockData {
        pub fn new() -> Self {
            Self {
                storage: HashMap::new(),
                evicted_value: None,
                input: Some(Vec::new()),
                output: Vec::new(),
                messages: Vec::new(),
                contract_owner_address: Address::test_create_address(
                    &CONTRACT_OWNER_ADDRESS.to_vec(),
                ),
                caller_address: Address::test_create_address(&CALLER_ADDRESS.to_vec()),
                contract_instance_address: Address::test_create_address(
                    &CONTRACT_INSTANCE_ADDRESS.to_vec(),
                ),
                promises: Vec::new(),
                promise_results: Vec::new(),
                returned_promise: None,
            }
        }
    }

    pub fn storage_write(key: &[u8], value: &[u8]) -> bool {
        MOCK_DATA.with(|data| {
            let mut mock_data = data.borrow_mut();
            let previous = mock_data.storage.insert(key.to_vec(), value.to_vec());
            let replaced = previous.is_some();
            mock_data.evicted_value = previous;
            replaced
        })
    }

    pub fn storage_read(key: &[u8]) -> Option<Vec<u8>> {
        MOCK_DATA.with(|data| data.borrow().storage.get(key).cloned())
    }

    pub fn storage_remove(key: &[u8]) -> bool {
        MOCK_DATA.with(|data| {
            let mut mock_data = data.borrow_mut();
            let previous = mock_data.storage.remove(key);
            let removed = previous.is_some();
            mock_data.evicted_value = previous;
            removed
        })
    }

    pub fn storage_has_key(key: &[u8]) -> bool {
        MOCK_DATA.with(|data| data.borrow().storage.contains_key(key))
    }

    pub fn storage_get_evicted() -> Option<Vec<u8>> {
        MOCK_DATA.with(|data| data.borrow().evicted_value.clone())
    }

    pub fn contract_owner_address() -> Address {
        MOCK_DATA.with(|data| data.borrow().contract_owner_address.clone())
    }

    pub fn caller_address() -> Address {
        MOCK_DATA.with(|data| data.borrow().caller_address.clone())
    }

    pub fn contract_instance_address() -> Address {
        MOCK_DATA.with(|data| data.borrow().contract_instance_address.clone())
    }

    pub fn block_hash() -> BlockHash {
        *BLOCK_HASH
    }

    pub fn block_number() -> BlockNumber {
        BLOCK_NUMBER
    }

    pub fn block_timestamp() -> TimeStamp {
        BLOCK_TIMESTAMP
    }

    pub fn gas_limit() -> Gas {
        GAS_LIMIT
    }

    pub fn gas_left() -> Gas {
        GAS_LEFT
    }

    pub fn remove_from_mock_storage(key: &[u8]) -> bool {
        MOCK_DATA.with(|data| data.borrow_mut().storage.remove(key).is_some())
    }

    pub fn input() -> Option<Vec<u8>> {
        MOCK_DATA.with(|data| data.borrow().input.clone())
    }

    pub fn output(data: &[u8]) {
        MOCK_DATA.with(|data_refcell| {
            let mut data_inside = data_refcell.borrow_mut();
            data_inside.output = data.to_vec();
        })
    }

    pub fn msg(message: &str) {
        MOCK_DATA.with(|data| data.borrow_mut().messages.push(message.to_owned()))
    }

    pub fn promise_batch_create(account_id: &Address) -> PromiseId {
        MOCK_DATA.with(|data| {
            let mut mock_data = data.borrow_mut();
            mock_data.promises.push(MockPromise::Batch {
                target: account_id.clone(),
                after: None,
                actions: Vec::new(),
            });
            (mock_data.promises.len() - 1) as PromiseId
        })
    }

    pub fn promise_batch_then(after_id: PromiseId, account_id: &Address) -> PromiseId {
        MOCK_DATA.with(|data| {
            let mut mock_data = data.borrow_mut();
            assert!(
                (after_id as usize) < mock_data.promises.len(),
                "mock host: unknown promise handle"
            );
            mock_data.promises.push(MockPromise::Batch {
                target: account_id.clone(),
                after: Some(after_id),
                actions: Vec::new(),
            });
            (mock_data.promises.len() - 1) as PromiseId
        })
    }

    pub fn promise_and(promise_ids: &[PromiseId]) -> PromiseId {
        MOCK_DATA.with(|data| {
            let mut mock_data = data.borrow_mut();
            for id in promise_ids {
                assert!(
                    (*id as usize) < mock_data.promises.len(),
                    "mock host: unknown promise handle"
                );
            }
            mock_data.promises.push(MockPromise::Joint {
                dependencies: promise_ids.to_vec(),
            });
            (mock_data.promises.len() - 1) as PromiseId
        })
    }

    fn push_mock_action(promise_id: PromiseId, action: PromiseAction) {
        MOCK_DATA.with(|data| {
            let mut mock_data = data.borrow_mut();
            match mock_data.promises.get_mut(promise_id as usize) {
                Some(MockPromise::Batch { actions, .. }) => actions.push(action),
                _ => panic!("mock host: actions can only be appended to a batch"),
            }
        })
    }

    pub fn promise_batch_action_create_account(promise_id: PromiseId) {
        push_mock_action(promise_id, PromiseAction::CreateAccount);
    }

    pub fn promise_batch_action_deploy_contract(promise_id: PromiseId, code: &[u8]) {
        push_mock_action(
            promise_id,
            PromiseAction::DeployContract {
                code: code.to_vec(),
            },
        );
    }

    pub fn promise_batch_action_function_call(
        promise_id: PromiseId,
        method_name: &str,
        args: &[u8],
        amount: Balance,
        gas: Gas,
    ) {
        push_mock_action(
            promise_id,
            PromiseAction::FunctionCall {
                method_name: method_name.to_owned(),
                args: args.to_vec(),
                amount,
                gas,
            },
        );
    }

    pub fn promise_batch_action_function_call_weight(
        promise_id: PromiseId,
        method_name: &str,
        args: &[u8],
        amount: Balance,
        gas: Gas,
        weight: GasWeight,
    ) {
        push_mock_action(
            promise_id,
            PromiseAction::FunctionCallWeight {
                method_name: method_name.to_owned(),
                args: args.to_vec(),
                amount,
                gas,
                weight,
            },
        );
    }

    pub fn promise_batch_action_transfer(promise_id: PromiseId, amount: Balance) {
        push_mock_action(promise_id, PromiseAction::Transfer { amount });
    }

    pub fn promise_batch_action_stake(
        promise_id: PromiseId,
        amount: Balance,
        public_key: &PublicKey,
    ) {
        push_mock_action(
            promise_id,
            PromiseAction::Stake {
                amount,
                public_key: public_key.clone(),
            },
        );
    }

    pub fn promise_batch_action_add_key_with_full_access(
        promise_id: PromiseId,
        public_key: &PublicKey,
        nonce: u64,
    ) {
        push_mock_action(
            promise_id,
            PromiseAction::AddFullAccessKey {
                public_key: public_key.clone(),
                nonce,
            },
        );
    }

    pub fn promise_batch_action_add_key_with_function_call(
        promise_id: PromiseId,
        public_key: &PublicKey,
        nonce: u64,
        allowance: Balance,
        receiver_id: &Address,
        method_names: &str,
    ) {
        push_mock_action(
            promise_id,
            PromiseAction::AddAccessKey {
                public_key: public_key.clone(),
                allowance,
                receiver_id: receiver_id.clone(),
                method_names: method_names.to_owned(),
                nonce,
            },
        );
    }

    pub fn promise_batch_action_delete_key(promise_id: PromiseId, public_key: &PublicKey) {
        push_mock_action(
            promise_id,
            PromiseAction::DeleteKey {
                public_key: public_key.clone(),
            },
        );
    }

    pub fn promise_batch_action_delete_account(promise_id: PromiseId, beneficiary_id: &Address) {
        push_mock_action(
            promise_id,
            PromiseAction::DeleteAccount {
                beneficiary_id: beneficiary_id.clone(),
            },
        );
    }

    pub fn promise_results_count() -> u64 {
        MOCK_DATA.with(|data| data.borrow().promise_results.len() as u64)
    }

    pub fn promise_result(result_idx: u64) -> PromiseResult {
        MOCK_DATA.with(|data| {
            data.borrow()
                .promise_results
                .get(result_idx as usize)
                .cloned()
                .unwrap_or(PromiseResult::NotReady)
        })
    }

    pub fn promise_return(promise_id: PromiseId) {
        MOCK_DATA.with(|data| data.borrow_mut().returned_promise = Some(promise_id));
    }

    pub fn set_mock_input(data: Vec<u8>) {
        MOCK_DATA.with(|data_refcell| {
            let mut data_inside = data_refcell.borrow_mut();
            data_inside.input = Some(data);
        });
    }

    pub fn get_mock_output() -> Vec<u8> {
        MOCK_DATA.with(|data| data.borrow().output.clone())
    }

    pub fn get_mock_msgs() -> Vec<String> {
        MOCK_DATA.with(|data| data.borrow().messages.clone())
    }

    pub fn clear_mock_io() {
        MOCK_DATA.with(|data| {
            let mut data = data.borrow_mut();
            data.input = None;
            data.output = Vec::new();
            data.messages = Vec::new();
        })
    }

    pub fn set_mock_contract_owner_address(owner_address: Vec<u8>) {
        MOCK_DATA.with(|data| {
            data.borrow_mut().contract_owner_address = Address::test_create_address(&owner_address)
        })
    }

    pub fn set_mock_caller_address(caller_address: Vec<u8>) {
        MOCK_DATA.with(|data| {
            data.borrow_mut().caller_address = Address::test_create_address(&caller_address)
        })
    }

    pub fn set_mock_contract_instance_address(contract_instance_address: Vec<u8>) {
        MOCK_DATA.with(|data| {
            data.borrow_mut().contract_instance_address =
                Address::test_create_address(&contract_instance_address)
        })
    }

    pub fn get_mock_promises() -> Vec<MockPromise> {
        MOCK_DATA.with(|data| data.borrow().promises.clone())
    }

    pub fn get_mock_returned_promise() -> Option<PromiseId> {
        MOCK_DATA.with(|data| data.borrow().returned_promise)
    }

    pub fn set_mock_promise_results(results: Vec<PromiseResult>) {
        MOCK_DATA.with(|data| data.borrow_mut().promise_results = results);
    }

    ////////////////////////////////////////////// TESTS ////////////////////////////////////////////////////////////
    #[test]
    fn test_storage() {
        // Prepare key-value
        let key = b"key";
        let value = b"value";

        // Write to storage; nothing is there yet
        assert!(!storage_write(key, value));

        // Read from storage
        let stored_value = storage_read(key).unwrap();
        assert_eq!(stored_value, value);

        // Remove from storage
        assert!(storage_remove(key));

        // Try to read removed key
        assert!(storage_read(key).is_none());
    }

    #[test]
    fn test_storage_eviction_slot() {
        let key = b"evict-key";

        assert!(!storage_write(key, b"first"));
        assert!(storage_get_evicted().is_none());

        // Overwriting parks the replaced value in the slot
        assert!(storage_write(key, b"second"));
        assert_eq!(storage_get_evicted().unwrap(), b"first");

        // Reads and existence checks leave the slot alone
        assert!(storage_read(key).is_some());
        assert!(storage_has_key(key));
        assert_eq!(storage_get_evicted().unwrap(), b"first");

        // Removing parks the removed value
        assert!(storage_remove(key));
        assert_eq!(storage_get_evicted().unwrap(), b"second");

        // Removing a missing key clears the slot
        assert!(!storage_remove(key));
        assert!(storage_get_evicted().is_none());
    }

    #[test]
    fn test_storage_has_key() {
        let key = b"present";

        assert!(!storage_has_key(key));
        storage_write(key, b"x");
        assert!(storage_has_key(key));
        storage_remove(key);
        assert!(!storage_has_key(key));
    }

    #[test]
    fn test_msg() {
        let message = "Test message";
        msg(message);

        let mock_messages = get_mock_msgs();
        assert_eq!(mock_messages.len(), 1);
        assert_eq!(mock_messages[0], message);
    }

    #[test]
    fn test_input_output() {
        let data = vec![1, 2, 3, 4];

        set_mock_input(data.clone());

        // Check input
        let input_data = input().unwrap();
        assert_eq!(input_data, data);

        // Output
        output(&data);

        // Check output
        let output_data = get_mock_output();
        assert_eq!(output_data, data);

        // Clear
        clear_mock_io();

        // Check input and output are cleared
        assert!(input().is_none());
        assert!(get_mock_output().is_empty());
    }

    #[test]
    fn test_remove_from_mock_storage() {
        let key = vec![1, 2, 3];
        let value = vec![4, 5, 6];

        // Write to storage and then remove
        storage_write(&key, &value);
        remove_from_mock_storage(&key);

        // Check value is removed
        let stored_value = storage_read(&key);
        assert!(stored_value.is_none());
    }

    #[test]
    fn test_contract_owner_address_and_caller_address() {
        let mock_owner_address = b"current_address12345".to_vec();
        let mock_caller_address = b"caller_address123456".to_vec();
        let mock_instance_address = b"instance_address3456".to_vec();

        // Set mock data
        set_mock_contract_owner_address(mock_owner_address.clone());
        set_mock_caller_address(mock_caller_address.clone());
        set_mock_contract_instance_address(mock_instance_address.clone());

        // Test contract_owner_address
        assert_eq!(
            contract_owner_address(),
            Address::test_create_address(&mock_owner_address)
        );

        // Test caller_address
        assert_eq!(
            caller_address(),
            Address::test_create_address(&mock_caller_address)
        );

        assert_eq!(
            contract_instance_address(),
            Address::test_create_address(&mock_instance_address)
        );
    }

    #[test]
    fn test_block_and_gas_info() {
        assert_eq!(block_number(), BLOCK_NUMBER);
        assert_eq!(block_timestamp(), BLOCK_TIMESTAMP);
        assert_eq!(block_hash(), *BLOCK_HASH);
        assert_eq!(gas_limit(), GAS_LIMIT);
        assert!(gas_left() <= gas_limit());
    }

    #[test]
    fn test_promise_recording() {
        let target = Address::test_create_address(&b"promise_target_addr1".to_vec());
        let next = Address::test_create_address(&b"promise_target_addr2".to_vec());

        let first = promise_batch_create(&target);
        promise_batch_action_transfer(first, 10);

        let second = promise_batch_then(first, &next);
        promise_batch_action_create_account(second);

        let joint = promise_and(&[first, second]);
        promise_return(joint);

        let promises = get_mock_promises();
        assert_eq!(promises.len(), 3);
        assert_eq!(
            promises[first as usize],
            MockPromise::Batch {
                target: target.clone(),
                after: None,
                actions: vec![PromiseAction::Transfer { amount: 10 }],
            }
        );
        assert_eq!(
            promises[second as usize],
            MockPromise::Batch {
                target: next,
                after: Some(first),
                actions: vec![PromiseAction::CreateAccount],
            }
        );
        assert_eq!(
            promises[joint as usize],
            MockPromise::Joint {
                dependencies: vec![first, second],
            }
        );
        assert_eq!(get_mock_returned_promise(), Some(joint));
    }

    #[test]
    fn test_promise_results() {
        assert_eq!(promise_results_count(), 0);
        assert_eq!(promise_result(0), PromiseResult::NotReady);

        set_mock_promise_results(vec![
            PromiseResult::Successful(b"ok".to_vec()),
            PromiseResult::Failed,
        ]);

        assert_eq!(promise_results_count(), 2);
        assert_eq!(promise_result(0), PromiseResult::Successful(b"ok".to_vec()));
        assert_eq!(promise_result(1), PromiseResult::Failed);
        assert_eq!(promise_result(2), PromiseResult::NotReady);
    }
}
