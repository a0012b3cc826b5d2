#![no_std]

// Registers are a scratch space owned by the VM; data can be handed around without
// copying it in and out of contract memory until it is actually needed.
type RegisterId = u64;
// An address in virtual memory.
type MemoryAddress = u64;
type ReturnCode = u64;
// Host-side identifier of a constructed (not yet executed) batch of actions.
type PromiseId = u64;

extern "C" {
    /*
     * Register API
     */
    pub fn read_register(register_id: RegisterId, result_addr: MemoryAddress);
    pub fn register_len(register_id: RegisterId) -> u64;
    pub fn write_register(register_id: RegisterId, data_addr: MemoryAddress, data_len: u64);
    /*
     * Storage API
     */
    // 0 or 1 depending on whether anything was replaced; the replaced value is
    // parked in the given register until the next write/remove
    pub fn storage_write(
        key_addr: MemoryAddress,
        key_len: u64,
        value_addr: MemoryAddress,
        value_len: u64,
        evicted_register_id: RegisterId,
    ) -> ReturnCode;
    // 0 or 1 depending on whether anything was read
    pub fn storage_read(
        key_addr: MemoryAddress,
        key_len: u64,
        register_id: RegisterId,
    ) -> ReturnCode;
    // 0 or 1 depending on whether anything was removed; the removed value is
    // parked in the given register until the next write/remove
    pub fn storage_remove(
        key_addr: MemoryAddress,
        key_len: u64,
        evicted_register_id: RegisterId,
    ) -> ReturnCode;
    // 0 or 1 depending on whether the key exists; does not touch any register
    pub fn storage_has_key(key_addr: MemoryAddress, key_len: u64) -> ReturnCode;
    /*
     * Context API
     */
    pub fn current_runtime_version() -> u64;
    pub fn input(result_register_id: RegisterId);
    pub fn output(output_addr: MemoryAddress, output_len: u64);
    pub fn contract_owner_address(register_id: u64);
    pub fn caller_address(register_id: u64);
    pub fn contract_instance_address(register_id: u64);
    pub fn block_hash(output_addr: MemoryAddress, output_len: u64);
    pub fn block_number(output_addr: MemoryAddress, output_len: u64);
    pub fn block_timestamp(output_addr: MemoryAddress, output_len: u64);
    pub fn gas_limit() -> u64;
    pub fn gas_left() -> u64;
    /*
     * Promise API
     *
     * Batches are built up during the current invocation and dispatched by the
     * host only after it ends; none of these calls execute anything.
     */
    pub fn promise_batch_create(account_id_addr: MemoryAddress, account_id_len: u64) -> PromiseId;
    pub fn promise_batch_then(
        after_id: PromiseId,
        account_id_addr: MemoryAddress,
        account_id_len: u64,
    ) -> PromiseId;
    pub fn promise_and(promise_ids_addr: MemoryAddress, promise_ids_count: u64) -> PromiseId;
    pub fn promise_batch_action_create_account(promise_id: PromiseId);
    pub fn promise_batch_action_deploy_contract(
        promise_id: PromiseId,
        code_addr: MemoryAddress,
        code_len: u64,
    );
    pub fn promise_batch_action_function_call(
        promise_id: PromiseId,
        method_name_addr: MemoryAddress,
        method_name_len: u64,
        args_addr: MemoryAddress,
        args_len: u64,
        amount_addr: MemoryAddress,
        amount_len: u64,
        gas: u64,
    );
    // Like promise_batch_action_function_call, but the attached gas is a weight
    // over the gas left unspent at the end of the invocation
    pub fn promise_batch_action_function_call_weight(
        promise_id: PromiseId,
        method_name_addr: MemoryAddress,
        method_name_len: u64,
        args_addr: MemoryAddress,
        args_len: u64,
        amount_addr: MemoryAddress,
        amount_len: u64,
        gas: u64,
        weight: u64,
    );
    pub fn promise_batch_action_transfer(
        promise_id: PromiseId,
        amount_addr: MemoryAddress,
        amount_len: u64,
    );
    pub fn promise_batch_action_stake(
        promise_id: PromiseId,
        amount_addr: MemoryAddress,
        amount_len: u64,
        public_key_addr: MemoryAddress,
        public_key_len: u64,
    );
    pub fn promise_batch_action_add_key_with_full_access(
        promise_id: PromiseId,
        public_key_addr: MemoryAddress,
        public_key_len: u64,
        nonce: u64,
    );
    pub fn promise_batch_action_add_key_with_function_call(
        promise_id: PromiseId,
        public_key_addr: MemoryAddress,
        public_key_len: u64,
        nonce: u64,
        allowance_addr: MemoryAddress,
        allowance_len: u64,
        receiver_id_addr: MemoryAddress,
        receiver_id_len: u64,
        method_names_addr: MemoryAddress,
        method_names_len: u64,
    );
    pub fn promise_batch_action_delete_key(
        promise_id: PromiseId,
        public_key_addr: MemoryAddress,
        public_key_len: u64,
    );
    pub fn promise_batch_action_delete_account(
        promise_id: PromiseId,
        beneficiary_id_addr: MemoryAddress,
        beneficiary_id_len: u64,
    );
    pub fn promise_results_count() -> u64;
    // 0, 1 or 2 for not-ready, successful or failed; on success the return data
    // is parked in the given register
    pub fn promise_result(result_idx: u64, register_id: RegisterId) -> ReturnCode;
    pub fn promise_return(promise_id: PromiseId);
    /*
     * Misc API
     */
    pub fn panic() -> !;
    pub fn panic_msg(msg_addr: MemoryAddress, msg_len: u64) -> !;
    pub fn msg(addr: MemoryAddress, len: u64);
}
