//! Deferred cross-contract calls.
//!
//! A [`Promise`] describes work for the runtime to dispatch after the current
//! invocation ends: batches of actions addressed to an account, sequenced with
//! [`Promise::then`] and joined with [`Promise::and`]. Building the description
//! reports nothing to the runtime; the whole graph is handed over in one pass
//! when it is materialized, and every node is handed over at most once no
//! matter how many promises reference it.
mod action;

pub use self::action::PromiseAction;

use crate::types::{Address, Balance, Gas, GasWeight, PromiseId, PublicKey};
use std::cell::RefCell;
use std::mem;

const ERR_JOINT_ACTION: &str = "Cannot add an action to a joint promise";
const ERR_JOINT_CALLBACK: &str = "Cannot schedule a callback on a joint promise";
const ERR_ALREADY_SCHEDULED: &str =
    "Cannot schedule a promise which is already scheduled after another";

thread_local! {
    /// All promise nodes built during the current invocation. Nodes are only
    /// appended, so a [`NodeId`] stays valid for the invocation's lifetime.
    static NODES: RefCell<Vec<PromiseNode>> = RefCell::new(Vec::new());
}

type NodeId = usize;

enum PromiseNode {
    /// A batch of actions addressed to one account, optionally scheduled after
    /// another node.
    Single {
        account_id: Address,
        actions: Vec<PromiseAction>,
        after: Option<NodeId>,
        promise_id: Option<PromiseId>,
    },
    /// A pair of nodes that must both settle before any callback scheduled
    /// after this node runs.
    Joint {
        left: NodeId,
        right: NodeId,
        promise_id: Option<PromiseId>,
    },
}

fn insert_node(node: PromiseNode) -> NodeId {
    NODES.with(|nodes| {
        let mut nodes = nodes.borrow_mut();
        nodes.push(node);
        nodes.len() - 1
    })
}

fn cached_promise_id(node: NodeId) -> PromiseId {
    NODES.with(|nodes| {
        let nodes = nodes.borrow();
        match &nodes[node] {
            PromiseNode::Single { promise_id, .. } | PromiseNode::Joint { promise_id, .. } => {
                promise_id.unwrap_or_else(|| crate::abort())
            }
        }
    })
}

fn set_promise_id(node: NodeId, id: PromiseId) {
    NODES.with(|nodes| {
        let mut nodes = nodes.borrow_mut();
        match &mut nodes[node] {
            PromiseNode::Single { promise_id, .. } | PromiseNode::Joint { promise_id, .. } => {
                *promise_id = Some(id)
            }
        }
    })
}

/// Reports one node to the runtime and caches the handle it returns. All
/// dependencies must have been reported already.
fn emit_node(node: NodeId) {
    enum Emit {
        Single {
            account_id: Address,
            actions: Vec<PromiseAction>,
            after: Option<NodeId>,
        },
        Joint {
            left: NodeId,
            right: NodeId,
        },
    }

    // Snapshot the node first; the arena must not stay borrowed across the
    // host calls below.
    let emit = NODES.with(|nodes| {
        let mut nodes = nodes.borrow_mut();
        match &mut nodes[node] {
            PromiseNode::Single {
                account_id,
                actions,
                after,
                ..
            } => Emit::Single {
                account_id: *account_id,
                actions: mem::take(actions),
                after: *after,
            },
            PromiseNode::Joint { left, right, .. } => Emit::Joint {
                left: *left,
                right: *right,
            },
        }
    });

    let promise_id = match emit {
        Emit::Single {
            account_id,
            actions,
            after,
        } => {
            let promise_id = match after {
                Some(after) => crate::promise_batch_then(cached_promise_id(after), &account_id),
                None => crate::promise_batch_create(&account_id),
            };
            for action in &actions {
                action.add(promise_id);
            }
            promise_id
        }
        Emit::Joint { left, right } => {
            crate::promise_and(&[cached_promise_id(left), cached_promise_id(right)])
        }
    };

    set_promise_id(node, promise_id);
}

/// Walks the graph below `root` in post order, reporting every node that has no
/// handle yet, and returns the handle of `root`.
fn construct_node(root: NodeId) -> PromiseId {
    enum Step {
        Enter(NodeId),
        Emit(NodeId),
    }

    let mut stack = vec![Step::Enter(root)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node) => {
                let children = NODES.with(|nodes| {
                    let nodes = nodes.borrow();
                    match &nodes[node] {
                        PromiseNode::Single {
                            promise_id: Some(_),
                            ..
                        }
                        | PromiseNode::Joint {
                            promise_id: Some(_),
                            ..
                        } => None,
                        PromiseNode::Single { after, .. } => {
                            Some(after.map(|a| vec![a]).unwrap_or_default())
                        }
                        PromiseNode::Joint { left, right, .. } => Some(vec![*left, *right]),
                    }
                });
                if let Some(children) = children {
                    stack.push(Step::Emit(node));
                    // children materialize left to right
                    for child in children.into_iter().rev() {
                        stack.push(Step::Enter(child));
                    }
                }
            }
            Step::Emit(node) => emit_node(node),
        }
    }

    cached_promise_id(root)
}

/// Outcome of a previously dispatched call, as reported to a callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromiseResult {
    /// The dispatched call has not finished executing yet.
    NotReady,
    /// The call finished successfully; holds the bytes it returned.
    Successful(Vec<u8>),
    /// The call failed.
    Failed,
}

/// A deferred call graph under construction.
///
/// Handles are cheap to clone; clones refer to the same node, so a node shared
/// between several compositions is dispatched only once.
#[derive(Clone)]
pub struct Promise {
    node: NodeId,
    should_return: bool,
}

impl Promise {
    /// Creates a new promise that will be dispatched to `account_id`.
    pub fn new(account_id: Address) -> Self {
        let node = insert_node(PromiseNode::Single {
            account_id,
            actions: Vec::new(),
            after: None,
            promise_id: None,
        });
        Self {
            node,
            should_return: false,
        }
    }

    fn add_action(self, action: PromiseAction) -> Self {
        NODES.with(|nodes| {
            let mut nodes = nodes.borrow_mut();
            match &mut nodes[self.node] {
                PromiseNode::Single { actions, .. } => actions.push(action),
                PromiseNode::Joint { .. } => crate::panic(ERR_JOINT_ACTION),
            }
        });
        self
    }

    /// Creates the target account.
    pub fn create_account(self) -> Self {
        self.add_action(PromiseAction::CreateAccount)
    }

    /// Deploys the contract code to the target account.
    pub fn deploy_contract(self, code: Vec<u8>) -> Self {
        self.add_action(PromiseAction::DeployContract { code })
    }

    /// Calls a method of the target contract.
    pub fn function_call(
        self,
        method_name: String,
        args: Vec<u8>,
        amount: Balance,
        gas: Gas,
    ) -> Self {
        self.add_action(PromiseAction::FunctionCall {
            method_name,
            args,
            amount,
            gas,
        })
    }

    /// Calls a method of the target contract, attaching a `weight` share of the
    /// gas left unspent at the end of the current invocation on top of `gas`.
    pub fn function_call_weight(
        self,
        method_name: String,
        args: Vec<u8>,
        amount: Balance,
        gas: Gas,
        weight: GasWeight,
    ) -> Self {
        self.add_action(PromiseAction::FunctionCallWeight {
            method_name,
            args,
            amount,
            gas,
            weight,
        })
    }

    /// Transfers tokens to the target account.
    pub fn transfer(self, amount: Balance) -> Self {
        self.add_action(PromiseAction::Transfer { amount })
    }

    /// Stakes tokens with the given validator key.
    pub fn stake(self, amount: Balance, public_key: PublicKey) -> Self {
        self.add_action(PromiseAction::Stake { amount, public_key })
    }

    /// Adds a full-access key to the target account.
    pub fn add_full_access_key(self, public_key: PublicKey) -> Self {
        self.add_full_access_key_with_nonce(public_key, 0)
    }

    /// Adds a full-access key to the target account, starting from `nonce`.
    pub fn add_full_access_key_with_nonce(self, public_key: PublicKey, nonce: u64) -> Self {
        self.add_action(PromiseAction::AddFullAccessKey { public_key, nonce })
    }

    /// Adds an access key limited to calling `method_names` on `receiver_id`.
    /// An empty `method_names` string allows any method.
    pub fn add_access_key(
        self,
        public_key: PublicKey,
        allowance: Balance,
        receiver_id: Address,
        method_names: String,
    ) -> Self {
        self.add_access_key_with_nonce(public_key, allowance, receiver_id, method_names, 0)
    }

    /// Adds an access key limited to calling `method_names` on `receiver_id`,
    /// starting from `nonce`.
    pub fn add_access_key_with_nonce(
        self,
        public_key: PublicKey,
        allowance: Balance,
        receiver_id: Address,
        method_names: String,
        nonce: u64,
    ) -> Self {
        self.add_action(PromiseAction::AddAccessKey {
            public_key,
            allowance,
            receiver_id,
            method_names,
            nonce,
        })
    }

    /// Removes a key from the target account.
    pub fn delete_key(self, public_key: PublicKey) -> Self {
        self.add_action(PromiseAction::DeleteKey { public_key })
    }

    /// Deletes the target account; the remaining balance goes to `beneficiary_id`.
    pub fn delete_account(self, beneficiary_id: Address) -> Self {
        self.add_action(PromiseAction::DeleteAccount { beneficiary_id })
    }

    /// Joins two promises into one that settles when both have.
    pub fn and(self, other: Promise) -> Promise {
        let node = insert_node(PromiseNode::Joint {
            left: self.node,
            right: other.node,
            promise_id: None,
        });
        Promise {
            node,
            should_return: false,
        }
    }

    /// Schedules `other` to run after this promise settles and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `other` is a joint promise, or if it is already scheduled
    /// after something else.
    pub fn then(self, other: Promise) -> Promise {
        NODES.with(|nodes| {
            let mut nodes = nodes.borrow_mut();
            match &mut nodes[other.node] {
                PromiseNode::Single { after, .. } => {
                    if after.is_some() {
                        crate::panic(ERR_ALREADY_SCHEDULED);
                    }
                    *after = Some(self.node);
                }
                PromiseNode::Joint { .. } => crate::panic(ERR_JOINT_CALLBACK),
            }
        });
        other
    }

    /// Reports the whole graph below this promise to the runtime and returns
    /// the handle of its root node. If the promise was marked with
    /// [`Promise::as_return`], the root handle is also reported as the
    /// invocation's return value.
    ///
    /// The handle of every node is cached, so calling this again, or
    /// materializing another graph that shares nodes with this one, never
    /// dispatches the same batch twice.
    pub fn construct(&self) -> PromiseId {
        let promise_id = construct_node(self.node);
        if self.should_return {
            crate::promise_return(promise_id);
        }
        promise_id
    }

    /// Marks this promise as the return value of the current invocation.
    ///
    /// Nothing is reported yet; the handle reaches the runtime when the graph
    /// is materialized.
    pub fn as_return(mut self) -> Self {
        self.should_return = true;
        self
    }

    /// Whether this promise has been marked as the invocation's return value.
    pub fn is_return(&self) -> bool {
        self.should_return
    }
}

//====================================================== TESTS =================================================================
