//! The [`factory`](self) module contains the builders for the single parts
//! of a mock class.
//!
//! Every function requirement of a protocol gets a set of bookkeeping
//! properties in the mock. All of them share the same name prefix (see
//! [`variable_prefix::text`]) and are created by the module named after the
//! property suffix.

pub mod associatedtype;
pub mod closure;
pub mod function_implementation;
pub mod invoked;
pub mod invoked_count;
pub mod mock;
pub mod received_arguments;
pub mod received_invocations;
pub mod return_value;
pub mod throwable_error;
pub mod variable_prefix;
pub mod variables_implementation;
