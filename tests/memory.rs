/*!
 * Memory subsystem tests entry point
 */

#[path = "memory/policy_test.rs"]
mod policy_test;

#[path = "memory/partition_property_test.rs"]
mod partition_property_test;
