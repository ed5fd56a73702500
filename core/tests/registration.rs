//! Registration behavior across both intake paths: membership,
//! idempotence, and identity-keyed deduplication.

use storefront_core::{
    customer::{Customer, CustomerMap},
    ledger::{is_customer_registered, register_customer, register_wait_list_customer},
    shopfront::Shopfront,
};

fn emily() -> Customer {
    Customer::new("Emily", "Tan", "1123345678")
}

fn joe() -> Customer {
    Customer::new("Joe", "Smith", "1453345678")
}

#[test]
fn registered_customers_are_immediately_queryable() {
    let mut store = CustomerMap::new();

    let customer = emily();
    assert!(!is_customer_registered(&customer, &store));

    register_customer(&customer, &mut store);
    assert!(
        is_customer_registered(&customer, &store),
        "Membership must hold right after registration"
    );
}

#[test]
fn registering_the_same_person_twice_keeps_one_entry() {
    let mut store = CustomerMap::new();

    register_customer(&emily(), &mut store);
    register_customer(&emily(), &mut store);

    assert_eq!(store.len(), 1, "Expected one entry, got {}", store.len());
}

#[test]
fn wait_list_and_store_are_separate_ledgers() {
    let mut store = CustomerMap::new();
    let mut wait_list = CustomerMap::new();

    register_wait_list_customer(&joe(), &mut wait_list);

    assert!(is_customer_registered(&joe(), &wait_list));
    assert!(
        !is_customer_registered(&joe(), &store),
        "Wait-list registration must leave the store map untouched"
    );
}

#[test]
fn duplicate_arrivals_across_both_paths_collapse_in_the_store() {
    // The same two people show up in the line and on the wait list.
    let mut shop = Shopfront::build_test(42);
    let summary = shop.run_day_with(vec![emily(), joe()], vec![emily(), joe()]);

    assert_eq!(
        summary.total_customers_in_store, 2,
        "Four arrivals with two identities must count as 2, got {}",
        summary.total_customers_in_store
    );
    assert_eq!(shop.customers_in_store(), 2);
    assert_eq!(shop.wait_list_size(), 2);
    assert_eq!(
        summary.repeat_visitors, 2,
        "Both wait-list arrivals were already in the store"
    );
}

#[test]
fn rebuilt_records_count_as_the_same_visitor() {
    let mut shop = Shopfront::build_test(7);

    let first_visit = vec![Customer::new("Mira", "Osei", "6042275531")];
    let second_visit = vec![Customer::new("Mira", "Osei", "6042275531")];
    let summary = shop.run_day_with(first_visit, second_visit);

    assert_eq!(summary.total_customers_in_store, 1);
    assert_eq!(summary.repeat_visitors, 1);
}

#[test]
fn blank_fields_still_register_once() {
    let blank = Customer::new("", "", "");
    let mut store = CustomerMap::new();

    register_customer(&blank, &mut store);
    register_customer(&blank, &mut store);

    assert!(is_customer_registered(&blank, &store));
    assert_eq!(store.len(), 1);
}
